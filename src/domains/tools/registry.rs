//! Tool Registry - central registration of all tools.
//!
//! This module provides:
//! - A registry of all available tool names
//! - The startup check that no two tools share a name

use std::collections::HashSet;

use super::definitions::SearchFoodsTool;
use crate::core::error::{Error, Result};

/// Tool registry - manages all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![SearchFoodsTool::NAME]
    }

    /// Fail if any tool name is registered twice.
    pub fn ensure_unique() -> Result<()> {
        check_unique(Self::tool_names())
    }
}

fn check_unique(names: Vec<&'static str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(Error::registration(format!("tool {}", name)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names, vec!["search-foods"]);
        assert!(ToolRegistry::ensure_unique().is_ok());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = check_unique(vec!["search-foods", "search-foods"]).unwrap_err();
        assert!(matches!(err, Error::Registration(_)));
    }
}
