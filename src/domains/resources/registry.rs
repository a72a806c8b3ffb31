//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, Resource, ResourceTemplate};

use super::definitions::{FoodDetailsResource, FoodListResource, FoodsResource, ResourceDefinition};
use super::error::ResourceError;
use super::query::QueryParams;
use crate::domains::fdc::UpstreamRequest;

/// Parses a query string and maps it onto one upstream request.
pub type Normalizer = fn(&QueryParams) -> Result<UpstreamRequest, ResourceError>;

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// Registered resource name.
    pub name: &'static str,

    /// The resource metadata advertised to clients.
    pub resource: Resource,

    /// The parameterized form of the same resource.
    pub template: ResourceTemplate,

    /// Query-string normalizer for this resource.
    pub normalize: Normalizer,
}

fn normalize<R: ResourceDefinition>(params: &QueryParams) -> Result<UpstreamRequest, ResourceError> {
    let request = R::parse(params)?;
    Ok(R::upstream_request(&request))
}

/// Build a registry entry from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    let template = RawResourceTemplate {
        uri_template: R::URI_TEMPLATE.to_string(),
        name: R::NAME.to_string(),
        title: Some(R::TITLE.to_string()),
        description: Some(R::DESCRIPTION.to_string()),
        mime_type: Some(R::MIME_TYPE.to_string()),
    };

    ResourceEntry {
        name: R::NAME,
        resource: raw.no_annotation(),
        template: template.no_annotation(),
        normalize: normalize::<R>,
    }
}

/// Get all registered resources.
///
/// This is the central place where all resources are registered.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<FoodDetailsResource>(),
        build_resource::<FoodsResource>(),
        build_resource::<FoodListResource>(),
    ]
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 3);

        let names: Vec<_> = resources.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["food-details", "foods", "food-list"]);

        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert_eq!(uris, vec!["food://details", "food://foods", "food://list"]);
    }

    #[test]
    fn test_templates_match_addresses() {
        for entry in get_all_resources() {
            assert!(entry.template.raw.uri_template.starts_with(&entry.resource.raw.uri));
            assert_eq!(entry.template.raw.name, entry.name);
        }
    }

    #[test]
    fn test_entry_normalizer() {
        let entry = get_all_resources()
            .into_iter()
            .find(|e| e.name == "food-list")
            .unwrap();
        let request = (entry.normalize)(&QueryParams::default()).unwrap();
        assert_eq!(request.path(), "/foods/list");
    }
}
