//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file.

pub mod search_foods;

pub use search_foods::{SearchFoodsParams, SearchFoodsTool};
