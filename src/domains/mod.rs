//! Domains module containing business logic organized by bounded contexts.
//!
//! - **fdc**: the FoodData Central client, request model and envelopes
//! - **resources**: the food lookup and listing resources
//! - **tools**: the food search tool

pub mod fdc;
pub mod resources;
pub mod tools;
