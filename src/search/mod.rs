//! Search module - category tree, filter matching and text search
//!
//! - `hierarchy`: counted category tree built from entry tags
//! - `filter`: category path matching on segment boundaries
//! - `suggest`: substring search and word suggestions

pub mod filter;
pub mod hierarchy;
pub mod suggest;

pub use filter::{CategoryFilterExt, item_matches_filter, tag_matches_filter};
pub use hierarchy::{CategoryNode, CategoryTree};
pub use suggest::SearchIndex;
