//! Tag parsing - namespaced hierarchical tag identifiers.
//!
//! A raw tag field may hold several tags separated by commas or whitespace.
//! Each tag has the form `namespace:segment1/segment2/...`; its ancestor
//! chain is every prefix of its segment list.

pub mod tags;

pub use tags::{DEFAULT_NAMESPACE, NAMESPACE_DELIMITER, PATH_DELIMITER, TagParser, tag_name};
