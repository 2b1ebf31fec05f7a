//! Browse module - cascading category filter
//!
//! UI-agnostic: the controller produces dropdown state and
//! [`FilterOutcome`]s, and any frontend renders them.
//!
//! - `models`: dropdown data (`FilterLevel`, `FilterOption`, `FilterOutcome`)
//! - `session`: the `FilterController` state machine

pub mod models;
pub mod session;

pub use models::{FilterLevel, FilterOption, FilterOutcome};
pub use session::FilterController;
