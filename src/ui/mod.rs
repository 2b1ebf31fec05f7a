//! View layer
//!
//! Backend-agnostic: nothing here renders. A frontend feeds user events
//! into [`FaqView`] and draws whatever [`ViewState`] and the filter levels
//! describe afterwards.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │   Frontend (widget host, test harness)   │
//! └────────────────────┬─────────────────────┘
//!                      │ events + timestamps
//!                      ▼
//! ┌──────────────────────────────────────────┐
//! │   FaqView                                │
//! │   - FilterController (browse)            │
//! │   - SearchIndex (search)                 │
//! │   - SuggestionTrigger (timing)           │
//! └────────────────────┬─────────────────────┘
//!                      │ produces
//!                      ▼
//! ┌──────────────────────────────────────────┐
//! │   ViewState + FilterLevel list           │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Time never comes from a clock inside the view: every debounced call
//! takes the current `Instant`, so rendering loops and tests drive it the
//! same way.

pub mod state;
pub mod timing;
pub mod view;

pub use state::{ViewMode, ViewState};
pub use timing::{InputAction, SuggestionTrigger, TriggerEvent};
pub use view::{EntryMetadata, FaqView};
