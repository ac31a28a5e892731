//! Multi-select search input
//!
//! A query field that filters a fixed [`SuggestionPool`](crate::pool::SuggestionPool),
//! a chip list of selected items, and a dropdown of the remaining matches.
//! Chips are deleted with a two-stage Backspace (highlight, then delete) or
//! with their close control.

mod blur;
mod filter;
mod interaction;
pub mod select_events;
pub mod select_render;
mod select_state;

pub use blur::BlurTimer;
pub use filter::filter_suggestions;
pub use interaction::{Effect, FocusPhase, Highlight, Interaction, Signal};
pub use select_events::KeyOutcome;
pub use select_state::MultiSelect;
