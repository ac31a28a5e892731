//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where chips, the query line, dropdown rows and the
//! selection pane were drawn in the last frame, and `region_at()` maps a
//! mouse position back to one of them.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{ChipSlot, LayoutRegions, Region};
