//! Mouse click handling
//!
//! Routes left-button presses to chips, dropdown rows and panes.

use std::time::Instant;

use super::app_state::{App, Focus};
use crate::layout::Region;

/// Handle left mouse button press for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, now: Instant) {
    match region {
        Some(Region::Suggestion(index)) => {
            app.select.press_suggestion(index);
        }
        Some(Region::ChipClose(index)) => {
            app.focus_select_field();
            app.select.delete_chip(index);
        }
        Some(Region::Chip(index)) => {
            app.focus = Focus::SelectField;
            app.select.click_chip(index);
        }
        Some(Region::SelectField) => app.focus_select_field(),
        Some(Region::SelectionPane) => {
            if app.focus != Focus::SelectionPane {
                app.focus_selection_pane(now);
            }
        }
        None => {}
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
