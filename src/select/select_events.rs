//! Keyboard handling for the multi-select field

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::select_state::MultiSelect;

/// Whether the field used a key or left it for the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Consumed,
    Ignored,
}

impl MultiSelect {
    /// Handle a key press while the field has focus
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Backspace if plain => {
                self.backspace();
                KeyOutcome::Consumed
            }
            // Tab/Enter pick the active suggestion; without a dropdown the host decides
            KeyCode::Tab | KeyCode::Enter if plain && self.is_dropdown_visible() => {
                self.select_active();
                KeyOutcome::Consumed
            }
            KeyCode::Down if self.is_dropdown_visible() => {
                self.move_active_down();
                KeyOutcome::Consumed
            }
            KeyCode::Up if self.is_dropdown_visible() => {
                self.move_active_up();
                KeyOutcome::Consumed
            }
            KeyCode::Char(_) if plain => {
                self.edit_query(|textarea| {
                    textarea.input(key);
                });
                KeyOutcome::Consumed
            }
            KeyCode::Delete | KeyCode::Left | KeyCode::Right | KeyCode::Home | KeyCode::End => {
                self.edit_query(|textarea| {
                    textarea.input(key);
                });
                KeyOutcome::Consumed
            }
            _ => KeyOutcome::Ignored,
        }
    }
}

#[cfg(test)]
#[path = "select_events_tests.rs"]
mod select_events_tests;
