use std::io;
use std::time::Instant;

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::app_state::{App, Focus};
use super::mouse_click;
use crate::layout::{Region, region_at};
use crate::select::KeyOutcome;

impl App {
    /// Wait for the next event (or the next deadline) and update state
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_timeout(Instant::now()))? {
            let event = event::read()?;
            self.handle_event(event, Instant::now());
        }
        self.tick(Instant::now());
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            Event::FocusLost => self.select.blur(now),
            Event::FocusGained => {
                if self.focus == Focus::SelectField {
                    self.select.focus();
                }
            }
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        self.select.drop_stale_pointer();
        if self.handle_global_keys(key, now) {
            return;
        }

        match self.focus {
            Focus::SelectField => {
                // The terminal lost focus and the blur settled
                if !self.select.is_focused() {
                    self.select.focus();
                }
                if self.select.handle_key(key) == KeyOutcome::Ignored && key.code == KeyCode::Enter {
                    self.confirm();
                }
            }
            Focus::SelectionPane => self.handle_selection_pane_key(key),
        }
    }

    /// Keys that work regardless of focus. Returns true if handled.
    fn handle_global_keys(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C: Exit without output
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return true;
        }

        // Shift+Tab: Switch focus between the field and the selection pane
        if key.code == KeyCode::BackTab {
            self.toggle_focus(now);
            return true;
        }

        false
    }

    fn handle_selection_pane_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.confirm(),
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.focus_select_field(),
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.select.drop_stale_pointer();
                let region = region_at(&self.layout_regions, mouse.column, mouse.row);
                mouse_click::handle_click(self, region, now);
            }
            MouseEventKind::Up(MouseButton::Left) => self.select.release_pointer(),
            MouseEventKind::Drag(MouseButton::Left) => {
                let region = region_at(&self.layout_regions, mouse.column, mouse.row);
                if !matches!(region, Some(Region::Suggestion(_))) {
                    self.select.drop_stale_pointer();
                }
            }
            MouseEventKind::ScrollDown if self.select.is_dropdown_visible() => {
                self.select.move_active_down();
            }
            MouseEventKind::ScrollUp if self.select.is_dropdown_visible() => {
                self.select.move_active_up();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
