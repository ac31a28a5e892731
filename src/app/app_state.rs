use std::time::{Duration, Instant};

use crate::config::{Config, OutputFormat};
use crate::layout::LayoutRegions;
use crate::output::format_selection;
use crate::pool::SuggestionPool;
use crate::select::MultiSelect;

/// How long the event loop waits for input when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SelectField,
    SelectionPane,
}

/// What to output when exiting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Selection, // Print the selected items (Enter)
}

/// Application state
pub struct App {
    pub select: MultiSelect,
    pub focus: Focus,
    pub output_mode: Option<OutputMode>,
    pub output_format: OutputFormat,
    pub should_quit: bool,
    pub layout_regions: LayoutRegions,
}

impl App {
    pub fn new(pool: SuggestionPool, config: &Config) -> Self {
        let mut select = MultiSelect::new(pool, &config.input);
        select.focus();

        Self {
            select,
            focus: Focus::SelectField,
            output_mode: None,
            output_format: config.output.format,
            should_quit: false,
            layout_regions: LayoutRegions::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    /// Text to print on exit, if the user confirmed
    pub fn output(&self) -> Option<String> {
        self.output_mode
            .map(|_| format_selection(self.select.selected(), self.output_format))
    }

    /// How long the event loop may block before the next scheduled work
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.select
            .next_deadline(now)
            .map_or(IDLE_POLL, |remaining| remaining.min(IDLE_POLL))
    }

    /// Run time-based work (the deferred blur clear)
    pub fn tick(&mut self, now: Instant) {
        self.select.tick(now);
    }

    pub fn focus_select_field(&mut self) {
        self.focus = Focus::SelectField;
        self.select.focus();
    }

    pub fn focus_selection_pane(&mut self, now: Instant) {
        self.focus = Focus::SelectionPane;
        self.select.blur(now);
    }

    pub fn toggle_focus(&mut self, now: Instant) {
        match self.focus {
            Focus::SelectField => self.focus_selection_pane(now),
            Focus::SelectionPane => self.focus_select_field(),
        }
    }

    /// Exit and print the selection
    pub fn confirm(&mut self) {
        self.output_mode = Some(OutputMode::Selection);
        self.should_quit = true;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
