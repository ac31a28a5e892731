use std::ops::Range;
use std::time::{Duration, Instant};

use ratatui::style::{Color, Modifier, Style};
use tui_textarea::TextArea;

use super::blur::BlurTimer;
use super::filter::filter_suggestions;
use super::interaction::{Effect, Interaction, Signal};
use crate::config::InputConfig;
use crate::pool::SuggestionPool;

type SelectionHook = Box<dyn FnMut(&[String])>;

/// Creates a single-line TextArea configured for the query field.
fn create_query_textarea(placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(placeholder.to_string());
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    textarea
}

fn cursor_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}

/// Multi-select search input state
pub struct MultiSelect {
    pool: SuggestionPool,
    textarea: TextArea<'static>,
    placeholder: String,
    selected: Vec<String>,
    interaction: Interaction,
    blur: BlurTimer,
    /// Dropdown row picked by Tab/Enter
    active_suggestion: usize,
    /// First filtered row shown in the dropdown
    suggestion_offset: usize,
    max_visible_suggestions: usize,
    on_selection_change: Option<SelectionHook>,
}

impl MultiSelect {
    pub fn new(pool: SuggestionPool, config: &InputConfig) -> Self {
        let mut textarea = create_query_textarea(&config.placeholder);
        textarea.set_cursor_style(cursor_style(false));

        Self {
            pool,
            textarea,
            placeholder: config.placeholder.clone(),
            selected: Vec::new(),
            interaction: Interaction::new(),
            blur: BlurTimer::new(
                Duration::from_millis(config.blur_grace_ms),
                config.pointer_guard,
            ),
            active_suggestion: 0,
            suggestion_offset: 0,
            max_visible_suggestions: config.max_visible_suggestions.max(1),
            on_selection_change: None,
        }
    }

    /// Register a hook called with the full selection after every change
    pub fn set_on_selection_change<F>(&mut self, hook: F)
    where
        F: FnMut(&[String]) + 'static,
    {
        self.on_selection_change = Some(Box::new(hook));
    }

    pub fn query(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Index of the chip marked for deletion
    pub fn highlighted(&self) -> Option<usize> {
        self.interaction.highlight.index()
    }

    pub fn is_focused(&self) -> bool {
        self.interaction.has_focus()
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    /// Pool entries matching the query that are not selected yet
    pub fn filtered_suggestions(&self) -> Vec<&str> {
        filter_suggestions(self.pool.as_slice(), self.query(), &self.selected)
    }

    pub fn is_dropdown_visible(&self) -> bool {
        self.is_focused() && !self.query().is_empty() && !self.filtered_suggestions().is_empty()
    }

    /// Active dropdown row, clamped to the current matches
    pub fn active_suggestion(&self) -> usize {
        let count = self.filtered_suggestions().len();
        self.active_suggestion.min(count.saturating_sub(1))
    }

    /// Filtered rows shown in the dropdown. The window scrolls to keep the
    /// active row in view.
    pub fn visible_suggestions(&self) -> Range<usize> {
        let count = self.filtered_suggestions().len();
        let rows = count.min(self.max_visible_suggestions);
        let active = self.active_suggestion();

        let mut start = self.suggestion_offset.min(count - rows);
        if active < start {
            start = active;
        } else if rows > 0 && active >= start + rows {
            start = active + 1 - rows;
        }
        start..start + rows
    }

    /// Append `item` to the selection and clear the query.
    ///
    /// The item is not checked against the current matches.
    pub fn select_suggestion(&mut self, item: &str) {
        self.selected.push(item.to_string());
        self.clear_query();
        log::debug!("Selected {:?} ({} chips)", item, self.selected.len());
        self.notify_selection_change();
    }

    /// Remove the chip at `index`. Out-of-range indices are ignored.
    pub fn delete_chip(&mut self, index: usize) -> Option<String> {
        if index >= self.selected.len() {
            log::debug!(
                "Ignoring delete of chip {} ({} chips)",
                index,
                self.selected.len()
            );
            return None;
        }
        Some(self.remove_chip(index))
    }

    /// Mark the chip at `index` for deletion. Returns false when out of range.
    pub fn click_chip(&mut self, index: usize) -> bool {
        if index >= self.selected.len() {
            return false;
        }
        self.focus();
        self.dispatch(Signal::ChipClicked(index));
        true
    }

    /// Backspace in the query field: edit text, highlight the last chip, or
    /// delete the highlighted chip.
    pub fn backspace(&mut self) {
        let signal = Signal::Backspace {
            query_empty: self.query().is_empty(),
            chip_count: self.selected.len(),
        };

        match self.dispatch(signal) {
            Effect::RemoveChip(index) => {
                self.remove_chip(index);
            }
            Effect::EditText => self.edit_query(|textarea| {
                textarea.delete_char();
            }),
            Effect::None => {}
        }
    }

    /// Insert text at the cursor as if typed
    pub fn insert_text(&mut self, text: &str) {
        self.edit_query(|textarea| {
            textarea.insert_str(text);
        });
    }

    /// Run an edit against the query field and react if the text changed
    pub(crate) fn edit_query<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut TextArea<'static>),
    {
        let before = self.query().to_string();
        edit(&mut self.textarea);

        if self.query() != before {
            self.active_suggestion = 0;
            self.suggestion_offset = 0;
            let now_empty = self.query().is_empty();
            self.dispatch(Signal::QueryEdited { now_empty });
        }
    }

    pub fn focus(&mut self) {
        self.blur.cancel();
        self.dispatch(Signal::Focus);
    }

    /// Start a blur. Focus and highlight clear once the grace period passes
    /// or a held pointer is released.
    pub fn blur(&mut self, now: Instant) {
        if !self.is_focused() {
            return;
        }
        self.dispatch(Signal::Blur);
        if self.blur.schedule(now) {
            self.settle_blur();
        }
    }

    /// Fire the deferred blur clear if it is due. Returns true if it fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.blur.take_due(now) {
            self.settle_blur();
            return true;
        }
        false
    }

    /// Time until the pending blur clear, if any
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.blur.remaining(now)
    }

    pub fn is_blur_pending(&self) -> bool {
        self.blur.is_pending()
    }

    /// Pointer pressed on dropdown row `index`. Selects that suggestion and
    /// holds off any blur until the pointer is released.
    pub fn press_suggestion(&mut self, index: usize) -> bool {
        if !self.is_dropdown_visible() {
            return false;
        }
        let Some(item) = self
            .filtered_suggestions()
            .get(index)
            .map(|s| s.to_string())
        else {
            return false;
        };

        self.blur.press_pointer();
        self.select_suggestion(&item);
        true
    }

    pub fn release_pointer(&mut self) {
        if self.blur.release_pointer() {
            self.settle_blur();
        }
    }

    /// Drop a pointer guard whose release never arrived (button let go
    /// outside the terminal). Called on any later input that is not the
    /// held press itself.
    pub fn drop_stale_pointer(&mut self) {
        if self.blur.is_pointer_held() {
            log::debug!("Dropping stale pointer guard");
            self.release_pointer();
        }
    }

    pub fn move_active_down(&mut self) {
        let count = self.filtered_suggestions().len();
        if count == 0 {
            return;
        }
        self.active_suggestion = (self.active_suggestion() + 1).min(count - 1);
        self.scroll_to_active();
    }

    pub fn move_active_up(&mut self) {
        self.active_suggestion = self.active_suggestion().saturating_sub(1);
        self.scroll_to_active();
    }

    /// Select the active dropdown row. Returns false when the dropdown is hidden.
    pub fn select_active(&mut self) -> bool {
        if !self.is_dropdown_visible() {
            return false;
        }
        let index = self.active_suggestion();
        let Some(item) = self
            .filtered_suggestions()
            .get(index)
            .map(|s| s.to_string())
        else {
            return false;
        };
        self.select_suggestion(&item);
        true
    }

    /// Tear the widget down and hand back the selection. Any pending blur
    /// clear is dropped with it.
    pub fn into_selected(self) -> Vec<String> {
        self.selected
    }

    fn scroll_to_active(&mut self) {
        self.suggestion_offset = self.visible_suggestions().start;
    }

    fn remove_chip(&mut self, index: usize) -> String {
        let removed = self.selected.remove(index);
        self.dispatch(Signal::ChipRemoved);
        log::debug!("Removed chip {} {:?}", index, removed);
        self.notify_selection_change();
        removed
    }

    fn settle_blur(&mut self) {
        self.dispatch(Signal::BlurSettled);
        log::debug!("Blur settled");
    }

    fn clear_query(&mut self) {
        self.textarea = create_query_textarea(&self.placeholder);
        self.textarea
            .set_cursor_style(cursor_style(self.is_focused()));
        self.active_suggestion = 0;
        self.suggestion_offset = 0;
    }

    fn dispatch(&mut self, signal: Signal) -> Effect {
        let was_focused = self.interaction.has_focus();
        let (next, effect) = self.interaction.apply(signal);
        self.interaction = next;

        if was_focused != next.has_focus() {
            self.textarea
                .set_cursor_style(cursor_style(next.has_focus()));
        }
        effect
    }

    fn notify_selection_change(&mut self) {
        if let Some(hook) = self.on_selection_change.as_mut() {
            hook(&self.selected);
        }
    }
}

#[cfg(test)]
#[path = "select_state_tests.rs"]
mod select_state_tests;
