//! Focus and highlight state machine
//!
//! Focus and chip highlight live in a single [`Interaction`] value so every
//! transition goes through [`Interaction::apply`].

/// Whether the query field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPhase {
    #[default]
    Unfocused,
    Focused,
    /// Blurred, but the clear has not fired yet. Still counts as focused.
    BlurPending,
}

impl FocusPhase {
    pub fn has_focus(self) -> bool {
        !matches!(self, FocusPhase::Unfocused)
    }
}

/// Chip marked for keyboard deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Idle,
    Chip(usize),
}

impl Highlight {
    pub fn index(self) -> Option<usize> {
        match self {
            Highlight::Idle => None,
            Highlight::Chip(index) => Some(index),
        }
    }
}

/// Input events the state machine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Focus,
    /// Focus left the field; the clear is deferred
    Blur,
    /// The deferred blur clear fires
    BlurSettled,
    Backspace { query_empty: bool, chip_count: usize },
    QueryEdited { now_empty: bool },
    ChipClicked(usize),
    ChipRemoved,
}

/// Side effect the owner must carry out after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Remove the chip at this index
    RemoveChip(usize),
    /// Let the text field delete a character
    EditText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interaction {
    pub focus: FocusPhase,
    pub highlight: Highlight,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(self, signal: Signal) -> (Interaction, Effect) {
        match signal {
            Signal::Focus => (
                Interaction {
                    focus: FocusPhase::Focused,
                    ..self
                },
                Effect::None,
            ),
            Signal::Blur => {
                let focus = match self.focus {
                    FocusPhase::Unfocused => FocusPhase::Unfocused,
                    FocusPhase::Focused | FocusPhase::BlurPending => FocusPhase::BlurPending,
                };
                (Interaction { focus, ..self }, Effect::None)
            }
            Signal::BlurSettled => match self.focus {
                FocusPhase::BlurPending => (
                    Interaction {
                        focus: FocusPhase::Unfocused,
                        highlight: Highlight::Idle,
                    },
                    Effect::None,
                ),
                _ => (self, Effect::None),
            },
            Signal::Backspace {
                query_empty: false, ..
            } => (self, Effect::EditText),
            Signal::Backspace {
                query_empty: true,
                chip_count,
            } => match self.highlight {
                Highlight::Chip(index) if index < chip_count => (
                    self.with_highlight(Highlight::Idle),
                    Effect::RemoveChip(index),
                ),
                // Highlight outlived its chip
                Highlight::Chip(_) => (self.with_highlight(Highlight::Idle), Effect::None),
                Highlight::Idle if chip_count > 0 => (
                    self.with_highlight(Highlight::Chip(chip_count - 1)),
                    Effect::None,
                ),
                Highlight::Idle => (self, Effect::None),
            },
            Signal::QueryEdited { now_empty: false } => {
                (self.with_highlight(Highlight::Idle), Effect::None)
            }
            Signal::QueryEdited { now_empty: true } => (self, Effect::None),
            Signal::ChipClicked(index) => {
                (self.with_highlight(Highlight::Chip(index)), Effect::None)
            }
            Signal::ChipRemoved => (self.with_highlight(Highlight::Idle), Effect::None),
        }
    }

    pub fn has_focus(&self) -> bool {
        self.focus.has_focus()
    }

    fn with_highlight(self, highlight: Highlight) -> Self {
        Interaction { highlight, ..self }
    }
}

#[cfg(test)]
#[path = "interaction_tests.rs"]
mod interaction_tests;
