use ratatui::layout::Rect;

/// A clickable part of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Body of the chip at this index
    Chip(usize),
    /// Close control of the chip at this index
    ChipClose(usize),
    /// Search field outside any chip
    SelectField,
    /// Dropdown row, indexed into the filtered suggestions
    Suggestion(usize),
    SelectionPane,
}

/// Screen position of one chip and its close control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipSlot {
    pub index: usize,
    pub area: Rect,
    pub close: Rect,
}

/// Regions drawn in the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub select_field: Option<Rect>,
    pub chips: Vec<ChipSlot>,
    /// Dropdown rows as (suggestion index, row area)
    pub suggestions: Vec<(usize, Rect)>,
    pub selection_pane: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.select_field = None;
        self.chips.clear();
        self.suggestions.clear();
        self.selection_pane = None;
    }
}
