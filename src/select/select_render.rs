//! Multi-select rendering
//!
//! Draws the search field (chips followed by the query line) and the
//! suggestion dropdown below it, recording clickable regions as it goes.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::select_state::MultiSelect;
use crate::layout::{ChipSlot, LayoutRegions};
use crate::widgets::popup;

// Chip display: " label ×"
const CHIP_DECORATION_WIDTH: u16 = 3;
const CHIP_GAP: u16 = 1;
const CLOSE_MARK: &str = "×";
const FIELD_BORDER_HEIGHT: u16 = 2;
const QUERY_LINE_HEIGHT: u16 = 1;

// Dropdown display constants
const MAX_POPUP_WIDTH: usize = 60;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;
const DROPDOWN_TITLE: &str = " Suggestions ";

fn chip_width(label: &str) -> u16 {
    (label.width() as u16).saturating_add(CHIP_DECORATION_WIDTH)
}

/// Truncate `label` to at most `max_width` display columns
fn fit_label(label: &str, max_width: usize) -> String {
    let mut width = 0;
    label
        .chars()
        .take_while(|ch| {
            width += ch.width().unwrap_or(0);
            width <= max_width
        })
        .collect()
}

/// Lay chips out left to right, wrapping inside `area`. Chips that do not fit
/// vertically are dropped.
pub fn layout_chips(labels: &[String], area: Rect) -> Vec<ChipSlot> {
    let mut slots = Vec::new();
    if area.width == 0 || area.height == 0 {
        return slots;
    }

    let right = u32::from(area.x) + u32::from(area.width);
    let mut x = u32::from(area.x);
    let mut y = area.y;

    for (index, label) in labels.iter().enumerate() {
        let width = chip_width(label).min(area.width);
        if x > u32::from(area.x) && x + u32::from(width) > right {
            x = u32::from(area.x);
            y += 1;
        }
        if y >= area.bottom() {
            break;
        }

        let chip_x = x as u16;
        slots.push(ChipSlot {
            index,
            area: Rect {
                x: chip_x,
                y,
                width,
                height: 1,
            },
            close: Rect {
                x: chip_x + width - 1,
                y,
                width: 1,
                height: 1,
            },
        });
        x += u32::from(width) + u32::from(CHIP_GAP);
    }

    slots
}

/// Rows the chip list needs at `width` columns
pub fn chip_rows(labels: &[String], width: u16) -> u16 {
    if labels.is_empty() || width == 0 {
        return 0;
    }

    let mut rows = 1;
    let mut x: u32 = 0;
    for label in labels {
        let chip = u32::from(chip_width(label).min(width));
        if x > 0 && x + chip > u32::from(width) {
            rows += 1;
            x = 0;
        }
        x += chip + u32::from(CHIP_GAP);
    }
    rows
}

/// Total height of the search field drawn `width` columns wide
pub fn field_height(select: &MultiSelect, width: u16) -> u16 {
    let inner_width = width.saturating_sub(2);
    chip_rows(select.selected(), inner_width) + QUERY_LINE_HEIGHT + FIELD_BORDER_HEIGHT
}

/// Render the search field: chips, then the query line
pub fn render_field(select: &MultiSelect, frame: &mut Frame, area: Rect, regions: &mut LayoutRegions) {
    let border_color = if select.is_focused() {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let title = format!(" Search ({} selected) ", select.selected().len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    regions.select_field = Some(area);

    let rows = chip_rows(select.selected(), inner.width).min(inner.height.saturating_sub(QUERY_LINE_HEIGHT));
    let chip_area = Rect { height: rows, ..inner };
    let slots = layout_chips(select.selected(), chip_area);

    for slot in &slots {
        let label = &select.selected()[slot.index];
        let highlighted = select.highlighted() == Some(slot.index);
        render_chip(frame, slot, label, highlighted);
    }
    regions.chips = slots;

    if inner.height > rows {
        let query_area = Rect {
            y: inner.y + rows,
            height: QUERY_LINE_HEIGHT,
            ..inner
        };
        frame.render_widget(select.textarea(), query_area);
    }
}

fn render_chip(frame: &mut Frame, slot: &ChipSlot, label: &str, highlighted: bool) {
    let (body, close) = if highlighted {
        (
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Red).bg(Color::Yellow),
        )
    } else {
        (
            Style::default().fg(Color::White).bg(Color::Blue),
            Style::default().fg(Color::LightRed).bg(Color::Blue),
        )
    };

    let max_label = slot.area.width.saturating_sub(CHIP_DECORATION_WIDTH) as usize;
    let line = Line::from(vec![
        Span::styled(format!(" {} ", fit_label(label, max_label)), body),
        Span::styled(CLOSE_MARK, close),
    ]);
    frame.render_widget(Paragraph::new(line), slot.area);
}

/// Render the suggestion dropdown below the field
pub fn render_dropdown(
    select: &MultiSelect,
    frame: &mut Frame,
    field_area: Rect,
    regions: &mut LayoutRegions,
) {
    regions.suggestions.clear();
    if !select.is_dropdown_visible() {
        return;
    }

    let suggestions = select.filtered_suggestions();
    let window = select.visible_suggestions();
    let visible = &suggestions[window.clone()];
    let popup_height = (visible.len() as u16) + POPUP_BORDER_HEIGHT;

    let max_text_width = visible
        .iter()
        .map(|s| s.width())
        .max()
        .unwrap_or(10)
        .min(MAX_POPUP_WIDTH);
    let title_width = (DROPDOWN_TITLE.width() as u16) + 2;
    let popup_width = ((max_text_width as u16) + POPUP_PADDING).max(title_width);

    let popup_area = popup::popup_below_anchor(
        field_area,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT || popup_area.width <= 2 {
        return;
    }

    let active = select.active_suggestion();
    let items: Vec<ListItem> = visible
        .iter()
        .zip(window.clone())
        .map(|(suggestion, i)| {
            let line = if i == active {
                Line::from(Span::styled(
                    format!("► {}", suggestion),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", suggestion),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(DROPDOWN_TITLE)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, popup_area);

    let inner_rows = (popup_area.height - POPUP_BORDER_HEIGHT) as usize;
    for (row, index) in window.take(inner_rows).enumerate() {
        regions.suggestions.push((
            index,
            Rect {
                x: popup_area.x + 1,
                y: popup_area.y + 1 + row as u16,
                width: popup_area.width - 2,
                height: 1,
            },
        ));
    }
}

#[cfg(test)]
#[path = "select_render_tests.rs"]
mod select_render_tests;
