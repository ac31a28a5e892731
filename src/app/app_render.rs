use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::{App, Focus};
use crate::output::format_selection;
use crate::select::select_render;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let field_height = select_render::field_height(&self.select, frame.area().width);
        let layout = Layout::vertical([
            Constraint::Length(field_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (field_area, selection_area, help_area) = (layout[0], layout[1], layout[2]);

        select_render::render_field(&self.select, frame, field_area, &mut self.layout_regions);
        self.render_selection_pane(frame, selection_area);
        render_help_line(self, frame, help_area);

        // Dropdown goes last so it draws over the selection pane
        select_render::render_dropdown(&self.select, frame, field_area, &mut self.layout_regions);
    }

    fn render_selection_pane(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::SelectionPane {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Selection ")
            .border_style(Style::default().fg(border_color));

        let paragraph = if self.select.selected().is_empty() {
            Paragraph::new("(nothing selected)").style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(format_selection(self.select.selected(), self.output_format))
        };

        frame.render_widget(paragraph.block(block), area);
        self.layout_regions.selection_pane = Some(area);
    }
}

/// Help text for the current focus and field state
pub fn help_text(app: &App) -> &'static str {
    match app.focus {
        Focus::SelectField if app.select.is_dropdown_visible() => {
            " ↑/↓: Choose | Tab/Enter: Select | Shift+Tab: Switch Pane | Esc: Quit"
        }
        Focus::SelectField if app.select.highlighted().is_some() => {
            " Backspace: Delete Chip | Type: Keep Chip | Enter: Output Selection | Esc: Quit"
        }
        Focus::SelectField => {
            " Type: Search | Backspace: Mark Last Chip | Enter: Output Selection | Shift+Tab: Switch Pane | Esc: Quit"
        }
        Focus::SelectionPane => {
            " Enter: Output Selection | Tab/Shift+Tab: Back to Search | q/Esc: Quit"
        }
    }
}

fn render_help_line(app: &App, frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(help_text(app)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
