use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let input = state.path_input.as_deref().unwrap_or("");

    let input_widget = Paragraph::new(format!(":{}", input)).style(Style::default().fg(Color::Yellow));
    f.render_widget(input_widget, area);

    // Set cursor position
    let cursor_x = area.x + 1 + input.chars().count() as u16;
    f.set_cursor_position(Position::new(cursor_x, area.y));
}
