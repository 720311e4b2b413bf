use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use flashdeck_lib::mode::Mode;

use super::app_state::TuiState;
use super::{editor_widget, path_bar, status_bar, viewer_widget};

pub fn draw(f: &mut Frame, state: &TuiState) {
    let size = f.area();

    // Main layout: content area + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(size);

    let main_area = outer[0];
    let status_area = outer[1];

    // The session decides which screen is shown
    match state.mode() {
        Mode::Editor => editor_widget::draw(f, main_area, state),
        Mode::Viewer => viewer_widget::draw(f, main_area, state),
    }

    if state.path_input.is_some() {
        path_bar::draw(f, status_area, state);
    } else {
        status_bar::draw(f, status_area, state);
    }

    if state.show_help {
        draw_help(f, main_area, state);
    }
}

fn draw_help(f: &mut Frame, area: Rect, state: &TuiState) {
    let width = 52.min(area.width);
    let height = 14.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let lines = vec![
        Line::from(Span::styled(" Editor", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("   a/n: new card    d: delete    j/k: select"),
        Line::from("   Enter: next field / add    Esc: cancel"),
        Line::from(Span::styled(" Viewer", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("   Space: flip    h/l: previous/next card"),
        Line::from(Span::styled(" Anywhere", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("   Tab: switch mode    :: go to path    q: quit"),
        Line::from(""),
        Line::from(format!(
            "   Paths: /editor, /viewer (others show {})",
            state.app.config.mode.fallback
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);
}
