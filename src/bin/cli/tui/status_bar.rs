use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use flashdeck_lib::mode::Mode;

use super::app_state::{EditorFocus, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(Color::Green).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    let hints = match (state.mode(), state.focus) {
        (Mode::Editor, EditorFocus::List) => {
            " a: add  d: delete  j/k: select  Tab: review  :: path  ?: help  q: quit "
        }
        (Mode::Editor, _) => " Enter: next/add  Tab: other field  Esc: cancel ",
        (Mode::Viewer, _) => " Space: flip  h/l: prev/next  Tab: edit  :: path  ?: help  q: quit ",
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", state.app.session.path()),
            Style::default().bg(Color::Blue).fg(Color::White),
        ),
        Span::raw(hints),
    ]);

    let status = Paragraph::new(line).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status, area);
}
