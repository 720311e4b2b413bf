use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let total = state.cards().len();

    let Some(card) = state.current_review_card() else {
        let block = Block::default()
            .title(" Review ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Nothing to review. Press Tab to add cards in the editor.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        f.render_widget(Paragraph::new(help_text).block(block), area);
        return;
    };

    let (side, text, color) = if state.show_back {
        ("back", &card.back, Color::Green)
    } else {
        ("front", &card.front, Color::Yellow)
    };

    let block = Block::default()
        .title(format!(" Card {} of {} ({}) ", state.review_index + 1, total, side))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    // Center the card text vertically
    let inner_height = area.height.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = vec![Line::from(""); inner_height / 2];
    lines.push(Line::from(Span::styled(
        text.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
