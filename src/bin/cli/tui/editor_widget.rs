use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::app_state::{EditorFocus, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Horizontal split: card list (55%) | new card form (45%)
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    draw_card_list(f, panels[0], state);
    draw_form(f, panels[1], state);
}

fn border_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_card_list(f: &mut Frame, area: Rect, state: &TuiState) {
    let is_active = state.focus == EditorFocus::List;

    let block = Block::default()
        .title(format!(" Cards ({}) ", state.cards().len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    if state.cards().is_empty() {
        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No cards yet. Press a to add one.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        f.render_widget(Paragraph::new(help_text).block(block), area);
        return;
    }

    let items: Vec<ListItem> = state
        .cards()
        .iter()
        .enumerate()
        .map(|(i, card)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(card.front.clone(), Style::default().fg(Color::Yellow)),
                Span::raw("  "),
                Span::styled(card.back.clone(), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(if is_active { Color::DarkGray } else { Color::Black })
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_form(f: &mut Frame, area: Rect, state: &TuiState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    draw_field(f, rows[0], " Front ", &state.front_input, state.focus == EditorFocus::Front);
    draw_field(f, rows[1], " Back ", &state.back_input, state.focus == EditorFocus::Back);
}

fn draw_field(f: &mut Frame, area: Rect, title: &str, text: &str, active: bool) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(active));

    let content = if active {
        format!("{}█", text)
    } else {
        text.to_string()
    };
    f.render_widget(Paragraph::new(content).block(block), area);
}
