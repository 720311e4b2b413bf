use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use flashdeck_lib::mode::Mode;

use super::app_state::{EditorFocus, TuiState};

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.quit = true;
        return;
    }

    if state.path_input.is_some() {
        handle_path_key(state, key);
        return;
    }

    match state.mode() {
        Mode::Editor => match state.focus {
            EditorFocus::List => handle_list_key(state, key),
            EditorFocus::Front | EditorFocus::Back => handle_input_key(state, key),
        },
        Mode::Viewer => handle_viewer_key(state, key),
    }
}

/// Keys shared by the card list and the viewer
fn handle_common_key(state: &mut TuiState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Tab => state.switch_mode(),
        KeyCode::Char(':') => state.open_path_prompt(),
        KeyCode::Char('?') => state.show_help = !state.show_help,
        _ => return false,
    }
    true
}

fn handle_list_key(state: &mut TuiState, key: KeyEvent) {
    if handle_common_key(state, key) {
        return;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => state.select_next(),
        KeyCode::Char('k') | KeyCode::Up => state.select_prev(),
        KeyCode::Char('a') | KeyCode::Char('n') => state.start_new_card(),
        KeyCode::Char('d') | KeyCode::Delete => state.delete_selected(),
        _ => {}
    }
}

fn handle_input_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.cancel_new_card(),
        KeyCode::Enter => state.submit_input(),
        KeyCode::Tab | KeyCode::BackTab => {
            state.focus = match state.focus {
                EditorFocus::Front => EditorFocus::Back,
                _ => EditorFocus::Front,
            };
        }
        KeyCode::Backspace => {
            if let Some(input) = state.input_mut() {
                input.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = state.input_mut() {
                input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_viewer_key(state: &mut TuiState, key: KeyEvent) {
    if handle_common_key(state, key) {
        return;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => state.flip(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('j') | KeyCode::Down => state.next_card(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('k') | KeyCode::Up => state.prev_card(),
        _ => {}
    }
}

fn handle_path_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.path_input = None,
        KeyCode::Enter => state.submit_path(),
        KeyCode::Backspace => {
            if let Some(input) = state.path_input.as_mut() {
                input.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = state.path_input.as_mut() {
                input.push(c);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use flashdeck_lib::config::AppConfig;

    use crate::app::App;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_str(state: &mut TuiState, text: &str) {
        for c in text.chars() {
            handle_key(state, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_author_then_review() {
        let mut state = TuiState::new(App::from_config(AppConfig::default()));

        handle_key(&mut state, key(KeyCode::Char('a')));
        type_str(&mut state, "q: 2+2");
        handle_key(&mut state, key(KeyCode::Enter));
        type_str(&mut state, "4");
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.cards().len(), 3);

        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.mode(), Mode::Viewer);

        // 'a' and 'd' are not editing keys in the viewer
        handle_key(&mut state, key(KeyCode::Char('d')));
        assert_eq!(state.cards().len(), 3);

        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.mode(), Mode::Editor);
    }

    #[test]
    fn test_q_types_into_inputs() {
        let mut state = TuiState::new(App::from_config(AppConfig::default()));
        handle_key(&mut state, key(KeyCode::Char('n')));
        type_str(&mut state, "quiz");
        assert!(!state.quit);
        assert_eq!(state.front_input, "quiz");

        handle_key(&mut state, key(KeyCode::Esc));
        handle_key(&mut state, key(KeyCode::Char('q')));
        assert!(state.quit);
    }

    #[test]
    fn test_path_prompt_keys() {
        let mut state = TuiState::new(App::from_config(AppConfig::default()));
        handle_key(&mut state, key(KeyCode::Char(':')));
        type_str(&mut state, "/viewer");
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.mode(), Mode::Viewer);
        assert!(state.path_input.is_none());
    }
}
