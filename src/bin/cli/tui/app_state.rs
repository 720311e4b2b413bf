use flashdeck_lib::flashcards::{Card, CardCollection};
use flashdeck_lib::mode::Mode;

use crate::app::App;

/// Which editor widget receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorFocus {
    List,
    Front,
    Back,
}

pub struct TuiState {
    pub app: App,

    // Collection snapshot the selection indices below refer to
    seen_cards: CardCollection,

    // Editor state
    pub focus: EditorFocus,
    pub selected: usize,
    pub front_input: String,
    pub back_input: String,

    // Viewer state
    pub review_index: usize,
    pub show_back: bool,

    // Navigation prompt (":" key); `Some` while open
    pub path_input: Option<String>,

    pub flash_message: Option<String>,
    pub show_help: bool,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: App) -> Self {
        let seen_cards = app.session.cards().clone();
        Self {
            app,
            seen_cards,
            focus: EditorFocus::List,
            selected: 0,
            front_input: String::new(),
            back_input: String::new(),
            review_index: 0,
            show_back: false,
            path_input: None,
            flash_message: None,
            show_help: false,
            quit: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.app.session.mode()
    }

    pub fn cards(&self) -> &CardCollection {
        self.app.session.cards()
    }

    /// Clamp cursors after the collection changed underneath them
    fn sync_cards(&mut self) {
        let cards = self.app.session.cards();
        if cards.ptr_eq(&self.seen_cards) {
            return;
        }

        let last = cards.len().saturating_sub(1);
        self.selected = self.selected.min(last);
        self.review_index = self.review_index.min(last);
        self.seen_cards = cards.clone();
    }

    // ==================== Mode ====================

    pub fn switch_mode(&mut self) {
        let mode = self.app.session.switch_mode();
        self.on_mode_entered(mode);
    }

    pub fn open_path_prompt(&mut self) {
        self.path_input = Some(String::new());
    }

    pub fn submit_path(&mut self) {
        let Some(path) = self.path_input.take() else {
            return;
        };
        let path = path.trim();
        if path.is_empty() {
            return;
        }

        let before = self.mode();
        let mode = self.app.session.navigate(path);
        if self.app.session.try_resolve_path(path).is_err() {
            self.flash_message = Some(format!("{} is not a known path, showing {}", path, mode));
        }
        if mode != before {
            self.on_mode_entered(mode);
        }
    }

    fn on_mode_entered(&mut self, mode: Mode) {
        match mode {
            Mode::Editor => self.focus = EditorFocus::List,
            Mode::Viewer => self.show_back = false,
        }
    }

    // ==================== Editor ====================

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.cards().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn start_new_card(&mut self) {
        self.front_input.clear();
        self.back_input.clear();
        self.focus = EditorFocus::Front;
    }

    pub fn cancel_new_card(&mut self) {
        self.front_input.clear();
        self.back_input.clear();
        self.focus = EditorFocus::List;
    }

    /// Enter on the front field moves on, on the back field adds the card
    pub fn submit_input(&mut self) {
        match self.focus {
            EditorFocus::Front => self.focus = EditorFocus::Back,
            EditorFocus::Back => {
                let card = Card::new(
                    std::mem::take(&mut self.front_input),
                    std::mem::take(&mut self.back_input),
                );
                let cards = self.app.session.add_card(card);
                self.sync_cards();
                self.selected = cards.len().saturating_sub(1);
                self.flash_message = Some(format!("Added card {}", cards.len()));
                self.focus = EditorFocus::List;
            }
            EditorFocus::List => {}
        }
    }

    pub fn input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            EditorFocus::Front => Some(&mut self.front_input),
            EditorFocus::Back => Some(&mut self.back_input),
            EditorFocus::List => None,
        }
    }

    pub fn delete_selected(&mut self) {
        let index = self.selected as i64;
        match self.app.session.delete_card(index) {
            Ok(cards) => {
                self.sync_cards();
                self.flash_message = Some(format!("Deleted card {} ({} left)", index + 1, cards.len()));
            }
            Err(e) => {
                self.flash_message = Some(format!("Error: {}", e));
            }
        }
    }

    // ==================== Viewer ====================

    pub fn current_review_card(&self) -> Option<&Card> {
        self.cards().get(self.review_index)
    }

    pub fn flip(&mut self) {
        if !self.cards().is_empty() {
            self.show_back = !self.show_back;
        }
    }

    pub fn next_card(&mut self) {
        let len = self.cards().len();
        if len > 0 {
            self.review_index = (self.review_index + 1) % len;
            self.show_back = false;
        }
    }

    pub fn prev_card(&mut self) {
        let len = self.cards().len();
        if len > 0 {
            self.review_index = (self.review_index + len - 1) % len;
            self.show_back = false;
        }
    }
}
