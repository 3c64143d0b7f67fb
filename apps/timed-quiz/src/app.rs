//! Application state and logic.

use crate::config::Config;
use crate::models::{Question, QuizAction, Screen};
use crate::session::SessionController;
use crate::view::ScreenState;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;
use tracing::info;

pub struct App {
    pub config: Config,
    pub controller: SessionController<ScreenState>,
    /// Option under the cursor on the quiz screen.
    pub highlighted: usize,
    pub show_help: bool,
    questions: Vec<Question>,
}

impl App {
    pub fn new(config: Config, questions: Vec<Question>) -> Self {
        let controller = Self::fresh_controller(&config, &questions);
        Self {
            config,
            controller,
            highlighted: 0,
            show_help: false,
            questions,
        }
    }

    fn fresh_controller(config: &Config, questions: &[Question]) -> SessionController<ScreenState> {
        SessionController::new(questions.to_vec(), config.quiz.duration_secs, ScreenState::new())
    }

    pub fn screen(&self) -> &ScreenState {
        self.controller.view()
    }

    pub fn can_quit(&self) -> bool {
        self.screen().prompt.is_none()
    }

    /// Advance the countdown to `now`.
    pub fn tick(&mut self, now: Instant) {
        if self.controller.is_ticking() {
            self.controller.poll_timer(now);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if self.controller.view_mut().acknowledge() {
            return;
        }

        if self.show_help {
            self.show_help = false;
            return;
        }

        if key.code == KeyCode::Char('?') {
            self.show_help = true;
            return;
        }

        match self.screen().screen {
            Screen::Start => self.handle_start_key(key, now),
            Screen::Quiz => self.handle_quiz_key(key, now),
            Screen::Result => self.handle_result_key(key),
        }
    }

    fn handle_start_key(&mut self, key: KeyEvent, now: Instant) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.highlighted = 0;
            self.controller.dispatch(QuizAction::Start, now);
        }
    }

    fn handle_quiz_key(&mut self, key: KeyEvent, now: Instant) {
        let action = match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < self.option_count() {
                    self.highlighted = index;
                }
                Some(QuizAction::Select(index))
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_highlight(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_highlight(-1);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(QuizAction::Select(self.highlighted)),
            KeyCode::Char('n') | KeyCode::Char('l') | KeyCode::Right => Some(QuizAction::Next),
            KeyCode::Char('p') | KeyCode::Char('h') | KeyCode::Left => Some(QuizAction::Prev),
            KeyCode::Char('s') => Some(QuizAction::Submit),
            _ => None,
        };

        let Some(action) = action else { return };
        let before = self.controller.quiz().current_index();
        self.controller.dispatch(action, now);
        if self.controller.quiz().current_index() != before {
            self.sync_highlight();
        }
    }

    fn handle_result_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('r') {
            self.restart();
        }
    }

    /// Discard the finished attempt and begin a new one.
    pub fn restart(&mut self) {
        info!(previous = ?self.controller.quiz().score_card(), "quiz restarted");
        self.controller = Self::fresh_controller(&self.config, &self.questions);
        self.highlighted = 0;
    }

    fn option_count(&self) -> usize {
        self.controller.quiz().current_question().options.len()
    }

    fn move_highlight(&mut self, delta: i32) {
        let len = self.option_count();
        if len == 0 { return; }

        let new_idx = self.highlighted as i32 + delta;
        self.highlighted = new_idx.clamp(0, len as i32 - 1) as usize;
    }

    /// Put the cursor on the recorded answer, or the first option.
    fn sync_highlight(&mut self) {
        self.highlighted = self
            .screen()
            .question
            .as_ref()
            .and_then(|q| q.selected)
            .unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Phase;
    use crossterm::event::KeyModifiers;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let questions = vec![
            Question::new("Q1", ["A", "B", "C"], "A"),
            Question::new("Q2", ["A", "B", "C"], "C"),
        ];
        App::new(Config::default(), questions)
    }

    #[test]
    fn test_start_from_start_screen() {
        let mut app = app();
        let now = Instant::now();
        assert_eq!(app.screen().screen, Screen::Start);

        app.handle_key(key(KeyCode::Char('x')), now);
        assert_eq!(app.controller.phase(), Phase::NotStarted);

        app.handle_key(key(KeyCode::Enter), now);
        assert_eq!(app.controller.phase(), Phase::InProgress);
        assert_eq!(app.screen().screen, Screen::Quiz);
        assert_eq!(app.screen().countdown, "5:00");
    }

    #[test]
    fn test_full_attempt_by_keys() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(key(KeyCode::Enter), now);

        app.handle_key(key(KeyCode::Char('1')), now);
        app.handle_key(key(KeyCode::Right), now);
        app.handle_key(key(KeyCode::Down), now);
        app.handle_key(key(KeyCode::Down), now);
        app.handle_key(key(KeyCode::Enter), now);
        app.handle_key(key(KeyCode::Char('s')), now);

        assert_eq!(app.controller.phase(), Phase::Finished);
        assert_eq!(app.screen().result.map(|r| r.to_string()).as_deref(), Some("2 / 2"));
    }

    #[test]
    fn test_prompt_swallows_next_key() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(key(KeyCode::Enter), now);

        app.handle_key(key(KeyCode::Char('n')), now);
        assert!(app.screen().prompt.is_some());
        assert!(!app.can_quit());

        app.handle_key(key(KeyCode::Char('1')), now);
        assert!(app.screen().prompt.is_none());
        assert_eq!(app.controller.quiz().current_answer(), None);
    }

    #[test]
    fn test_highlight_follows_answer_on_navigation() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(key(KeyCode::Enter), now);

        app.handle_key(key(KeyCode::Char('3')), now);
        app.handle_key(key(KeyCode::Char('n')), now);
        assert_eq!(app.highlighted, 0);

        app.handle_key(key(KeyCode::Char('p')), now);
        assert_eq!(app.highlighted, 2);

        app.handle_key(key(KeyCode::Down), now);
        assert_eq!(app.highlighted, 2);
    }

    #[test]
    fn test_timer_drives_result_and_restart() {
        let mut app = App::new(
            Config {
                quiz: crate::config::QuizConfig { duration_secs: 2, questions_file: None },
                ..Config::default()
            },
            vec![Question::new("Q1", ["A", "B"], "A")],
        );
        let now = Instant::now();
        app.handle_key(key(KeyCode::Enter), now);
        app.tick(now + Duration::from_secs(2));

        assert_eq!(app.screen().screen, Screen::Result);
        assert_eq!(app.screen().result.map(|r| r.to_string()).as_deref(), Some("0 / 1"));

        app.handle_key(key(KeyCode::Char('r')), now);
        assert_eq!(app.screen().screen, Screen::Start);
        assert_eq!(app.controller.phase(), Phase::NotStarted);
        assert_eq!(app.controller.remaining_secs(), 2);
    }

    #[test]
    fn test_expiry_clears_unacknowledged_prompt() {
        let mut app = App::new(
            Config {
                quiz: crate::config::QuizConfig { duration_secs: 2, questions_file: None },
                ..Config::default()
            },
            vec![
                Question::new("Q1", ["A", "B"], "A"),
                Question::new("Q2", ["A", "B"], "B"),
            ],
        );
        let now = Instant::now();
        app.handle_key(key(KeyCode::Enter), now);
        app.handle_key(key(KeyCode::Char('1')), now);
        app.handle_key(key(KeyCode::Char('n')), now);
        app.handle_key(key(KeyCode::Char('s')), now);
        assert!(app.screen().prompt.is_some());

        app.tick(now + Duration::from_secs(2));
        assert_eq!(app.screen().screen, Screen::Result);
        assert!(app.screen().prompt.is_none());
        assert!(app.can_quit());
        assert_eq!(app.screen().result.map(|r| r.to_string()).as_deref(), Some("1 / 2"));

        app.handle_key(key(KeyCode::Char('r')), now);
        assert_eq!(app.screen().screen, Screen::Start);
        assert_eq!(app.controller.phase(), Phase::NotStarted);
    }

    #[test]
    fn test_help_toggle() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(key(KeyCode::Char('?')), now);
        assert!(app.show_help);
        app.handle_key(key(KeyCode::Enter), now);
        assert!(!app.show_help);
        assert_eq!(app.controller.phase(), Phase::NotStarted);
    }
}
