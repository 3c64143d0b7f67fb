//! View collaborator interface and the terminal view model.

use crate::models::{Question, Screen, ScoreCard};

/// Format a countdown as `minutes:seconds`, seconds padded to two digits.
pub fn format_countdown(remaining_secs: u32) -> String {
    format!("{}:{:02}", remaining_secs / 60, remaining_secs % 60)
}

/// What the current question screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// Zero-based position.
    pub index: usize,
    /// Number of questions.
    pub total: usize,
    pub text: String,
    pub options: Vec<String>,
    /// Position of the chosen option, if any.
    pub selected: Option<usize>,
}

impl QuestionView {
    pub fn new(question: &Question, selected: Option<&str>, index: usize, total: usize) -> Self {
        Self {
            index,
            total,
            text: question.text.clone(),
            options: question.options.clone(),
            selected: selected.and_then(|s| question.position_of(s)),
        }
    }

    pub fn show_prev(&self) -> bool {
        self.index > 0
    }

    pub fn show_next(&self) -> bool {
        self.index + 1 < self.total
    }

    pub fn show_submit(&self) -> bool {
        self.index + 1 == self.total
    }

    /// Numbered heading, e.g. `"3. What does CSS stand for?"`.
    pub fn heading(&self) -> String {
        format!("{}. {}", self.index + 1, self.text)
    }
}

/// Surface the session controller drives after each transition.
pub trait QuizView {
    /// Display a question and mark the selected option.
    fn render_question(&mut self, question: &Question, selected: Option<&str>, index: usize, total: usize);

    /// Display the remaining time.
    fn render_countdown(&mut self, remaining_secs: u32);

    /// Switch the visible screen.
    fn show_screen(&mut self, screen: Screen);

    /// Display the final score.
    fn render_result(&mut self, score: usize, total: usize);

    /// Ask the user to acknowledge a message.
    fn prompt_user(&mut self, message: &str);

    /// Drop any prompt still waiting for acknowledgement.
    fn dismiss_prompt(&mut self);
}

/// View model read by the terminal renderer.
#[derive(Debug, Clone, Default)]
pub struct ScreenState {
    pub screen: Screen,
    pub question: Option<QuestionView>,
    /// Formatted countdown.
    pub countdown: String,
    pub result: Option<ScoreCard>,
    /// Pending prompt; cleared when acknowledged.
    pub prompt: Option<String>,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acknowledge and clear the pending prompt.
    pub fn acknowledge(&mut self) -> bool {
        self.prompt.take().is_some()
    }
}

impl QuizView for ScreenState {
    fn render_question(&mut self, question: &Question, selected: Option<&str>, index: usize, total: usize) {
        self.question = Some(QuestionView::new(question, selected, index, total));
    }

    fn render_countdown(&mut self, remaining_secs: u32) {
        self.countdown = format_countdown(remaining_secs);
    }

    fn show_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    fn render_result(&mut self, score: usize, total: usize) {
        self.result = Some(ScoreCard { score, total });
    }

    fn prompt_user(&mut self, message: &str) {
        self.prompt = Some(message.to_string());
    }

    fn dismiss_prompt(&mut self) {
        self.prompt = None;
    }
}

/// Records every call, for controller tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    Question { index: usize, total: usize, selected: Option<String> },
    Countdown(String),
    Screen(Screen),
    Result(String),
    Prompt(String),
    DismissPrompt,
}

#[cfg(test)]
impl RecordingView {
    pub fn prompts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::Prompt(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn results(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::Result(r) => Some(r.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_countdown(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::Countdown(t) => Some(t.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
impl QuizView for RecordingView {
    fn render_question(&mut self, _question: &Question, selected: Option<&str>, index: usize, total: usize) {
        self.calls.push(ViewCall::Question {
            index,
            total,
            selected: selected.map(str::to_string),
        });
    }

    fn render_countdown(&mut self, remaining_secs: u32) {
        self.calls.push(ViewCall::Countdown(format_countdown(remaining_secs)));
    }

    fn show_screen(&mut self, screen: Screen) {
        self.calls.push(ViewCall::Screen(screen));
    }

    fn render_result(&mut self, score: usize, total: usize) {
        self.calls.push(ViewCall::Result(format!("{} / {}", score, total)));
    }

    fn prompt_user(&mut self, message: &str) {
        self.calls.push(ViewCall::Prompt(message.to_string()));
    }

    fn dismiss_prompt(&mut self) {
        self.calls.push(ViewCall::DismissPrompt);
    }
}
