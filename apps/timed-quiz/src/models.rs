//! Data models for the timed quiz.

use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text.
    pub text: String,
    /// Answer options, in display order.
    pub options: Vec<String>,
    /// The option that scores.
    pub correct_option: String,
}

impl Question {
    /// Create a new question.
    pub fn new<S: Into<String>>(
        text: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct_option: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_option: correct_option.into(),
        }
    }

    /// Option text at the given position.
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Position of an option by its text.
    pub fn position_of(&self, option: &str) -> Option<usize> {
        self.options.iter().position(|o| o == option)
    }

    /// Check whether the given answer is the correct one.
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_option == answer
    }
}

/// Coarse lifecycle stage of an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

impl Phase {
    /// Screen that mirrors this phase.
    pub fn screen(&self) -> Screen {
        match self {
            Self::NotStarted => Screen::Start,
            Self::InProgress => Screen::Quiz,
            Self::Finished => Screen::Result,
        }
    }
}

/// Visible screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Start,
    Quiz,
    Result,
}

/// User-initiated quiz action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Start,
    /// Select an option of the current question by position.
    Select(usize),
    Next,
    Prev,
    Submit,
}

/// Final result of an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    /// Correct answers.
    pub score: usize,
    /// Number of questions.
    pub total: usize,
}

impl ScoreCard {
    /// Fraction of correct answers (0.0 to 1.0).
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.score as f64 / self.total as f64
        }
    }
}

impl std::fmt::Display for ScoreCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.score, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("2 + 2?", ["3", "4"], "4");
        assert_eq!(q.options, vec!["3".to_string(), "4".to_string()]);
        assert_eq!(q.option(1), Some("4"));
        assert_eq!(q.option(2), None);
        assert_eq!(q.position_of("4"), Some(1));
        assert!(q.is_correct("4"));
        assert!(!q.is_correct("3"));
    }

    #[test]
    fn test_phase_screen() {
        assert_eq!(Phase::default(), Phase::NotStarted);
        assert_eq!(Phase::NotStarted.screen(), Screen::Start);
        assert_eq!(Phase::InProgress.screen(), Screen::Quiz);
        assert_eq!(Phase::Finished.screen(), Screen::Result);
    }

    #[test]
    fn test_result_display() {
        let result = ScoreCard { score: 1, total: 1 };
        assert_eq!(result.to_string(), "1 / 1");
        assert_eq!(ScoreCard { score: 3, total: 4 }.ratio(), 0.75);
        assert_eq!(ScoreCard { score: 0, total: 0 }.ratio(), 0.0);
    }
}
