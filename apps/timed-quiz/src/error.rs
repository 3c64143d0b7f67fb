//! Quiz error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by quiz transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Moving forward without answering the current question.
    #[error("answer required")]
    AnswerRequired,

    /// Submitting while some questions are unanswered.
    #[error("incomplete")]
    Incomplete,

    /// Already at the last question.
    #[error("no next question")]
    NoNextQuestion,

    /// Already at the first question.
    #[error("no previous question")]
    NoPreviousQuestion,

    /// Transition attempted before the quiz started.
    #[error("quiz not started")]
    NotStarted,
}

impl QuizError {
    /// Whether this error should be shown to the user as a prompt.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::AnswerRequired | Self::Incomplete)
    }

    /// Prompt text shown to the user.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::AnswerRequired => "Please select an answer before proceeding.",
            Self::Incomplete => "Please answer all questions before submitting.",
            Self::NoNextQuestion => "This is the last question.",
            Self::NoPreviousQuestion => "This is the first question.",
            Self::NotStarted => "The quiz has not started yet.",
        }
    }
}

/// Result type for quiz transitions.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that can occur while loading a question bank.
#[derive(Debug, Error)]
pub enum BankError {
    /// IO error.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Bank contains no questions.
    #[error("Question bank is empty")]
    Empty,

    /// A question breaks a bank invariant.
    #[error("Invalid question {number}: {reason}")]
    InvalidQuestion { number: usize, reason: String },
}

/// Result type for bank operations.
pub type BankResult<T> = Result<T, BankError>;
