//! Question bank: built-in questions and TOML bank files.

use crate::error::{BankError, BankResult};
use crate::models::Question;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// On-disk bank layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionBank {
    /// Parse a bank from TOML text and validate it.
    pub fn from_toml(content: &str) -> BankResult<Self> {
        let bank: Self = toml::from_str(content)?;
        bank.validate()?;
        Ok(bank)
    }

    /// Load and validate a bank file.
    pub fn load(path: &Path) -> BankResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bank = Self::from_toml(&content)?;
        info!(path = %path.display(), questions = bank.questions.len(), "question bank loaded");
        Ok(bank)
    }

    /// Load from `path` if given, otherwise use the built-in bank.
    pub fn load_or_builtin(path: Option<&Path>) -> BankResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Check every question against the bank invariants.
    pub fn validate(&self) -> BankResult<()> {
        if self.questions.is_empty() {
            return Err(BankError::Empty);
        }

        for (i, q) in self.questions.iter().enumerate() {
            let invalid = |reason: &str| BankError::InvalidQuestion {
                number: i + 1,
                reason: reason.to_string(),
            };

            if q.text.trim().is_empty() {
                return Err(invalid("question text is empty"));
            }
            if q.options.len() < 2 {
                return Err(invalid("needs at least 2 options"));
            }
            if !q.options.contains(&q.correct_option) {
                return Err(invalid("correct option is not one of the options"));
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }

    /// General web and software-engineering trivia.
    pub fn builtin() -> Self {
        let questions = vec![
            Question::new(
                "What is the capital of France?",
                ["Paris", "London", "Berlin", "Madrid"],
                "Paris",
            ),
            Question::new(
                "Which language runs in a web browser?",
                ["Java", "C", "Python", "JavaScript"],
                "JavaScript",
            ),
            Question::new(
                "What does CSS stand for?",
                [
                    "Central Style Sheets",
                    "Cascading Style Sheets",
                    "Cascading Simple Sheets",
                    "Cars SUVs Sailboats",
                ],
                "Cascading Style Sheets",
            ),
            Question::new(
                "What year was JavaScript launched?",
                ["1996", "1995", "1994", "1993"],
                "1995",
            ),
            Question::new(
                "What does SDLC stand for?",
                [
                    "System Design Life Cycle",
                    "Software Design Life Cycle",
                    "Software Development Life Cycle",
                    "System Development Life Cycle",
                ],
                "Software Development Life Cycle",
            ),
            Question::new(
                "Which phase is NOT part of the Software Development Life Cycle (SDLC)?",
                ["Planning", "Analysis", "Testing", "Maintenance"],
                "Testing",
            ),
            Question::new(
                "What does UML stand for in software engineering?",
                [
                    "Unified Modeling Language",
                    "Universal Modeling Language",
                    "Unique Modeling Language",
                    "Unified Management Language",
                ],
                "Unified Modeling Language",
            ),
            Question::new(
                "Which of the following is NOT a software development model?",
                ["Agile", "Waterfall", "Spiral", "RAD (Rapid Application Development)"],
                "RAD (Rapid Application Development)",
            ),
            Question::new(
                "Which is NOT a phase in the software development process?",
                ["Planning", "Design", "Implementation", "Maintenance"],
                "Planning",
            ),
            Question::new(
                "Which aspect is NOT typically considered in software quality attributes?",
                ["Performance", "User interface", "Functionality", "Output"],
                "Output",
            ),
            Question::new(
                "What is the main purpose of software testing?",
                [
                    "To ensure the software meets requirements",
                    "To find errors",
                    "To document the software",
                    "To create user manuals",
                ],
                "To find errors",
            ),
            Question::new(
                "Which software development model follows a linear sequential flow?",
                ["Waterfall", "V-Model", "Agile", "Big Bang"],
                "Waterfall",
            ),
            Question::new(
                "What is the purpose of the Design Phase in SDLC?",
                [
                    "To define the system requirements",
                    "To translate requirements into design",
                    "To perform unit testing",
                    "To deploy the software",
                ],
                "To translate requirements into design",
            ),
            Question::new(
                "Which of the following is NOT a software development model?",
                ["Waterfall model", "Agile model", "Hardware model", "Spiral model"],
                "Hardware model",
            ),
            Question::new(
                "Which is a drawback of the Waterfall model?",
                ["No risk analysis", "High-risk analysis", "No customer involvement", "Sequential phases"],
                "No risk analysis",
            ),
        ];

        Self { questions }
    }
}
