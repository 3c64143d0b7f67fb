//! Quiz navigation and scoring state machine.

use crate::error::{QuizError, QuizResult};
use crate::models::{Phase, Question, ScoreCard};

/// Outcome of a submit call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// This call moved the quiz into `Finished`.
    Scored(ScoreCard),
    /// The quiz was already finished; nothing changed.
    AlreadyFinished,
}

/// State of one quiz attempt.
#[derive(Debug, Clone)]
pub struct QuizSession {
    /// Fixed question list.
    questions: Vec<Question>,
    /// Cursor into `questions`.
    current_index: usize,
    /// One slot per question.
    answers: Vec<Option<String>>,
    /// Lifecycle stage.
    phase: Phase,
    /// Set once, on entering `Finished`.
    score: Option<usize>,
}

impl QuizSession {
    /// Create a session over a non-empty question list.
    ///
    /// # Panics
    ///
    /// Panics if `questions` is empty. Banks are validated on load, so
    /// callers holding a [`QuestionBank`](crate::bank::QuestionBank) never
    /// hit this.
    pub fn new(questions: Vec<Question>) -> Self {
        assert!(!questions.is_empty(), "quiz needs at least one question");
        let answers = vec![None; questions.len()];
        Self {
            questions,
            current_index: 0,
            answers,
            phase: Phase::NotStarted,
            score: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    /// Answer recorded for the current question.
    pub fn current_answer(&self) -> Option<&str> {
        self.answers[self.current_index].as_deref()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// Score, available once finished.
    pub fn score(&self) -> Option<usize> {
        self.score
    }

    pub fn score_card(&self) -> Option<ScoreCard> {
        self.score.map(|score| ScoreCard {
            score,
            total: self.total(),
        })
    }

    /// Begin the attempt. Does nothing if already started.
    pub fn start(&mut self) {
        if self.phase == Phase::NotStarted {
            self.phase = Phase::InProgress;
            self.current_index = 0;
        }
    }

    /// Record an answer for the current question, replacing any earlier one.
    ///
    /// The option is stored as given; callers only offer the question's own
    /// options.
    pub fn select_answer(&mut self, option: impl Into<String>) -> QuizResult<()> {
        match self.phase {
            Phase::NotStarted => Err(QuizError::NotStarted),
            Phase::Finished => Ok(()),
            Phase::InProgress => {
                self.answers[self.current_index] = Some(option.into());
                Ok(())
            }
        }
    }

    /// Advance to the next question. The current one must be answered.
    pub fn go_next(&mut self) -> QuizResult<()> {
        match self.phase {
            Phase::NotStarted => Err(QuizError::NotStarted),
            Phase::Finished => Ok(()),
            Phase::InProgress => {
                if self.answers[self.current_index].is_none() {
                    return Err(QuizError::AnswerRequired);
                }
                if self.is_last() {
                    return Err(QuizError::NoNextQuestion);
                }
                self.current_index += 1;
                Ok(())
            }
        }
    }

    /// Go back one question, regardless of answer state.
    pub fn go_prev(&mut self) -> QuizResult<()> {
        match self.phase {
            Phase::NotStarted => Err(QuizError::NotStarted),
            Phase::Finished => Ok(()),
            Phase::InProgress => {
                if self.current_index == 0 {
                    return Err(QuizError::NoPreviousQuestion);
                }
                self.current_index -= 1;
                Ok(())
            }
        }
    }

    /// Score the attempt. Every question must be answered.
    pub fn submit(&mut self) -> QuizResult<Submission> {
        match self.phase {
            Phase::NotStarted => Err(QuizError::NotStarted),
            Phase::Finished => Ok(Submission::AlreadyFinished),
            Phase::InProgress => {
                if !self.is_complete() {
                    return Err(QuizError::Incomplete);
                }
                Ok(self.finish())
            }
        }
    }

    /// Score the attempt as it stands. Unanswered questions count as wrong.
    pub fn force_submit(&mut self) -> QuizResult<Submission> {
        match self.phase {
            Phase::NotStarted => Err(QuizError::NotStarted),
            Phase::Finished => Ok(Submission::AlreadyFinished),
            Phase::InProgress => Ok(self.finish()),
        }
    }

    fn finish(&mut self) -> Submission {
        let score = self.compute_score();
        self.score = Some(score);
        self.phase = Phase::Finished;
        Submission::Scored(ScoreCard {
            score,
            total: self.total(),
        })
    }

    fn compute_score(&self) -> usize {
        self.answers
            .iter()
            .zip(&self.questions)
            .filter(|(answer, question)| {
                answer.as_deref().is_some_and(|a| question.is_correct(a))
            })
            .count()
    }
}
