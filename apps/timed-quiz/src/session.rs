//! Session controller: countdown, tick source and view orchestration.

use crate::error::QuizError;
use crate::models::{Phase, Question, QuizAction, ScoreCard};
use crate::quiz::{QuizSession, Submission};
use crate::ticker::Ticker;
use crate::view::QuizView;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Drives one quiz attempt against a view.
pub struct SessionController<V: QuizView> {
    quiz: QuizSession,
    view: V,
    ticker: Ticker,
    /// Seconds left on the countdown.
    remaining_secs: u32,
}

impl<V: QuizView> SessionController<V> {
    /// Create a controller for a fresh attempt and show the start screen.
    pub fn new(questions: Vec<Question>, duration_secs: u32, mut view: V) -> Self {
        let quiz = QuizSession::new(questions);
        view.show_screen(quiz.phase().screen());
        view.render_countdown(duration_secs);
        Self {
            quiz,
            view,
            ticker: Ticker::every_second(),
            remaining_secs: duration_secs,
        }
    }

    pub fn phase(&self) -> Phase {
        self.quiz.phase()
    }

    pub fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    /// Time until the next countdown tick, if running.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.ticker.until_next(now)
    }

    /// Dispatch a user action.
    pub fn dispatch(&mut self, action: QuizAction, now: Instant) {
        match action {
            QuizAction::Start => self.start(now),
            QuizAction::Select(index) => self.on_select(index),
            QuizAction::Next => self.on_next(),
            QuizAction::Prev => self.on_prev(),
            QuizAction::Submit => self.on_user_submit(),
        }
    }

    /// Start the attempt and the countdown.
    pub fn start(&mut self, now: Instant) {
        if self.quiz.phase() != Phase::NotStarted {
            return;
        }
        self.quiz.start();
        self.ticker.start(now);
        info!(
            questions = self.quiz.total(),
            duration_secs = self.remaining_secs,
            "quiz started"
        );

        self.view.show_screen(self.quiz.phase().screen());
        self.view.render_countdown(self.remaining_secs);
        self.render_current();

        if self.remaining_secs == 0 {
            self.expire();
        }
    }

    /// Feed wall-clock time to the tick source.
    pub fn poll_timer(&mut self, now: Instant) {
        for _ in 0..self.ticker.poll(now) {
            self.on_tick();
        }
    }

    /// One second elapsed.
    pub fn on_tick(&mut self) {
        if self.quiz.phase() != Phase::InProgress {
            return;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.view.render_countdown(self.remaining_secs);

        if self.remaining_secs == 0 {
            self.expire();
        }
    }

    fn expire(&mut self) {
        self.ticker.stop();
        info!(answered = self.quiz.answered_count(), "time is up");
        self.force_submit();
    }

    /// Submit regardless of unanswered questions.
    pub fn force_submit(&mut self) {
        match self.quiz.force_submit() {
            Ok(Submission::Scored(card)) => self.finish(card),
            Ok(Submission::AlreadyFinished) => debug!("force submit after finish ignored"),
            Err(err) => warn!(%err, "force submit rejected"),
        }
    }

    /// Submit on the user's request; every question must be answered.
    pub fn on_user_submit(&mut self) {
        match self.quiz.submit() {
            Ok(Submission::Scored(card)) => self.finish(card),
            Ok(Submission::AlreadyFinished) => debug!("submit after finish ignored"),
            Err(err) => self.reject(err),
        }
    }

    pub fn on_next(&mut self) {
        match self.quiz.go_next() {
            Ok(()) => self.render_current(),
            Err(err) => self.reject(err),
        }
    }

    pub fn on_prev(&mut self) {
        match self.quiz.go_prev() {
            Ok(()) => self.render_current(),
            Err(err) => self.reject(err),
        }
    }

    /// Select an option of the current question by position.
    pub fn on_select(&mut self, option_index: usize) {
        if self.quiz.phase() != Phase::InProgress {
            return;
        }
        let Some(option) = self.quiz.current_question().option(option_index).map(str::to_string) else {
            debug!(option_index, "selection outside option range ignored");
            return;
        };
        match self.quiz.select_answer(option) {
            Ok(()) => self.render_current(),
            Err(err) => self.reject(err),
        }
    }

    fn finish(&mut self, card: ScoreCard) {
        self.ticker.stop();
        info!(score = card.score, total = card.total, "quiz finished");
        // Validation prompts refer to the attempt that just ended.
        self.view.dismiss_prompt();
        self.view.show_screen(self.quiz.phase().screen());
        self.view.render_result(card.score, card.total);
    }

    /// Prompt for validation failures. Boundary errors match controls the
    /// view does not offer, so they are dropped.
    fn reject(&mut self, err: QuizError) {
        debug!(%err, "transition rejected");
        if err.is_validation() {
            self.view.prompt_user(err.prompt());
        }
    }

    fn render_current(&mut self) {
        let index = self.quiz.current_index();
        let total = self.quiz.total();
        self.view.render_question(
            self.quiz.current_question(),
            self.quiz.current_answer(),
            index,
            total,
        );
    }
}
