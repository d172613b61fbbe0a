//! Bonus mini-game session rules.
//!
//! The game itself (question text, choices) comes from elsewhere; this
//! module owns the session rules: a fixed time window, points per correct
//! answer, and a claim step that hands the point total to the progress
//! engine. Points claimed here are merged additively into the learner's
//! bonus via the engine's `add_game_points`.

use chrono::{DateTime, Duration, Utc};

/// Points awarded per correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Session length in seconds.
pub const SESSION_SECONDS: i64 = 30;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Accepting answers
    Playing,
    /// Out of questions or out of time
    Ended,
}

/// Errors raised by session operations.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Claim attempted while the session is still running
    #[error("session is still in play")]
    StillPlaying,
}

/// One timed run of the bonus game.
#[derive(Debug, Clone)]
pub struct GameSession {
    score: u32,
    answered: usize,
    total_questions: usize,
    deadline: DateTime<Utc>,
    status: GameStatus,
}

impl GameSession {
    /// Start a session over a fixed number of questions.
    pub fn new(total_questions: usize, now: DateTime<Utc>) -> Self {
        Self {
            score: 0,
            answered: 0,
            total_questions,
            deadline: now + Duration::seconds(SESSION_SECONDS),
            status: if total_questions == 0 {
                GameStatus::Ended
            } else {
                GameStatus::Playing
            },
        }
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current lifecycle status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Seconds left on the clock, saturating at zero.
    pub fn seconds_left(&self, now: DateTime<Utc>) -> i64 {
        (self.deadline - now).num_seconds().max(0)
    }

    /// Record an answer at the given time. Correct answers score; the
    /// session ends after the last question. An answer arriving after the
    /// deadline ends the session without scoring, so a stalled clock can
    /// never stretch the window.
    pub fn record_answer(&mut self, correct: bool, now: DateTime<Utc>) {
        self.tick(now);
        if self.status != GameStatus::Playing {
            return;
        }
        if correct {
            self.score += POINTS_PER_CORRECT;
        }
        self.answered += 1;
        if self.answered >= self.total_questions {
            self.status = GameStatus::Ended;
        }
    }

    /// End the session if the clock has run out.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.status == GameStatus::Playing && now >= self.deadline {
            self.status = GameStatus::Ended;
        }
    }

    /// Consume the session and yield the points to merge into the course
    /// bonus. Only an ended session can be claimed.
    pub fn claim(self) -> Result<u32, GameError> {
        match self.status {
            GameStatus::Ended => Ok(self.score),
            GameStatus::Playing => Err(GameError::StillPlaying),
        }
    }
}
