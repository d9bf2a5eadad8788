//! Accumulated user progress: points, level, per-mode statistics.
//!
//! Only sessions mutate the ledger, and only from their terminal transitions.
//! Every update adds; nothing here can lower points, counts or level.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::math_engine::helpers::percent;

/// Points needed per ledger level.
pub const POINTS_PER_LEVEL: u32 = 100;

/// Ledger shared between sessions on a multi-threaded host.
pub type SharedLedger = Arc<Mutex<ProgressLedger>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleProgress {
    pub completed: u32,
    pub stars: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizProgress {
    pub completed: u32,
    pub correct_answers: u32,
    pub total_questions: u32,
}

/// Level is stored for readers of the serialized form but always recomputed
/// from `points` on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LedgerRecord")]
pub struct ProgressLedger {
    points: u32,
    level: u32,
    puzzle: PuzzleProgress,
    quiz: QuizProgress,
}

#[derive(Deserialize)]
struct LedgerRecord {
    #[serde(default)]
    points: u32,
    #[serde(default)]
    puzzle: PuzzleProgress,
    #[serde(default)]
    quiz: QuizProgress,
}

impl From<LedgerRecord> for ProgressLedger {
    fn from(record: LedgerRecord) -> Self {
        ProgressLedger {
            points: record.points,
            level: level_for(record.points),
            puzzle: record.puzzle,
            quiz: record.quiz,
        }
    }
}

impl Default for ProgressLedger {
    fn default() -> Self {
        ProgressLedger::new()
    }
}

/// Level for a point total.
pub fn level_for(points: u32) -> u32 {
    points / POINTS_PER_LEVEL + 1
}

impl ProgressLedger {
    pub fn new() -> Self {
        ProgressLedger {
            points: 0,
            level: 1,
            puzzle: PuzzleProgress::default(),
            quiz: QuizProgress::default(),
        }
    }

    pub fn shared(self) -> SharedLedger {
        Arc::new(Mutex::new(self))
    }

    pub fn add_points(&mut self, delta: u32) {
        let before = self.level;
        self.points = self.points.saturating_add(delta);
        self.level = level_for(self.points);
        if self.level > before {
            tracing::info!(points = self.points, level = self.level, "ledger level up");
        }
    }

    pub fn add_puzzle_progress(&mut self, completed: u32, stars: u32) {
        self.puzzle.completed = self.puzzle.completed.saturating_add(completed);
        self.puzzle.stars = self.puzzle.stars.saturating_add(stars);
    }

    pub fn add_quiz_progress(&mut self, completed: u32, correct: u32, total: u32) {
        self.quiz.completed = self.quiz.completed.saturating_add(completed);
        self.quiz.correct_answers = self.quiz.correct_answers.saturating_add(correct);
        self.quiz.total_questions = self.quiz.total_questions.saturating_add(total);
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn puzzle(&self) -> PuzzleProgress {
        self.puzzle
    }

    pub fn quiz(&self) -> QuizProgress {
        self.quiz
    }

    pub fn points_to_next_level(&self) -> u32 {
        level_for(self.points)
            .saturating_mul(POINTS_PER_LEVEL)
            .saturating_sub(self.points)
    }

    /// Progress through the current level, 0–99.
    pub fn level_progress_percent(&self) -> u32 {
        self.points % POINTS_PER_LEVEL
    }

    /// Stars earned as a share of the three available per puzzle.
    pub fn puzzle_accuracy_percent(&self) -> u32 {
        percent(self.puzzle.stars, self.puzzle.completed.saturating_mul(3))
    }

    pub fn quiz_accuracy_percent(&self) -> u32 {
        percent(self.quiz.correct_answers, self.quiz.total_questions)
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            points: self.points,
            level: self.level,
            puzzle: self.puzzle,
            quiz: self.quiz,
            points_to_next_level: self.points_to_next_level(),
            puzzle_accuracy_percent: self.puzzle_accuracy_percent(),
            quiz_accuracy_percent: self.quiz_accuracy_percent(),
        }
    }
}

/// Read view for profile and leaderboard displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub points: u32,
    pub level: u32,
    pub puzzle: PuzzleProgress,
    pub quiz: QuizProgress,
    pub points_to_next_level: u32,
    pub puzzle_accuracy_percent: u32,
    pub quiz_accuracy_percent: u32,
}
