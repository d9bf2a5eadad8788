use std::fmt;
use serde::{Deserialize, Serialize};

use crate::math_engine::{
    error::ConfigError,
    helpers::{answers_match, round_to},
};

// ---------------------------------------------------------------------------
// Difficulty tiers
// ---------------------------------------------------------------------------

/// Ordered Easy < Medium < Hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard   => write!(f, "Hard"),
        }
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// One tier up, capped at Hard.
    pub fn escalated(self) -> Difficulty {
        match self {
            Difficulty::Easy   => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard   => Difficulty::Hard,
        }
    }

    /// Seconds allowed for a single puzzle.
    pub fn puzzle_time_limit(self) -> u32 {
        match self {
            Difficulty::Easy   => 30,
            Difficulty::Medium => 25,
            Difficulty::Hard   => 20,
        }
    }

    /// Base points for a solved puzzle, before time bonus and attempt penalty.
    pub fn puzzle_base_points(self) -> u32 {
        match self {
            Difficulty::Easy   => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard   => 30,
        }
    }

    /// Seconds allowed for a whole quiz.
    pub fn quiz_time_limit(self) -> u32 {
        match self {
            Difficulty::Easy   => 300,
            Difficulty::Medium => 240,
            Difficulty::Hard   => 180,
        }
    }

    /// Points per correct quiz answer.
    pub fn quiz_points_per_correct(self) -> u32 {
        match self {
            Difficulty::Easy   => 5,
            Difficulty::Medium => 10,
            Difficulty::Hard   => 15,
        }
    }
}

// ---------------------------------------------------------------------------
// Problem kinds
// ---------------------------------------------------------------------------

/// Which generator a session draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProblemKind {
    Arithmetic,
    Algebra,
    Geometry,
    WordProblem,
    Fraction,
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProblemKind::Arithmetic  => "Arithmetic",
            ProblemKind::Algebra     => "Algebra",
            ProblemKind::Geometry    => "Geometry",
            ProblemKind::WordProblem => "Word Problems",
            ProblemKind::Fraction    => "Fractions",
        };
        write!(f, "{}", s)
    }
}

impl ProblemKind {
    pub const ALL: [ProblemKind; 5] = [
        ProblemKind::Arithmetic,
        ProblemKind::Algebra,
        ProblemKind::Geometry,
        ProblemKind::WordProblem,
        ProblemKind::Fraction,
    ];
}

// ---------------------------------------------------------------------------
// Problems and quiz questions
// ---------------------------------------------------------------------------

/// A generated statement and its correct numeric answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub statement: String,
    pub answer: f64,
}

impl Problem {
    pub fn new(statement: impl Into<String>, answer: f64) -> Self {
        Problem { statement: statement.into(), answer }
    }

    /// The answer as shown to the user (two decimals at most).
    pub fn display_answer(&self) -> f64 {
        round_to(self.answer, 2)
    }

    /// Tolerance check against the answer or its displayed form.
    pub fn accepts(&self, value: f64) -> bool {
        answers_match(value, self.answer) || answers_match(value, self.display_answer())
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.statement)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based position in the quiz.
    pub id: u32,
    pub problem: Problem,
    pub options: Vec<f64>,
    pub user_answer: Option<f64>,
    pub is_correct: Option<bool>,
}

impl Question {
    pub fn is_answered(&self) -> bool {
        self.user_answer.is_some()
    }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemRequest {
    pub kind: ProblemKind,
    pub difficulty: Difficulty,
    pub rng_seed: Option<u64>,
}

impl ProblemRequest {
    /// Easy difficulty, entropy seed.
    pub fn new(kind: ProblemKind) -> Self {
        ProblemRequest { kind, difficulty: Difficulty::Easy, rng_seed: None }
    }
}

/// Per-session settings. Deserializable so hosts can keep them in a JSON file.
///
/// Puzzle sessions read both fields. Quiz sessions read only `rng_seed` and
/// take their kind from `QuizSession::start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Fixed seed for reproducible sessions; entropy when `None`.
    pub rng_seed: Option<u64>,
    /// Generator the puzzle loop draws from. Quizzes pick theirs at `start`.
    pub kind: ProblemKind,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions { rng_seed: None, kind: ProblemKind::Arithmetic }
    }
}

impl SessionOptions {
    pub fn seeded(seed: u64) -> Self {
        SessionOptions { rng_seed: Some(seed), ..SessionOptions::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
