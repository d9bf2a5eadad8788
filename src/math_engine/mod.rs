//! Core engine — problem generation, distractors, sessions, and progress.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: difficulty, problem kinds, problems, questions, options |
//! | `random`      | Seeded RNG construction and inclusive-range draws |
//! | `helpers`     | Rounding, tolerance comparison, number/clock formatting |
//! | `problems`    | Five generators (arithmetic, algebra, geometry, word, fraction) |
//! | `generator`   | Entry points `generate_problem()` / `generate_with()` — dispatch by kind |
//! | `distractors` | Multiple-choice option synthesis |
//! | `timer`       | Per-session countdowns and the tokio-driven `Ticker` |
//! | `puzzle`      | Single-puzzle timed-attempt session |
//! | `quiz`        | Ten-question timed quiz session |
//! | `ledger`      | Points, level, and per-mode statistics |
//! | `error`       | Validation and configuration errors |

pub mod distractors;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod ledger;
pub mod models;
pub mod problems;
pub mod puzzle;
pub mod quiz;
pub mod random;
pub mod timer;

pub use distractors::{synthesize_options, OPTION_COUNT};
pub use error::{ConfigError, SessionError};
pub use generator::{generate_problem, generate_with};
pub use ledger::{LedgerSnapshot, ProgressLedger, SharedLedger};
pub use models::{Difficulty, Problem, ProblemKind, ProblemRequest, Question, SessionOptions};
pub use puzzle::{
    PuzzleOutcome, PuzzlePhase, PuzzleSession, PuzzleSnapshot, PuzzleTick, SubmitOutcome,
};
pub use quiz::{AdvanceOutcome, QuizPhase, QuizSession, QuizSnapshot, QuizSummary, QuizTick};
pub use timer::Ticker;
