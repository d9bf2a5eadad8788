//! # math_drill_engine
//!
//! Procedurally generated math drills with timed sessions and progress tracking.
//!
//! The engine generates problems across five kinds (arithmetic, algebra,
//! geometry, word problems, fractions) at three difficulty tiers, builds
//! multiple-choice options around each answer, and runs two kinds of session:
//! a single-puzzle loop with three attempts per puzzle, and a ten-question
//! quiz against one shared clock. Both sessions credit a [`ProgressLedger`]
//! with points, levels, stars and quiz statistics.
//!
//! ## How it works
//!
//! 1. Pick a [`ProblemKind`] and [`Difficulty`]. Generators guarantee a valid
//!    numeric answer (exact division, consistent equations, rounded decimals).
//! 2. Sessions own their RNG and countdowns; the host calls `tick()` once per
//!    second (or lets a [`Ticker`] do it) and forwards user input.
//! 3. Terminal transitions credit the ledger passed in by the host. No other
//!    code path writes to it.
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces problems, options
//!   and whole sessions.
//! - **Tolerant checking**: answers compare within 0.001 of the exact answer
//!   or its two-decimal display form.
//! - **Serializable**: problems, snapshots, summaries and the ledger all
//!   derive serde traits for hosts that persist or transmit them.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_engine::{
//!     generate_problem, Difficulty, ProblemKind, ProblemRequest, ProgressLedger,
//!     QuizSession, SessionOptions,
//! };
//!
//! let problem = generate_problem(ProblemRequest {
//!     kind: ProblemKind::Algebra,
//!     difficulty: Difficulty::Medium,
//!     rng_seed: Some(42),
//! });
//! println!("{} -> {}", problem.statement, problem.answer);
//!
//! let mut ledger = ProgressLedger::new();
//! let mut quiz = QuizSession::new(SessionOptions::seeded(7));
//! quiz.start(ProblemKind::Fraction, Difficulty::Easy);
//! let first = quiz.current_question().unwrap().options[0];
//! quiz.select_answer(first).unwrap();
//! quiz.advance(&mut ledger).unwrap();
//! assert_eq!(quiz.current_index(), 1);
//! ```

pub mod math_engine;

// Convenience re-exports so callers can use `math_drill_engine::generate_problem`
// directly without reaching into `math_engine::`.
pub use math_engine::{
    generate_problem, generate_with, synthesize_options, AdvanceOutcome, ConfigError,
    Difficulty, LedgerSnapshot, Problem, ProblemKind, ProblemRequest, ProgressLedger,
    PuzzleOutcome, PuzzlePhase, PuzzleSession, PuzzleSnapshot, PuzzleTick, Question,
    QuizPhase, QuizSession, QuizSnapshot, QuizSummary, QuizTick, SessionError,
    SessionOptions, SharedLedger, SubmitOutcome, Ticker,
};

#[cfg(test)]
mod tests;
