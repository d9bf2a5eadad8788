//! Single-puzzle timed-attempt loop.
//!
//! ```text
//! Idle --start--> Active --submit/tick--> Review(Correct | FailedAttempts | TimedOut)
//!                   ^                          |
//!                   +-------- review delay ----+
//! ```
//!
//! Each puzzle has a per-difficulty countdown and three attempts. A correct
//! answer scores points and stars into the [`ProgressLedger`]; running out of
//! attempts or time reveals the answer and awards nothing. Either way the
//! session shows the outcome for a short delay and then loads a new puzzle.
//! The loop only ends when the host calls [`PuzzleSession::stop`].

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::math_engine::{
    error::SessionError,
    generator::generate_with,
    ledger::ProgressLedger,
    models::{Difficulty, Problem, ProblemKind, SessionOptions},
    random::make_rng,
    timer::{Countdown, TickResult},
};

pub const MAX_ATTEMPTS: u32 = 3;

/// Points per session level.
pub const SESSION_POINTS_PER_LEVEL: u32 = 50;

/// Seconds the outcome stays on screen before the next puzzle.
pub const CORRECT_REVIEW_SECS: u32 = 2;
pub const MISSED_REVIEW_SECS: u32 = 3;

/// Redraws allowed when the new puzzle repeats the last one.
const REPEAT_REDRAWS: usize = 10;

const MIN_POINTS: i64 = 5;

/// Points for a solved puzzle: base + half the remaining seconds, minus five
/// per extra attempt, never below five.
pub fn puzzle_points(difficulty: Difficulty, time_left: u32, attempts: u32) -> u32 {
    let raw = difficulty.puzzle_base_points() as i64 + (time_left / 2) as i64
        - 5 * (attempts as i64 - 1);
    raw.max(MIN_POINTS) as u32
}

pub fn puzzle_stars(attempts: u32) -> u32 {
    match attempts {
        1 => 3,
        2 => 2,
        _ => 1,
    }
}

pub fn session_level(score: u32) -> u32 {
    score / SESSION_POINTS_PER_LEVEL + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleOutcome {
    Correct {
        points: u32,
        stars: u32,
        /// New session level, when this answer crossed a threshold.
        level_up: Option<u32>,
        /// New difficulty, when the level-up escalated it.
        escalated_to: Option<Difficulty>,
    },
    FailedAttempts,
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzlePhase {
    Idle,
    Active,
    Review(PuzzleOutcome),
}

/// Result of a numeric submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    Retry { attempts_left: u32 },
    Solved(PuzzleOutcome),
    /// Out of attempts; carries the revealed answer.
    Exhausted { answer: f64 },
}

/// What a host-driven tick changed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PuzzleTick {
    Idle,
    Counting { time_left: u32 },
    /// Time ran out; carries the revealed answer.
    TimedOut { answer: f64 },
    Reviewing { resume_in: u32 },
    NextPuzzle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleAttempt {
    pub problem: Problem,
    pub user_answer_text: String,
    pub is_correct: Option<bool>,
    pub attempts: u32,
}

/// Everything a puzzle screen needs to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleSnapshot {
    pub phase: PuzzlePhase,
    pub problem: Option<Problem>,
    pub attempts: u32,
    pub time_left: u32,
    pub is_correct: Option<bool>,
    pub score: u32,
    pub stars: u32,
    pub level: u32,
    pub difficulty: Difficulty,
}

#[derive(Debug)]
pub struct PuzzleSession {
    rng: StdRng,
    kind: ProblemKind,
    difficulty: Difficulty,
    score: u32,
    stars: u32,
    level: u32,
    phase: PuzzlePhase,
    attempt: Option<PuzzleAttempt>,
    clock: Countdown,
    review: Countdown,
}

impl PuzzleSession {
    pub fn new(options: SessionOptions) -> Self {
        PuzzleSession {
            rng: make_rng(options.rng_seed),
            kind: options.kind,
            difficulty: Difficulty::Easy,
            score: 0,
            stars: 0,
            level: 1,
            phase: PuzzlePhase::Idle,
            attempt: None,
            clock: Countdown::default(),
            review: Countdown::default(),
        }
    }

    /// Reset session score and load the first puzzle at `difficulty`.
    pub fn start(&mut self, difficulty: Difficulty) {
        self.score = 0;
        self.stars = 0;
        self.level = 1;
        self.difficulty = difficulty;
        tracing::info!(kind = %self.kind, %difficulty, "puzzle session started");
        self.next_puzzle();
    }

    /// Leave the session. Cancels both timers.
    pub fn stop(&mut self) {
        self.clock.cancel();
        self.review.cancel();
        self.attempt = None;
        self.phase = PuzzlePhase::Idle;
    }

    fn next_puzzle(&mut self) {
        self.clock.cancel();
        self.review.cancel();

        let previous = self.attempt.take().map(|a| a.problem);
        let mut problem = generate_with(&mut self.rng, self.kind, self.difficulty);
        for _ in 0..REPEAT_REDRAWS {
            if previous.as_ref() != Some(&problem) {
                break;
            }
            problem = generate_with(&mut self.rng, self.kind, self.difficulty);
        }

        self.attempt = Some(PuzzleAttempt {
            problem,
            user_answer_text: String::new(),
            is_correct: None,
            attempts: 0,
        });
        self.clock.start(self.difficulty.puzzle_time_limit());
        self.phase = PuzzlePhase::Active;
    }

    fn enter_review(&mut self, outcome: PuzzleOutcome) {
        self.clock.cancel();
        let delay = match outcome {
            PuzzleOutcome::Correct { .. } => CORRECT_REVIEW_SECS,
            _ => MISSED_REVIEW_SECS,
        };
        self.review.start(delay);
        self.phase = PuzzlePhase::Review(outcome);
    }

    pub fn submit(
        &mut self,
        text: &str,
        ledger: &mut ProgressLedger,
    ) -> Result<SubmitOutcome, SessionError> {
        if self.phase != PuzzlePhase::Active {
            return Err(SessionError::NotActive);
        }
        let value = text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| SessionError::InvalidNumber(text.to_string()))?;

        let attempt = self.attempt.as_mut().ok_or(SessionError::NotActive)?;
        attempt.attempts += 1;
        attempt.user_answer_text = text.to_string();
        let correct = attempt.problem.accepts(value);
        attempt.is_correct = Some(correct);
        let attempts = attempt.attempts;
        let answer = attempt.problem.answer;

        if correct {
            let outcome = self.award(attempts, ledger);
            self.enter_review(outcome);
            Ok(SubmitOutcome::Solved(outcome))
        } else if attempts >= MAX_ATTEMPTS {
            tracing::debug!(answer, "puzzle attempts exhausted");
            self.enter_review(PuzzleOutcome::FailedAttempts);
            Ok(SubmitOutcome::Exhausted { answer })
        } else {
            Ok(SubmitOutcome::Retry { attempts_left: MAX_ATTEMPTS - attempts })
        }
    }

    fn award(&mut self, attempts: u32, ledger: &mut ProgressLedger) -> PuzzleOutcome {
        let points = puzzle_points(self.difficulty, self.clock.remaining(), attempts);
        let stars = puzzle_stars(attempts);

        self.score += points;
        self.stars += stars;
        ledger.add_points(points);
        ledger.add_puzzle_progress(1, stars);

        let new_level = session_level(self.score);
        let mut level_up = None;
        let mut escalated_to = None;
        if new_level > self.level {
            self.level = new_level;
            level_up = Some(new_level);
            tracing::info!(level = new_level, score = self.score, "puzzle session level up");
            if new_level % 3 == 0 && self.difficulty != Difficulty::Hard {
                self.difficulty = self.difficulty.escalated();
                escalated_to = Some(self.difficulty);
                tracing::info!(difficulty = %self.difficulty, "puzzle difficulty escalated");
            }
        }

        PuzzleOutcome::Correct { points, stars, level_up, escalated_to }
    }

    /// Advance one second.
    pub fn tick(&mut self) -> PuzzleTick {
        match self.phase {
            PuzzlePhase::Idle => PuzzleTick::Idle,
            PuzzlePhase::Active => match self.clock.tick() {
                TickResult::Expired => {
                    let answer = self.attempt.as_ref().map_or(0.0, |a| a.problem.answer);
                    if let Some(attempt) = self.attempt.as_mut() {
                        attempt.is_correct = Some(false);
                    }
                    tracing::debug!(answer, "puzzle timed out");
                    self.enter_review(PuzzleOutcome::TimedOut);
                    PuzzleTick::TimedOut { answer }
                }
                TickResult::Running(time_left) => PuzzleTick::Counting { time_left },
                TickResult::Idle => PuzzleTick::Idle,
            },
            PuzzlePhase::Review(_) => match self.review.tick() {
                TickResult::Running(resume_in) => PuzzleTick::Reviewing { resume_in },
                TickResult::Expired | TickResult::Idle => {
                    self.next_puzzle();
                    PuzzleTick::NextPuzzle
                }
            },
        }
    }

    /// Skip the remaining review delay.
    pub fn skip_review(&mut self) -> bool {
        if matches!(self.phase, PuzzlePhase::Review(_)) {
            self.next_puzzle();
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> PuzzlePhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn problem(&self) -> Option<&Problem> {
        self.attempt.as_ref().map(|a| &a.problem)
    }

    pub fn attempt(&self) -> Option<&PuzzleAttempt> {
        self.attempt.as_ref()
    }

    pub fn attempts_left(&self) -> u32 {
        MAX_ATTEMPTS - self.attempt.as_ref().map_or(0, |a| a.attempts)
    }

    pub fn time_left(&self) -> u32 {
        self.clock.remaining()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn stars(&self) -> u32 {
        self.stars
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn snapshot(&self) -> PuzzleSnapshot {
        PuzzleSnapshot {
            phase: self.phase,
            problem: self.problem().cloned(),
            attempts: self.attempt.as_ref().map_or(0, |a| a.attempts),
            time_left: self.clock.remaining(),
            is_correct: self.attempt.as_ref().and_then(|a| a.is_correct),
            score: self.score,
            stars: self.stars,
            level: self.level,
            difficulty: self.difficulty,
        }
    }
}
