//! Fixed-length timed multiple-choice quiz.
//!
//! `Setup -> Active(1..=10) -> Finished`. The whole quiz shares one countdown;
//! when it expires the quiz finishes with whatever answers were recorded.
//! Finishing credits the [`ProgressLedger`] exactly once.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::math_engine::{
    distractors::{synthesize_options, OPTION_COUNT},
    error::SessionError,
    generator::generate_with,
    helpers::percent,
    ledger::ProgressLedger,
    models::{Difficulty, ProblemKind, Question, SessionOptions},
    random::make_rng,
    timer::{Countdown, TickResult},
};

pub const QUIZ_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizPhase {
    Setup,
    Active,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub kind: ProblemKind,
    pub difficulty: Difficulty,
    pub score: u32,
    pub total: u32,
    pub percent: u32,
    pub earned_points: u32,
    pub timed_out: bool,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AdvanceOutcome {
    Next { was_correct: bool, index: usize },
    Finished(QuizSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuizTick {
    Idle,
    Counting { time_left: u32 },
    TimedOut(QuizSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSnapshot {
    pub phase: QuizPhase,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub selected: Option<f64>,
    pub time_left: u32,
    pub score: u32,
    pub finished: bool,
}

/// Generate `QUIZ_LENGTH` questions with shuffled options.
pub fn build_questions(
    rng: &mut StdRng,
    kind: ProblemKind,
    difficulty: Difficulty,
) -> Vec<Question> {
    (1..=QUIZ_LENGTH as u32)
        .map(|id| {
            let problem = generate_with(rng, kind, difficulty);
            let options = synthesize_options(rng, problem.answer, OPTION_COUNT);
            Question { id, problem, options, user_answer: None, is_correct: None }
        })
        .collect()
}

#[derive(Debug)]
pub struct QuizSession {
    rng: StdRng,
    kind: ProblemKind,
    difficulty: Difficulty,
    phase: QuizPhase,
    questions: Vec<Question>,
    current_index: usize,
    selected: Option<f64>,
    score: u32,
    clock: Countdown,
    summary: Option<QuizSummary>,
}

impl QuizSession {
    /// Only `options.rng_seed` is read; the kind is chosen at [`start`](Self::start).
    pub fn new(options: SessionOptions) -> Self {
        QuizSession {
            rng: make_rng(options.rng_seed),
            kind: ProblemKind::Arithmetic,
            difficulty: Difficulty::Easy,
            phase: QuizPhase::Setup,
            questions: Vec::new(),
            current_index: 0,
            selected: None,
            score: 0,
            clock: Countdown::default(),
            summary: None,
        }
    }

    /// Generate a fresh quiz and start its countdown.
    pub fn start(&mut self, kind: ProblemKind, difficulty: Difficulty) {
        self.clock.cancel();
        self.kind = kind;
        self.difficulty = difficulty;
        self.questions = build_questions(&mut self.rng, kind, difficulty);
        self.current_index = 0;
        self.selected = None;
        self.score = 0;
        self.summary = None;
        self.clock.start(difficulty.quiz_time_limit());
        self.phase = QuizPhase::Active;
        tracing::info!(%kind, %difficulty, "quiz started");
    }

    /// Same type and difficulty, new questions.
    pub fn retry(&mut self) {
        self.start(self.kind, self.difficulty);
    }

    /// Back to setup. Also the way to leave a running quiz.
    pub fn new_quiz(&mut self) {
        self.clock.cancel();
        self.questions.clear();
        self.current_index = 0;
        self.selected = None;
        self.score = 0;
        self.summary = None;
        self.phase = QuizPhase::Setup;
    }

    /// Stage a choice for the current question.
    pub fn select_answer(&mut self, value: f64) -> Result<(), SessionError> {
        if self.phase != QuizPhase::Active {
            return Err(SessionError::NotActive);
        }
        self.selected = Some(value);
        Ok(())
    }

    /// Record the staged choice and move on (or finish on the last question).
    pub fn advance(&mut self, ledger: &mut ProgressLedger) -> Result<AdvanceOutcome, SessionError> {
        if self.phase != QuizPhase::Active {
            return Err(SessionError::NotActive);
        }
        let choice = self.selected.ok_or(SessionError::NoAnswerSelected)?;
        let question = self
            .questions
            .get_mut(self.current_index)
            .ok_or(SessionError::NotActive)?;

        let correct = question.problem.accepts(choice);
        question.user_answer = Some(choice);
        question.is_correct = Some(correct);
        if correct {
            self.score += 1;
        }

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.selected = None;
            Ok(AdvanceOutcome::Next { was_correct: correct, index: self.current_index })
        } else {
            Ok(AdvanceOutcome::Finished(self.finish(ledger, false)))
        }
    }

    /// Advance one second; finishes the quiz when time runs out.
    pub fn tick(&mut self, ledger: &mut ProgressLedger) -> QuizTick {
        if self.phase != QuizPhase::Active {
            return QuizTick::Idle;
        }
        match self.clock.tick() {
            TickResult::Running(time_left) => QuizTick::Counting { time_left },
            TickResult::Expired => QuizTick::TimedOut(self.finish(ledger, true)),
            TickResult::Idle => QuizTick::Idle,
        }
    }

    fn finish(&mut self, ledger: &mut ProgressLedger, timed_out: bool) -> QuizSummary {
        self.clock.cancel();
        self.selected = None;
        self.phase = QuizPhase::Finished;

        let total = self.questions.len() as u32;
        let earned_points = self.score * self.difficulty.quiz_points_per_correct();
        ledger.add_points(earned_points);
        ledger.add_quiz_progress(1, self.score, total);

        tracing::info!(
            score = self.score,
            total,
            earned_points,
            timed_out,
            "quiz finished"
        );

        let summary = QuizSummary {
            kind: self.kind,
            difficulty: self.difficulty,
            score: self.score,
            total,
            percent: percent(self.score, total),
            earned_points,
            timed_out,
            questions: self.questions.clone(),
        };
        self.summary = Some(summary.clone());
        summary
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn kind(&self) -> ProblemKind {
        self.kind
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::Active => self.questions.get(self.current_index),
            _ => None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected(&self) -> Option<f64> {
        self.selected
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.clock.remaining()
    }

    /// Progress-bar fill for the current question, 0.0–1.0.
    pub fn progress_fraction(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current_index + 1) as f64 / self.questions.len() as f64
    }

    pub fn summary(&self) -> Option<&QuizSummary> {
        self.summary.as_ref()
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            phase: self.phase,
            questions: self.questions.clone(),
            current_index: self.current_index,
            selected: self.selected,
            time_left: self.clock.remaining(),
            score: self.score,
            finished: self.phase == QuizPhase::Finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(seed: u64, kind: ProblemKind, difficulty: Difficulty) -> QuizSession {
        let mut quiz = QuizSession::new(SessionOptions::seeded(seed));
        quiz.start(kind, difficulty);
        quiz
    }

    fn correct_option(q: &Question) -> f64 {
        *q.options.iter().find(|&&o| q.problem.accepts(o)).expect("correct option present")
    }

    fn wrong_option(q: &Question) -> f64 {
        *q.options.iter().find(|&&o| !q.problem.accepts(o)).expect("wrong option present")
    }

    fn statements(quiz: &QuizSession) -> Vec<String> {
        quiz.questions().iter().map(|q| q.problem.statement.clone()).collect()
    }

    #[test]
    fn start_builds_ten_questions_with_four_options() {
        for kind in ProblemKind::ALL {
            for difficulty in Difficulty::ALL {
                let quiz = started(3, kind, difficulty);
                assert_eq!(quiz.phase(), QuizPhase::Active);
                assert_eq!(quiz.questions().len(), QUIZ_LENGTH);
                assert_eq!(quiz.time_left(), difficulty.quiz_time_limit());
                for (i, q) in quiz.questions().iter().enumerate() {
                    assert_eq!(q.id as usize, i + 1);
                    assert_eq!(q.options.len(), OPTION_COUNT);
                    assert_eq!(q.user_answer, None);
                    assert!(
                        q.options.iter().any(|&o| q.problem.accepts(o)),
                        "{kind} {difficulty}: {q:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn configured_kind_is_ignored_until_start() {
        let opts = SessionOptions { rng_seed: Some(9), kind: ProblemKind::Geometry };
        let mut quiz = QuizSession::new(opts);
        assert_eq!(quiz.phase(), QuizPhase::Setup);
        assert_eq!(quiz.kind(), ProblemKind::Arithmetic);
        quiz.start(ProblemKind::Fraction, Difficulty::Easy);
        assert_eq!(quiz.kind(), ProblemKind::Fraction);
    }

    #[test]
    fn advance_without_selection_is_rejected() {
        let mut ledger = ProgressLedger::new();
        let mut quiz = started(1, ProblemKind::Arithmetic, Difficulty::Easy);
        assert_eq!(quiz.advance(&mut ledger), Err(SessionError::NoAnswerSelected));
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.questions()[0].user_answer, None);
    }

    #[test]
    fn seven_of_ten_easy_scores_thirty_five() {
        let mut ledger = ProgressLedger::new();
        let mut quiz = started(2, ProblemKind::Arithmetic, Difficulty::Easy);
        let mut last = None;
        for i in 0..QUIZ_LENGTH {
            let q = quiz.current_question().unwrap().clone();
            let pick = if i < 7 { correct_option(&q) } else { wrong_option(&q) };
            quiz.select_answer(pick).unwrap();
            last = Some(quiz.advance(&mut ledger).unwrap());
        }

        let summary = match last {
            Some(AdvanceOutcome::Finished(summary)) => summary,
            other => panic!("quiz should have finished, got {other:?}"),
        };
        assert_eq!(summary.score, 7);
        assert_eq!(summary.earned_points, 35);
        assert_eq!(summary.percent, 70);
        assert!(!summary.timed_out);
        assert_eq!(ledger.points(), 35);
        assert_eq!(ledger.quiz().completed, 1);
        assert_eq!(ledger.quiz().correct_answers, 7);
        assert_eq!(ledger.quiz().total_questions, 10);
        assert!(quiz.snapshot().finished);
        assert!(summary.questions.iter().all(|q| q.is_correct.is_some()));
    }

    #[test]
    fn medium_quiz_credits_ten_per_correct_answer() {
        let mut ledger = ProgressLedger::new();
        let mut quiz = started(8, ProblemKind::WordProblem, Difficulty::Medium);
        let mut last = None;
        for i in 0..QUIZ_LENGTH {
            let q = quiz.current_question().unwrap().clone();
            let pick = if i % 2 == 0 { correct_option(&q) } else { wrong_option(&q) };
            quiz.select_answer(pick).unwrap();
            last = Some(quiz.advance(&mut ledger).unwrap());
        }

        let summary = match last {
            Some(AdvanceOutcome::Finished(summary)) => summary,
            other => panic!("quiz should have finished, got {other:?}"),
        };
        assert_eq!(summary.score, 5);
        assert_eq!(summary.earned_points, summary.score * 10);
        assert_eq!(summary.earned_points, 50);
        assert_eq!(ledger.points(), 50);
        assert_eq!(ledger.quiz().correct_answers, 5);
    }

    #[test]
    fn staged_choice_clears_after_advance() {
        let mut ledger = ProgressLedger::new();
        let mut quiz = started(4, ProblemKind::Fraction, Difficulty::Medium);
        let q = quiz.current_question().unwrap().clone();
        quiz.select_answer(wrong_option(&q)).unwrap();
        quiz.select_answer(correct_option(&q)).unwrap();
        assert_eq!(
            quiz.advance(&mut ledger).unwrap(),
            AdvanceOutcome::Next { was_correct: true, index: 1 }
        );
        assert_eq!(quiz.selected(), None);
        assert_eq!(quiz.questions()[0].is_correct, Some(true));
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn timeout_finishes_with_recorded_answers() {
        let mut ledger = ProgressLedger::new();
        let mut quiz = started(5, ProblemKind::Algebra, Difficulty::Hard);
        for _ in 0..2 {
            let q = quiz.current_question().unwrap().clone();
            quiz.select_answer(correct_option(&q)).unwrap();
            quiz.advance(&mut ledger).unwrap();
        }
        for _ in 1..180 {
            assert!(matches!(quiz.tick(&mut ledger), QuizTick::Counting { .. }));
        }
        let summary = match quiz.tick(&mut ledger) {
            QuizTick::TimedOut(summary) => summary,
            other => panic!("expected timeout, got {other:?}"),
        };
        assert!(summary.timed_out);
        assert_eq!(summary.score, 2);
        assert_eq!(summary.earned_points, 30);
        assert_eq!(summary.questions.iter().filter(|q| q.user_answer.is_none()).count(), 8);
        assert_eq!(ledger.quiz().total_questions, 10);

        // Finished quizzes ignore ticks and answers, and credit only once.
        assert_eq!(quiz.tick(&mut ledger), QuizTick::Idle);
        assert_eq!(quiz.select_answer(1.0), Err(SessionError::NotActive));
        assert_eq!(ledger.points(), 30);
    }

    #[test]
    fn retry_regenerates_same_type_and_difficulty() {
        let mut ledger = ProgressLedger::new();
        let mut quiz = started(6, ProblemKind::Geometry, Difficulty::Medium);
        let first = statements(&quiz);
        for _ in 0..QUIZ_LENGTH {
            let q = quiz.current_question().unwrap().clone();
            quiz.select_answer(q.options[0]).unwrap();
            quiz.advance(&mut ledger).unwrap();
        }
        assert_eq!(quiz.phase(), QuizPhase::Finished);

        quiz.retry();
        assert_eq!(quiz.phase(), QuizPhase::Active);
        assert_eq!(quiz.kind(), ProblemKind::Geometry);
        assert_eq!(quiz.difficulty(), Difficulty::Medium);
        assert_eq!(quiz.time_left(), 240);
        assert_eq!(quiz.score(), 0);
        assert!(quiz.summary().is_none());
        let second = statements(&quiz);
        assert_ne!(first, second);
    }

    #[test]
    fn new_quiz_returns_to_setup_and_stops_clock() {
        let mut ledger = ProgressLedger::new();
        let mut quiz = started(7, ProblemKind::WordProblem, Difficulty::Easy);
        quiz.new_quiz();
        assert_eq!(quiz.phase(), QuizPhase::Setup);
        assert!(quiz.questions().is_empty());
        assert_eq!(quiz.tick(&mut ledger), QuizTick::Idle);
        assert_eq!(ledger, ProgressLedger::new());
    }

    #[test]
    fn progress_fraction_tracks_position() {
        let mut ledger = ProgressLedger::new();
        let mut quiz = started(8, ProblemKind::Arithmetic, Difficulty::Easy);
        assert_eq!(quiz.progress_fraction(), 0.1);
        let q = quiz.current_question().unwrap().clone();
        quiz.select_answer(q.options[0]).unwrap();
        quiz.advance(&mut ledger).unwrap();
        assert_eq!(quiz.progress_fraction(), 0.2);
    }
}
