//! Crate-level tests for `math_drill_engine`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical problem, options and session; different seeds vary |
//! | Structural | Every kind × tier yields a non-empty statement and finite answer; options valid |
//! | End-to-end | Worked examples for arithmetic, geometry and a 7/10 quiz |
//! | Ledger | Both sessions credit one ledger; level tracks points |
//! | Driver | A `Ticker` drives a shared session through a timeout |
//! | Serialization | Snapshots and summaries serialize to JSON |

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::math_engine::{
    distractors::OPTION_COUNT,
    helpers::round_to,
    ledger::level_for,
    problems::{arithmetic, geometry},
    random::make_rng,
};
use crate::{
    generate_problem, generate_with, synthesize_options, AdvanceOutcome, Difficulty, ProblemKind,
    ProblemRequest, ProgressLedger, PuzzleOutcome, PuzzlePhase, PuzzleSession, QuizSession,
    SessionOptions, SubmitOutcome, Ticker,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn req(kind: ProblemKind, difficulty: Difficulty, seed: u64) -> ProblemRequest {
    ProblemRequest { kind, difficulty, rng_seed: Some(seed) }
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_problem() {
    for kind in ProblemKind::ALL {
        for difficulty in Difficulty::ALL {
            let a = generate_problem(req(kind, difficulty, 12345));
            let b = generate_problem(req(kind, difficulty, 12345));
            assert_eq!(a, b, "{kind} {difficulty} not reproducible");
        }
    }
}

#[test]
fn different_seeds_produce_varied_problems() {
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = generate_problem(req(ProblemKind::Arithmetic, Difficulty::Medium, seed));
        let b = generate_problem(req(ProblemKind::Arithmetic, Difficulty::Medium, seed + 500));
        if a.statement == b.statement {
            same_count += 1;
        }
    }
    assert!(
        same_count < pairs as usize / 4,
        "Too many identical problems across different seeds ({same_count}/{pairs})"
    );
}

#[test]
fn seeded_quizzes_are_reproducible() {
    let build = |seed| {
        let mut quiz = QuizSession::new(SessionOptions::seeded(seed));
        quiz.start(ProblemKind::WordProblem, Difficulty::Hard);
        quiz.questions().to_vec()
    };
    assert_eq!(build(31), build(31));
}

#[test]
fn entropy_request_produces_a_valid_problem() {
    let p = generate_problem(ProblemRequest::new(ProblemKind::Geometry));
    assert!(!p.statement.is_empty());
    assert!(p.answer.is_finite() && p.answer > 0.0);
}

// ── structural invariants ─────────────────────────────────────────────────────

#[test]
fn every_kind_and_tier_yields_a_usable_problem() {
    for kind in ProblemKind::ALL {
        for difficulty in Difficulty::ALL {
            for seed in SEEDS {
                let p = generate_problem(req(kind, difficulty, seed));
                assert!(!p.statement.is_empty(), "{kind} {difficulty} seed={seed}");
                assert!(p.answer.is_finite(), "{kind} {difficulty} seed={seed}");
                assert!(p.accepts(p.answer));
                assert!(p.accepts(p.display_answer()));
            }
        }
    }
}

#[test]
fn options_always_contain_the_rounded_answer() {
    let mut rng = make_rng(Some(2024));
    for kind in ProblemKind::ALL {
        for difficulty in Difficulty::ALL {
            for _ in 0..40 {
                let p = generate_with(&mut rng, kind, difficulty);
                let options = synthesize_options(&mut rng, p.answer, OPTION_COUNT);
                assert_eq!(options.len(), OPTION_COUNT);
                let hits = options.iter().filter(|&&o| o == round_to(p.answer, 2)).count();
                assert_eq!(hits, 1, "{kind} {difficulty}: {} -> {options:?}", p.statement);
                if p.answer > 0.0 {
                    assert!(options.iter().all(|&o| o > 0.0), "{options:?}");
                }
            }
        }
    }
}

// ── end-to-end examples ──────────────────────────────────────────────────────

#[test]
fn easy_arithmetic_four_plus_seven() {
    let p = arithmetic::compose(Difficulty::Easy, 4, arithmetic::Operator::Add, 7);
    assert_eq!(p.statement, "4 + 7");
    assert_eq!(p.answer, 11.0);
}

#[test]
fn easy_geometry_five_by_three() {
    assert_eq!(geometry::rectangle_area(5, 3).answer, 15.0);
}

#[test]
fn quiz_and_puzzle_share_one_ledger() {
    let mut ledger = ProgressLedger::new();

    let mut quiz = QuizSession::new(SessionOptions::seeded(5));
    quiz.start(ProblemKind::Arithmetic, Difficulty::Easy);
    let mut correct = 0;
    loop {
        let q = quiz.current_question().unwrap().clone();
        let pick = if correct < 7 {
            *q.options.iter().find(|&&o| q.problem.accepts(o)).unwrap()
        } else {
            *q.options.iter().find(|&&o| !q.problem.accepts(o)).unwrap()
        };
        if q.problem.accepts(pick) {
            correct += 1;
        }
        quiz.select_answer(pick).unwrap();
        if let AdvanceOutcome::Finished(summary) = quiz.advance(&mut ledger).unwrap() {
            assert_eq!(summary.earned_points, 35);
            break;
        }
    }
    assert_eq!(ledger.points(), 35);

    let mut puzzle = PuzzleSession::new(SessionOptions::seeded(6));
    puzzle.start(Difficulty::Hard);
    let answer = puzzle.problem().unwrap().answer.to_string();
    let outcome = puzzle.submit(&answer, &mut ledger).unwrap();
    // Hard, first try, full clock: 30 + 10.
    assert!(matches!(
        outcome,
        SubmitOutcome::Solved(PuzzleOutcome::Correct { points: 40, stars: 3, .. })
    ));

    assert_eq!(ledger.points(), 75);
    assert_eq!(ledger.level(), level_for(75));
    assert_eq!(ledger.quiz().correct_answers, 7);
    assert_eq!(ledger.puzzle().stars, 3);
}

// ── real-time driver ─────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn ticker_drives_a_shared_puzzle_to_timeout() {
    let session = Arc::new(Mutex::new(PuzzleSession::new(SessionOptions::seeded(8))));
    session.lock().unwrap().start(Difficulty::Hard);

    let driven = Arc::clone(&session);
    let ticker = Ticker::every_second(move || {
        let mut s = driven.lock().unwrap();
        s.tick();
        s.phase() == PuzzlePhase::Active
    });

    tokio::time::sleep(Duration::from_millis(20_500)).await;
    assert_eq!(
        session.lock().unwrap().phase(),
        PuzzlePhase::Review(PuzzleOutcome::TimedOut)
    );
    assert!(ticker.is_finished());
}

#[tokio::test(start_paused = true)]
async fn replacing_a_ticker_leaves_one_decrementing() {
    let session = Arc::new(Mutex::new(PuzzleSession::new(SessionOptions::seeded(9))));
    session.lock().unwrap().start(Difficulty::Easy);

    let spawn = |s: Arc<Mutex<PuzzleSession>>| {
        Ticker::every_second(move || {
            s.lock().unwrap().tick();
            true
        })
    };

    let first = spawn(Arc::clone(&session));
    tokio::time::sleep(Duration::from_millis(3_500)).await;
    drop(first);
    let second = spawn(Arc::clone(&session));
    tokio::time::sleep(Duration::from_millis(4_200)).await;

    // 3 ticks from the first ticker, 4 from its replacement.
    assert_eq!(session.lock().unwrap().time_left(), 30 - 7);
    second.cancel();
}

// ── serialization ────────────────────────────────────────────────────────────

#[test]
fn snapshots_serialize_to_json() {
    let mut puzzle = PuzzleSession::new(SessionOptions::seeded(10));
    puzzle.start(Difficulty::Medium);
    let json = serde_json::to_value(puzzle.snapshot()).unwrap();
    assert_eq!(json["difficulty"], "Medium");
    assert_eq!(json["time_left"], 25);
    assert_eq!(json["phase"], "Active");

    let mut quiz = QuizSession::new(SessionOptions::seeded(11));
    quiz.start(ProblemKind::Fraction, Difficulty::Hard);
    let json = serde_json::to_value(quiz.snapshot()).unwrap();
    assert_eq!(json["questions"].as_array().unwrap().len(), 10);
    assert_eq!(json["finished"], false);
}
