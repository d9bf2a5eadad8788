//! Walkthrough of both session types.
//!
//! Run with: `cargo run --example session_demo`
//!
//! 1. **Problem samples** — one seeded problem per kind and difficulty, with
//!    its multiple-choice options.
//! 2. **Puzzle loop** — a miss, then a solve, then the review delay ticking
//!    into the next puzzle.
//! 3. **Quiz** — answers every question with the first option and prints the
//!    summary and the ledger afterwards.
//!
//! Engine tracing events are printed at DEBUG alongside the output.

use math_drill_engine::{
    generate_problem, generate_with, math_engine::helpers::{format_clock, format_number},
    math_engine::random::make_rng, synthesize_options, AdvanceOutcome, Difficulty,
    ProblemKind, ProblemRequest, ProgressLedger, PuzzleSession, PuzzleTick, QuizSession,
    SessionOptions, SubmitOutcome,
};

fn print_samples() {
    println!("══ Problem samples ══");
    let mut rng = make_rng(Some(1));
    for kind in ProblemKind::ALL {
        for difficulty in Difficulty::ALL {
            let p = generate_with(&mut rng, kind, difficulty);
            let options: Vec<String> = synthesize_options(&mut rng, p.answer, 4)
                .into_iter()
                .map(format_number)
                .collect();
            println!("  [{kind} / {difficulty}] {}", p.statement);
            println!("      answer {}  options [{}]", format_number(p.answer), options.join(", "));
        }
    }
    let p = generate_problem(ProblemRequest {
        kind: ProblemKind::Algebra,
        difficulty: Difficulty::Hard,
        rng_seed: Some(42),
    });
    println!("  Seeded one-shot: {} (x = {})", p.statement, format_number(p.answer));
    println!();
}

fn run_puzzle(ledger: &mut ProgressLedger) {
    println!("══ Puzzle loop ══");
    let mut session = PuzzleSession::new(SessionOptions::seeded(7));
    session.start(Difficulty::Easy);

    for round in 1..=3 {
        let Some(problem) = session.problem().cloned() else { break };
        println!("  Puzzle {round}: {}  ({}s)", problem.statement, session.time_left());

        if round == 2 {
            match session.submit("not a number", ledger) {
                Err(err) => println!("    rejected: {err}"),
                Ok(outcome) => println!("    unexpected: {outcome:?}"),
            }
            let wrong = format_number(problem.answer + 1.0);
            if let Ok(SubmitOutcome::Retry { attempts_left }) = session.submit(&wrong, ledger) {
                println!("    {wrong} is wrong, {attempts_left} attempts left");
            }
        }

        for _ in 0..4 {
            session.tick();
        }
        match session.submit(&format_number(problem.answer), ledger) {
            Ok(SubmitOutcome::Solved(outcome)) => println!("    solved: {outcome:?}"),
            other => println!("    {other:?}"),
        }
        while !matches!(session.tick(), PuzzleTick::NextPuzzle) {}
    }
    let snap = session.snapshot();
    println!(
        "  Session score {}  stars {}  level {}  difficulty {}",
        snap.score, snap.stars, snap.level, snap.difficulty
    );
    session.stop();
    println!();
}

fn run_quiz(ledger: &mut ProgressLedger) {
    println!("══ Quiz ══");
    let mut quiz = QuizSession::new(SessionOptions::seeded(11));
    quiz.start(ProblemKind::Fraction, Difficulty::Medium);
    println!("  Time limit {}", format_clock(quiz.time_left()));

    loop {
        let Some(q) = quiz.current_question().cloned() else { break };
        if quiz.select_answer(q.options[0]).is_err() {
            break;
        }
        match quiz.advance(ledger) {
            Ok(AdvanceOutcome::Next { was_correct, .. }) => {
                let mark = if was_correct { "✓" } else { "✗" };
                println!("  Q{} {} -> {}", q.id, q.problem.statement, mark);
            }
            Ok(AdvanceOutcome::Finished(summary)) => {
                println!("  Q{} {}", q.id, q.problem.statement);
                println!(
                    "  Finished: {}/{} ({}%), +{} points",
                    summary.score, summary.total, summary.percent, summary.earned_points
                );
                break;
            }
            Err(err) => {
                println!("  {err}");
                break;
            }
        }
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .without_time()
        .init();

    print_samples();

    let mut ledger = ProgressLedger::new();
    run_puzzle(&mut ledger);
    run_quiz(&mut ledger);

    let snap = ledger.snapshot();
    println!("══ Ledger ══");
    println!(
        "  {} points, level {} ({} to next)  puzzles {} / {} stars  quiz {}/{} ({}%)",
        snap.points,
        snap.level,
        snap.points_to_next_level,
        snap.puzzle.completed,
        snap.puzzle.stars,
        snap.quiz.correct_answers,
        snap.quiz.total_questions,
        snap.quiz_accuracy_percent,
    );
}
