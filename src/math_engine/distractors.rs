//! Multiple-choice option synthesis.
//!
//! The correct answer (rounded to two decimals) is seeded into the option set,
//! then wrong answers are drawn at a random 10–50% deviation above or below it
//! until the set is full. Options are shuffled before they are returned.
//!
//! A correct answer of zero never deviates, and a negative one never yields a
//! positive candidate, so the random loop is capped at [`MAX_DRAWS`] and then
//! topped up with whole-number offsets around the answer.

use rand::Rng;

use crate::math_engine::{
    helpers::round_to,
    random::{coin_flip, int_in},
};

/// Options presented per quiz question.
pub const OPTION_COUNT: usize = 4;

/// Random draws attempted before falling back to fixed offsets.
pub const MAX_DRAWS: usize = 200;

/// Hundredths, so option identity is exact after rounding.
fn key(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

fn push_unique(options: &mut Vec<f64>, candidate: f64) -> bool {
    if options.iter().any(|&o| key(o) == key(candidate)) {
        return false;
    }
    options.push(candidate);
    true
}

/// Build `count` distinct options, one of which is `round(correct, 2)`.
pub fn synthesize_options<R: Rng>(rng: &mut R, correct: f64, count: usize) -> Vec<f64> {
    let seed = round_to(correct, 2);
    let mut options = Vec::with_capacity(count);
    if count == 0 {
        return options;
    }
    options.push(seed);

    // Positive answers only get positive distractors; non-positive answers
    // deviate by their magnitude and keep their sign.
    let positive = correct > 0.0;
    let mut draws = 0;
    while options.len() < count && draws < MAX_DRAWS {
        draws += 1;
        let pct = int_in(rng, 10, 50) as f64 / 100.0;
        let sign = if coin_flip(rng) { 1.0 } else { -1.0 };
        let candidate = round_to(correct + correct.abs() * pct * sign, 2);
        if positive && candidate <= 0.0 {
            continue;
        }
        push_unique(&mut options, candidate);
    }

    if options.len() < count {
        tracing::warn!(correct, draws, "distractor draws exhausted, using fixed offsets");
        let mut step = 1.0;
        while options.len() < count {
            for candidate in [seed + step, seed - step] {
                if options.len() < count && (!positive || candidate > 0.0) {
                    push_unique(&mut options, round_to(candidate, 2));
                }
            }
            step += 1.0;
        }
    }

    shuffle(rng, &mut options);
    options
}

/// Fisher-Yates shuffle.
fn shuffle<R: Rng, T>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
