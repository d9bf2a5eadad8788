use rand::Rng;
use crate::math_engine::{
    helpers::round_to,
    models::{Difficulty, Problem},
    random::int_in,
};

pub fn to_decimal(numerator: i64, denominator: i64) -> Problem {
    Problem::new(
        format!(
            "Convert the fraction {numerator}/{denominator} to a decimal. \
             Round to 2 decimal places if needed."
        ),
        round_to(numerator as f64 / denominator as f64, 2),
    )
}

/// Same-denominator sum; the answer is left unrounded.
pub fn add_like(num1: i64, num2: i64, denominator: i64) -> Problem {
    Problem::new(
        format!("Add the fractions: {num1}/{denominator} + {num2}/{denominator} = ?"),
        (num1 + num2) as f64 / denominator as f64,
    )
}

pub fn sevenths_of(sevenths: i64, whole: i64) -> Problem {
    Problem::new(
        format!("What is {sevenths}/7 of {whole}?"),
        round_to(sevenths as f64 / 7.0 * whole as f64, 2),
    )
}

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Problem {
    match difficulty {
        Difficulty::Easy => {
            let numerator = int_in(rng, 1, 10);
            let denominator = int_in(rng, 2, 10);
            to_decimal(numerator, denominator)
        }
        Difficulty::Medium => {
            let num1 = int_in(rng, 1, 10);
            let denominator = int_in(rng, 2, 10);
            let num2 = int_in(rng, 1, 10);
            add_like(num1, num2, denominator)
        }
        Difficulty::Hard => {
            let sevenths = int_in(rng, 1, 5);
            let whole = int_in(rng, 10, 100);
            sevenths_of(sevenths, whole)
        }
    }
}
