use std::fmt;
use rand::Rng;
use crate::math_engine::{
    models::{Difficulty, Problem},
    random::{int_in, pick},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Add      => write!(f, "+"),
            Operator::Subtract => write!(f, "-"),
            Operator::Multiply => write!(f, "×"),
            Operator::Divide   => write!(f, "÷"),
        }
    }
}

/// Inclusive operand range per tier.
pub fn operand_range(difficulty: Difficulty) -> (i64, i64) {
    match difficulty {
        Difficulty::Easy   => (1, 10),
        Difficulty::Medium => (5, 20),
        Difficulty::Hard   => (10, 50),
    }
}

pub fn operators(difficulty: Difficulty) -> &'static [Operator] {
    use Operator::*;
    match difficulty {
        Difficulty::Easy   => &[Add, Subtract],
        Difficulty::Medium => &[Add, Subtract, Multiply],
        Difficulty::Hard   => &[Add, Subtract, Multiply, Divide],
    }
}

/// Build the problem for fixed operands.
///
/// Easy subtraction swaps the operands so the answer is never negative.
/// Division expects `a` to already be a multiple of `b`.
pub fn compose(difficulty: Difficulty, a: i64, op: Operator, b: i64) -> Problem {
    let (a, b) = if op == Operator::Subtract && difficulty == Difficulty::Easy && a < b {
        (b, a)
    } else {
        (a, b)
    };
    let answer = match op {
        Operator::Add      => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide   => a / b,
    };
    Problem::new(format!("{} {} {}", a, op, b), answer as f64)
}

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Problem {
    let (lo, hi) = operand_range(difficulty);
    let a = int_in(rng, lo, hi);
    let b = int_in(rng, lo, hi);
    let op = *pick(rng, operators(difficulty));

    if op == Operator::Divide {
        // Quotient first, then the dividend from it.
        let quotient = int_in(rng, 1, 10);
        return compose(difficulty, b * quotient, op, b);
    }
    compose(difficulty, a, op, b)
}
