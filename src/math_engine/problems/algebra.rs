use std::fmt;
use rand::Rng;
use crate::math_engine::{
    models::{Difficulty, Problem},
    random::{int_in, int_in_except},
};

/// `a·x + b = c·x + d` with integer coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearEquation {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
}

impl LinearEquation {
    pub fn lhs(&self, x: f64) -> f64 {
        self.a as f64 * x + self.b as f64
    }

    pub fn rhs(&self, x: f64) -> f64 {
        self.c as f64 * x + self.d as f64
    }

    /// The unique root, or `None` when the x terms cancel.
    pub fn solve(&self) -> Option<f64> {
        if self.a == self.c {
            return None;
        }
        Some((self.d - self.b) as f64 / (self.a - self.c) as f64)
    }
}

fn write_side(f: &mut fmt::Formatter<'_>, coeff: i64, constant: i64) -> fmt::Result {
    if coeff != 0 {
        if coeff == 1 {
            write!(f, "x")?;
        } else {
            write!(f, "{}x", coeff)?;
        }
        if constant > 0 {
            write!(f, " + {}", constant)?;
        } else if constant < 0 {
            write!(f, " - {}", -constant)?;
        }
        Ok(())
    } else {
        write!(f, "{}", constant)
    }
}

impl fmt::Display for LinearEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_side(f, self.a, self.b)?;
        write!(f, " = ")?;
        write_side(f, self.c, self.d)
    }
}

/// Equation whose root is `x`, shaped by tier.
pub fn equation_for(difficulty: Difficulty, x: i64, a: i64, b: i64, c: i64) -> LinearEquation {
    match difficulty {
        Difficulty::Easy   => LinearEquation { a, b: 0, c: 0, d: a * x },
        Difficulty::Medium => LinearEquation { a, b, c: 0, d: a * x + b },
        Difficulty::Hard   => LinearEquation { a, b, c, d: a * x + b - c * x },
    }
}

pub fn compose(equation: LinearEquation, x: i64) -> Problem {
    Problem::new(format!("Find x: {}", equation), x as f64)
}

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> (LinearEquation, Problem) {
    let x = int_in(rng, 1, 10);
    let a = int_in(rng, 1, 5);
    let (b, c) = match difficulty {
        Difficulty::Easy   => (0, 0),
        Difficulty::Medium => (int_in(rng, 1, 10), 0),
        // c == a would cancel x and leave an identity.
        Difficulty::Hard   => (int_in(rng, 1, 10), int_in_except(rng, 1, 5, a)),
    };
    let equation = equation_for(difficulty, x, a, b, c);
    (equation, compose(equation, x))
}
