use std::f64::consts::PI;
use rand::Rng;
use crate::math_engine::{
    helpers::round_to,
    models::{Difficulty, Problem},
    random::int_in,
};

pub fn rectangle_area(width: i64, height: i64) -> Problem {
    Problem::new(
        format!("Find the area of a rectangle with width {width} and height {height}."),
        (width * height) as f64,
    )
}

pub fn circle_area(radius: i64) -> Problem {
    Problem::new(
        format!(
            "Find the area of a circle with radius {radius}. Round to the nearest whole number."
        ),
        (PI * (radius * radius) as f64).round(),
    )
}

/// Hypotenuse rounded to one decimal, or `None` if that is not a whole number.
pub fn whole_hypotenuse(a: i64, b: i64) -> Option<f64> {
    let c = round_to(((a * a + b * b) as f64).sqrt(), 1);
    (c.fract() == 0.0).then_some(c)
}

pub fn hypotenuse(a: i64, b: i64, c: f64) -> Problem {
    Problem::new(
        format!(
            "In a right triangle, if the legs have lengths {a} and {b}, \
             what is the length of the hypotenuse?"
        ),
        c,
    )
}

pub fn trapezoid_area(base1: i64, base2: i64, height: i64) -> Problem {
    Problem::new(
        format!(
            "Find the area of a trapezoid with bases {base1} and {base2}, and height {height}."
        ),
        (base1 + base2) as f64 / 2.0 * height as f64,
    )
}

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Problem {
    match difficulty {
        Difficulty::Easy => {
            let width = int_in(rng, 2, 10);
            let height = int_in(rng, 2, 10);
            rectangle_area(width, height)
        }
        Difficulty::Medium => circle_area(int_in(rng, 1, 10)),
        Difficulty::Hard => {
            let a = int_in(rng, 3, 12);
            let b = int_in(rng, 3, 12);
            match whole_hypotenuse(a, b) {
                Some(c) => hypotenuse(a, b, c),
                None => {
                    let base1 = int_in(rng, 5, 15);
                    let base2 = int_in(rng, 5, 15);
                    let height = int_in(rng, 3, 10);
                    tracing::debug!(a, b, "hypotenuse not whole, using trapezoid area");
                    trapezoid_area(base1, base2, height)
                }
            }
        }
    }
}
