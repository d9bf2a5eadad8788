//! Problem generators, one module per [`ProblemKind`](crate::math_engine::models::ProblemKind).
//!
//! Every module exposes the same entry point:
//!
//! ```ignore
//! pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Problem
//! ```
//!
//! plus pure builder functions (`compose`, `rectangle_area`, ...) that take the
//! already-drawn numbers, so the arithmetic of each problem can be tested
//! without going through the RNG. The generator dispatches via `generator.rs`.

pub mod algebra;
pub mod arithmetic;
pub mod fraction;
pub mod geometry;
pub mod word;
