use rand::Rng;

use crate::math_engine::{
    models::{Difficulty, Problem, ProblemKind, ProblemRequest},
    problems,
    random::make_rng,
};

/// Core dispatch: routes to the generator for `kind`.
pub fn generate_with<R: Rng>(rng: &mut R, kind: ProblemKind, difficulty: Difficulty) -> Problem {
    let problem = match kind {
        ProblemKind::Arithmetic  => problems::arithmetic::generate(rng, difficulty),
        ProblemKind::Algebra     => problems::algebra::generate(rng, difficulty).1,
        ProblemKind::Geometry    => problems::geometry::generate(rng, difficulty),
        ProblemKind::WordProblem => problems::word::generate(rng, difficulty),
        ProblemKind::Fraction    => problems::fraction::generate(rng, difficulty),
    };
    tracing::debug!(%kind, %difficulty, statement = %problem.statement, "generated problem");
    problem
}

/// One-shot generation; a seed reproduces the same problem.
pub fn generate_problem(request: ProblemRequest) -> Problem {
    let mut rng = make_rng(request.rng_seed);
    generate_with(&mut rng, request.kind, request.difficulty)
}
