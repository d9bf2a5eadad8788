use rand::{rngs::StdRng, Rng, SeedableRng};

/// Seeded when `seed` is given, entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Uniform integer in `min..=max`.
pub fn int_in<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

/// Uniform integer in `min..=max`, never equal to `except`.
pub fn int_in_except<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64, except: i64) -> i64 {
    debug_assert!(min < max, "range must hold a value other than `except`");
    loop {
        let n = rng.gen_range(min..=max);
        if n != except {
            return n;
        }
    }
}

/// Uniform pick from a non-empty slice.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}
