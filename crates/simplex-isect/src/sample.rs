//! Seeded random simplices and overlapping simplex pairs.
//!
//! Purpose
//! - Reproducible fixtures for property tests, benches and the CLI sampler.
//!   Not a triangulation of anything; just well-conditioned random simplices.
//!
//! Model
//! - Vertices are drawn uniformly from a cube of half-width `radius` around a
//!   center, redrawn until the simplex volume is at least `MIN_VOLUME_FRAC`
//!   of the cube-scaled reference `radius^N / N!`.
//! - `overlapping_pair` centers the second simplex at a small random offset
//!   from the first, so most draws have crossing boundaries.

use nalgebra::{DMatrix, DVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::special::volume;

/// Minimum accepted volume relative to `radius^N / N!`.
const MIN_VOLUME_FRAC: f64 = 0.05;
/// Redraw budget before accepting the last draw as is.
const MAX_REDRAWS: usize = 256;

/// Random simplex with vertices in `center ± radius` (per coordinate).
pub fn random_simplex<R: Rng>(rng: &mut R, center: &DVector<f64>, radius: f64) -> DMatrix<f64> {
    let n = center.len();
    let fact: f64 = (1..=n).map(|k| k as f64).product();
    let min_volume = MIN_VOLUME_FRAC * radius.powi(n as i32) / fact;
    let mut s = draw(rng, center, radius);
    for _ in 0..MAX_REDRAWS {
        if volume(&s) >= min_volume {
            break;
        }
        s = draw(rng, center, radius);
    }
    s
}

fn draw<R: Rng>(rng: &mut R, center: &DVector<f64>, radius: f64) -> DMatrix<f64> {
    let n = center.len();
    DMatrix::from_fn(n, n + 1, |r, _| center[r] + rng.gen_range(-radius..radius))
}

/// Replay token for a sampled pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairReplay {
    pub seed: u64,
    pub dim: usize,
}

/// Two unit-radius random simplices in R^dim whose centers differ by at most
/// `0.5` per coordinate. Deterministic in `(seed, dim)`.
pub fn overlapping_pair(replay: PairReplay) -> (DMatrix<f64>, DMatrix<f64>) {
    let mut rng = StdRng::seed_from_u64(replay.seed);
    let origin = DVector::zeros(replay.dim);
    let s1 = random_simplex(&mut rng, &origin, 1.0);
    let shift = DVector::from_fn(replay.dim, |_, _| rng.gen_range(-0.5..0.5));
    let s2 = random_simplex(&mut rng, &shift, 1.0);
    (s1, s2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_pair_is_deterministic() {
        let replay = PairReplay { seed: 11, dim: 3 };
        let (a1, a2) = overlapping_pair(replay);
        let (b1, b2) = overlapping_pair(replay);
        assert_eq!(a1, b1);
        assert_eq!(a2, b2);
        assert_eq!(a1.shape(), (3, 4));
    }

    #[test]
    fn random_simplex_is_not_flat() {
        let mut rng = StdRng::seed_from_u64(3);
        for dim in 1..=5 {
            let s = random_simplex(&mut rng, &DVector::zeros(dim), 1.0);
            assert!(volume(&s) > 0.0);
            assert!(s.iter().all(|x| x.abs() <= 1.0));
        }
    }
}
