//! Random number generation for path tracing.
//!
//! The kernel only needs "a uniform value in [0, 1)", so every sampling
//! routine takes `&mut dyn RngCore` and any `rand` generator can be plugged
//! in. [`XorShift32`] is the default: tiny state, fast, and cheap to seed
//! once per image row.

use std::f64::consts::PI;

use lumen_math::Vec3;
use rand::{Rng, RngCore, SeedableRng};

/// Seed used when none is configured (Marsaglia's example seed).
pub const DEFAULT_SEED: u64 = 2_463_534_242;

/// Marsaglia's 32-bit xorshift generator (shifts 13, 17, 5).
///
/// A zero state would stay zero forever, so zero seeds are replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { DEFAULT_SEED as u32 } else { seed };
        Self { state }
    }
}

impl RngCore for XorShift32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Derive the seed of one image row from the global seed.
///
/// Every row gets its own generator, so the result does not depend on which
/// thread renders which row.
#[inline]
pub fn row_seed(global_seed: u64, row: usize) -> u64 {
    global_seed ^ (row as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Uniform `f64` in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Uniform `f64` in [min, max).
#[inline]
pub fn gen_range_f64(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    min + (max - min) * gen_f64(rng)
}

/// Random unit vector, uniformly distributed on the unit sphere.
///
/// Samples an azimuth in [0, 2π) and a height in [-1, 1); by Archimedes'
/// hat-box theorem the result is uniform on the sphere.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    let a = gen_range_f64(rng, 0.0, 2.0 * PI);
    let z = gen_range_f64(rng, -1.0, 1.0);
    let r = (1.0 - z * z).sqrt();
    Vec3::new(r * a.cos(), r * a.sin(), z)
}

/// Sub-pixel jitter in [0, 1) x [0, 1).
#[inline]
pub fn sample_square(rng: &mut dyn RngCore) -> (f64, f64) {
    let jx = gen_f64(rng);
    let jy = gen_f64(rng);
    (jx, jy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    fn reference_xorshift(mut x: u32) -> u32 {
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        x
    }

    #[test]
    fn test_xorshift_known_value() {
        let mut rng = XorShift32::new(1);
        assert_eq!(rng.next_u32(), 270_369);
    }

    #[test]
    fn test_xorshift_matches_recurrence() {
        let mut rng = XorShift32::new(12345);
        let mut x = 12345;
        for _ in 0..1000 {
            x = reference_xorshift(x);
            assert_eq!(rng.next_u32(), x);
        }
    }

    #[test]
    fn test_zero_seed_is_replaced() {
        let mut rng = XorShift32::from_seed([0; 4]);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_gen_f64_in_unit_range() {
        let mut rng = XorShift32::seed_from_u64(DEFAULT_SEED);
        for _ in 0..10_000 {
            let x = gen_f64(&mut rng);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_random_unit_vector_is_unit() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = random_unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_random_unit_vector_is_centered() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 50_000;
        let mut sum = Vec3::ZERO;
        for _ in 0..n {
            sum += random_unit_vector(&mut rng);
        }
        let mean = sum / n as f64;
        assert!(mean.length() < 0.02, "mean {mean:?} should be near zero");
    }

    #[test]
    fn test_row_seeds_differ() {
        let seeds: Vec<u64> = (0..64).map(|row| row_seed(DEFAULT_SEED, row)).collect();
        for (i, a) in seeds.iter().enumerate() {
            for b in &seeds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
