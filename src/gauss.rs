//! Fast approximate Gaussian sampling.
//!
//! Each sample is the sum of four uniform draws from `[0, 0x7FFF)`, scaled
//! and shifted to roughly zero mean and unit variance (an Irwin–Hall
//! approximation). The output is bounded to about ±3.464 and has no real
//! Gaussian tail.

use crate::config::HelperConfig;
use crate::constants::{GAUSS_DRAWS, GAUSS_OFFSET, GAUSS_RANGE_END, GAUSS_SCALE};
use crate::random::{GRand, UniformSource};

/// Draw one approximately normal sample from `rng`.
pub fn rand_gauss<R: UniformSource + ?Sized>(rng: &mut R) -> f64 {
    let mut sum = 0.0;
    for _ in 0..GAUSS_DRAWS {
        sum += f64::from(rng.int_range(0, GAUSS_RANGE_END));
    }
    sum * GAUSS_SCALE - GAUSS_OFFSET
}

/// A Gaussian sampler that owns its uniform source.
#[derive(Debug, Clone)]
pub struct GaussianSampler<R> {
    source: R,
}

impl<R: UniformSource> GaussianSampler<R> {
    /// Wrap a uniform source.
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Draw one sample.
    pub fn sample(&mut self) -> f64 {
        rand_gauss(&mut self.source)
    }

    /// Fill `out` with consecutive samples.
    pub fn fill(&mut self, out: &mut [f64]) {
        for slot in out {
            *slot = self.sample();
        }
    }

    /// Give back the uniform source.
    pub fn into_inner(self) -> R {
        self.source
    }
}

impl GaussianSampler<GRand> {
    /// Build a sampler from the configured seed, or a random one when none is set.
    pub fn from_config(config: &HelperConfig) -> Self {
        let source = match config.gauss_seed {
            Some(seed) => {
                log::debug!("Seeding Gaussian sampler with {}", seed);
                GRand::with_seed(seed)
            }
            None => {
                log::debug!("Seeding Gaussian sampler from entropy");
                GRand::from_entropy()
            }
        };
        Self::new(source)
    }
}

impl<R: UniformSource> Iterator for GaussianSampler<R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of draws, cycling when exhausted.
    struct Scripted {
        values: Vec<i32>,
        pos: usize,
    }

    impl Scripted {
        fn new(values: &[i32]) -> Self {
            Self {
                values: values.to_vec(),
                pos: 0,
            }
        }
    }

    impl UniformSource for Scripted {
        fn int_range(&mut self, low: i32, high: i32) -> i32 {
            assert_eq!((low, high), (0, GAUSS_RANGE_END));
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            v
        }
    }

    #[test]
    fn test_draws_four_values() {
        let mut src = Scripted::new(&[1, 2, 3, 4, 5]);
        rand_gauss(&mut src);
        assert_eq!(src.pos, 4);
    }

    #[test]
    fn test_all_zero_draws_give_lower_bound() {
        let mut src = Scripted::new(&[0]);
        assert_eq!(rand_gauss(&mut src), -3.46410161514);
    }

    #[test]
    fn test_max_draws_give_upper_bound() {
        let mut src = Scripted::new(&[GAUSS_RANGE_END - 1]);
        assert_eq!(rand_gauss(&mut src), 3.4638901766996564);
    }

    #[test]
    fn test_midpoint_is_near_zero() {
        let mut src = Scripted::new(&[16383]);
        assert_eq!(rand_gauss(&mut src), -0.00010571922017188484);
    }

    #[test]
    fn test_seeded_grand_is_reproducible() {
        let mut rng = GRand::with_seed(42);
        assert_eq!(rand_gauss(&mut rng), 1.0666540496798782);
    }

    #[test]
    fn test_sampler_matches_free_function() {
        let mut sampler = GaussianSampler::new(GRand::with_seed(99));
        let mut rng = GRand::with_seed(99);
        for _ in 0..100 {
            assert_eq!(sampler.sample(), rand_gauss(&mut rng));
        }
    }

    #[test]
    fn test_from_config_uses_seed() {
        let config = HelperConfig::new().with_gauss_seed(42);
        let mut sampler = GaussianSampler::from_config(&config);
        assert_eq!(sampler.sample(), 1.0666540496798782);
    }

    #[test]
    fn test_fill_and_iterator_agree() {
        let mut filled = [0.0; 16];
        GaussianSampler::new(GRand::with_seed(5)).fill(&mut filled);
        let iterated: Vec<f64> = GaussianSampler::new(GRand::with_seed(5)).take(16).collect();
        assert_eq!(filled.to_vec(), iterated);
    }

    #[test]
    fn test_distribution_shape() {
        let samples: Vec<f64> = GaussianSampler::new(GRand::with_seed(2024))
            .take(100_000)
            .collect();

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        assert!(mean.abs() < 0.02, "mean {mean}");
        assert!((var - 1.0).abs() < 0.03, "variance {var}");
        assert!(samples.iter().all(|x| x.abs() < 3.4642));
    }

    #[test]
    fn test_into_inner_keeps_position() {
        let mut sampler = GaussianSampler::new(GRand::with_seed(42));
        sampler.sample();
        let mut rng = sampler.into_inner();
        assert_eq!(rng.int_range(0, GAUSS_RANGE_END), 27444);
    }

    #[test]
    fn test_fastrand_source() {
        let mut sampler = GaussianSampler::new(fastrand::Rng::with_seed(1));
        for _ in 0..1000 {
            assert!(sampler.sample().abs() < 3.4642);
        }
    }
}
