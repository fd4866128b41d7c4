use crate::application::ports::random::Sampler;
use rand::seq::index;

/// Uniform sampling without replacement backed by the thread-local RNG.
#[derive(Default, Clone)]
pub struct RandSampler;

impl Sampler for RandSampler {
    fn sample(&self, population: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(population);
        if amount == 0 {
            return Vec::new();
        }
        index::sample(&mut rand::thread_rng(), population, amount).into_vec()
    }
}
