/// Picks `amount` distinct indices out of `0..population`, or all of them when the
/// population is smaller.
pub trait Sampler: Send + Sync {
    fn sample(&self, population: usize, amount: usize) -> Vec<usize>;
}
