// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};

#[derive(Clone)]
pub struct DummyClock;

impl quill_core::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// 本番と同じ正規化を行うスラッグ生成器
#[derive(Clone)]
pub struct DummySlug;

impl quill_core::application::ports::util::SlugGenerator for DummySlug {
    fn slugify(&self, s: &str) -> String {
        slug::slugify(s)
    }
}

/// 先頭から `amount` 個のインデックスを返す決定論的サンプラー
#[derive(Clone)]
pub struct FirstNSampler;

impl quill_core::application::ports::random::Sampler for FirstNSampler {
    fn sample(&self, population: usize, amount: usize) -> Vec<usize> {
        (0..population.min(amount)).collect()
    }
}
