use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Listing pages hold this many entries.
pub const PAGE_SIZE: u32 = 8;

/// Resolved position inside a paginated result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub number: u64,
    pub num_pages: u64,
    pub per_page: u32,
}

impl PageWindow {
    /// A missing or non-numeric page yields the first page; a number outside
    /// `1..=num_pages` yields the last page. An empty result still has one page.
    pub fn resolve(requested: Option<&str>, total: u64, per_page: u32) -> Self {
        let per_page = per_page.max(1);
        let num_pages = total.div_ceil(u64::from(per_page)).max(1);

        let number = match requested.map(str::trim) {
            Some(raw) if is_integer_literal(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|n| (1..=num_pages).contains(n))
                .unwrap_or(num_pages),
            _ => 1,
        };

        Self {
            number,
            num_pages,
            per_page,
        }
    }

    pub fn limit(&self) -> u32 {
        self.per_page
    }

    pub fn offset(&self) -> u64 {
        (self.number - 1) * u64::from(self.per_page)
    }
}

/// Optionally signed run of ASCII digits, of any magnitude.
fn is_integer_literal(raw: &str) -> bool {
    let digits = raw
        .strip_prefix('-')
        .or_else(|| raw.strip_prefix('+'))
        .unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u64,
    pub num_pages: u64,
    pub total: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, window: PageWindow, total: u64) -> Self {
        Self {
            items,
            number: window.number,
            num_pages: window.num_pages,
            total,
            has_previous: window.number > 1,
            has_next: window.number < window.num_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            num_pages: self.num_pages,
            total: self.total,
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }
}
