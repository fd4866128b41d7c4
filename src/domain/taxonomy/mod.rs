pub mod entity;
pub mod repository;
pub mod services;

pub use entity::{Category, CategoryId, NewCategory, NewTag, Tag, TagId, TaxonomyName};
pub use repository::{CategoryRepository, TagRepository};
pub use services::{CategorySlugRegistry, TagSlugRegistry};
