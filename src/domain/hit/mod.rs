pub mod entity;
pub mod repository;
pub mod services;

pub use entity::{
    ClientAddress, HitCount, HitCountId, PopularityScope, PostViewCount, rank_by_popularity,
};
pub use repository::HitCountRepository;
pub use services::ViewTracker;
