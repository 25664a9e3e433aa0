// Service exports
pub mod assistant;
pub mod cache;
pub mod roster;

pub use assistant::{AssistantClient, AssistantError};
pub use cache::{CacheError, CacheKey, CacheManager};
pub use roster::ProfileStore;
