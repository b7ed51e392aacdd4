pub mod client;
pub mod rate_limit;

pub use client::{client_id, UNKNOWN_CLIENT};
pub use rate_limit::{spawn_cleanup_task, RateLimitResult, RateLimiter};
