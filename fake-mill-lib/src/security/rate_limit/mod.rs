//! Per-client rate limiting.
//!
//! The limiter keeps, for every client identifier, the instants at which its
//! requests were admitted and allows at most `limit` of them inside any
//! trailing `window`. Memory is bounded by a periodic sweep
//! ([`spawn_cleanup_task`]) that drops admissions older than twice the window
//! and forgets clients left with none.
//!
//! # Example Usage
//!
//! ```ignore
//! use fake_mill_lib::security::rate_limit::{RateLimiter, RateLimitResult};
//! use std::time::Duration;
//!
//! // 60 requests per client per minute
//! let limiter = RateLimiter::new(60, Duration::from_secs(60));
//!
//! match limiter.check("198.51.100.4") {
//!     RateLimitResult::Allowed { limit, remaining } => {
//!         println!("Request allowed. {}/{} remaining", remaining, limit);
//!     }
//!     RateLimitResult::Limited { reset_after, .. } => {
//!         println!("Rate limited. Try again in {:?}", reset_after);
//!     }
//! }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [rate_limit]
//! enabled = true
//! requests = 60
//! window_secs = 60
//! cleanup_interval_secs = 300
//! ```

mod cleanup;
mod clock;
mod limiter;

pub use cleanup::spawn_cleanup_task;
pub use clock::{Clock, ManualClock, SystemClock};
pub use limiter::{RateLimitResult, RateLimiter};
