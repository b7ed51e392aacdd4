#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod documents;
pub mod error;
pub mod generators;
pub mod reference;
pub mod security;
pub mod telemetry;

pub use api::{run, serve};
pub use config::{load_from_path, Config};
pub use error::{FakeMillError, Result};
pub use generators::Generator;
pub use security::{RateLimitResult, RateLimiter};
