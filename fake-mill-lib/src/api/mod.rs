//! HTTP surface: routing, query parsing, JSON rendering and the connection loop.

pub mod context;
pub mod cors;
pub mod handlers;
pub mod http_result;
pub mod query;
pub mod rate_limit;
mod response;
pub mod router;
pub mod server;

pub use context::AppContext;
pub use http_result::HttpError;
pub use response::RespBody;
pub use router::{handle, Route};
pub use server::{run, serve};
