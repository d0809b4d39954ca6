//! Core abstractions shared by the SniperTrader site workloads and tools.
//!
//! This crate provides the fundamental types:
//! - `RequestContext` - Typed request parameters
//! - `SiteRoute` / `Page` - The site's route table
//! - `RequestTiming` - Request lifecycle tracking
//! - `WorkloadError` - Errors raised while serving a request

mod context;
mod error;
mod lifecycle;
mod route;

pub use context::*;
pub use error::*;
pub use lifecycle::*;
pub use route::*;
