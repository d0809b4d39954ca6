//! Observability for the SniperTrader site workloads.
//!
//! - `StructuredLogger` - JSON log lines carrying the request id
//! - `LogBuilder` - Fluent per-entry fields

mod logging;

pub use logging::*;

pub use sniper_core::RequestId;
