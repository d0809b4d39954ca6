//! Streaming primitives for shell-first SSR.
//!
//! - `Shell` / `HeadContent` - The document frame every page is streamed into
//! - `StreamingSink` - Enforces that the shell goes out before any section

mod shell;
mod sink;

pub use shell::*;
pub use sink::*;
