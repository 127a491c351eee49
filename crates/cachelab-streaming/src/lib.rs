//! Streaming primitives for the rendering-strategy demos.
//!
//! - `Shell`/`HeadContent` - the immediately-flushable HTML frame
//! - `StreamingSink` - enforces the shell-first contract and records flush
//!   timing for on-page display
//! - `DelayedSection` - waits a configured delay, then reports a labeled,
//!   completion-timestamped record

mod delayed;
mod shell;
mod sink;

pub use delayed::*;
pub use shell::*;
pub use sink::*;
