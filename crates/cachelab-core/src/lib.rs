//! Core abstractions shared by the cachelab demo server.
//!
//! This crate provides the fundamental types:
//! - `RequestId` - Per-request identifier for tracing and display
//! - `TimingContext` - Shell/section flush timing for streamed pages
//! - `ServerConfig` - Bind address and base-URL configuration

mod config;
mod context;
mod timing;

pub use config::*;
pub use context::*;
pub use timing::*;
