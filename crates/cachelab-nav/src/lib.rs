//! Client navigation model for the router-cache demo.
//!
//! The original subject of this demo is a client router's segment cache:
//! prefetch fills it ahead of navigation, navigation serves from it, refresh
//! discards it. This crate owns that contract explicitly:
//! - `NavigationLog` - append-only log of user-triggered actions
//! - `RouterSegmentCache` - prefetched page segments with per-kind TTLs
//! - `NavigationDemo` - the three actions wired together

mod demo;
mod log;
mod segment;

pub use demo::*;
pub use log::*;
pub use segment::*;
