//! # occupancy-observability
//!
//! Subscriber installation and span definitions. Library crates only emit
//! `tracing` events; binaries and test harnesses call [`init_tracing`] once.

pub mod tracing_setup;

pub use tracing_setup::spans::names;
pub use tracing_setup::{build_filter, init_tracing};
