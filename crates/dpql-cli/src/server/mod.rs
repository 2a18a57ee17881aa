//! HTTP API over a shared profiler.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
