//! Shared test utilities used across tunegraph crates.

pub mod ci;
pub mod tracing;
