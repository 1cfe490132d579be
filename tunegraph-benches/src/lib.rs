//! Benchmark support crate for tunegraph.
//!
//! Generates seeded synthetic catalogues and groups the parameters used by the
//! Criterion benchmarks for component recomputation and capacity growth.

pub mod catalogue;
pub mod error;
pub mod params;
