//! Support library for the tunegraph CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and integration
//! tests can drive scripts without spawning a subprocess.

pub mod cli;
pub mod logging;
