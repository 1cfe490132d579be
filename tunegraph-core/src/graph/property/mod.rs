//! Property-based tests for the connectivity graph.
//!
//! Verifies component recomputation against a breadth-first search oracle
//! and checks the structural invariants of the adjacency store and the
//! weighted union-find across several graph topologies, including graphs
//! that grow and lose nodes while being built.

mod equivalence;
mod oracle;
mod strategies;
mod structural;
mod types;
