//! Tunegraph core library.
//!
//! Maintains an undirected artist/song graph, counts its connected components
//! with a weighted union-find, and drives it from a small command language.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod adjacency;
mod builder;
mod catalogue;
mod command;
mod error;
mod graph;
mod neighbours;
mod registry;
#[cfg(test)]
mod test_utils;
mod union_find;

pub use crate::{
    builder::{DEFAULT_INITIAL_CAPACITY, GraphBuilder},
    catalogue::{Catalogue, Outcome},
    command::{Command, PrintTarget, SEPARATOR, parse_line, parse_script},
    error::{CommandParseError, CommandParseErrorCode, GraphError, GraphErrorCode, Result},
    graph::{ComponentSummary, Graph},
    neighbours::{Cursor, NeighbourList},
    registry::{EntityKind, NameRegistry},
};
