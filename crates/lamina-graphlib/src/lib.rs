//! Graph container APIs used by `lamina`.
//!
//! Nodes and edges are enumerated in insertion order. Layering passes rely on that order to
//! stay deterministic, so nothing in this crate reorders storage behind the caller's back.

mod graph;

pub use graph::{EdgeKey, Graph, GraphOptions};
