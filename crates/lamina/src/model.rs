//! Node label type consumed by the ordering passes.
//!
//! Lightweight and `Clone`-friendly so tests can build graphs with struct-update syntax.

use crate::graphlib::EdgeKey;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLabel {
    pub width: f64,
    pub height: f64,
    pub rank: Option<i32>,
    /// Position within the rank, as left by an earlier layout pass.
    pub order: Option<usize>,
    /// Materialized kind, e.g. `"edge"` for interaction nodes. Informational only.
    pub dummy: Option<String>,
    /// The edge an interaction node stands in for. `v` and `w` name entity nodes.
    pub edge_obj: Option<EdgeKey>,
}

impl NodeLabel {
    pub fn ranked(rank: i32) -> Self {
        Self {
            rank: Some(rank),
            ..Default::default()
        }
    }

    /// A participant node with a previously computed in-rank position.
    pub fn entity(rank: i32, order: usize) -> Self {
        Self {
            rank: Some(rank),
            order: Some(order),
            ..Default::default()
        }
    }

    /// A message node standing in for the edge `v -> w`.
    pub fn interaction(rank: i32, v: impl Into<String>, w: impl Into<String>) -> Self {
        Self {
            rank: Some(rank),
            dummy: Some("edge".to_string()),
            edge_obj: Some(EdgeKey::between(v, w)),
            ..Default::default()
        }
    }
}
