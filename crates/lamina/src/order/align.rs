//! Realignment of alternating entity / interaction layers.
//!
//! Sequence-style diagrams alternate participant ("entity") ranks with ranks of materialized
//! messages ("interaction" nodes, which carry an `edge_obj`). After the DFS, entity ranks are
//! put back in the order an earlier pass gave them, and each interaction rank is regrouped so
//! messages sit next to the participant they hang off.

use super::{Layering, OrderGraph, OrderNodeLabel};
use crate::options::MissingOrder;
use rustc_hash::FxHashMap as HashMap;

/// Which end of an interaction node's edge is matched against the reference layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// `edge_obj.v`
    Source,
    /// `edge_obj.w`
    Target,
}

/// Reference layer and matched edge end for the odd layer at `index`.
///
/// Below the midpoint (`index <= mid`) a message follows its source participant in the previous
/// layer; past the midpoint it follows its target participant in the next layer.
pub fn reference_for(index: usize, mid: usize) -> (usize, EdgeEnd) {
    debug_assert!(index % 2 == 1, "only interaction layers have a reference layer");
    if index > mid {
        (index + 1, EdgeEnd::Target)
    } else {
        (index - 1, EdgeEnd::Source)
    }
}

/// Re-sorts even layers by their pre-existing `order` and regroups odd layers around them.
///
/// Layer membership never changes. With fewer than two layers the input is returned as-is.
pub fn align_alternating_layers<G>(g: &G, layers: Layering, missing_order: MissingOrder) -> Layering
where
    G: OrderGraph + ?Sized,
{
    let mid = layers.len() / 2;
    if mid == 0 {
        return layers;
    }

    let sorted: Layering = layers
        .into_iter()
        .enumerate()
        .map(|(i, mut layer)| {
            if i % 2 == 0 {
                layer.sort_by_key(|v| missing_order.sort_key(g.node(v).and_then(|n| n.order())));
            }
            layer
        })
        .collect();

    let mut out: Layering = Vec::with_capacity(sorted.len());
    for (i, layer) in sorted.iter().enumerate() {
        if i % 2 == 0 {
            out.push(layer.clone());
            continue;
        }
        let (ref_ix, end) = reference_for(i, mid);
        let reference = sorted.get(ref_ix).map(Vec::as_slice).unwrap_or_default();
        out.push(align_layer(g, layer, reference, end));
    }

    tracing::debug!(layers = out.len(), mid, "init_order: interaction layers aligned");
    out
}

/// Orders `layer` by the position of each node's matched endpoint in `reference`.
///
/// Nodes claimed by the same reference node keep their relative order. Nodes nobody claims
/// (no `edge_obj`, or an endpoint outside `reference`) follow, also in their prior order.
pub fn align_layer<G>(g: &G, layer: &[String], reference: &[String], end: EdgeEnd) -> Vec<String>
where
    G: OrderGraph + ?Sized,
{
    let mut by_endpoint: HashMap<&str, Vec<usize>> = HashMap::default();
    for (ix, v) in layer.iter().enumerate() {
        let endpoint = g.node(v).and_then(|n| match end {
            EdgeEnd::Source => n.edge_source(),
            EdgeEnd::Target => n.edge_target(),
        });
        if let Some(endpoint) = endpoint {
            by_endpoint.entry(endpoint).or_default().push(ix);
        }
    }

    let mut claimed = vec![false; layer.len()];
    let mut out: Vec<String> = Vec::with_capacity(layer.len());
    for r in reference {
        // `remove` so a repeated reference id cannot claim the same group twice.
        let Some(group) = by_endpoint.remove(r.as_str()) else {
            continue;
        };
        for ix in group {
            claimed[ix] = true;
            out.push(layer[ix].clone());
        }
    }

    for (ix, v) in layer.iter().enumerate() {
        if !claimed[ix] {
            tracing::trace!(node = %v, ?end, "init_order: interaction node left unmatched");
            out.push(v.clone());
        }
    }
    out
}
