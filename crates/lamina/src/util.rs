//! Layering helpers for callers that sit around the ordering core.

use crate::error::{Error, Result};
use crate::graphlib::Graph;
use crate::order::{Layering, OrderGraph, OrderNodeLabel};
use rustc_hash::FxHashMap as HashMap;

/// Writes each node's index within its layer back into its label.
///
/// The ordering entry points never touch the graph; this is the step a crossing-minimization
/// phase runs before it starts sweeping.
pub fn assign_order<N, E>(g: &mut Graph<N, E>, layering: &[Vec<String>])
where
    N: Default + OrderNodeLabel + 'static,
    E: Default,
{
    for layer in layering {
        for (i, v) in layer.iter().enumerate() {
            if let Some(node) = g.node_mut(v) {
                node.set_order(i);
            }
        }
    }
}

/// Rebuilds a layering from `rank` / `order` attributes already on the graph.
///
/// Nodes missing either attribute, or with a negative rank, are left out. Equal orders keep
/// native node order.
pub fn build_layer_matrix<G>(g: &G) -> Layering
where
    G: OrderGraph + ?Sized,
{
    let mut entries: Vec<(usize, usize, &str)> = Vec::new();
    for v in g.node_ids() {
        let Some(node) = g.node(v) else {
            continue;
        };
        let (Some(rank), Some(order)) = (node.rank(), node.order()) else {
            continue;
        };
        let Ok(rank) = usize::try_from(rank) else {
            continue;
        };
        entries.push((rank, order, v));
    }

    let Some(max_rank) = entries.iter().map(|&(rank, _, _)| rank).max() else {
        return Vec::new();
    };
    let mut layers: Vec<Vec<(usize, &str)>> = vec![Vec::new(); max_rank + 1];
    for (rank, order, v) in entries {
        layers[rank].push((order, v));
    }
    layers
        .into_iter()
        .map(|mut layer| {
            layer.sort_by_key(|&(order, _)| order);
            layer.into_iter().map(|(_, v)| v.to_string()).collect()
        })
        .collect()
}

/// Checks that `layering` holds every simple node exactly once, in the layer matching its rank.
pub fn check_layering<G>(g: &G, layering: &[Vec<String>]) -> Result<()>
where
    G: OrderGraph + ?Sized,
{
    let mut seen: HashMap<&str, usize> = HashMap::default();
    for (layer_ix, layer) in layering.iter().enumerate() {
        for v in layer {
            let Some(node) = g.node(v) else {
                return Err(Error::UnknownNode { node: v.clone() });
            };
            if g.is_compound(v) {
                return Err(Error::UnknownNode { node: v.clone() });
            }
            if seen.insert(v.as_str(), layer_ix).is_some() {
                return Err(Error::DuplicateNode { node: v.clone() });
            }
            let rank = node.rank().ok_or_else(|| Error::MissingRank { node: v.clone() })?;
            if usize::try_from(rank).ok() != Some(layer_ix) {
                return Err(Error::RankMismatch {
                    node: v.clone(),
                    rank,
                    layer: layer_ix,
                });
            }
        }
    }

    for v in g.node_ids() {
        if !g.is_compound(v) && !seen.contains_key(v) {
            return Err(Error::MissingNode {
                node: v.to_string(),
            });
        }
    }
    Ok(())
}
