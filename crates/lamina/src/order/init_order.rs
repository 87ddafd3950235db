use super::{Layering, OrderGraph, OrderNodeLabel};
use crate::error::{Error, Result};
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

/// Builds the initial layering by a depth-first search that starts from the lowest ranks.
///
/// Every simple (childless) node is placed in `layers[rank]` the first time the search reaches
/// it, so nodes end up ordered by discovery time within their rank. Start nodes are taken in
/// ascending rank, ties in the graph's native node order; successors are followed in the
/// graph's native successor order regardless of their rank. This is the initial ordering from
/// Gansner et al., "A Technique for Drawing Directed Graphs".
///
/// Compound nodes are skipped, both as start nodes and when reached through an edge.
pub fn init_order<G>(g: &G) -> Result<Layering>
where
    G: OrderGraph + ?Sized,
{
    let mut simple_nodes: Vec<(&str, usize)> = Vec::new();
    for v in g.node_ids() {
        if g.is_compound(v) {
            continue;
        }
        let rank = g
            .node(v)
            .and_then(|n| n.rank())
            .ok_or_else(|| Error::MissingRank {
                node: v.to_string(),
            })?;
        let rank = usize::try_from(rank).map_err(|_| Error::NegativeRank {
            node: v.to_string(),
            rank,
        })?;
        simple_nodes.push((v, rank));
    }

    let Some(max_rank) = simple_nodes.iter().map(|&(_, rank)| rank).max() else {
        return Ok(Vec::new());
    };

    let rank_of: HashMap<&str, usize> = simple_nodes.iter().copied().collect();
    let mut layers: Layering = vec![Vec::new(); max_rank + 1];

    // `sort_by_key` is stable: equal ranks keep native node order.
    let mut ordered_vs = simple_nodes;
    ordered_vs.sort_by_key(|&(_, rank)| rank);

    let mut visited: HashSet<&str> = HashSet::default();
    let mut stack: Vec<&str> = Vec::new();
    for (start, _) in ordered_vs {
        if visited.contains(start) {
            continue;
        }
        // Successors are pushed in reverse so pops replay recursive preorder exactly.
        stack.push(start);
        while let Some(v) = stack.pop() {
            if !visited.insert(v) {
                continue;
            }
            let Some(&rank) = rank_of.get(v) else {
                continue;
            };
            layers[rank].push(v.to_string());
            stack.extend(g.successors(v).into_iter().rev());
        }
    }

    tracing::debug!(
        layers = layers.len(),
        visited = visited.len(),
        "init_order: dfs layering built"
    );
    Ok(layers)
}
