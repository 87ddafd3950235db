//! Traits the ordering passes are written against.
//!
//! Any graph that can enumerate nodes, look up labels, list children and list successors can be
//! ordered; `lamina_graphlib::Graph` is the stock implementation.

use crate::graphlib::Graph;

/// One node-id sequence per rank, indexed by rank.
pub type Layering = Vec<Vec<String>>;

pub trait OrderNodeLabel {
    fn rank(&self) -> Option<i32>;
    fn order(&self) -> Option<usize>;
    fn set_order(&mut self, order: usize);

    /// Tail (`v`) of the edge an interaction node stands in for.
    fn edge_source(&self) -> Option<&str> {
        None
    }

    /// Head (`w`) of the edge an interaction node stands in for.
    fn edge_target(&self) -> Option<&str> {
        None
    }
}

impl OrderNodeLabel for crate::NodeLabel {
    fn rank(&self) -> Option<i32> {
        self.rank
    }

    fn order(&self) -> Option<usize> {
        self.order
    }

    fn set_order(&mut self, order: usize) {
        self.order = Some(order);
    }

    fn edge_source(&self) -> Option<&str> {
        self.edge_obj.as_ref().map(|e| e.v.as_str())
    }

    fn edge_target(&self) -> Option<&str> {
        self.edge_obj.as_ref().map(|e| e.w.as_str())
    }
}

pub trait OrderGraph {
    type Label: OrderNodeLabel;

    /// All node ids, in the graph's native enumeration order.
    fn node_ids(&self) -> Vec<&str>;
    fn node(&self, id: &str) -> Option<&Self::Label>;
    fn children(&self, id: &str) -> Vec<&str>;
    fn successors(&self, id: &str) -> Vec<&str>;

    /// Compound (cluster) nodes have at least one child and are never layered here.
    fn is_compound(&self, id: &str) -> bool {
        !self.children(id).is_empty()
    }
}

impl<N, E> OrderGraph for Graph<N, E>
where
    N: Default + OrderNodeLabel + 'static,
    E: Default,
{
    type Label = N;

    fn node_ids(&self) -> Vec<&str> {
        self.nodes().collect()
    }

    fn node(&self, id: &str) -> Option<&N> {
        Graph::node(self, id)
    }

    fn children(&self, id: &str) -> Vec<&str> {
        Graph::children(self, id)
    }

    fn successors(&self, id: &str) -> Vec<&str> {
        Graph::successors(self, id)
    }

    fn is_compound(&self, id: &str) -> bool {
        self.has_children(id)
    }
}
