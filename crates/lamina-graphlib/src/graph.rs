//! The core `Graph` container.
//!
//! Storage is append-only: node and edge indices never move, so adjacency lists are kept
//! eagerly on each node entry instead of being rebuilt from the edge list on every query.

mod edge_key;
mod entries;
mod options;

pub use edge_key::EdgeKey;
pub use options::GraphOptions;

use edge_key::EdgeKeyView;
use entries::{EdgeEntry, NodeEntry};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

pub struct Graph<N, E>
where
    N: Default + 'static,
    E: Default,
{
    options: GraphOptions,
    default_node_label: Box<dyn Fn() -> N + Send + Sync>,

    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<EdgeKey, usize>,

    parent: HashMap<String, String>,
    children: HashMap<String, Vec<String>>,
}

impl<N, E> Default for Graph<N, E>
where
    N: Default + 'static,
    E: Default,
{
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl<N, E> Graph<N, E>
where
    N: Default + 'static,
    E: Default,
{
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            default_node_label: Box::new(N::default),
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            parent: HashMap::default(),
            children: HashMap::default(),
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_multigraph(&self) -> bool {
        self.options.multigraph
    }

    pub fn is_compound(&self) -> bool {
        self.options.compound
    }

    /// Label factory used by [`Graph::ensure_node`] and by edges that introduce new endpoints.
    pub fn set_default_node_label<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn() -> N + Send + Sync + 'static,
    {
        self.default_node_label = Box::new(f);
        self
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Inserts `id` or replaces its label. A replaced node keeps its enumeration position.
    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(id.as_str()) {
            self.nodes[idx].label = label;
            return self;
        }
        self.insert_node(id, label);
        self
    }

    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        self.ensure_node_ix(id);
        self
    }

    fn ensure_node_ix(&mut self, id: String) -> usize {
        if let Some(&idx) = self.node_index.get(id.as_str()) {
            return idx;
        }
        let label = (self.default_node_label)();
        self.insert_node(id, label)
    }

    fn insert_node(&mut self, id: String, label: N) -> usize {
        let idx = self.nodes.len();
        self.node_index.insert(id.clone(), idx);
        self.nodes.push(NodeEntry::new(id, label));
        idx
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.nodes[idx].label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().map(|e| &e.key)
    }

    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self {
        self.set_edge_named(v, w, None::<String>, None)
    }

    pub fn set_edge_with_label(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> &mut Self {
        self.set_edge_named(v, w, None::<String>, Some(label))
    }

    /// Inserts an edge, creating missing endpoints with the default node label.
    ///
    /// Re-setting an existing edge only replaces its label (when one is given).
    pub fn set_edge_named(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
        label: Option<E>,
    ) -> &mut Self {
        let name = if self.options.multigraph {
            name.map(Into::into)
        } else {
            None
        };
        let key = EdgeKey {
            v: v.into(),
            w: w.into(),
            name,
        };

        if let Some(&idx) = self.edge_index.get(&key.view()) {
            if let Some(label) = label {
                self.edges[idx].label = label;
            }
            return self;
        }

        let v_ix = self.ensure_node_ix(key.v.clone());
        let w_ix = self.ensure_node_ix(key.w.clone());
        let idx = self.edges.len();
        self.nodes[v_ix].out_edges.push(idx);
        self.nodes[w_ix].in_edges.push(idx);
        self.edge_index.insert(key.clone(), idx);
        self.edges.push(EdgeEntry {
            key,
            v_ix,
            w_ix,
            label: label.unwrap_or_default(),
        });
        self
    }

    pub fn set_path(&mut self, nodes: &[&str]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.set_edge(pair[0], pair[1]);
        }
        self
    }

    fn edge_key_view<'a>(&self, v: &'a str, w: &'a str, name: Option<&'a str>) -> EdgeKeyView<'a> {
        let name = if self.options.multigraph { name } else { None };
        EdgeKeyView { v, w, name }
    }

    pub fn has_edge(&self, v: &str, w: &str, name: Option<&str>) -> bool {
        self.edge_index
            .contains_key(&self.edge_key_view(v, w, name))
    }

    pub fn edge(&self, v: &str, w: &str, name: Option<&str>) -> Option<&E> {
        self.edge_index
            .get(&self.edge_key_view(v, w, name))
            .map(|&idx| &self.edges[idx].label)
    }

    pub fn edge_mut(&mut self, v: &str, w: &str, name: Option<&str>) -> Option<&mut E> {
        let idx = self
            .edge_index
            .get(&self.edge_key_view(v, w, name))
            .copied()?;
        Some(&mut self.edges[idx].label)
    }

    /// Heads of the out-edges of `v`, each reported once, in edge insertion order.
    pub fn successors(&self, v: &str) -> Vec<&str> {
        let Some(&ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        let mut out: Vec<&str> = Vec::with_capacity(self.nodes[ix].out_edges.len());
        for &e in &self.nodes[ix].out_edges {
            let w = self.nodes[self.edges[e].w_ix].id.as_str();
            // Parallel edges only exist in multigraphs.
            if !self.options.multigraph || !out.contains(&w) {
                out.push(w);
            }
        }
        out
    }

    /// Tails of the in-edges of `v`, each reported once, in edge insertion order.
    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        let Some(&ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        let mut out: Vec<&str> = Vec::with_capacity(self.nodes[ix].in_edges.len());
        for &e in &self.nodes[ix].in_edges {
            let u = self.nodes[self.edges[e].v_ix].id.as_str();
            if !self.options.multigraph || !out.contains(&u) {
                out.push(u);
            }
        }
        out
    }

    pub fn out_edges(&self, v: &str) -> Vec<&EdgeKey> {
        let Some(&ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.nodes[ix]
            .out_edges
            .iter()
            .map(|&e| &self.edges[e].key)
            .collect()
    }

    pub fn in_edges(&self, v: &str) -> Vec<&EdgeKey> {
        let Some(&ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.nodes[ix]
            .in_edges
            .iter()
            .map(|&e| &self.edges[e].key)
            .collect()
    }

    /// Moves `child` under `parent`. Ignored unless the graph is compound.
    pub fn set_parent(&mut self, child: impl Into<String>, parent: impl Into<String>) -> &mut Self {
        if !self.options.compound {
            return self;
        }
        let child = child.into();
        let parent = parent.into();
        self.ensure_node_ix(child.clone());
        self.ensure_node_ix(parent.clone());
        if let Some(prev) = self.parent.insert(child.clone(), parent.clone()) {
            if let Some(ch) = self.children.get_mut(prev.as_str()) {
                ch.retain(|c| c != &child);
            }
        }
        let entry = self.children.entry(parent).or_default();
        if !entry.iter().any(|c| c == &child) {
            entry.push(child);
        }
        self
    }

    pub fn parent(&self, child: &str) -> Option<&str> {
        self.parent.get(child).map(|s| s.as_str())
    }

    pub fn children(&self, parent: &str) -> Vec<&str> {
        self.children
            .get(parent)
            .map(|v| v.iter().map(|s| s.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn has_children(&self, v: &str) -> bool {
        self.children.get(v).is_some_and(|ch| !ch.is_empty())
    }

    /// Nodes without a parent, in insertion order.
    pub fn children_root(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| !self.parent.contains_key(n.id.as_str()))
            .map(|n| n.id.as_str())
            .collect()
    }
}
