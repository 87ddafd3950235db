//! Graph configuration options.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    /// Keep named parallel edges apart. Without it, edge names are dropped.
    pub multigraph: bool,
    /// Allow parent/child (cluster) relationships between nodes.
    pub compound: bool,
}
