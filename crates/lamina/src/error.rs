pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("node {node} has no rank")]
    MissingRank { node: String },

    #[error("node {node} has negative rank {rank}")]
    NegativeRank { node: String, rank: i32 },

    #[error("Invalid init-order options: {message}")]
    InvalidOptions { message: String },

    #[error("layering references unknown node {node}")]
    UnknownNode { node: String },

    #[error("node {node} appears more than once in the layering")]
    DuplicateNode { node: String },

    #[error("node {node} is missing from the layering")]
    MissingNode { node: String },

    #[error("node {node} with rank {rank} was placed in layer {layer}")]
    RankMismatch {
        node: String,
        rank: i32,
        layer: usize,
    },
}
