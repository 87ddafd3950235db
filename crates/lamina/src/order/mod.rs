//! Initial node ordering.
//!
//! A rank-respecting DFS seeds one sequence per rank; an optional second pass realigns
//! alternating entity / interaction ranks. The result is a starting point for crossing
//! minimization, not a crossing-minimal order.

mod types;
pub use types::{Layering, OrderGraph, OrderNodeLabel};

mod init_order;
pub use init_order::init_order;

mod align;
pub use align::{EdgeEnd, align_alternating_layers, align_layer, reference_for};
