//! Initial per-rank node ordering for layered graph layout.
//!
//! Given a graph whose nodes already carry ranks, [`compute_initial_order`] produces one ordered
//! sequence of node ids per rank. The result seeds crossing minimization; it does not minimize
//! crossings itself.

pub use lamina_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod model;
pub mod options;
pub mod order;
pub mod util;

pub use error::{Error, Result};
pub use model::NodeLabel;
pub use options::{InitOrderOptions, MissingOrder};
pub use order::{Layering, OrderGraph, OrderNodeLabel};

/// DFS layering followed by entity / interaction alignment, with default options.
pub fn compute_initial_order<G>(g: &G) -> Result<Layering>
where
    G: OrderGraph + ?Sized,
{
    compute_initial_order_with(g, &InitOrderOptions::default())
}

pub fn compute_initial_order_with<G>(g: &G, opts: &InitOrderOptions) -> Result<Layering>
where
    G: OrderGraph + ?Sized,
{
    let _span = tracing::debug_span!("init_order").entered();

    let layers = order::init_order(g)?;
    if !opts.align_alternating_layers {
        return Ok(layers);
    }
    Ok(order::align_alternating_layers(
        g,
        layers,
        opts.missing_order,
    ))
}
