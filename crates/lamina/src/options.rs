//! Options for [`compute_initial_order_with`](crate::compute_initial_order_with).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Where entity nodes without an `order` land when an entity layer is re-sorted.
///
/// The sort is stable, so nodes sharing a key keep their DFS order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingOrder {
    /// After every node that has an order.
    #[default]
    Last,
    /// Before every node that has an order.
    First,
    /// As if the node carried this order.
    Value(usize),
}

impl MissingOrder {
    pub(crate) fn sort_key(self, order: Option<usize>) -> (u8, usize) {
        match (self, order) {
            (MissingOrder::Value(default), order) => (0, order.unwrap_or(default)),
            (MissingOrder::Last, Some(o)) => (0, o),
            (MissingOrder::Last, None) => (1, 0),
            (MissingOrder::First, None) => (0, 0),
            (MissingOrder::First, Some(o)) => (1, o),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitOrderOptions {
    /// Run the entity/interaction alignment pass after the DFS.
    pub align_alternating_layers: bool,
    pub missing_order: MissingOrder,
}

impl Default for InitOrderOptions {
    fn default() -> Self {
        Self {
            align_alternating_layers: true,
            missing_order: MissingOrder::default(),
        }
    }
}

impl InitOrderOptions {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidOptions {
            message: e.to_string(),
        })
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::InvalidOptions {
            message: e.to_string(),
        })
    }
}
