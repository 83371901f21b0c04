//! Model-order configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Which signal wins when node model order and edge/port order disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderingStrategy {
    /// Connectivity to the previous layer decides, even between nodes that carry a model order.
    PreferEdges,
    /// Node model order decides; long-edge targets are compared by their node model order.
    PreferNodes,
    /// Node model order decides between nodes that both carry one; everything else is resolved
    /// structurally.
    #[default]
    Equal,
}

/// Where nodes without a connection to the previous layer go relative to long-edge dummies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LongEdgeOrderingStrategy {
    #[default]
    SortAbove,
    SortBelow,
    DontCare,
}

impl LongEdgeOrderingStrategy {
    /// Stand-in edge model order for a node without any incoming edge.
    pub fn sentinel(self) -> i32 {
        match self {
            Self::SortAbove => i32::MAX,
            Self::SortBelow => i32::MIN,
            Self::DontCare => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelOrderOptions {
    pub strategy: OrderingStrategy,
    pub long_edge_strategy: LongEdgeOrderingStrategy,
    /// Order ports by their own model order instead of deriving it from edges.
    pub port_model_order: bool,
}

impl ModelOrderOptions {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidOptions {
            message: e.to_string(),
        })
    }
}
