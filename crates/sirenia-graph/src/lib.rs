//! Layered graph arena used by `sirenia`.
//!
//! The graph holds exactly what same-layer ordering reads: layer membership, node kinds, model
//! order values, ordered port lists and the edges between ports. Everything is addressed by small
//! integer handles handed out at insertion time.

pub mod error;
mod graph;

pub use error::{Error, Result};
pub use graph::{
    Edge, EdgeId, EdgeLabel, LayeredGraph, Node, NodeId, NodeKind, NodeLabel, Port, PortId,
    PortLabel, PortSide, alg,
};
