use crate::{NodeId, PortId};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("layer {layer} does not exist (graph has {layer_count} layers)")]
    UnknownLayer { layer: usize, layer_count: usize },

    #[error("node id is already in use: {id}")]
    DuplicateNode { id: String },

    #[error("node handle {node:?} does not belong to this graph")]
    UnknownNode { node: NodeId },

    #[error("port handle {port:?} does not belong to this graph")]
    UnknownPort { port: PortId },

    #[error("new order for layer {layer} is not a permutation of its nodes")]
    LayerOrderMismatch { layer: usize },

    #[error("new port order for node {id} is not a permutation of its ports")]
    PortOrderMismatch { id: String },
}

pub type Result<T> = std::result::Result<T, Error>;
