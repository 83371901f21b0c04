//! Storage entries for [`LayeredGraph`](super::LayeredGraph).
//!
//! Entries are read-only from outside the crate; all mutation goes through the graph so layer and
//! port lists stay consistent with the handles stored in them.

use super::{EdgeId, NodeId, NodeKind, PortId, PortSide};

#[derive(Debug, Clone)]
pub struct Node {
    pub(in crate::graph) id: String,
    pub(in crate::graph) layer: usize,
    pub(in crate::graph) kind: NodeKind,
    pub(in crate::graph) model_order: Option<i32>,
    pub(in crate::graph) ports: Vec<PortId>,
}

impl Node {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn layer(&self) -> usize {
        self.layer
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_long_edge_dummy(&self) -> bool {
        self.kind == NodeKind::LongEdgeDummy
    }

    pub fn model_order(&self) -> Option<i32> {
        self.model_order
    }

    pub fn ports(&self) -> &[PortId] {
        &self.ports
    }
}

#[derive(Debug, Clone)]
pub struct Port {
    pub(in crate::graph) node: NodeId,
    pub(in crate::graph) side: PortSide,
    pub(in crate::graph) incoming: Vec<EdgeId>,
    pub(in crate::graph) outgoing: Vec<EdgeId>,
    pub(in crate::graph) model_order: Option<i32>,
}

impl Port {
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn side(&self) -> PortSide {
        self.side
    }

    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }

    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    pub fn has_incoming(&self) -> bool {
        !self.incoming.is_empty()
    }

    pub fn has_outgoing(&self) -> bool {
        !self.outgoing.is_empty()
    }

    pub fn model_order(&self) -> Option<i32> {
        self.model_order
    }
}

#[derive(Debug, Clone)]
pub struct Edge {
    pub(in crate::graph) source: PortId,
    pub(in crate::graph) target: PortId,
    pub(in crate::graph) model_order: Option<i32>,
    pub(in crate::graph) reversed: bool,
    pub(in crate::graph) long_edge_target: Option<NodeId>,
}

impl Edge {
    pub fn source(&self) -> PortId {
        self.source
    }

    pub fn target(&self) -> PortId {
        self.target
    }

    pub fn model_order(&self) -> Option<i32> {
        self.model_order
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn long_edge_target(&self) -> Option<NodeId> {
        self.long_edge_target
    }
}
