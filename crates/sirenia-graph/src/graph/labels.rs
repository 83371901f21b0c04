//! Attribute bundles supplied when inserting nodes, ports and edges.

use super::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeKind {
    #[default]
    Normal,
    /// Placeholder for the part of a logical edge that crosses an intermediate layer, or that
    /// re-enters a layer it already visited (feedback routing).
    LongEdgeDummy,
    OtherDummy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeLabel {
    pub kind: NodeKind,
    pub model_order: Option<i32>,
}

impl NodeLabel {
    pub fn normal(model_order: Option<i32>) -> Self {
        Self {
            kind: NodeKind::Normal,
            model_order,
        }
    }

    pub fn long_edge_dummy() -> Self {
        Self {
            kind: NodeKind::LongEdgeDummy,
            model_order: None,
        }
    }
}

/// Side of its node a port sits on. Declaration order is the order ports on different sides are
/// listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum PortSide {
    #[default]
    Undefined,
    North,
    East,
    South,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortLabel {
    pub side: PortSide,
    pub model_order: Option<i32>,
}

impl PortLabel {
    pub fn on(side: PortSide) -> Self {
        Self {
            side,
            model_order: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeLabel {
    pub model_order: Option<i32>,
    /// Set when the edge was flipped during cycle breaking.
    pub reversed: bool,
    /// The real node a chain of long-edge dummies ultimately leads to.
    pub long_edge_target: Option<NodeId>,
}
