//! Graph walks shared by the ordering phase.

use super::{EdgeId, LayeredGraph, NodeId, NodeKind, PortId};
use rustc_hash::FxHashMap;

/// First incoming edge of `node`, scanning ports in order.
pub fn first_incoming_edge(g: &LayeredGraph, node: NodeId) -> Option<EdgeId> {
    g.node(node)
        .ports()
        .iter()
        .find_map(|&p| g.port(p).incoming().first().copied())
}

/// First outgoing edge of `node`, scanning ports in order.
pub fn first_outgoing_edge(g: &LayeredGraph, node: NodeId) -> Option<EdgeId> {
    g.node(node)
        .ports()
        .iter()
        .find_map(|&p| g.port(p).outgoing().first().copied())
}

/// The real node reached by following `port`'s first outgoing edge through dummy nodes.
///
/// An explicit long-edge target on any edge of the chain short-circuits the walk. A chain that
/// ends in a dummy without outgoing edges has no target.
pub fn long_edge_target(g: &LayeredGraph, port: PortId) -> Option<NodeId> {
    let mut edge = *g.port(port).outgoing().first()?;
    // A well-formed chain visits every node at most once.
    for _ in 0..=g.node_count() {
        if let Some(target) = g.edge(edge).long_edge_target() {
            return Some(target);
        }
        let node = g.target_node(edge);
        if g.node(node).kind() == NodeKind::Normal {
            return Some(node);
        }
        edge = first_outgoing_edge(g, node)?;
    }
    None
}

/// Minimal outgoing-edge model order per long-edge target, over all ports of `node`.
///
/// Only the first outgoing edge of each port is considered, and edges without a model order do
/// not contribute.
pub fn target_node_model_order(g: &LayeredGraph, node: NodeId) -> FxHashMap<NodeId, i32> {
    let mut out: FxHashMap<NodeId, i32> = FxHashMap::default();
    for &port in g.node(node).ports() {
        let Some(&edge) = g.port(port).outgoing().first() else {
            continue;
        };
        let Some(target) = long_edge_target(g, port) else {
            continue;
        };
        let Some(order) = g.edge(edge).model_order() else {
            continue;
        };
        out.entry(target)
            .and_modify(|min| *min = (*min).min(order))
            .or_insert(order);
    }
    out
}
