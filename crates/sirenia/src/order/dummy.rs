//! Feedback dummy resolution.
//!
//! A long-edge dummy whose through-edge starts or ends in the dummy's own layer stands in for a
//! back edge entering or leaving a real node of that layer. Such dummies are placed below the
//! node they leave and above the node they enter, and are otherwise ordered like that node.

use super::node_order::NodeOrderComparator;
use sirenia_graph::alg::{first_incoming_edge, first_outgoing_edge};
use sirenia_graph::{LayeredGraph, NodeId, PortId};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FeedbackRole {
    /// The dummy carries an edge leaving `real`.
    Source,
    /// The dummy carries an edge entering `real`.
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FeedbackDummy {
    pub(crate) role: FeedbackRole,
    pub(crate) real: NodeId,
    /// The port of `real` the dummy's through-edge is attached to.
    pub(crate) anchor: PortId,
}

/// Resolves `dummy` to the real node it stands in for, if it is a feedback dummy.
pub(crate) fn resolve(g: &LayeredGraph, dummy: NodeId) -> Option<FeedbackDummy> {
    let node = g.node(dummy);
    if !node.is_long_edge_dummy() {
        return None;
    }
    let layer = node.layer();

    if let Some(e) = first_incoming_edge(g, dummy) {
        let anchor = g.edge(e).source();
        let real = g.port_node(anchor);
        if real != dummy && g.node(real).layer() == layer {
            return Some(FeedbackDummy {
                role: FeedbackRole::Source,
                real,
                anchor,
            });
        }
    }
    if let Some(e) = first_outgoing_edge(g, dummy) {
        let anchor = g.edge(e).target();
        let real = g.port_node(anchor);
        if real != dummy && g.node(real).layer() == layer {
            return Some(FeedbackDummy {
                role: FeedbackRole::Target,
                real,
                anchor,
            });
        }
    }
    None
}

impl NodeOrderComparator<'_> {
    /// `None` if neither node is a feedback dummy, or if both stand in for the same node and
    /// nothing tells them apart.
    pub(super) fn compare_via_dummies(
        &mut self,
        n1: NodeId,
        n2: NodeId,
        depth: usize,
    ) -> Option<Ordering> {
        let g = self.graph;
        match (resolve(g, n1), resolve(g, n2)) {
            (None, None) => None,
            (Some(f1), None) => Some(self.against_node(f1, n2, depth)),
            (None, Some(f2)) => Some(self.against_node(f2, n1, depth).reverse()),
            (Some(f1), Some(f2)) => {
                if f1.real == n2 {
                    return Some(self.against_node(f1, n2, depth));
                }
                if f2.real == n1 {
                    return Some(self.against_node(f2, n1, depth).reverse());
                }
                self.between_dummies(n1, f1, n2, f2, depth)
            }
        }
    }

    fn against_node(&mut self, dummy: FeedbackDummy, other: NodeId, depth: usize) -> Ordering {
        if dummy.real == other {
            return match dummy.role {
                FeedbackRole::Source => Ordering::Greater,
                FeedbackRole::Target => Ordering::Less,
            };
        }
        self.compare_at(dummy.real, other, depth + 1)
    }

    fn between_dummies(
        &mut self,
        n1: NodeId,
        f1: FeedbackDummy,
        n2: NodeId,
        f2: FeedbackDummy,
        depth: usize,
    ) -> Option<Ordering> {
        if f1.real != f2.real {
            return Some(self.compare_at(f1.real, f2.real, depth + 1));
        }
        match (f1.role, f2.role) {
            (FeedbackRole::Source, FeedbackRole::Source) => {
                self.compare_anchor_ports(f1.real, f1.anchor, f2.anchor)
            }
            // Edges entering a node are routed above it, edges leaving it below.
            (FeedbackRole::Source, FeedbackRole::Target) => Some(Ordering::Greater),
            (FeedbackRole::Target, FeedbackRole::Source) => Some(Ordering::Less),
            (FeedbackRole::Target, FeedbackRole::Target) => self.by_through_edge(n1, n2),
        }
    }

    /// Once ports are in their final order their position decides; before that the port
    /// comparator is asked.
    fn compare_anchor_ports(&mut self, real: NodeId, p1: PortId, p2: PortId) -> Option<Ordering> {
        if p1 == p2 {
            return None;
        }
        if !self.after_port_sorting {
            let by_ports = self.port_comparator(real).compare(p1, p2);
            return (by_ports != Ordering::Equal).then_some(by_ports);
        }
        self.graph.node(real).ports().iter().find_map(|&port| {
            if port == p1 {
                Some(Ordering::Less)
            } else if port == p2 {
                Some(Ordering::Greater)
            } else {
                None
            }
        })
    }

    fn by_through_edge(&self, n1: NodeId, n2: NodeId) -> Option<Ordering> {
        let g = self.graph;
        let order1 = first_outgoing_edge(g, n1).and_then(|e| g.edge(e).model_order());
        let order2 = first_outgoing_edge(g, n2).and_then(|e| g.edge(e).model_order());
        match (order1, order2) {
            (Some(a), Some(b)) if a != b => Some(a.cmp(&b)),
            _ => None,
        }
    }
}
