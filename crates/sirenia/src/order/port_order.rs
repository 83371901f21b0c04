//! Ordering of ports within a layer.
//!
//! Ports on different sides are grouped by side first. Incoming ports follow the order of the
//! nodes they connect to in the previous layer. Outgoing ports follow edge model order, keeping
//! ports that lead to the same long-edge target next to each other with back edges below forward
//! ones. Outgoing ports go before incoming ports. Ports on the west, south and (for incoming
//! edges) north side are listed against that order.

use super::previous_layer::PreviousLayer;
use super::{RelationCache, first_wins_ties};
use crate::options::OrderingStrategy;
use rustc_hash::FxHashMap;
use sirenia_graph::alg::long_edge_target;
use sirenia_graph::{LayeredGraph, NodeId, PortId, PortSide};
use std::cmp::Ordering;

pub struct PortOrderComparator<'g> {
    graph: &'g LayeredGraph,
    previous_layer: PreviousLayer,
    strategy: OrderingStrategy,
    target_node_model_order: Option<FxHashMap<NodeId, i32>>,
    port_model_order: bool,
    cache: RelationCache<PortId>,
}

impl<'g> PortOrderComparator<'g> {
    pub fn new(
        graph: &'g LayeredGraph,
        previous_layer: &[NodeId],
        strategy: OrderingStrategy,
        port_model_order: bool,
    ) -> Self {
        Self::with_previous_layer(
            graph,
            PreviousLayer::new(previous_layer),
            strategy,
            port_model_order,
        )
    }

    pub(super) fn with_previous_layer(
        graph: &'g LayeredGraph,
        previous_layer: PreviousLayer,
        strategy: OrderingStrategy,
        port_model_order: bool,
    ) -> Self {
        Self {
            graph,
            previous_layer,
            strategy,
            target_node_model_order: None,
            port_model_order,
            cache: RelationCache::new(),
        }
    }

    /// Uses the minimal edge model order per long-edge target (see
    /// [`target_node_model_order`](sirenia_graph::alg::target_node_model_order)) when outgoing
    /// ports lead to different targets, so edges into one node stay bundled.
    pub fn with_target_node_model_order(mut self, map: FxHashMap<NodeId, i32>) -> Self {
        self.target_node_model_order = Some(map);
        self
    }

    pub fn compare(&mut self, p1: PortId, p2: PortId) -> Ordering {
        if p1 == p2 {
            return Ordering::Equal;
        }
        if let Some(known) = self.cache.query(p1, p2) {
            return known;
        }
        let decided = self.decide(p1, p2);
        self.cache.record_ordering(p1, p2, decided);
        decided
    }

    /// Compares the ports' own model order; `Equal` if either port has none.
    pub fn check_port_model_order(&self, p1: PortId, p2: PortId) -> Ordering {
        match (
            self.graph.port(p1).model_order(),
            self.graph.port(p2).model_order(),
        ) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => Ordering::Equal,
        }
    }

    pub fn clear_transitive_ordering(&mut self) {
        self.cache.clear();
    }

    fn decide(&self, p1: PortId, p2: PortId) -> Ordering {
        let port1 = self.graph.port(p1);
        let port2 = self.graph.port(p2);

        if port1.side() != port2.side() {
            return port1.side().cmp(&port2.side());
        }
        let side = port1.side();

        if port1.has_incoming() && port2.has_incoming() {
            if let Some(decided) = self.compare_incoming(p1, p2) {
                return reverse_if(reverses_incoming(side), decided);
            }
        }
        if port1.has_outgoing() && port2.has_outgoing() {
            return reverse_if(reverses_outgoing(side), self.compare_outgoing(p1, p2));
        }

        if port1.has_incoming() && port2.has_outgoing() {
            return Ordering::Greater;
        }
        if port1.has_outgoing() && port2.has_incoming() {
            return Ordering::Less;
        }

        // Unconnected ports can still order the rest transitively, so this is best-effort.
        match (port1.model_order(), port2.model_order()) {
            (Some(a), Some(b)) => reverse_if(reverses_outgoing(side), first_wins_ties(a, b)),
            _ => {
                tracing::debug!(
                    ?p1,
                    ?p2,
                    "no ordering signal for ports, keeping argument order"
                );
                Ordering::Less
            }
        }
    }

    fn compare_incoming(&self, p1: PortId, p2: PortId) -> Option<Ordering> {
        let g = self.graph;
        if self.port_model_order {
            let by_port = self.check_port_model_order(p1, p2);
            if by_port != Ordering::Equal {
                return Some(by_port);
            }
        }

        let e1 = g.port(p1).incoming()[0];
        let e2 = g.port(p2).incoming()[0];
        let source1 = g.source_node(e1);
        let source2 = g.source_node(e2);

        if source1 == source2 {
            if let (Some(a), Some(b)) = (g.edge(e1).model_order(), g.edge(e2).model_order()) {
                if a != b {
                    return Some(a.cmp(&b));
                }
            }
            let sp1 = g.edge(e1).source();
            let sp2 = g.edge(e2).source();
            for &port in g.node(source1).ports() {
                if port == sp1 {
                    return Some(Ordering::Less);
                }
                if port == sp2 {
                    return Some(Ordering::Greater);
                }
            }
        }

        if let Some(by_dummies) = self.compare_same_layer_dummies(p1, source1, source2) {
            return Some(by_dummies);
        }

        let by_layer = self.previous_layer.compare(source1, source2);
        if by_layer.is_none() {
            tracing::debug!(
                ?p1,
                ?p2,
                "incoming sources are not part of the previous layer"
            );
        }
        by_layer
    }

    /// Both edges come from long-edge dummies of the ports' own layer: the dummies' current
    /// position in that layer decides, reversed on the east side.
    fn compare_same_layer_dummies(
        &self,
        p1: PortId,
        source1: NodeId,
        source2: NodeId,
    ) -> Option<Ordering> {
        let g = self.graph;
        let layer = g.node(g.port_node(p1)).layer();
        let in_layer = |n: NodeId| g.node(n).is_long_edge_dummy() && g.node(n).layer() == layer;
        if !in_layer(source1) || !in_layer(source2) {
            return None;
        }
        let decided = g.layer(layer)?.iter().find_map(|&n| {
            if n == source1 {
                Some(Ordering::Less)
            } else if n == source2 {
                Some(Ordering::Greater)
            } else {
                None
            }
        })?;
        Some(reverse_if(g.port(p1).side() == PortSide::East, decided))
    }

    fn compare_outgoing(&self, p1: PortId, p2: PortId) -> Ordering {
        let g = self.graph;
        let target1 = long_edge_target(g, p1);
        let target2 = long_edge_target(g, p2);

        if self.strategy == OrderingStrategy::PreferNodes {
            let mo1 = target1.and_then(|t| g.node(t).model_order());
            let mo2 = target2.and_then(|t| g.node(t).model_order());
            if let (Some(a), Some(b)) = (mo1, mo2) {
                return first_wins_ties(a, b);
            }
        }

        if self.port_model_order {
            let by_port = self.check_port_model_order(p1, p2);
            if by_port != Ordering::Equal {
                return by_port;
            }
        }

        let edge1 = g.edge(g.port(p1).outgoing()[0]);
        let edge2 = g.edge(g.port(p2).outgoing()[0]);
        let mut order1 = edge1.model_order().unwrap_or(0);
        let mut order2 = edge2.model_order().unwrap_or(0);

        if target1.is_some() && target1 == target2 {
            // Back edges are routed below forward edges into the same node.
            if edge1.is_reversed() != edge2.is_reversed() {
                return if edge1.is_reversed() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }
            return first_wins_ties(order1, order2);
        }

        if let Some(map) = &self.target_node_model_order {
            if let Some(&v) = target1.and_then(|t| map.get(&t)) {
                order1 = v;
            }
            if let Some(&v) = target2.and_then(|t| map.get(&t)) {
                order2 = v;
            }
        }
        first_wins_ties(order1, order2)
    }
}

fn reverses_incoming(side: PortSide) -> bool {
    matches!(side, PortSide::West | PortSide::North | PortSide::South)
}

fn reverses_outgoing(side: PortSide) -> bool {
    matches!(side, PortSide::West | PortSide::South)
}

fn reverse_if(reverse: bool, ordering: Ordering) -> Ordering {
    if reverse {
        ordering.reverse()
    } else {
        ordering
    }
}
