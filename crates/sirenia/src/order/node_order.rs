//! Ordering of nodes within a layer.
//!
//! The comparator answers pairwise queries for one sort of one layer. Structural signals come
//! first (the port a node uses to connect to the previous layer, then feedback dummies resolved
//! to the node they stand in for), node model order last. Every answer is written to a
//! [`RelationCache`] so the sort sees a consistent order even though the individual rules are
//! not transitive on their own.

use super::port_order::PortOrderComparator;
use super::previous_layer::PreviousLayer;
use super::{RelationCache, first_wins_ties};
use crate::options::{LongEdgeOrderingStrategy, ModelOrderOptions, OrderingStrategy};
use rustc_hash::FxHashMap;
use sirenia_graph::alg::{first_incoming_edge, target_node_model_order};
use sirenia_graph::{EdgeId, LayeredGraph, NodeId};
use std::cmp::Ordering;

/// Bound on nested comparisons introduced by substituting feedback dummies with real nodes.
pub(super) const MAX_RESOLUTION_DEPTH: usize = 32;

pub struct NodeOrderComparator<'g> {
    pub(super) graph: &'g LayeredGraph,
    previous_layer: PreviousLayer,
    strategy: OrderingStrategy,
    long_edge_strategy: LongEdgeOrderingStrategy,
    port_model_order: bool,
    /// Whether the ports of the layer's nodes are already in their final order.
    pub(super) after_port_sorting: bool,
    /// Port comparators keyed by the node owning the ports, built on first use.
    ports: FxHashMap<NodeId, PortOrderComparator<'g>>,
    cache: RelationCache<NodeId>,
}

impl<'g> NodeOrderComparator<'g> {
    pub fn new(
        graph: &'g LayeredGraph,
        previous_layer: &[NodeId],
        strategy: OrderingStrategy,
        long_edge_strategy: LongEdgeOrderingStrategy,
        after_port_sorting: bool,
    ) -> Self {
        Self {
            graph,
            previous_layer: PreviousLayer::new(previous_layer),
            strategy,
            long_edge_strategy,
            port_model_order: false,
            after_port_sorting,
            ports: FxHashMap::default(),
            cache: RelationCache::new(),
        }
    }

    pub fn from_options(
        graph: &'g LayeredGraph,
        previous_layer: &[NodeId],
        options: &ModelOrderOptions,
        after_port_sorting: bool,
    ) -> Self {
        Self {
            port_model_order: options.port_model_order,
            ..Self::new(
                graph,
                previous_layer,
                options.strategy,
                options.long_edge_strategy,
                after_port_sorting,
            )
        }
    }

    pub fn compare(&mut self, n1: NodeId, n2: NodeId) -> Ordering {
        self.compare_at(n1, n2, 0)
    }

    pub fn clear_transitive_ordering(&mut self) {
        self.cache.clear();
        self.ports.clear();
    }

    /// The comparator the driver would use to sort the ports of `node`.
    pub(super) fn port_comparator(&mut self, node: NodeId) -> &mut PortOrderComparator<'g> {
        let graph = self.graph;
        let previous_layer = &self.previous_layer;
        let (strategy, port_model_order) = (self.strategy, self.port_model_order);
        self.ports.entry(node).or_insert_with(|| {
            PortOrderComparator::with_previous_layer(
                graph,
                previous_layer.clone(),
                strategy,
                port_model_order,
            )
            .with_target_node_model_order(target_node_model_order(graph, node))
        })
    }

    pub(super) fn compare_at(&mut self, n1: NodeId, n2: NodeId, depth: usize) -> Ordering {
        if n1 == n2 {
            return Ordering::Equal;
        }
        if let Some(known) = self.cache.query(n1, n2) {
            return known;
        }

        let decided = if depth > MAX_RESOLUTION_DEPTH {
            tracing::warn!(
                ?n1,
                ?n2,
                depth,
                "dummy resolution too deep, falling back to model order"
            );
            self.by_model_order(n1, n2)
        } else {
            self.decide(n1, n2, depth)
        };

        // A nested comparison may already have settled this pair.
        if let Some(known) = self.cache.query(n1, n2) {
            return known;
        }
        self.cache.record_ordering(n1, n2, decided);
        decided
    }

    fn decide(&mut self, n1: NodeId, n2: NodeId, depth: usize) -> Ordering {
        let g = self.graph;
        let structural = self.strategy == OrderingStrategy::PreferEdges
            || g.node(n1).model_order().is_none()
            || g.node(n2).model_order().is_none();
        if structural {
            if let Some(decided) = self.decide_structurally(n1, n2, depth) {
                return decided;
            }
        }
        self.by_model_order(n1, n2)
    }

    fn decide_structurally(&mut self, n1: NodeId, n2: NodeId, depth: usize) -> Option<Ordering> {
        let g = self.graph;
        match (self.anchor_edge(n1), self.anchor_edge(n2)) {
            (Some(e1), Some(e2)) => {
                let source1 = g.source_node(e1);
                let source2 = g.source_node(e2);
                if source1 == source2 {
                    return Some(self.by_shared_anchor(source1, e1, e2));
                }
                if let Some(by_layer) = self.previous_layer.compare(source1, source2) {
                    return Some(by_layer);
                }
                tracing::debug!(?n1, ?n2, "anchors are not part of the previous layer");
                self.by_connected_edges(n1, n2)
            }
            (Some(_), None) | (None, Some(_)) => self
                .compare_via_dummies(n1, n2, depth)
                .or_else(|| self.by_connected_edges(n1, n2)),
            (None, None) => self.compare_via_dummies(n1, n2, depth),
        }
    }

    /// First edge entering `n` from the layer right before it, in port order.
    fn anchor_edge(&self, n: NodeId) -> Option<EdgeId> {
        let g = self.graph;
        let layer = g.node(n).layer();
        g.node(n).ports().iter().find_map(|&p| {
            let &e = g.port(p).incoming().first()?;
            (g.node(g.source_node(e)).layer() + 1 == layer).then_some(e)
        })
    }

    /// Both nodes hang off the same previous-layer node: the order of the source ports on that
    /// node decides. Edge model order is not reliable here once long edges were reordered.
    fn by_shared_anchor(&self, shared: NodeId, e1: EdgeId, e2: EdgeId) -> Ordering {
        let g = self.graph;
        let sp1 = g.edge(e1).source();
        let sp2 = g.edge(e2).source();
        if sp1 != sp2 {
            for &port in g.node(shared).ports() {
                if port == sp1 {
                    return Ordering::Less;
                }
                if port == sp2 {
                    return Ordering::Greater;
                }
            }
            tracing::debug!(?shared, "anchor ports not found on shared node");
        }
        match (g.edge(e1).model_order(), g.edge(e2).model_order()) {
            (Some(a), Some(b)) => first_wins_ties(a, b),
            _ => Ordering::Less,
        }
    }

    /// Compares the model order of the first incoming edges. Only applies when a node lacks a
    /// model order of its own; nodes without incoming edges use the long-edge sentinel.
    fn by_connected_edges(&self, n1: NodeId, n2: NodeId) -> Option<Ordering> {
        let g = self.graph;
        if g.node(n1).model_order().is_some() && g.node(n2).model_order().is_some() {
            return None;
        }
        let a = self.connected_edge_model_order(n1);
        let b = self.connected_edge_model_order(n2);
        (a != b).then(|| a.cmp(&b))
    }

    fn connected_edge_model_order(&self, n: NodeId) -> i32 {
        first_incoming_edge(self.graph, n)
            .and_then(|e| self.graph.edge(e).model_order())
            .unwrap_or_else(|| self.long_edge_strategy.sentinel())
    }

    pub(super) fn by_model_order(&self, n1: NodeId, n2: NodeId) -> Ordering {
        let g = self.graph;
        match (g.node(n1).model_order(), g.node(n2).model_order()) {
            (Some(a), Some(b)) => first_wins_ties(a, b),
            _ => {
                tracing::debug!(
                    ?n1,
                    ?n2,
                    "no model order to compare, keeping argument order"
                );
                Ordering::Less
            }
        }
    }
}
