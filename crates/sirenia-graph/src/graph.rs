//! The [`LayeredGraph`] container.
//!
//! This module contains the arena itself plus a small set of graph walks re-exported as
//! `sirenia_graph::alg`.

use crate::error::{Error, Result};
use rustc_hash::FxBuildHasher;

mod entries;
mod ids;
mod labels;

pub use entries::{Edge, Node, Port};
pub use ids::{EdgeId, NodeId, PortId};
pub use labels::{EdgeLabel, NodeKind, NodeLabel, PortLabel, PortSide};

pub mod alg;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// A graph whose nodes are already assigned to layers.
///
/// Layers and port lists are ordered; the order is what the ordering phase computes and writes
/// back through [`LayeredGraph::set_layer_order`] and [`LayeredGraph::set_port_order`].
#[derive(Debug, Clone, Default)]
pub struct LayeredGraph {
    nodes: Vec<Node>,
    node_index: HashMap<String, NodeId>,
    ports: Vec<Port>,
    edges: Vec<Edge>,
    layers: Vec<Vec<NodeId>>,
}

impl LayeredGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty layer and returns its index.
    pub fn add_layer(&mut self) -> usize {
        self.layers.push(Vec::new());
        self.layers.len() - 1
    }

    /// Appends a node to the end of `layer`.
    pub fn add_node(
        &mut self,
        id: impl Into<String>,
        layer: usize,
        label: NodeLabel,
    ) -> Result<NodeId> {
        let id = id.into();
        if layer >= self.layers.len() {
            return Err(Error::UnknownLayer {
                layer,
                layer_count: self.layers.len(),
            });
        }
        if self.node_index.contains_key(&id) {
            return Err(Error::DuplicateNode { id });
        }
        let node = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node {
            id: id.clone(),
            layer,
            kind: label.kind,
            model_order: label.model_order,
            ports: Vec::new(),
        });
        self.node_index.insert(id, node);
        self.layers[layer].push(node);
        Ok(node)
    }

    /// Appends a port to the end of `node`'s port list.
    pub fn add_port(&mut self, node: NodeId, label: PortLabel) -> Result<PortId> {
        self.check_node(node)?;
        let port = PortId::from_index(self.ports.len());
        self.ports.push(Port {
            node,
            side: label.side,
            incoming: Vec::new(),
            outgoing: Vec::new(),
            model_order: label.model_order,
        });
        self.nodes[node.index()].ports.push(port);
        Ok(port)
    }

    pub fn add_edge(&mut self, source: PortId, target: PortId, label: EdgeLabel) -> Result<EdgeId> {
        self.check_port(source)?;
        self.check_port(target)?;
        if let Some(node) = label.long_edge_target {
            self.check_node(node)?;
        }
        let edge = EdgeId::from_index(self.edges.len());
        self.edges.push(Edge {
            source,
            target,
            model_order: label.model_order,
            reversed: label.reversed,
            long_edge_target: label.long_edge_target,
        });
        self.ports[source.index()].outgoing.push(edge);
        self.ports[target.index()].incoming.push(edge);
        Ok(edge)
    }

    pub fn node_id(&self, id: &str) -> Option<NodeId> {
        self.node_index.get(id).copied()
    }

    /// # Panics
    ///
    /// Panics if `node` was issued by a different graph.
    pub fn node(&self, node: NodeId) -> &Node {
        &self.nodes[node.index()]
    }

    /// # Panics
    ///
    /// Panics if `port` was issued by a different graph.
    pub fn port(&self, port: PortId) -> &Port {
        &self.ports[port.index()]
    }

    /// # Panics
    ///
    /// Panics if `edge` was issued by a different graph.
    pub fn edge(&self, edge: EdgeId) -> &Edge {
        &self.edges[edge.index()]
    }

    pub fn port_node(&self, port: PortId) -> NodeId {
        self.port(port).node
    }

    pub fn source_node(&self, edge: EdgeId) -> NodeId {
        self.port_node(self.edge(edge).source)
    }

    pub fn target_node(&self, edge: EdgeId) -> NodeId {
        self.port_node(self.edge(edge).target)
    }

    pub fn layer(&self, layer: usize) -> Option<&[NodeId]> {
        self.layers.get(layer).map(Vec::as_slice)
    }

    pub fn layers(&self) -> impl Iterator<Item = &[NodeId]> {
        self.layers.iter().map(Vec::as_slice)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::from_index)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Replaces the node sequence of `layer`. `order` must contain exactly the layer's nodes.
    pub fn set_layer_order(&mut self, layer: usize, order: Vec<NodeId>) -> Result<()> {
        let layer_count = self.layers.len();
        let Some(current) = self.layers.get_mut(layer) else {
            return Err(Error::UnknownLayer { layer, layer_count });
        };
        if !is_permutation(current, &order) {
            return Err(Error::LayerOrderMismatch { layer });
        }
        *current = order;
        Ok(())
    }

    /// Replaces the port sequence of `node`. `order` must contain exactly the node's ports.
    pub fn set_port_order(&mut self, node: NodeId, order: Vec<PortId>) -> Result<()> {
        self.check_node(node)?;
        let entry = &mut self.nodes[node.index()];
        if !is_permutation(&entry.ports, &order) {
            return Err(Error::PortOrderMismatch {
                id: entry.id.clone(),
            });
        }
        entry.ports = order;
        Ok(())
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if node.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(Error::UnknownNode { node })
        }
    }

    fn check_port(&self, port: PortId) -> Result<()> {
        if port.index() < self.ports.len() {
            Ok(())
        } else {
            Err(Error::UnknownPort { port })
        }
    }
}

fn is_permutation<T: Ord + Copy>(current: &[T], proposed: &[T]) -> bool {
    if current.len() != proposed.len() {
        return false;
    }
    let mut a = current.to_vec();
    let mut b = proposed.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
