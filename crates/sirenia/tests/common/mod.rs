#![allow(dead_code)]

use sirenia::graph::{
    EdgeId, EdgeLabel, LayeredGraph, NodeId, NodeLabel, PortId, PortLabel, PortSide,
};

/// Small builder over [`LayeredGraph`] for hand-written test graphs.
pub struct TestGraph {
    pub g: LayeredGraph,
}

impl TestGraph {
    pub fn with_layers(count: usize) -> Self {
        let mut g = LayeredGraph::new();
        for _ in 0..count {
            g.add_layer();
        }
        Self { g }
    }

    pub fn node(&mut self, id: &str, layer: usize, model_order: Option<i32>) -> NodeId {
        self.g
            .add_node(id, layer, NodeLabel::normal(model_order))
            .unwrap()
    }

    pub fn dummy(&mut self, id: &str, layer: usize) -> NodeId {
        self.g
            .add_node(id, layer, NodeLabel::long_edge_dummy())
            .unwrap()
    }

    pub fn port(&mut self, node: NodeId) -> PortId {
        self.g.add_port(node, PortLabel::default()).unwrap()
    }

    pub fn port_with_order(&mut self, node: NodeId, model_order: i32) -> PortId {
        self.g
            .add_port(
                node,
                PortLabel {
                    model_order: Some(model_order),
                    ..Default::default()
                },
            )
            .unwrap()
    }

    pub fn port_on(&mut self, node: NodeId, side: PortSide) -> PortId {
        self.g.add_port(node, PortLabel::on(side)).unwrap()
    }

    pub fn edge(&mut self, source: PortId, target: PortId, model_order: Option<i32>) -> EdgeId {
        self.g
            .add_edge(
                source,
                target,
                EdgeLabel {
                    model_order,
                    ..Default::default()
                },
            )
            .unwrap()
    }

    pub fn reversed_edge(
        &mut self,
        source: PortId,
        target: PortId,
        model_order: Option<i32>,
    ) -> EdgeId {
        self.g
            .add_edge(
                source,
                target,
                EdgeLabel {
                    model_order,
                    reversed: true,
                    ..Default::default()
                },
            )
            .unwrap()
    }

    /// Connects two nodes through fresh ports and returns `(source_port, target_port)`.
    pub fn connect(
        &mut self,
        source: NodeId,
        target: NodeId,
        model_order: Option<i32>,
    ) -> (PortId, PortId) {
        let out = self.port(source);
        let inp = self.port(target);
        self.edge(out, inp, model_order);
        (out, inp)
    }

    pub fn layer(&self, layer: usize) -> Vec<NodeId> {
        self.g.layer(layer).unwrap().to_vec()
    }

    pub fn ids(&self, nodes: &[NodeId]) -> Vec<String> {
        nodes
            .iter()
            .map(|&n| self.g.node(n).id().to_string())
            .collect()
    }
}
