//! Layer-by-layer model order sorting.

use super::{NodeOrderComparator, PortOrderComparator};
use crate::error::Result;
use crate::options::ModelOrderOptions;
use sirenia_graph::alg::target_node_model_order;
use sirenia_graph::{LayeredGraph, NodeId, PortId};
use std::cmp::Ordering;

/// Sorts the nodes of every layer, and the ports of every node, by model order.
///
/// Layers are processed front to back so each layer is ordered against the final order of its
/// predecessor. The first layer uses itself as its previous layer. Nodes are sorted once before
/// the ports are sorted and once after, so feedback dummies see the final port order. The first
/// node order is written back before the ports are sorted.
pub fn sort_by_model_order(graph: &mut LayeredGraph, options: &ModelOrderOptions) -> Result<()> {
    for layer_ix in 0..graph.layer_count() {
        let _span = tracing::debug_span!("sort_by_model_order", layer = layer_ix).entered();

        let previous: Vec<NodeId> = graph
            .layer(layer_ix.saturating_sub(1))
            .unwrap_or_default()
            .to_vec();
        let mut nodes: Vec<NodeId> = graph.layer(layer_ix).unwrap_or_default().to_vec();

        {
            let mut comparator =
                NodeOrderComparator::from_options(graph, &previous, options, false);
            insertion_sort(&mut nodes, |a, b| comparator.compare(a, b));
        }
        // Port comparators read the positions of same-layer dummies from the graph.
        graph.set_layer_order(layer_ix, nodes.clone())?;

        let mut port_orders: Vec<(NodeId, Vec<PortId>)> = Vec::with_capacity(nodes.len());
        for &node in &nodes {
            let mut ports = graph.node(node).ports().to_vec();
            let mut comparator = PortOrderComparator::new(
                graph,
                &previous,
                options.strategy,
                options.port_model_order,
            )
            .with_target_node_model_order(target_node_model_order(graph, node));
            insertion_sort(&mut ports, |a, b| comparator.compare(a, b));
            port_orders.push((node, ports));
        }
        for (node, ports) in port_orders {
            graph.set_port_order(node, ports)?;
        }

        {
            let mut comparator =
                NodeOrderComparator::from_options(graph, &previous, options, true);
            insertion_sort(&mut nodes, |a, b| comparator.compare(a, b));
        }
        tracing::debug!(nodes = nodes.len(), "layer ordered");
        graph.set_layer_order(layer_ix, nodes)?;
    }
    Ok(())
}

/// Stable insertion sort that only moves an element past neighbours the comparator reports as
/// `Greater`. Unlike `slice::sort_by` it tolerates comparators that are not total orders.
pub fn insertion_sort<T, F>(items: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(T, T) -> Ordering,
{
    for i in 1..items.len() {
        let current = items[i];
        let mut j = i;
        while j > 0 && compare(items[j - 1], current) == Ordering::Greater {
            items[j] = items[j - 1];
            j -= 1;
        }
        items[j] = current;
    }
}
