use sirenia_graph::alg::{
    first_incoming_edge, first_outgoing_edge, long_edge_target, target_node_model_order,
};
use sirenia_graph::{EdgeLabel, LayeredGraph, NodeLabel, PortLabel};

fn edge(model_order: Option<i32>) -> EdgeLabel {
    EdgeLabel {
        model_order,
        ..Default::default()
    }
}

#[test]
fn long_edge_target_follows_dummy_chains() {
    // a -> d1 -> d2 -> t
    let mut g = LayeredGraph::new();
    for _ in 0..4 {
        g.add_layer();
    }
    let a = g.add_node("a", 0, NodeLabel::default()).unwrap();
    let d1 = g.add_node("d1", 1, NodeLabel::long_edge_dummy()).unwrap();
    let d2 = g.add_node("d2", 2, NodeLabel::long_edge_dummy()).unwrap();
    let t = g.add_node("t", 3, NodeLabel::default()).unwrap();

    let pa = g.add_port(a, PortLabel::default()).unwrap();
    let d1_in = g.add_port(d1, PortLabel::default()).unwrap();
    let d1_out = g.add_port(d1, PortLabel::default()).unwrap();
    let d2_in = g.add_port(d2, PortLabel::default()).unwrap();
    let d2_out = g.add_port(d2, PortLabel::default()).unwrap();
    let pt = g.add_port(t, PortLabel::default()).unwrap();

    g.add_edge(pa, d1_in, edge(Some(0))).unwrap();
    g.add_edge(d1_out, d2_in, edge(Some(0))).unwrap();
    g.add_edge(d2_out, pt, edge(Some(0))).unwrap();

    assert_eq!(long_edge_target(&g, pa), Some(t));
    assert_eq!(long_edge_target(&g, d1_out), Some(t));
    assert_eq!(long_edge_target(&g, pt), None);
    assert_eq!(first_incoming_edge(&g, d1), g.port(d1_in).incoming().first().copied());
    assert_eq!(first_outgoing_edge(&g, d1), g.port(d1_out).outgoing().first().copied());
    assert_eq!(first_incoming_edge(&g, a), None);
}

#[test]
fn explicit_long_edge_target_wins_over_the_walk() {
    let mut g = LayeredGraph::new();
    g.add_layer();
    g.add_layer();
    let a = g.add_node("a", 0, NodeLabel::default()).unwrap();
    let d = g.add_node("d", 1, NodeLabel::long_edge_dummy()).unwrap();
    let far = g.add_node("far", 1, NodeLabel::default()).unwrap();
    let pa = g.add_port(a, PortLabel::default()).unwrap();
    let pd = g.add_port(d, PortLabel::default()).unwrap();
    g.add_edge(
        pa,
        pd,
        EdgeLabel {
            long_edge_target: Some(far),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(long_edge_target(&g, pa), Some(far));
}

#[test]
fn dangling_dummy_chain_has_no_target() {
    let mut g = LayeredGraph::new();
    g.add_layer();
    g.add_layer();
    let a = g.add_node("a", 0, NodeLabel::default()).unwrap();
    let d = g.add_node("d", 1, NodeLabel::long_edge_dummy()).unwrap();
    let pa = g.add_port(a, PortLabel::default()).unwrap();
    let pd = g.add_port(d, PortLabel::default()).unwrap();
    g.add_edge(pa, pd, EdgeLabel::default()).unwrap();

    assert_eq!(long_edge_target(&g, pa), None);
}

#[test]
fn target_node_model_order_keeps_the_minimum_per_target() {
    let mut g = LayeredGraph::new();
    g.add_layer();
    g.add_layer();
    let a = g.add_node("a", 0, NodeLabel::default()).unwrap();
    let x = g.add_node("x", 1, NodeLabel::default()).unwrap();
    let y = g.add_node("y", 1, NodeLabel::default()).unwrap();
    let px = g.add_port(x, PortLabel::default()).unwrap();
    let py = g.add_port(y, PortLabel::default()).unwrap();

    for (target, order) in [(px, Some(5)), (px, Some(2)), (py, Some(7)), (py, None)] {
        let p = g.add_port(a, PortLabel::default()).unwrap();
        g.add_edge(p, target, edge(order)).unwrap();
    }

    let map = target_node_model_order(&g, a);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&x), Some(&2));
    assert_eq!(map.get(&y), Some(&7));
}
