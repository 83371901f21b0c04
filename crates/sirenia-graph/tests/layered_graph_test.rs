use sirenia_graph::{EdgeLabel, Error, LayeredGraph, NodeKind, NodeLabel, PortLabel, PortSide};

#[test]
fn nodes_are_appended_to_their_layer_in_insertion_order() {
    let mut g = LayeredGraph::new();
    let l0 = g.add_layer();
    let l1 = g.add_layer();
    let a = g.add_node("a", l0, NodeLabel::normal(Some(1))).unwrap();
    let b = g.add_node("b", l1, NodeLabel::default()).unwrap();
    let c = g.add_node("c", l1, NodeLabel::long_edge_dummy()).unwrap();

    assert_eq!(g.layer(l0), Some(&[a][..]));
    assert_eq!(g.layer(l1), Some(&[b, c][..]));
    assert_eq!(g.layer(2), None);
    assert_eq!(g.node(a).model_order(), Some(1));
    assert_eq!(g.node(b).model_order(), None);
    assert_eq!(g.node(c).kind(), NodeKind::LongEdgeDummy);
    assert_eq!(g.node(c).layer(), 1);
    assert_eq!(g.node_id("b"), Some(b));
    assert_eq!(g.node_id("missing"), None);
}

#[test]
fn add_node_rejects_unknown_layers_and_duplicate_ids() {
    let mut g = LayeredGraph::new();
    let l0 = g.add_layer();
    g.add_node("a", l0, NodeLabel::default()).unwrap();

    assert!(matches!(
        g.add_node("b", 3, NodeLabel::default()),
        Err(Error::UnknownLayer {
            layer: 3,
            layer_count: 1
        })
    ));
    assert!(matches!(
        g.add_node("a", l0, NodeLabel::default()),
        Err(Error::DuplicateNode { id }) if id == "a"
    ));
}

#[test]
fn edges_are_registered_on_both_ports() {
    let mut g = LayeredGraph::new();
    let l0 = g.add_layer();
    let l1 = g.add_layer();
    let a = g.add_node("a", l0, NodeLabel::default()).unwrap();
    let b = g.add_node("b", l1, NodeLabel::default()).unwrap();
    let pa = g.add_port(a, PortLabel::default()).unwrap();
    let pb = g
        .add_port(
            b,
            PortLabel {
                side: PortSide::West,
                model_order: Some(4),
            },
        )
        .unwrap();
    let e = g
        .add_edge(
            pa,
            pb,
            EdgeLabel {
                model_order: Some(2),
                reversed: true,
                long_edge_target: None,
            },
        )
        .unwrap();

    assert_eq!(g.port(pa).outgoing(), &[e]);
    assert!(g.port(pa).incoming().is_empty());
    assert_eq!(g.port(pb).incoming(), &[e]);
    assert_eq!(g.port(pb).model_order(), Some(4));
    assert_eq!(g.port(pb).side(), PortSide::West);
    assert_eq!(g.port(pa).side(), PortSide::Undefined);
    assert_eq!(g.source_node(e), a);
    assert_eq!(g.target_node(e), b);
    assert!(g.edge(e).is_reversed());
    assert_eq!(g.edge(e).model_order(), Some(2));
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.port_count(), 2);
}

#[test]
fn foreign_handles_are_rejected() {
    let mut other = LayeredGraph::new();
    let l = other.add_layer();
    other.add_node("x", l, NodeLabel::default()).unwrap();
    let x2 = other.add_node("y", l, NodeLabel::default()).unwrap();
    let px = other.add_port(x2, PortLabel::default()).unwrap();

    let mut g = LayeredGraph::new();
    g.add_layer();
    assert!(matches!(
        g.add_port(x2, PortLabel::default()),
        Err(Error::UnknownNode { .. })
    ));
    assert!(matches!(
        g.add_edge(px, px, EdgeLabel::default()),
        Err(Error::UnknownPort { .. })
    ));
}

#[test]
fn reordering_requires_a_permutation() {
    let mut g = LayeredGraph::new();
    let l0 = g.add_layer();
    let a = g.add_node("a", l0, NodeLabel::default()).unwrap();
    let b = g.add_node("b", l0, NodeLabel::default()).unwrap();
    let p1 = g.add_port(a, PortLabel::default()).unwrap();
    let p2 = g.add_port(a, PortLabel::default()).unwrap();

    g.set_layer_order(l0, vec![b, a]).unwrap();
    assert_eq!(g.layer(l0), Some(&[b, a][..]));
    assert!(matches!(
        g.set_layer_order(l0, vec![a, a]),
        Err(Error::LayerOrderMismatch { layer: 0 })
    ));
    assert!(matches!(
        g.set_layer_order(5, vec![]),
        Err(Error::UnknownLayer { .. })
    ));

    g.set_port_order(a, vec![p2, p1]).unwrap();
    assert_eq!(g.node(a).ports(), &[p2, p1]);
    assert!(matches!(
        g.set_port_order(a, vec![p1]),
        Err(Error::PortOrderMismatch { id }) if id == "a"
    ));
}
