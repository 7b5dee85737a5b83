//! Integration tests for drag scenarios on small layered drawings
//!
//! These tests drive the public query functions and drag sessions the way an
//! interactive front end would.

use float_cmp::assert_approx_eq;

use layerpin::{
    ConstraintAction, DragSession, LayeredGraph,
    classify::{classify_layer, position_in_layer},
    forbidden::is_layer_forbidden,
    geometry::{Point, Size},
    identifier::Id,
    layers::compute_layers,
    node::Node,
    query::sorted_layer,
    resolve::{resolve_layer_constraint, resolve_position_index},
    snapshot::Snapshot,
};

fn node(id: &str, layer: usize, pos: usize, x: f32, y: f32) -> Node {
    Node::new(Id::new(id), Point::new(x, y), Size::new(40.0, 20.0))
        .with_layer(layer)
        .with_pos(pos)
}

#[test]
fn test_drag_into_new_trailing_layer() {
    // Layer 0: x 0..40, layer 1: x 100..140.
    let a = node("sc_trail_a", 0, 0, 0.0, 0.0);
    let b = node("sc_trail_b", 0, 1, 0.0, 40.0);
    let c = node("sc_trail_c", 1, 0, 100.0, 0.0);
    let before = compute_layers(&[&a, &b, &c], 10.0);
    assert_eq!(before.len(), 2);

    // The layer-1 node is moved far right of every band.
    let mut moved = c.clone().with_shadow(Some(c.position()));
    moved.set_position(Point::new(400.0, 0.0));
    let nodes = vec![&a, &b, &moved];
    let layers = compute_layers(&nodes, 10.0);
    assert_eq!(layers, before);
    assert_eq!(classify_layer(&moved, &nodes, &layers), 2);

    // So is a layer-0 node, which leaves both old layers occupied.
    let mut moved = b.clone().with_shadow(Some(b.position()));
    moved.set_position(Point::new(400.0, 0.0));
    let nodes = vec![&a, &moved, &c];
    assert_eq!(classify_layer(&moved, &nodes, &layers), 2);

    // Once the layout engine honored that drop, three bands tile the drawing.
    let relaid = node("sc_trail_b", 2, 0, 200.0, 0.0);
    let after = compute_layers(&[&a, &relaid, &c], 10.0);
    assert_eq!(after.len(), 3);
    for pair in after.windows(2) {
        assert_approx_eq!(f32, pair[0].right_x(), pair[1].left_x());
    }
    for band in &after {
        assert!(band.left_x() < band.right_x());
    }
}

#[test]
fn test_sole_occupant_stays_in_last_layer() {
    let a = node("sc_sole_a", 0, 0, 0.0, 0.0);
    let b = node("sc_sole_b", 1, 0, 100.0, 0.0).with_selected(true);
    let layers = compute_layers(&[&a, &b], 10.0);

    // Slightly right past its own band.
    let mut dragged = b.clone().with_shadow(Some(b.position()));
    dragged.set_position(Point::new(layers[1].right_x(), 0.0));
    let nodes = vec![&a, &dragged];

    assert_eq!(classify_layer(&dragged, &nodes, &layers), 1);

    // Unselected, the same drag opens a new layer.
    dragged.set_selected(false);
    let nodes = vec![&a, &dragged];
    assert_eq!(classify_layer(&dragged, &nodes, &layers), 2);
}

#[test]
fn test_position_snaps_behind_pinned_member() {
    let p0 = node("sc_snap_p0", 0, 0, 0.0, 0.0);
    let p1 = node("sc_snap_p1", 0, 1, 0.0, 40.0).with_pos_cons(Some(3));
    let members = vec![&p0, &p1];

    // Right below P1, whose pin to slot 3 the layout has not honored yet.
    let newcomer = node("sc_snap_new", 1, 0, 0.0, 60.0);
    let candidate = position_in_layer(&members, &newcomer);
    assert_eq!(candidate, 2);
    assert_eq!(resolve_position_index(candidate, false, &members), 4);

    // Between P0 and P1 the upper member is unpinned.
    let between = node("sc_snap_mid", 1, 0, 0.0, 30.0);
    let candidate = position_in_layer(&members, &between);
    assert_eq!(candidate, 1);
    assert_eq!(resolve_position_index(candidate, false, &members), 1);
}

#[test]
fn test_forbidden_layer_of_pinned_neighbor() {
    let mut graph = LayeredGraph::new();
    graph.add_node(None, node("sc_forbid_x", 0, 0, 0.0, 0.0)).unwrap();
    graph.add_node(None, node("sc_forbid_y", 1, 0, 100.0, 0.0)).unwrap();
    graph
        .add_node(
            None,
            node("sc_forbid_a", 2, 0, 200.0, 0.0).with_layer_cons(Some(2)),
        )
        .unwrap();
    let b = graph
        .add_node(None, node("sc_forbid_b", 0, 1, 0.0, 40.0))
        .unwrap();
    graph
        .add_edge(Id::new("sc_forbid_b"), Id::new("sc_forbid_a"))
        .unwrap();
    graph.validate().unwrap();

    assert!(is_layer_forbidden(&graph, b, 2));
    assert!(!is_layer_forbidden(&graph, b, 0));
}

#[test]
fn test_drop_follows_pending_layer_constraint() {
    let json = r#"{
        "nodes": [
            { "id": "sc_pend_a", "x": 0, "y": 0, "width": 40, "height": 20, "layer_id": 0, "pos_id": 0 },
            { "id": "sc_pend_b", "x": 0, "y": 40, "width": 40, "height": 20, "layer_id": 0, "pos_id": 1 },
            { "id": "sc_pend_c", "x": 100, "y": 0, "width": 40, "height": 20, "layer_id": 1, "pos_id": 0,
              "layer_cons": 3 },
            { "id": "sc_pend_d", "x": 200, "y": 0, "width": 40, "height": 20, "layer_id": 2, "pos_id": 0 }
        ]
    }"#;
    let snapshot = Snapshot::from_json(json).unwrap();
    let mut graph = LayeredGraph::from_snapshot(&snapshot).unwrap();
    let a = graph.node_index(Id::new("sc_pend_a")).unwrap();

    let mut session = DragSession::begin(&mut graph, a);
    let preview = session.preview(&mut graph, Point::new(100.0, 50.0));
    assert_eq!(preview.candidate_layer, 1);
    assert_eq!(preview.layer, 3);
    assert_eq!(preview.candidate_position, 1);
    assert!(!preview.forbidden);

    let mut requests = Vec::new();
    let action = session.commit(&mut graph, &mut requests).unwrap();
    assert_eq!(
        action,
        Some(ConstraintAction::SetStaticConstraint {
            id: Id::new("sc_pend_a"),
            layer: 1,
            layer_cons: 3,
            position: 1,
            pos_cons: 1,
        })
    );
    assert_eq!(requests.len(), 1);
    assert_eq!(graph.node(a).layer_cons(), Some(3));
}

#[test]
fn test_drag_inside_nested_level() {
    let json = r#"{
        "nodes": [
            { "id": "sc_nest_top", "x": 0, "y": 0, "width": 40, "height": 20, "layer_id": 0, "pos_id": 0 },
            { "id": "sc_nest_box", "x": 100, "y": 0, "width": 300, "height": 200, "layer_id": 1, "pos_id": 0,
              "children": [
                { "id": "sc_nest_a", "x": 120, "y": 20, "width": 40, "height": 20, "layer_id": 0, "pos_id": 0 },
                { "id": "sc_nest_b", "x": 220, "y": 20, "width": 40, "height": 20, "layer_id": 1, "pos_id": 0 }
              ] }
        ],
        "edges": [ { "source": "sc_nest_top", "target": "sc_nest_box" } ]
    }"#;
    let snapshot = Snapshot::from_json(json).unwrap();
    let mut graph = LayeredGraph::from_snapshot(&snapshot).unwrap();
    let outer = graph.node_index(Id::new("sc_nest_box")).unwrap();
    let a = graph.node_index(Id::new("sc_nest_a")).unwrap();

    let mut session = DragSession::begin(&mut graph, a);
    assert!(graph.has_selected_child(outer));

    let preview = session.preview(&mut graph, Point::new(220.0, 60.0));
    // Bands come from the inner level only.
    assert_eq!(preview.layers.len(), 2);
    assert_approx_eq!(f32, preview.layers[0].right_x(), 190.0);
    assert_eq!(preview.layer, 1);
    assert_eq!(preview.position, 1);

    session.cancel(&mut graph);
    assert!(!graph.has_selected_child(outer));
    assert_eq!(graph.node(a).position(), Point::new(120.0, 20.0));
}

#[test]
fn test_queries_leave_input_order_untouched() {
    let a = node("sc_order_a", 0, 1, 0.0, 50.0);
    let b = node("sc_order_b", 0, 0, 0.0, 0.0);
    let c = node("sc_order_c", 1, 0, 100.0, 0.0);
    let nodes = vec![&a, &b, &c];

    let layers = compute_layers(&nodes, 10.0);
    let _ = sorted_layer(0, &nodes);
    let _ = classify_layer(&a, &nodes, &layers);
    let _ = resolve_layer_constraint(&a, &nodes, 1);

    let ids: Vec<_> = nodes.iter().map(|n| n.id().as_string()).collect();
    assert_eq!(ids, vec!["sc_order_a", "sc_order_b", "sc_order_c"]);
}
