//! Layers a node must not be dropped into.
//!
//! A node may not join a layer that a directly connected node sits in while
//! carrying a layer constraint: the next layout run could not honor both the
//! pin and the edge between them.

use log::debug;
use petgraph::graph::NodeIndex;

use crate::graph::LayeredGraph;

/// Returns true iff a neighbor of `idx` in the same hierarchical level lies
/// in `layer` and carries a layer constraint.
pub fn is_layer_forbidden(graph: &LayeredGraph, idx: NodeIndex, layer: usize) -> bool {
    let blocker = graph.neighbors(idx).find(|&neighbor| {
        let neighbor = graph.node(neighbor);
        neighbor.layer_id() == layer && neighbor.layer_cons().is_some()
    });

    match blocker {
        Some(blocker) => {
            debug!(
                node:% = graph.node(idx).id(),
                layer,
                pinned:% = graph.node(blocker).id();
                "Layer is forbidden"
            );
            true
        }
        None => false,
    }
}

/// Returns every layer [`is_layer_forbidden`] rejects for `idx`, ascending
/// and without duplicates.
pub fn forbidden_layers(graph: &LayeredGraph, idx: NodeIndex) -> Vec<usize> {
    let mut layers: Vec<usize> = graph
        .neighbors(idx)
        .map(|neighbor| graph.node(neighbor))
        .filter(|neighbor| neighbor.layer_cons().is_some())
        .map(|neighbor| neighbor.layer_id())
        .collect();
    layers.sort_unstable();
    layers.dedup();
    layers
}

#[cfg(test)]
mod tests {
    use layerpin_core::{
        geometry::{Point, Size},
        identifier::Id,
        node::Node,
    };

    use super::*;

    fn node(id: &str, layer: usize) -> Node {
        Node::new(Id::new(id), Point::new(0.0, 0.0), Size::new(10.0, 10.0)).with_layer(layer)
    }

    #[test]
    fn test_pinned_neighbor_forbids_its_layer() {
        let mut graph = LayeredGraph::new();
        graph.add_node(None, node("f_x0", 0)).unwrap();
        graph.add_node(None, node("f_x1", 1)).unwrap();
        let a = graph
            .add_node(None, node("f_a", 2).with_layer_cons(Some(2)))
            .unwrap();
        let b = graph.add_node(None, node("f_b", 0)).unwrap();
        graph.add_edge(Id::new("f_a"), Id::new("f_b")).unwrap();

        assert!(is_layer_forbidden(&graph, b, 2));
        assert!(!is_layer_forbidden(&graph, b, 0));
        assert!(!is_layer_forbidden(&graph, b, 1));
        // The check is symmetric in edge direction but not in pins.
        assert!(!is_layer_forbidden(&graph, a, 0));

        assert_eq!(forbidden_layers(&graph, b), vec![2]);
        assert!(forbidden_layers(&graph, a).is_empty());
    }

    #[test]
    fn test_unconnected_pin_is_ignored() {
        let mut graph = LayeredGraph::new();
        graph
            .add_node(None, node("f_far_a", 0).with_layer_cons(Some(0)))
            .unwrap();
        let b = graph.add_node(None, node("f_far_b", 0)).unwrap();

        assert!(!is_layer_forbidden(&graph, b, 0));
    }

    #[test]
    fn test_incoming_and_outgoing_neighbors() {
        let mut graph = LayeredGraph::new();
        let center = graph.add_node(None, node("f_io_c", 1)).unwrap();
        graph
            .add_node(None, node("f_io_src", 0).with_layer_cons(Some(0)))
            .unwrap();
        graph
            .add_node(None, node("f_io_dst", 2).with_layer_cons(Some(2)))
            .unwrap();
        graph
            .add_node(None, node("f_io_dup", 2).with_layer_cons(Some(3)))
            .unwrap();
        graph.add_edge(Id::new("f_io_src"), Id::new("f_io_c")).unwrap();
        graph.add_edge(Id::new("f_io_c"), Id::new("f_io_dst")).unwrap();
        graph.add_edge(Id::new("f_io_c"), Id::new("f_io_dup")).unwrap();

        assert!(is_layer_forbidden(&graph, center, 0));
        assert!(is_layer_forbidden(&graph, center, 2));
        assert!(!is_layer_forbidden(&graph, center, 1));
        assert_eq!(forbidden_layers(&graph, center), vec![0, 2]);
    }
}
