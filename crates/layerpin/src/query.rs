//! Read-only queries over the nodes of one hierarchical level.
//!
//! None of these reorder their input; callers can run them on every pointer
//! move against the same node list.

use layerpin_core::node::Node;

/// Returns the nodes whose `layer_id` is `layer`, in input order.
pub fn nodes_in_layer<'a>(layer: usize, nodes: &[&'a Node]) -> Vec<&'a Node> {
    nodes
        .iter()
        .copied()
        .filter(|node| node.layer_id() == layer)
        .collect()
}

/// Returns the first selected node, if any.
pub fn selected_node<'a>(nodes: &[&'a Node]) -> Option<&'a Node> {
    nodes.iter().copied().find(|node| node.is_selected())
}

/// Returns the members of `layer` ordered by ascending y of their current
/// position. The sort is stable, so nodes at equal y keep input order.
pub fn sorted_layer<'a>(layer: usize, nodes: &[&'a Node]) -> Vec<&'a Node> {
    let mut members = nodes_in_layer(layer, nodes);
    members.sort_by(|a, b| a.position().y().total_cmp(&b.position().y()));
    members
}
