//! Geometric classification of a moved node.
//!
//! Both functions answer "where would this node land" from geometry alone.
//! Pinned constraints of other nodes are applied afterwards by the
//! [`resolve`](crate::resolve) functions.

use log::trace;

use layerpin_core::{geometry::LayerBounds, node::Node};

use crate::query::nodes_in_layer;

/// Returns the layer whose band contains the x-center of `node`.
///
/// Bands are scanned left to right and the first one whose right edge lies
/// beyond the x-center wins, so a center exactly on a shared edge belongs to
/// the right-hand band. A center right of every band yields `layers.len()`,
/// a new trailing layer, except when the last layer's only member is `node`
/// itself and it is selected: dragging the sole occupant of the last layer
/// never opens a layer behind an empty one.
///
/// `layers` must be the bands of the level `nodes` belongs to, as returned by
/// [`compute_layers`](crate::layers::compute_layers).
pub fn classify_layer(node: &Node, nodes: &[&Node], layers: &[LayerBounds]) -> usize {
    let center_x = node.center_x();

    if let Some(layer) = layers.iter().position(|band| center_x < band.right_x()) {
        trace!(node:% = node.id(), center_x, layer; "Classified into existing layer");
        return layer;
    }

    let Some(last) = layers.len().checked_sub(1) else {
        return 0;
    };
    if let [only] = nodes_in_layer(last, nodes).as_slice() {
        if only.id() == node.id() && only.is_selected() {
            trace!(node:% = node.id(), layer = last; "Sole occupant stays in last layer");
            return last;
        }
    }

    trace!(node:% = node.id(), center_x, layer = layers.len(); "Classified into new trailing layer");
    layers.len()
}

/// Returns the ordinal slot of `target` among `layer_nodes`, ordered by
/// ascending y of their current position.
///
/// A member of the layer gets its own index. Any other node is placed before
/// the first member lying strictly below it, or appended after the last one.
/// The input slice is not reordered.
pub fn position_in_layer(layer_nodes: &[&Node], target: &Node) -> usize {
    let mut sorted = layer_nodes.to_vec();
    sorted.sort_by(|a, b| a.position().y().total_cmp(&b.position().y()));

    if let Some(index) = sorted.iter().position(|member| member.id() == target.id()) {
        return index;
    }

    let y = target.position().y();
    sorted
        .iter()
        .position(|member| y < member.position().y())
        .unwrap_or(sorted.len())
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use layerpin_core::{
        geometry::{Point, Size},
        identifier::Id,
    };

    use super::*;
    use crate::{layers::compute_layers, query::sorted_layer};

    // ===================
    // Strategies
    // ===================

    /// Columns of nodes separated by gaps; `pos_id` follows ascending y.
    fn level_strategy() -> impl Strategy<Value = Vec<Node>> {
        prop::collection::vec(
            prop::collection::vec((0.0f32..20.0, 5.0f32..40.0, 5.0f32..30.0), 1..5),
            1..6,
        )
        .prop_map(|columns| {
            let mut nodes = Vec::new();
            let mut column_x = 0.0;
            for (layer, column) in columns.iter().enumerate() {
                let mut y = 0.0;
                let mut column_width: f32 = 0.0;
                for (pos, (indent, width, height)) in column.iter().enumerate() {
                    nodes.push(
                        Node::new(
                            Id::new(&format!("classify_{layer}_{pos}")),
                            Point::new(column_x + indent, y),
                            Size::new(*width, *height),
                        )
                        .with_layer(layer)
                        .with_pos(pos),
                    );
                    y += height + 10.0;
                    column_width = column_width.max(indent + width);
                }
                column_x += column_width + 30.0;
            }
            nodes
        })
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Absent a drag, every node classifies into the layer it sits in.
    fn check_classifies_into_own_layer(nodes: &[Node]) -> Result<(), TestCaseError> {
        let refs: Vec<&Node> = nodes.iter().collect();
        let layers = compute_layers(&refs, 10.0);

        for node in nodes {
            prop_assert_eq!(classify_layer(node, &refs, &layers), node.layer_id());
        }
        Ok(())
    }

    /// Absent a drag, every node's slot in its layer is its `pos_id`.
    fn check_position_is_pos_id(nodes: &[Node]) -> Result<(), TestCaseError> {
        let refs: Vec<&Node> = nodes.iter().collect();

        for node in nodes {
            let members = sorted_layer(node.layer_id(), &refs);
            prop_assert_eq!(position_in_layer(&members, node), node.pos_id());
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn classifies_into_own_layer(nodes in level_strategy()) {
            check_classifies_into_own_layer(&nodes)?;
        }

        #[test]
        fn position_is_pos_id(nodes in level_strategy()) {
            check_position_is_pos_id(&nodes)?;
        }
    }
}
