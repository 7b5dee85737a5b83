//! Promotion of geometric candidates past pinned constraints.
//!
//! A constraint pinned on a node is only honored by the next layout run, so
//! until then the node may still sit in its old layer or slot. These
//! resolvers look at where such a pinned node will settle and move the
//! candidate of a dropped node along with it.

use log::debug;

use layerpin_core::node::Node;

use crate::query::nodes_in_layer;

/// Returns the layer `node` should actually be assigned when dropped into
/// `candidate`.
///
/// - If the candidate layer has members and its first member has a pending
///   layer constraint, the node follows that member to its pinned layer.
/// - If the candidate is a new trailing layer, the layer to its left is
///   consulted (or the one before it, if the left layer is empty). A pending
///   constraint on its first member pushes the candidate one layer past the
///   pinned layer.
/// - Otherwise the candidate is returned unchanged.
///
/// The result is never lower than `candidate`.
///
/// # Panics
///
/// Panics if `candidate` lies beyond the new trailing layer of `nodes`.
pub fn resolve_layer_constraint(node: &Node, nodes: &[&Node], candidate: usize) -> usize {
    let layer_count = nodes
        .iter()
        .map(|member| member.layer_id() + 1)
        .max()
        .unwrap_or(0);
    assert!(
        candidate <= layer_count,
        "Layer candidate {candidate} is beyond the {layer_count} layers of the level"
    );

    if let Some(first) = nodes_in_layer(candidate, nodes).first() {
        if let Some(cons) = first.layer_cons().filter(|_| first.has_pending_layer_cons()) {
            debug!(
                node:% = node.id(),
                candidate,
                pinned:% = first.id(),
                layer = cons;
                "Following pending layer constraint"
            );
            return cons;
        }
        return candidate;
    }

    let Some(left) = candidate.checked_sub(1) else {
        return candidate;
    };
    let mut left_nodes = nodes_in_layer(left, nodes);
    if left_nodes.is_empty() {
        left_nodes = match left.checked_sub(1) {
            Some(further_left) => nodes_in_layer(further_left, nodes),
            None => Vec::new(),
        };
    }

    match left_nodes.first() {
        Some(first) if first.has_pending_layer_cons() => {
            let layer = first.layer_cons().map_or(candidate, |cons| cons + 1);
            debug!(
                node:% = node.id(),
                candidate,
                pinned:% = first.id(),
                layer;
                "New layer placed behind pending layer constraint"
            );
            layer
        }
        _ => candidate,
    }
}

/// Returns the slot a node should actually take when inserted at
/// `candidate` into a layer whose members, ordered by ascending y, are
/// `layer_nodes`.
///
/// The member right above the candidate slot decides. If it has a pending
/// position constraint, the node is placed right after the slot that member
/// is pinned to. When the node already belonged to the layer and the upper
/// member currently holds the candidate slot, the node takes over the pinned
/// slot itself instead.
///
/// # Panics
///
/// Panics if `candidate` is larger than the number of members.
pub fn resolve_position_index(
    candidate: usize,
    already_in_layer: bool,
    layer_nodes: &[&Node],
) -> usize {
    assert!(
        candidate <= layer_nodes.len(),
        "Position candidate {candidate} is beyond the {} members of the layer",
        layer_nodes.len()
    );

    let Some(upper_index) = candidate.checked_sub(1) else {
        return candidate;
    };
    let upper = layer_nodes[upper_index];

    let Some(cons) = upper.pos_cons().filter(|_| upper.has_pending_pos_cons()) else {
        return candidate;
    };

    let position = if already_in_layer && upper.pos_id() == candidate {
        cons
    } else {
        cons + 1
    };
    debug!(candidate, pinned:% = upper.id(), position; "Following pending position constraint");
    position
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use layerpin_core::{
        geometry::{Point, Size},
        identifier::Id,
    };

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// Nodes of a dense level, each with an optional pinned layer.
    fn constrained_level_strategy() -> impl Strategy<Value = Vec<Node>> {
        prop::collection::vec(
            prop::collection::vec(prop::option::of(0usize..10), 1..4),
            1..6,
        )
        .prop_map(|columns| {
            let mut nodes = Vec::new();
            for (layer, column) in columns.iter().enumerate() {
                for (pos, layer_cons) in column.iter().enumerate() {
                    nodes.push(
                        Node::new(
                            Id::new(&format!("resolve_{layer}_{pos}")),
                            Point::new(layer as f32 * 60.0, pos as f32 * 30.0),
                            Size::new(20.0, 10.0),
                        )
                        .with_layer(layer)
                        .with_pos(pos)
                        .with_layer_cons(*layer_cons),
                    );
                }
            }
            nodes
        })
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Resolution never moves a candidate to a lower layer.
    fn check_promotion_is_monotone(nodes: &[Node]) -> Result<(), TestCaseError> {
        let refs: Vec<&Node> = nodes.iter().collect();
        let layer_count = nodes.iter().map(Node::layer_id).max().unwrap() + 1;

        for node in nodes {
            for candidate in 0..=layer_count {
                let resolved = resolve_layer_constraint(node, &refs, candidate);
                prop_assert!(
                    resolved >= candidate,
                    "candidate {} resolved down to {}",
                    candidate,
                    resolved
                );
            }
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn promotion_is_monotone(nodes in constrained_level_strategy()) {
            check_promotion_is_monotone(&nodes)?;
        }
    }
}
