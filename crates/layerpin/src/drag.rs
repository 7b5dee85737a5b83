//! One drag gesture from pick-up to drop.
//!
//! A [`DragSession`] drives the queries of this crate the way an interactive
//! handler calls them: [`DragSession::begin`] when the pointer grabs a node,
//! [`DragSession::preview`] on every pointer move, and finally
//! [`DragSession::commit`] or [`DragSession::cancel`].
//!
//! While the session is open the dragged node's position follows the pointer
//! and its shadow keeps the location it was picked up from, so the layer
//! bands returned by each preview stay where they were.

use log::{debug, info, trace};
use petgraph::graph::NodeIndex;
use serde::Serialize;

use layerpin_core::geometry::{LayerBounds, Point};

use crate::{
    action::{ConstraintAction, RelayoutRequest},
    classify::{classify_layer, position_in_layer},
    config::AppConfig,
    error::LayerPinError,
    forbidden::{forbidden_layers, is_layer_forbidden},
    graph::LayeredGraph,
    layers::compute_layers,
    query::sorted_layer,
    resolve::{resolve_layer_constraint, resolve_position_index},
};

/// Where the dragged node would land if dropped now.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropPreview {
    /// Bands of the node's level, for drawing drop-target guides.
    pub layers: Vec<LayerBounds>,
    /// Layer under the pointer before promotion.
    pub candidate_layer: usize,
    /// Layer the node would be pinned to.
    pub layer: usize,
    /// Slot under the pointer inside `candidate_layer` before promotion.
    pub candidate_position: usize,
    /// Slot the node would be pinned to.
    pub position: usize,
    /// Whether a pinned neighbor claims `candidate_layer`.
    pub forbidden: bool,
    /// Every layer a pinned neighbor claims.
    pub forbidden_layers: Vec<usize>,
    /// Whether `candidate_layer` is a new trailing layer.
    pub new_layer: bool,
}

/// An open drag gesture on one node.
#[derive(Debug)]
pub struct DragSession {
    node: NodeIndex,
    origin: Point,
    padding: f32,
    refuse_forbidden: bool,
    last: Option<DropPreview>,
}

impl DragSession {
    /// Picks up `node`: selects it, deselects the rest of its level and
    /// records its current position as the shadow.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not part of `graph`.
    pub fn begin(graph: &mut LayeredGraph, node: NodeIndex) -> Self {
        let origin = graph.node(node).position();

        let others: Vec<NodeIndex> = graph
            .level_of(node)
            .node_indices()
            .filter(|&idx| idx != node && graph.node(idx).is_selected())
            .collect();
        for idx in others {
            graph.set_selected(idx, false);
        }

        graph.set_selected(node, true);
        graph.set_shadow(node, Some(origin));
        debug!(node:% = graph.node(node).id(), origin:?; "Drag started");

        let config = AppConfig::default();
        Self {
            node,
            origin,
            padding: config.layers().padding(),
            refuse_forbidden: config.interaction().refuse_forbidden(),
            last: None,
        }
    }

    /// Applies the layer and interaction settings of `config`.
    pub fn with_config(mut self, config: &AppConfig) -> Self {
        self.padding = config.layers().padding();
        self.refuse_forbidden = config.interaction().refuse_forbidden();
        self
    }

    /// Returns the dragged node.
    pub fn node(&self) -> NodeIndex {
        self.node
    }

    /// Returns the latest preview, if the pointer has moved since `begin`.
    pub fn last_preview(&self) -> Option<&DropPreview> {
        self.last.as_ref()
    }

    /// Moves the dragged node to `position` and classifies the drop there.
    pub fn preview(&mut self, graph: &mut LayeredGraph, position: Point) -> DropPreview {
        graph.set_position(self.node, position);

        let nodes = graph.level_of(self.node).nodes();
        let dragged = graph.node(self.node);

        let layers = compute_layers(&nodes, self.padding);
        let candidate_layer = classify_layer(dragged, &nodes, &layers);
        let layer = resolve_layer_constraint(dragged, &nodes, candidate_layer);

        let members = sorted_layer(candidate_layer, &nodes);
        let already_in_layer = members.iter().any(|member| member.id() == dragged.id());
        let candidate_position = position_in_layer(&members, dragged);
        let position = resolve_position_index(candidate_position, already_in_layer, &members);

        let preview = DropPreview {
            new_layer: candidate_layer == layers.len(),
            layers,
            candidate_layer,
            layer,
            candidate_position,
            position,
            forbidden: is_layer_forbidden(graph, self.node, candidate_layer),
            forbidden_layers: forbidden_layers(graph, self.node),
        };

        trace!(
            node:% = dragged.id(),
            candidate_layer,
            layer,
            candidate_position,
            position,
            forbidden = preview.forbidden;
            "Drag preview"
        );

        self.last = Some(preview.clone());
        preview
    }

    /// Drops the node at the last previewed location.
    ///
    /// Clears the shadow and the selection. Unless the drop is forbidden and
    /// forbidden drops are refused, derives the constraint action for the
    /// drop, applies it to `graph` and hands it to `relayout`:
    ///
    /// - layer and position changed: a static constraint,
    /// - only the layer changed: a layer constraint,
    /// - only the position changed: a position constraint,
    /// - nothing changed: no action.
    ///
    /// When no action results, no relayout will move the node either, so it
    /// returns to where it was picked up, as with [`DragSession::cancel`].
    ///
    /// Returns the action, if any.
    ///
    /// # Errors
    ///
    /// Returns the error of `relayout` if the action could not be delivered.
    pub fn commit(
        self,
        graph: &mut LayeredGraph,
        relayout: &mut impl RelayoutRequest,
    ) -> Result<Option<ConstraintAction>, LayerPinError> {
        graph.set_shadow(self.node, None);
        graph.set_selected(self.node, false);

        let Some(preview) = self.last else {
            debug!(node:% = graph.node(self.node).id(); "Dropped without moving");
            return Ok(None);
        };

        let node = graph.node(self.node);
        if preview.forbidden && self.refuse_forbidden {
            info!(
                node:% = node.id(),
                layer = preview.candidate_layer;
                "Refused drop into forbidden layer"
            );
            graph.set_position(self.node, self.origin);
            return Ok(None);
        }

        let id = node.id();
        let layer_changed = preview.layer != node.layer_id();
        let position_changed = preview.position != node.pos_id();
        let action = match (layer_changed, position_changed) {
            (true, true) => ConstraintAction::SetStaticConstraint {
                id,
                layer: preview.candidate_layer,
                layer_cons: preview.layer,
                position: preview.candidate_position,
                pos_cons: preview.position,
            },
            (true, false) => ConstraintAction::SetLayerConstraint {
                id,
                layer: preview.candidate_layer,
                layer_cons: preview.layer,
            },
            (false, true) => ConstraintAction::SetPositionConstraint {
                id,
                position: preview.candidate_position,
                pos_cons: preview.position,
            },
            (false, false) => {
                debug!(node:% = id; "Dropped at its own slot");
                graph.set_position(self.node, self.origin);
                return Ok(None);
            }
        };

        graph.apply(&action)?;
        relayout.request_relayout(&action)?;
        info!(node:% = id, kind = action.kind(); "Committed constraint");

        Ok(Some(action))
    }

    /// Abandons the gesture: the node returns to where it was picked up and
    /// loses its shadow and selection.
    pub fn cancel(self, graph: &mut LayeredGraph) {
        graph.set_position(self.node, self.origin);
        graph.set_shadow(self.node, None);
        graph.set_selected(self.node, false);
        debug!(node:% = graph.node(self.node).id(); "Drag cancelled");
    }
}
