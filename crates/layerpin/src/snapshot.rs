//! Input format for a laid-out diagram.
//!
//! A [`Snapshot`] is what the automatic layout engine hands over after a run:
//! every node with its geometry, layer and in-layer position, pinned
//! constraints and selection state, plus the edges between them. Nested
//! nodes describe inner hierarchical levels.
//!
//! ```
//! # use layerpin::snapshot::Snapshot;
//! let snapshot: Snapshot = serde_json::from_str(r#"{
//!     "nodes": [
//!         { "id": "a", "x": 0, "y": 0, "width": 20, "height": 10, "layer_id": 0, "pos_id": 0 },
//!         { "id": "b", "x": 60, "y": 0, "width": 20, "height": 10, "layer_id": 1, "pos_id": 0,
//!           "layer_cons": 1 }
//!     ],
//!     "edges": [ { "source": "a", "target": "b" } ]
//! }"#).unwrap();
//! assert_eq!(snapshot.nodes.len(), 2);
//! ```

use log::trace;
use serde::Deserialize;

use layerpin_core::{
    geometry::{Point, Size},
    identifier::Id,
    node::Node,
};

use crate::error::LayerPinError;

/// A laid-out diagram: the root level's nodes and all edges.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub nodes: Vec<SnapshotNode>,
    #[serde(default)]
    pub edges: Vec<SnapshotEdge>,
}

/// One node of a [`Snapshot`].
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotNode {
    pub id: Id,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub layer_id: usize,
    pub pos_id: usize,
    #[serde(default)]
    pub layer_cons: Option<usize>,
    #[serde(default)]
    pub pos_cons: Option<usize>,
    #[serde(default)]
    pub shadow: Option<SnapshotPoint>,
    #[serde(default)]
    pub selected: bool,
    /// Nodes one hierarchical level below this one.
    #[serde(default)]
    pub children: Vec<SnapshotNode>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SnapshotPoint {
    pub x: f32,
    pub y: f32,
}

/// A directed edge between two nodes, named by id.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotEdge {
    #[serde(default)]
    pub id: Option<Id>,
    pub source: Id,
    pub target: Id,
}

impl Snapshot {
    /// Parses a snapshot from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`LayerPinError::Snapshot`] if `json` is not a valid snapshot.
    pub fn from_json(json: &str) -> Result<Self, LayerPinError> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|err| LayerPinError::Snapshot(err.to_string()))?;
        trace!(nodes = snapshot.nodes.len(), edges = snapshot.edges.len(); "Parsed snapshot");
        Ok(snapshot)
    }
}

impl SnapshotNode {
    /// Converts the node's own fields into a [`Node`], ignoring children.
    pub fn to_node(&self) -> Node {
        Node::new(
            self.id,
            Point::new(self.x, self.y),
            Size::new(self.width, self.height),
        )
        .with_layer(self.layer_id)
        .with_pos(self.pos_id)
        .with_layer_cons(self.layer_cons)
        .with_pos_cons(self.pos_cons)
        .with_shadow(self.shadow.map(|p| Point::new(p.x, p.y)))
        .with_selected(self.selected)
    }
}
