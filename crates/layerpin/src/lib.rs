//! LayerPin - Interactive layer and position constraints for layered diagrams.
//!
//! When a user drags a node of an automatically laid-out, layered drawing,
//! this crate decides which layer and which slot inside that layer the drop
//! corresponds to, promotes that choice past constraints other nodes have
//! pinned but the layout has not honored yet, refuses layers a connected
//! pinned node already claims, and derives the layer bands a front end draws
//! as drop guides.
//!
//! All queries are synchronous and never reorder their input. The external
//! layout engine is only reached through [`action::RelayoutRequest`].
//!
//! # Example
//!
//! ```
//! use layerpin::{DragSession, LayeredGraph, snapshot::Snapshot};
//! use layerpin_core::geometry::Point;
//!
//! let snapshot: Snapshot = serde_json::from_str(r#"{
//!     "nodes": [
//!         { "id": "lib_a", "x": 0, "y": 0, "width": 20, "height": 10, "layer_id": 0, "pos_id": 0 },
//!         { "id": "lib_b", "x": 60, "y": 0, "width": 20, "height": 10, "layer_id": 1, "pos_id": 0 }
//!     ],
//!     "edges": []
//! }"#).unwrap();
//! let mut graph = LayeredGraph::from_snapshot(&snapshot).unwrap();
//! let a = graph.node_index("lib_a".into()).unwrap();
//!
//! let mut session = DragSession::begin(&mut graph, a);
//! let preview = session.preview(&mut graph, Point::new(60.0, 20.0));
//! assert_eq!(preview.layer, 1);
//!
//! let mut requests = Vec::new();
//! let action = session.commit(&mut graph, &mut requests).unwrap();
//! assert!(action.is_some());
//! assert_eq!(graph.node(a).layer_cons(), Some(1));
//! ```

pub mod action;
pub mod classify;
pub mod config;
pub mod drag;
pub mod forbidden;
pub mod graph;
pub mod layers;
pub mod query;
pub mod resolve;
pub mod snapshot;

mod error;

pub use layerpin_core::{geometry, identifier, node};
pub use petgraph::graph::NodeIndex;

pub use action::{ConstraintAction, RelayoutRequest};
pub use drag::{DragSession, DropPreview};
pub use error::LayerPinError;
pub use graph::{LayeredGraph, Level};
