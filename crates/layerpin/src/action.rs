//! Constraint actions handed to the layout engine.
//!
//! A committed drop is described by a [`ConstraintAction`]. The engine
//! applies it to its own [`LayeredGraph`](crate::graph::LayeredGraph) and
//! forwards it through a [`RelayoutRequest`] so the external layout engine
//! can store the constraint and run again.
//!
//! Actions serialize to JSON objects tagged by `kind`:
//!
//! ```
//! # use layerpin::action::ConstraintAction;
//! let action = ConstraintAction::SetLayerConstraint {
//!     id: "task".into(),
//!     layer: 2,
//!     layer_cons: 2,
//! };
//! assert_eq!(
//!     serde_json::to_string(&action).unwrap(),
//!     r#"{"kind":"setLayerConstraint","id":"task","layer":2,"layer_cons":2}"#
//! );
//! ```

use serde::Serialize;

use layerpin_core::identifier::Id;

use crate::error::LayerPinError;

/// A write or removal of the constraints pinned on one node.
///
/// `layer` and `position` are the slot the node was geometrically dropped
/// into; `layer_cons` and `pos_cons` are the values actually pinned after
/// promotion past other nodes' pending constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ConstraintAction {
    SetLayerConstraint {
        id: Id,
        layer: usize,
        layer_cons: usize,
    },
    SetPositionConstraint {
        id: Id,
        position: usize,
        pos_cons: usize,
    },
    /// Pins layer and position at once.
    SetStaticConstraint {
        id: Id,
        layer: usize,
        layer_cons: usize,
        position: usize,
        pos_cons: usize,
    },
    DeleteLayerConstraint {
        id: Id,
    },
    DeletePositionConstraint {
        id: Id,
    },
    DeleteStaticConstraint {
        id: Id,
    },
}

impl ConstraintAction {
    /// Returns the node the action targets.
    pub fn id(&self) -> Id {
        match *self {
            Self::SetLayerConstraint { id, .. }
            | Self::SetPositionConstraint { id, .. }
            | Self::SetStaticConstraint { id, .. }
            | Self::DeleteLayerConstraint { id }
            | Self::DeletePositionConstraint { id }
            | Self::DeleteStaticConstraint { id } => id,
        }
    }

    /// Returns the serialized `kind` tag of the action.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetLayerConstraint { .. } => "setLayerConstraint",
            Self::SetPositionConstraint { .. } => "setPositionConstraint",
            Self::SetStaticConstraint { .. } => "setStaticConstraint",
            Self::DeleteLayerConstraint { .. } => "deleteLayerConstraint",
            Self::DeletePositionConstraint { .. } => "deletePositionConstraint",
            Self::DeleteStaticConstraint { .. } => "deleteStaticConstraint",
        }
    }
}

/// Receiver of committed constraint actions, typically the bridge to the
/// external layout engine.
pub trait RelayoutRequest {
    /// Stores `action` and schedules a new layout run.
    ///
    /// # Errors
    ///
    /// Returns an error if the action could not be delivered.
    fn request_relayout(&mut self, action: &ConstraintAction) -> Result<(), LayerPinError>;
}

/// Collects actions in commit order.
impl RelayoutRequest for Vec<ConstraintAction> {
    fn request_relayout(&mut self, action: &ConstraintAction) -> Result<(), LayerPinError> {
        self.push(*action);
        Ok(())
    }
}
