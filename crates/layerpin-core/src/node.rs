//! Placement model for nodes of a layered drawing.
//!
//! A [`Node`] carries the geometry produced by the last automatic layout run,
//! the layer and in-layer position that run assigned, and the constraints a
//! user pinned onto it. Constraints are optional values; there is no "-1"
//! sentinel anywhere in this model.
//!
//! While a node is dragged its `position` follows the pointer and its
//! `shadow` keeps the location it had before the drag started. Layer bands
//! are derived from the shadow ([`Node::anchor_position`]) so they stay put
//! during the gesture, while classification looks at the live position.

use crate::{
    geometry::{Bounds, Point, Size},
    identifier::Id,
};

/// A diagram element that can be placed manually inside a layered drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: Id,
    position: Point,
    size: Size,
    /// Pre-drag location, present only while the node is being dragged.
    shadow: Option<Point>,
    layer_id: usize,
    layer_cons: Option<usize>,
    pos_id: usize,
    pos_cons: Option<usize>,
    selected: bool,
}

impl Node {
    /// Creates an unconstrained, unselected node in layer 0, position 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use layerpin_core::{geometry::{Point, Size}, node::Node};
    ///
    /// let node = Node::new("a".into(), Point::new(0.0, 0.0), Size::new(20.0, 10.0))
    ///     .with_layer(1)
    ///     .with_layer_cons(Some(2));
    /// assert_eq!(node.layer_id(), 1);
    /// assert_eq!(node.layer_cons(), Some(2));
    /// assert!(node.has_pending_layer_cons());
    /// ```
    pub fn new(id: Id, position: Point, size: Size) -> Self {
        Self {
            id,
            position,
            size,
            shadow: None,
            layer_id: 0,
            layer_cons: None,
            pos_id: 0,
            pos_cons: None,
            selected: false,
        }
    }

    pub fn with_layer(mut self, layer_id: usize) -> Self {
        self.layer_id = layer_id;
        self
    }

    pub fn with_pos(mut self, pos_id: usize) -> Self {
        self.pos_id = pos_id;
        self
    }

    pub fn with_layer_cons(mut self, layer_cons: Option<usize>) -> Self {
        self.layer_cons = layer_cons;
        self
    }

    pub fn with_pos_cons(mut self, pos_cons: Option<usize>) -> Self {
        self.pos_cons = pos_cons;
        self
    }

    pub fn with_shadow(mut self, shadow: Option<Point>) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    /// Current top-left position; follows the pointer during a drag
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn shadow(&self) -> Option<Point> {
        self.shadow
    }

    /// Layer assigned by the last layout run
    pub fn layer_id(&self) -> usize {
        self.layer_id
    }

    /// User-pinned layer, if any
    pub fn layer_cons(&self) -> Option<usize> {
        self.layer_cons
    }

    /// Ordinal position inside the layer assigned by the last layout run
    pub fn pos_id(&self) -> usize {
        self.pos_id
    }

    /// User-pinned ordinal position inside the layer, if any
    pub fn pos_cons(&self) -> Option<usize> {
        self.pos_cons
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Returns true if a pinned layer exceeds the layer the node sits in now,
    /// i.e. the automatic layout has not caught up with the pin yet.
    pub fn has_pending_layer_cons(&self) -> bool {
        self.layer_cons.is_some_and(|cons| cons > self.layer_id)
    }

    /// Returns true if a pinned position exceeds the node's current position.
    pub fn has_pending_pos_cons(&self) -> bool {
        self.pos_cons.is_some_and(|cons| cons > self.pos_id)
    }

    /// The location that anchors the node's layer band: the shadow while
    /// dragging, the current position otherwise.
    pub fn anchor_position(&self) -> Point {
        self.shadow.unwrap_or(self.position)
    }

    /// The box spanned by the node at its anchor position.
    pub fn anchor_bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.anchor_position(), self.size)
    }

    /// Horizontal center of the node at its current position.
    pub fn center_x(&self) -> f32 {
        self.position.x() + self.size.width() / 2.0
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn set_shadow(&mut self, shadow: Option<Point>) {
        self.shadow = shadow;
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn set_layer_cons(&mut self, layer_cons: Option<usize>) {
        self.layer_cons = layer_cons;
    }

    pub fn set_pos_cons(&mut self, pos_cons: Option<usize>) {
        self.pos_cons = pos_cons;
    }
}

/// A directed relation between two nodes, used to enumerate neighbors.
///
/// Endpoints are stored by the owning graph; the edge itself only carries
/// its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    id: Option<Id>,
}

impl Edge {
    pub fn new(id: Option<Id>) -> Self {
        Self { id }
    }

    pub fn id(&self) -> Option<Id> {
        self.id
    }
}
