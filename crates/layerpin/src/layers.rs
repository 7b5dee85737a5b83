//! Layer bands of one hierarchical level.
//!
//! [`compute_layers`] turns the layer assignment of the last layout run into
//! horizontal bands that tile the drawing. The bands are what a drag handler
//! draws as drop-target guides and what [`classify_layer`] tests the pointer
//! against.
//!
//! [`classify_layer`]: crate::classify::classify_layer

use log::trace;

use layerpin_core::{
    geometry::{Bounds, LayerBounds},
    node::Node,
};

/// Derives the band of every layer from node geometry.
///
/// The result is indexed by `layer_id`. Nodes are measured at their anchor
/// position, so a node being dragged still contributes the place it had
/// before the drag. Layer ids are expected to be dense and zero-based.
///
/// Adjacent bands share the midpoint between their raw extents as a common
/// edge. The outer edges of the first and last band are mirrored around the
/// band's `mid`; a lone layer is widened by `padding` on both sides instead.
/// Every band spans the vertical extent of the whole level.
///
/// Returns an empty list for an empty level.
///
/// # Examples
///
/// ```
/// # use layerpin::layers::compute_layers;
/// # use layerpin_core::{geometry::{Point, Size}, node::Node};
/// let a = Node::new("doc_a".into(), Point::new(0.0, 0.0), Size::new(30.0, 10.0));
/// let b = Node::new("doc_b".into(), Point::new(60.0, 0.0), Size::new(20.0, 10.0)).with_layer(1);
///
/// let layers = compute_layers(&[&a, &b], 10.0);
/// assert_eq!(layers.len(), 2);
/// assert_eq!(layers[0].right_x(), 45.0);
/// assert_eq!(layers[1].left_x(), 45.0);
/// ```
pub fn compute_layers(nodes: &[&Node], padding: f32) -> Vec<LayerBounds> {
    let mut sorted = nodes.to_vec();
    sorted.sort_by_key(|node| node.layer_id());

    let Some(first) = sorted.first() else {
        return Vec::new();
    };

    let mut layers = Vec::new();
    let mut current = first.layer_id();
    let mut extent = Bounds::empty();
    let mut total = Bounds::empty();

    for node in &sorted {
        if node.layer_id() != current {
            layers.push(LayerBounds::from_extent(extent.min_x(), extent.max_x()));
            extent = Bounds::empty();
            current = node.layer_id();
        }

        let bounds = node.anchor_bounds();
        extent = extent.merge(&bounds);
        total = total.merge(&bounds);
    }
    layers.push(LayerBounds::from_extent(extent.min_x(), extent.max_x()));

    for i in 0..layers.len() - 1 {
        let left = layers[i].right_x();
        let right = layers[i + 1].left_x();
        let boundary = left + (right - left) / 2.0;
        layers[i].set_right_x(boundary);
        layers[i + 1].set_left_x(boundary);
    }

    if let [only] = layers.as_mut_slice() {
        only.set_left_x(only.left_x() - padding);
        only.set_right_x(only.right_x() + padding);
    } else {
        let first = &mut layers[0];
        first.set_left_x(first.mid() - (first.right_x() - first.mid()));

        let last_idx = layers.len() - 1;
        let last = &mut layers[last_idx];
        last.set_right_x(last.mid() + (last.mid() - last.left_x()));
    }

    for layer in &mut layers {
        layer.set_vertical(total.min_y(), total.max_y());
    }

    trace!(layers:?; "Computed layer bands");
    layers
}
