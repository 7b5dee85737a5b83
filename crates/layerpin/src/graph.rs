//! Arena of placement nodes and the edges between them.
//!
//! [`LayeredGraph`] owns every node and edge of a laid-out diagram. Edges
//! store endpoint indices rather than references, and every node belongs to
//! exactly one [`ContainmentScope`]: the hierarchical level formed by the
//! children of one container (or by the top-level nodes). All layer queries
//! run over a single scope, exposed as a borrowed [`Level`].

use std::collections::HashMap;

use indexmap::IndexMap;
use log::{debug, trace};
use petgraph::{
    Direction,
    graph::{DiGraph, EdgeIndex, NodeIndex},
};

use layerpin_core::{
    geometry::Point,
    identifier::Id,
    node::{Edge, Node},
};

use crate::{
    action::ConstraintAction,
    error::LayerPinError,
    snapshot::{Snapshot, SnapshotNode},
};

/// The nodes sharing one container.
#[derive(Debug)]
pub struct ContainmentScope {
    container: Option<NodeIndex>,
    nodes: Vec<NodeIndex>,
}

impl ContainmentScope {
    fn new(container: Option<NodeIndex>) -> Self {
        Self {
            container,
            nodes: Vec::new(),
        }
    }

    /// Returns the container node, or `None` for the top-level scope.
    pub fn container(&self) -> Option<NodeIndex> {
        self.container
    }

    /// Returns an iterator over all node indices in this scope.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter().copied()
    }
}

/// A laid-out diagram: nodes, edges and their hierarchical levels.
#[derive(Debug)]
pub struct LayeredGraph {
    graph: DiGraph<Node, Edge>,
    node_id_map: IndexMap<Id, NodeIndex>,
    containment_scopes: Vec<ContainmentScope>,
    /// Index into `containment_scopes` for every node.
    node_scope: HashMap<NodeIndex, usize>,
    /// Index into `containment_scopes` for every container with children.
    container_scope: HashMap<NodeIndex, usize>,
}

impl Default for LayeredGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl LayeredGraph {
    /// Creates an empty graph with an empty top-level scope.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_id_map: IndexMap::new(),
            containment_scopes: vec![ContainmentScope::new(None)],
            node_scope: HashMap::new(),
            container_scope: HashMap::new(),
        }
    }

    /// Builds the arena from a snapshot and checks it is consistent.
    ///
    /// # Errors
    ///
    /// Returns [`LayerPinError::DuplicateNode`] if two nodes share an id,
    /// [`LayerPinError::UnknownNode`] if an edge names a node that does not
    /// exist, and [`LayerPinError::SparseLayers`] if the layer ids of some
    /// scope are not a dense sequence starting at zero.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, LayerPinError> {
        let mut graph = Self::new();

        for node in &snapshot.nodes {
            graph.add_snapshot_node(None, node)?;
        }

        for edge in &snapshot.edges {
            let edge_idx = graph.add_edge(edge.source, edge.target)?;
            if let Some(id) = edge.id {
                graph.graph[edge_idx] = Edge::new(Some(id));
            }
        }

        graph.validate()?;

        debug!(
            nodes = graph.graph.node_count(),
            edges = graph.graph.edge_count(),
            scopes = graph.containment_scopes.len();
            "Built layered graph from snapshot"
        );

        Ok(graph)
    }

    fn add_snapshot_node(
        &mut self,
        container: Option<NodeIndex>,
        node: &SnapshotNode,
    ) -> Result<NodeIndex, LayerPinError> {
        let idx = self.add_node(container, node.to_node())?;
        for child in &node.children {
            self.add_snapshot_node(Some(idx), child)?;
        }
        Ok(idx)
    }

    /// Adds a node below `container` (or at the top level).
    ///
    /// # Errors
    ///
    /// Returns [`LayerPinError::DuplicateNode`] if the id is already taken.
    pub fn add_node(
        &mut self,
        container: Option<NodeIndex>,
        node: Node,
    ) -> Result<NodeIndex, LayerPinError> {
        let id = node.id();
        if self.node_id_map.contains_key(&id) {
            return Err(LayerPinError::DuplicateNode(id));
        }

        let scope_idx = match container {
            None => 0,
            Some(container) => *self.container_scope.entry(container).or_insert_with(|| {
                self.containment_scopes
                    .push(ContainmentScope::new(Some(container)));
                self.containment_scopes.len() - 1
            }),
        };

        let idx = self.graph.add_node(node);
        self.node_id_map.insert(id, idx);
        self.node_scope.insert(idx, scope_idx);
        self.containment_scopes[scope_idx].nodes.push(idx);

        trace!(node_id:% = id, scope = scope_idx; "Added node");
        Ok(idx)
    }

    /// Adds a directed edge between two nodes named by id.
    ///
    /// # Errors
    ///
    /// Returns [`LayerPinError::UnknownNode`] if either endpoint is missing.
    pub fn add_edge(&mut self, source: Id, target: Id) -> Result<EdgeIndex, LayerPinError> {
        let source_idx = self
            .node_index(source)
            .ok_or(LayerPinError::UnknownNode(source))?;
        let target_idx = self
            .node_index(target)
            .ok_or(LayerPinError::UnknownNode(target))?;
        Ok(self.graph.add_edge(source_idx, target_idx, Edge::new(None)))
    }

    /// Checks that every scope has dense, zero-based layer ids.
    ///
    /// # Errors
    ///
    /// Returns [`LayerPinError::SparseLayers`] naming the first gap found.
    pub fn validate(&self) -> Result<(), LayerPinError> {
        for scope in &self.containment_scopes {
            let mut layer_ids: Vec<usize> = scope
                .node_indices()
                .map(|idx| self.graph[idx].layer_id())
                .collect();
            layer_ids.sort_unstable();
            layer_ids.dedup();

            if let Some((expected, &found)) = layer_ids
                .iter()
                .enumerate()
                .find(|(expected, found)| *expected != **found)
            {
                let scope_name = scope
                    .container()
                    .map_or_else(|| "root".to_string(), |c| self.graph[c].id().as_string());
                return Err(LayerPinError::SparseLayers {
                    scope: scope_name,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }

    /// Looks up a node index by id.
    pub fn node_index(&self, id: Id) -> Option<NodeIndex> {
        self.node_id_map.get(&id).copied()
    }

    /// Returns the node stored at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not belong to this graph.
    pub fn node(&self, idx: NodeIndex) -> &Node {
        self.graph
            .node_weight(idx)
            .expect("Node index should exist")
    }

    fn node_mut(&mut self, idx: NodeIndex) -> &mut Node {
        self.graph
            .node_weight_mut(idx)
            .expect("Node index should exist")
    }

    /// Returns an iterator over all node indices, in insertion order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.node_id_map.values().copied()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn containment_scopes(&self) -> &[ContainmentScope] {
        &self.containment_scopes
    }

    /// Returns the top-level scope.
    pub fn root_level(&self) -> Level<'_> {
        Level {
            graph: self,
            scope: &self.containment_scopes[0],
        }
    }

    /// Returns the scope `idx` belongs to.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not belong to this graph.
    pub fn level_of(&self, idx: NodeIndex) -> Level<'_> {
        let scope_idx = *self
            .node_scope
            .get(&idx)
            .expect("Node index should have a scope");
        Level {
            graph: self,
            scope: &self.containment_scopes[scope_idx],
        }
    }

    /// Returns the scope formed by the children of `idx`, if it has any.
    pub fn children_level(&self, idx: NodeIndex) -> Option<Level<'_>> {
        self.container_scope.get(&idx).map(|&scope_idx| Level {
            graph: self,
            scope: &self.containment_scopes[scope_idx],
        })
    }

    /// Returns the direct children of `idx`.
    pub fn children(&self, idx: NodeIndex) -> impl Iterator<Item = &Node> + '_ {
        self.children_level(idx)
            .into_iter()
            .flat_map(|level| level.node_indices())
            .map(|child| self.node(child))
    }

    /// Returns true iff a direct child of `idx` is selected.
    pub fn has_selected_child(&self, idx: NodeIndex) -> bool {
        self.children(idx).any(Node::is_selected)
    }

    /// Returns the nodes connected to `idx` by an outgoing or incoming edge
    /// that live in the same scope. Targets of outgoing edges come first.
    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        let scope = self.node_scope.get(&idx).copied();
        self.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .chain(self.graph.neighbors_directed(idx, Direction::Incoming))
            .filter(move |neighbor| self.node_scope.get(neighbor).copied() == scope)
    }

    /// Moves a node to a new position without touching its shadow.
    pub fn set_position(&mut self, idx: NodeIndex, position: Point) {
        self.node_mut(idx).set_position(position);
    }

    pub fn set_shadow(&mut self, idx: NodeIndex, shadow: Option<Point>) {
        self.node_mut(idx).set_shadow(shadow);
    }

    pub fn set_selected(&mut self, idx: NodeIndex, selected: bool) {
        self.node_mut(idx).set_selected(selected);
    }

    /// Writes or clears the constraints described by `action`.
    ///
    /// # Errors
    ///
    /// Returns [`LayerPinError::UnknownNode`] if the action names a node that
    /// is not part of the graph.
    pub fn apply(&mut self, action: &ConstraintAction) -> Result<(), LayerPinError> {
        let id = action.id();
        let idx = self.node_index(id).ok_or(LayerPinError::UnknownNode(id))?;
        let node = self.node_mut(idx);

        match *action {
            ConstraintAction::SetLayerConstraint { layer_cons, .. } => {
                node.set_layer_cons(Some(layer_cons));
            }
            ConstraintAction::SetPositionConstraint { pos_cons, .. } => {
                node.set_pos_cons(Some(pos_cons));
            }
            ConstraintAction::SetStaticConstraint {
                layer_cons,
                pos_cons,
                ..
            } => {
                node.set_layer_cons(Some(layer_cons));
                node.set_pos_cons(Some(pos_cons));
            }
            ConstraintAction::DeleteLayerConstraint { .. } => node.set_layer_cons(None),
            ConstraintAction::DeletePositionConstraint { .. } => node.set_pos_cons(None),
            ConstraintAction::DeleteStaticConstraint { .. } => {
                node.set_layer_cons(None);
                node.set_pos_cons(None);
            }
        }

        debug!(action:?; "Applied constraint action");
        Ok(())
    }
}

/// A borrowed view of one hierarchical level of a [`LayeredGraph`].
#[derive(Debug, Clone, Copy)]
pub struct Level<'a> {
    graph: &'a LayeredGraph,
    scope: &'a ContainmentScope,
}

impl<'a> Level<'a> {
    /// Returns the container of this level, or `None` for the top level.
    pub fn container(&self) -> Option<NodeIndex> {
        self.scope.container()
    }

    pub fn node_indices(self) -> impl Iterator<Item = NodeIndex> + 'a {
        self.scope.node_indices()
    }

    /// Returns the nodes of this level in insertion order.
    pub fn nodes(&self) -> Vec<&'a Node> {
        let graph = self.graph;
        self.scope.node_indices().map(|idx| graph.node(idx)).collect()
    }

    pub fn len(&self) -> usize {
        self.scope.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scope.nodes.is_empty()
    }

    pub fn contains(&self, idx: NodeIndex) -> bool {
        self.scope.nodes.contains(&idx)
    }
}
