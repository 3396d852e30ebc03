//! Document model: scene nodes, their capabilities, and the in-memory store.
//!
//! This module defines what lives on the design canvas (`SceneNode`,
//! `NodeKind`), the text auto-resize modes (`TextAutoResize`), and the store
//! that owns all live nodes plus the user's ordered selection (`DocStore`).
//!
//! Capabilities come from the node kind, not from inspecting node fields:
//! `NodeKind::supports_resize` and `NodeKind::supports_proportion_lock` are the
//! only places that decide what the ratio tooling may touch.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a scene node.
pub type NodeId = Uuid;

/// The kind of a scene node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Frame,
    Group,
    Component,
    Instance,
    Rectangle,
    Ellipse,
    Polygon,
    Star,
    Vector,
    Line,
    Text,
    /// Export region. Resizable, but carries no proportion lock.
    Slice,
    /// Canvas section. Only resizable through its own layout, never directly.
    Section,
    /// Whiteboard sticky note with a fixed footprint.
    Sticky,
    /// Connector between two nodes; its bounds follow the endpoints.
    Connector,
}

impl NodeKind {
    /// Whether nodes of this kind accept an explicit `resize(width, height)`.
    #[must_use]
    pub fn supports_resize(self) -> bool {
        !matches!(self, Self::Section | Self::Sticky | Self::Connector)
    }

    /// Whether nodes of this kind carry a `constrain_proportions` flag.
    #[must_use]
    pub fn supports_proportion_lock(self) -> bool {
        self.supports_resize() && self != Self::Slice
    }

    /// Whether nodes of this kind hold text with an auto-resize mode.
    #[must_use]
    pub fn is_text(self) -> bool {
        self == Self::Text
    }
}

/// How a text node's box follows its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAutoResize {
    /// Fixed box; explicit sizing applies.
    None,
    /// Box grows in both directions with the content.
    WidthAndHeight,
    /// Fixed width, height follows the content.
    Height,
    /// Fixed box, overflowing text is truncated.
    Truncate,
}

/// A node as stored in the document and in scene files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    /// Unique identifier for this node.
    pub id: NodeId,
    /// Layer name shown in the editor.
    #[serde(default)]
    pub name: String,
    /// Node type, which determines its capabilities.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Width of the bounding box.
    pub width: f64,
    /// Height of the bounding box.
    pub height: f64,
    /// Aspect-ratio lock for manual edits. Meaningless for kinds without one.
    #[serde(default)]
    pub constrain_proportions: bool,
    /// Auto-resize mode. Present on text nodes only.
    #[serde(default)]
    pub text_auto_resize: Option<TextAutoResize>,
    /// Locked nodes reject every mutation.
    #[serde(default)]
    pub locked: bool,
}

impl SceneNode {
    /// Build an unlocked node with a fresh id. Text nodes start in
    /// `WIDTH_AND_HEIGHT` auto-resize mode, as a freshly typed label does.
    #[must_use]
    pub fn new(kind: NodeKind, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            kind,
            width,
            height,
            constrain_proportions: false,
            text_auto_resize: kind.is_text().then_some(TextAutoResize::WidthAndHeight),
            locked: false,
        }
    }
}

/// A serialized document: every node plus the ordered selection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
    #[serde(default)]
    pub selection: Vec<NodeId>,
}

/// In-memory store of scene nodes and the current selection.
pub struct DocStore {
    nodes: HashMap<NodeId, SceneNode>,
    selection: Vec<NodeId>,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: HashMap::new(), selection: Vec::new() }
    }

    /// Insert or replace a node. If a node with the same `id` already exists
    /// it is overwritten.
    pub fn insert(&mut self, node: SceneNode) {
        self.nodes.insert(node.id, node);
    }

    /// Return a reference to a node by id.
    #[must_use]
    pub fn get(&self, id: &NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    /// Return a mutable reference to a node by id.
    pub fn get_mut(&mut self, id: &NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id)
    }

    /// Replace the selection. Order is kept as given; unknown ids and repeats
    /// after the first occurrence are dropped.
    pub fn set_selection(&mut self, ids: Vec<NodeId>) {
        let mut ordered: Vec<NodeId> = Vec::with_capacity(ids.len());
        for id in ids {
            if self.nodes.contains_key(&id) && !ordered.contains(&id) {
                ordered.push(id);
            }
        }
        self.selection = ordered;
    }

    /// Ids of the selected nodes in selection order.
    #[must_use]
    pub fn selection(&self) -> &[NodeId] {
        &self.selection
    }

    /// Replace all nodes and the selection with a scene snapshot.
    pub fn load_scene(&mut self, scene: Scene) {
        self.nodes.clear();
        for node in scene.nodes {
            self.nodes.insert(node.id, node);
        }
        self.set_selection(scene.selection);
    }
}

impl Default for DocStore {
    fn default() -> Self {
        Self::new()
    }
}
