//! Host seam: the design tool as seen by the plugin.
//!
//! DESIGN
//! ======
//! The document, the notification toast and the UI message channel all
//! belong to the host. The plugin reaches them only through [`Host`], reads
//! nodes by id every time it needs them, and never keeps node state between
//! calls.
//!
//! [`MemoryHost`] is a complete in-memory host backed by a [`DocStore`]. It
//! enforces the same rules a real design tool does (locked nodes, minimum
//! size, text auto-resize) and records everything the plugin did so callers
//! can inspect it.

#[cfg(test)]
#[path = "host_test.rs"]
mod tests;

use crate::consts::MIN_NODE_SIZE;
use crate::doc::{DocStore, NodeId, SceneNode, TextAutoResize};
use crate::message::OutboundMessage;

/// Fault raised by the host when it refuses a mutation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
    #[error("node is locked: {0}")]
    Locked(NodeId),
    #[error("node {id} does not support {operation}")]
    Unsupported { id: NodeId, operation: &'static str },
    #[error("invalid size {width}x{height}: both axes must be finite and at least 0.01")]
    InvalidSize { width: f64, height: f64 },
    #[error("text node {0} sizes itself; set auto-resize to NONE first")]
    AutoResizeActive(NodeId),
}

/// Size of the plugin's UI panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub width: u32,
    pub height: u32,
}

/// Everything the plugin may ask of its host.
pub trait Host {
    /// Currently selected nodes in selection order.
    fn selection(&self) -> Vec<&SceneNode>;

    /// Look up a node by id.
    fn node(&self, id: NodeId) -> Option<&SceneNode>;

    /// Resize a node's bounding box.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if the host rejects the resize.
    fn resize(&mut self, id: NodeId, width: f64, height: f64) -> Result<(), HostError>;

    /// Set a node's aspect-ratio lock.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if the node has no lock or cannot be edited.
    fn set_constrain_proportions(&mut self, id: NodeId, value: bool) -> Result<(), HostError>;

    /// Set a text node's auto-resize mode.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if the node is not text or cannot be edited.
    fn set_text_auto_resize(&mut self, id: NodeId, mode: TextAutoResize) -> Result<(), HostError>;

    /// Show a short user-visible notification.
    fn notify(&mut self, text: &str);

    /// Post a message to the UI panel.
    fn post_message(&mut self, message: &OutboundMessage);

    /// Open the UI panel.
    fn show_ui(&mut self, options: UiOptions);
}

// =============================================================================
// MEMORY HOST
// =============================================================================

/// A successful mutation recorded by [`MemoryHost`], in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    SetTextAutoResize { id: NodeId, mode: TextAutoResize },
    Resize { id: NodeId, width: f64, height: f64 },
    SetConstrainProportions { id: NodeId, value: bool },
}

/// In-memory host backed by a [`DocStore`].
#[derive(Default)]
pub struct MemoryHost {
    pub doc: DocStore,
    ui: Option<UiOptions>,
    outbox: Vec<OutboundMessage>,
    notifications: Vec<String>,
    calls: Vec<HostCall>,
}

impl MemoryHost {
    #[must_use]
    pub fn new(doc: DocStore) -> Self {
        Self { doc, ..Self::default() }
    }

    /// Options the UI was last shown with, if it has been shown.
    #[must_use]
    pub fn ui(&self) -> Option<UiOptions> {
        self.ui
    }

    /// Messages posted to the panel and not yet drained.
    #[must_use]
    pub fn outbox(&self) -> &[OutboundMessage] {
        &self.outbox
    }

    /// Notifications shown and not yet drained.
    #[must_use]
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// Every successful mutation so far.
    #[must_use]
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn drain_outbox(&mut self) -> Vec<OutboundMessage> {
        std::mem::take(&mut self.outbox)
    }

    pub fn drain_notifications(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notifications)
    }

    /// Resolve a node for mutation, rejecting unknown and locked nodes.
    fn editable(&mut self, id: NodeId) -> Result<&mut SceneNode, HostError> {
        let node = self.doc.get_mut(&id).ok_or(HostError::NodeNotFound(id))?;
        if node.locked {
            return Err(HostError::Locked(id));
        }
        Ok(node)
    }
}

impl Host for MemoryHost {
    fn selection(&self) -> Vec<&SceneNode> {
        self.doc
            .selection()
            .iter()
            .filter_map(|id| self.doc.get(id))
            .collect()
    }

    fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.doc.get(&id)
    }

    fn resize(&mut self, id: NodeId, width: f64, height: f64) -> Result<(), HostError> {
        let node = self.editable(id)?;
        if !node.kind.supports_resize() {
            return Err(HostError::Unsupported { id, operation: "resize" });
        }
        if node.text_auto_resize.is_some_and(|mode| mode != TextAutoResize::None) {
            return Err(HostError::AutoResizeActive(id));
        }
        let valid = |v: f64| v.is_finite() && v >= MIN_NODE_SIZE;
        if !valid(width) || !valid(height) {
            return Err(HostError::InvalidSize { width, height });
        }
        node.width = width;
        node.height = height;
        self.calls.push(HostCall::Resize { id, width, height });
        Ok(())
    }

    fn set_constrain_proportions(&mut self, id: NodeId, value: bool) -> Result<(), HostError> {
        let node = self.editable(id)?;
        if !node.kind.supports_proportion_lock() {
            return Err(HostError::Unsupported { id, operation: "constrainProportions" });
        }
        node.constrain_proportions = value;
        self.calls.push(HostCall::SetConstrainProportions { id, value });
        Ok(())
    }

    fn set_text_auto_resize(&mut self, id: NodeId, mode: TextAutoResize) -> Result<(), HostError> {
        let node = self.editable(id)?;
        if !node.kind.is_text() {
            return Err(HostError::Unsupported { id, operation: "textAutoResize" });
        }
        node.text_auto_resize = Some(mode);
        self.calls.push(HostCall::SetTextAutoResize { id, mode });
        Ok(())
    }

    fn notify(&mut self, text: &str) {
        self.notifications.push(text.to_owned());
    }

    fn post_message(&mut self, message: &OutboundMessage) {
        self.outbox.push(message.clone());
    }

    fn show_ui(&mut self, options: UiOptions) {
        self.ui = Some(options);
    }
}
