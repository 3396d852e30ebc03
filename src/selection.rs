//! Selection summarizer.
//!
//! Reads the live selection from the host, keeps the nodes that can be
//! resized, and reports whether they share one width and height. The result
//! is posted to the panel as `selection-info` at startup, on every selection
//! change, after a ratio is applied, and whenever the panel asks for it.

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;

use tracing::debug;

use crate::consts::DIMENSION_TOLERANCE;
use crate::doc::SceneNode;
use crate::host::Host;
use crate::message::OutboundMessage;

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// Summary of the current selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionStatus {
    /// Every selected node, resizable or not.
    pub selection_count: usize,
    /// Selected nodes that support resizing. Never exceeds `selection_count`.
    pub resizable_count: usize,
    /// Shared dimensions of the resizable nodes, if they agree.
    pub dimensions: Option<Dimensions>,
}

/// `true` when `a` and `b` differ by at most [`DIMENSION_TOLERANCE`].
#[must_use]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= DIMENSION_TOLERANCE
}

/// Selected nodes that support resizing, in selection order.
#[must_use]
pub fn resizable_selection<H: Host + ?Sized>(host: &H) -> Vec<&SceneNode> {
    host.selection()
        .into_iter()
        .filter(|node| node.kind.supports_resize())
        .collect()
}

/// Shared dimensions of `nodes`.
///
/// A single node passes through exactly. With several nodes the first one is
/// the baseline and every node must match it on both axes within tolerance.
#[must_use]
pub fn uniform_dimensions(nodes: &[&SceneNode]) -> Option<Dimensions> {
    let (first, rest) = nodes.split_first()?;
    let baseline = Dimensions { width: first.width, height: first.height };
    rest.iter()
        .all(|node| approx_equal(node.width, baseline.width) && approx_equal(node.height, baseline.height))
        .then_some(baseline)
}

/// Summarize the host's current selection.
#[must_use]
pub fn build_status<H: Host + ?Sized>(host: &H) -> SelectionStatus {
    let selection_count = host.selection().len();
    let resizable = resizable_selection(host);
    SelectionStatus {
        selection_count,
        resizable_count: resizable.len(),
        dimensions: uniform_dimensions(&resizable),
    }
}

/// Post the current selection summary to the panel.
pub fn publish_status<H: Host + ?Sized>(host: &mut H) {
    let status = build_status(&*host);
    debug!(
        selection = status.selection_count,
        resizable = status.resizable_count,
        uniform = status.dimensions.is_some(),
        "publishing selection-info"
    );
    host.post_message(&OutboundMessage::from(status));
}
