//! Ratio applicator.
//!
//! Validates the dimensions requested by the panel and resizes every
//! resizable node in the selection to them, locking proportions on the nodes
//! that have a lock. Host faults are not caught: the first rejected mutation
//! aborts the batch and is returned to the caller as-is.

#[cfg(test)]
#[path = "ratio_test.rs"]
mod tests;

use tracing::{debug, info};

use crate::consts::{NOTIFY_APPLIED, NOTIFY_APPLIED_AND_LOCKED, NOTIFY_NOT_NUMBERS, NOTIFY_NOTHING_RESIZABLE};
use crate::doc::{NodeId, NodeKind, TextAutoResize};
use crate::host::{Host, HostError};
use crate::message::RatioRequest;
use crate::selection::{Dimensions, resizable_selection};

/// What [`apply_ratio`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// No resizable node was selected; nothing changed.
    NothingToResize,
    /// `resized` nodes were resized; `all_locked` if every one got a lock.
    Applied { resized: usize, all_locked: bool },
}

/// Check that both requested values are numbers.
///
/// Any JSON number passes, zero and negatives included. On failure the user
/// is notified and `None` is returned; the caller must stop there.
pub fn validate_dimensions<H: Host + ?Sized>(host: &mut H, request: &RatioRequest) -> Option<Dimensions> {
    let dims = request.dimensions();
    if dims.is_none() {
        debug!(width = %request.width, height = %request.height, "rejected non-numeric dimensions");
        host.notify(NOTIFY_NOT_NUMBERS);
    }
    dims
}

/// Resize every resizable selected node to `dims`.
///
/// Text nodes have auto-resize switched to `NONE` before the resize so the
/// explicit size sticks. Nodes with a proportion lock get it set to `true`,
/// regardless of its previous value. Exactly one notification is shown when
/// the batch completes.
///
/// # Errors
///
/// Returns the first [`HostError`] raised by the host. Nodes processed before
/// the fault keep their new size.
pub fn apply_ratio<H: Host + ?Sized>(host: &mut H, dims: Dimensions) -> Result<ApplyOutcome, HostError> {
    let targets: Vec<(NodeId, NodeKind)> = resizable_selection(&*host)
        .into_iter()
        .map(|node| (node.id, node.kind))
        .collect();

    if targets.is_empty() {
        host.notify(NOTIFY_NOTHING_RESIZABLE);
        return Ok(ApplyOutcome::NothingToResize);
    }

    for &(id, kind) in &targets {
        let auto_sized = host
            .node(id)
            .is_some_and(|node| node.kind.is_text() && node.text_auto_resize != Some(TextAutoResize::None));
        if auto_sized {
            host.set_text_auto_resize(id, TextAutoResize::None)?;
        }

        host.resize(id, dims.width, dims.height)?;

        if kind.supports_proportion_lock() {
            host.set_constrain_proportions(id, true)?;
        }
        debug!(%id, ?kind, width = dims.width, height = dims.height, "resized node");
    }

    let all_locked = targets.iter().all(|(_, kind)| kind.supports_proportion_lock());
    host.notify(if all_locked { NOTIFY_APPLIED_AND_LOCKED } else { NOTIFY_APPLIED });
    info!(count = targets.len(), all_locked, "applied ratio");

    Ok(ApplyOutcome::Applied { resized: targets.len(), all_locked })
}
