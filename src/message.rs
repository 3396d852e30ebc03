//! Message protocol between the plugin and its UI panel.
//!
//! DESIGN
//! ======
//! Every message is a flat JSON object discriminated by its `type` field.
//! The panel sends `request-selection` and `apply-ratio`; the plugin answers
//! with `selection-info`. Inbound payloads keep `width`/`height` as raw JSON
//! values so validation can tell "not a number" apart from "missing".
//! Unknown `type` values decode to [`InboundMessage::Unknown`] and are
//! ignored by the dispatcher.

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::selection::{Dimensions, SelectionStatus};

/// Error returned by [`decode_inbound`].
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// The payload is not an object with a string `type` field.
    #[error("message has no string `type` field")]
    MissingType,
    /// The payload does not match a known message shape, or failed to encode.
    #[error("invalid message JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// INBOUND
// =============================================================================

/// A message sent by the UI panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InboundMessage {
    /// Ask for a fresh `selection-info`.
    RequestSelection,
    /// Resize the selection to the given dimensions.
    ApplyRatio(RatioRequest),
    /// Any other `type`; ignored.
    #[serde(other)]
    Unknown,
}

/// Requested dimensions, not yet validated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RatioRequest {
    #[serde(default)]
    pub width: Value,
    #[serde(default)]
    pub height: Value,
}

impl RatioRequest {
    /// Both values as numbers, or `None` if either is not a JSON number.
    #[must_use]
    pub fn dimensions(&self) -> Option<Dimensions> {
        let width = self.width.as_f64()?;
        let height = self.height.as_f64()?;
        Some(Dimensions { width, height })
    }
}

/// Decode a raw panel payload.
///
/// # Errors
///
/// Returns [`MessageError::MissingType`] when the payload has no string
/// `type`, and [`MessageError::Json`] when a known message is malformed.
pub fn decode_inbound(payload: &Value) -> Result<InboundMessage, MessageError> {
    if !payload.get("type").is_some_and(Value::is_string) {
        return Err(MessageError::MissingType);
    }
    Ok(InboundMessage::deserialize(payload)?)
}

// =============================================================================
// OUTBOUND
// =============================================================================

/// A message posted to the UI panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum OutboundMessage {
    #[serde(rename_all = "camelCase")]
    SelectionInfo {
        selection_count: usize,
        resizable_count: usize,
        width: Option<f64>,
        height: Option<f64>,
    },
}

impl From<SelectionStatus> for OutboundMessage {
    fn from(status: SelectionStatus) -> Self {
        let (width, height) = match status.dimensions {
            Some(dims) => (Some(dims.width), Some(dims.height)),
            None => (None, None),
        };
        Self::SelectionInfo {
            selection_count: status.selection_count,
            resizable_count: status.resizable_count,
            width,
            height,
        }
    }
}

/// Encode an outbound message as a JSON value.
///
/// # Errors
///
/// Returns [`MessageError::Json`] if serialization fails.
pub fn encode_outbound(message: &OutboundMessage) -> Result<Value, MessageError> {
    Ok(serde_json::to_value(message)?)
}
