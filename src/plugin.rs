//! Plugin dispatcher: startup and the two host event handlers.
//!
//! DESIGN
//! ======
//! `RatioPlugin` owns its host and handles one event at a time through
//! `&mut self`, so every handler runs to completion before the next event is
//! looked at. It keeps no document state of its own; each handler re-reads
//! the selection from the host.

#[cfg(test)]
#[path = "plugin_test.rs"]
mod tests;

use serde_json::Value;
use tracing::{debug, info};

use crate::config::PluginConfig;
use crate::host::{Host, HostError};
use crate::message::{InboundMessage, decode_inbound};
use crate::ratio::{apply_ratio, validate_dimensions};
use crate::selection::publish_status;

/// Events delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// The user changed the selection. Carries no payload.
    SelectionChanged,
    /// The UI panel posted a message.
    Message(Value),
}

pub struct RatioPlugin<H: Host> {
    host: H,
    config: PluginConfig,
}

impl<H: Host> RatioPlugin<H> {
    #[must_use]
    pub fn new(host: H, config: PluginConfig) -> Self {
        Self { host, config }
    }

    /// Open the panel and send the initial selection summary.
    pub fn start(&mut self) {
        info!(width = self.config.ui.width, height = self.config.ui.height, "showing ratio panel");
        self.host.show_ui(self.config.ui);
        publish_status(&mut self.host);
    }

    /// Dispatch one host event.
    ///
    /// # Errors
    ///
    /// Returns the [`HostError`] of a rejected mutation while applying a ratio.
    pub fn handle(&mut self, event: HostEvent) -> Result<(), HostError> {
        match event {
            HostEvent::SelectionChanged => {
                self.on_selection_change();
                Ok(())
            }
            HostEvent::Message(payload) => self.on_message(&payload),
        }
    }

    pub fn on_selection_change(&mut self) {
        publish_status(&mut self.host);
    }

    /// Handle one panel message. Unknown or undecodable messages are ignored.
    ///
    /// # Errors
    ///
    /// Returns the [`HostError`] of a rejected mutation while applying a ratio.
    pub fn on_message(&mut self, payload: &Value) -> Result<(), HostError> {
        let message = match decode_inbound(payload) {
            Ok(message) => message,
            Err(e) => {
                debug!(error = %e, "ignoring undecodable panel message");
                return Ok(());
            }
        };

        match message {
            InboundMessage::RequestSelection => publish_status(&mut self.host),
            InboundMessage::ApplyRatio(request) => {
                let Some(dims) = validate_dimensions(&mut self.host, &request) else {
                    return Ok(());
                };
                let outcome = apply_ratio(&mut self.host, dims)?;
                debug!(?outcome, width = dims.width, height = dims.height, "apply-ratio handled");
                publish_status(&mut self.host);
            }
            InboundMessage::Unknown => {
                debug!(kind = ?payload.get("type"), "ignoring unknown panel message");
            }
        }
        Ok(())
    }

    // --- Host access ---

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }
}
