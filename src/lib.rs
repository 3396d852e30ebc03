//! Uniform width/height tooling for the selection in a design canvas.
//!
//! The plugin reads the host's current selection, reports whether the
//! resizable nodes in it share one size, and on request resizes all of them
//! to a given width and height, locking their proportions where the node
//! supports it. The design tool itself stays behind the [`host::Host`] trait;
//! [`host::MemoryHost`] provides an in-memory stand-in.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`plugin`] | Startup and dispatch of host events |
//! | [`selection`] | Selection summary and `selection-info` publishing |
//! | [`ratio`] | Dimension validation and ratio application |
//! | [`message`] | Panel message types and JSON codec |
//! | [`host`] | Host trait and the in-memory host |
//! | [`doc`] | Scene nodes, node capabilities, document store |
//! | [`config`] | Environment configuration |
//! | [`consts`] | Tolerances, defaults and notification texts |

pub mod config;
pub mod consts;
pub mod doc;
pub mod host;
pub mod message;
pub mod plugin;
pub mod ratio;
pub mod selection;
