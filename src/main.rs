//! `ratiolock` — drives the ratio plugin against an in-memory scene.
//!
//! Loads a scene file, starts the plugin, then reads one host event per line
//! from stdin and prints everything the plugin posts or notifies as JSON lines
//! on stdout. Logs go to stderr.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use ratiolock::config::{ConfigError, PluginConfig};
use ratiolock::doc::{DocStore, NodeId, Scene};
use ratiolock::host::MemoryHost;
use ratiolock::message::{MessageError, encode_outbound};
use ratiolock::plugin::{HostEvent, RatioPlugin};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

#[derive(Debug, thiserror::Error)]
enum DriverError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to read scene {}: {source}", .path.display())]
    SceneRead { path: PathBuf, source: io::Error },
    #[error("invalid scene {}: {source}", .path.display())]
    SceneJson { path: PathBuf, source: serde_json::Error },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode output: {0}")]
    Encode(#[from] MessageError),
}

#[derive(Parser, Debug)]
#[command(name = "ratiolock", about = "Apply a uniform width/height to the selected nodes of a scene")]
struct Cli {
    /// Scene file: `{"nodes": [...], "selection": [...]}`.
    #[arg(long)]
    scene: PathBuf,

    /// Panel width; overrides `RATIOLOCK_UI_WIDTH`.
    #[arg(long)]
    ui_width: Option<u32>,

    /// Panel height; overrides `RATIOLOCK_UI_HEIGHT`.
    #[arg(long)]
    ui_height: Option<u32>,
}

/// One line of stdin.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
enum ScriptEvent {
    /// Replace the selection, then fire selection-changed.
    Select { ids: Vec<NodeId> },
    /// Deliver a panel message.
    Message { payload: Value },
}

fn main() -> Result<(), DriverError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env: {e}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = PluginConfig::from_env()?;
    if let Some(width) = cli.ui_width {
        config.ui.width = width;
    }
    if let Some(height) = cli.ui_height {
        config.ui.height = height;
    }

    let scene = load_scene(&cli.scene)?;
    info!(path = %cli.scene.display(), nodes = scene.nodes.len(), selected = scene.selection.len(), "loaded scene");

    let mut doc = DocStore::new();
    doc.load_scene(scene);
    let mut plugin = RatioPlugin::new(MemoryHost::new(doc), config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut plugin, io::stdin().lock(), &mut out)
}

/// Start the plugin, then feed it one event per input line.
///
/// Blank lines are skipped. Lines that are not a valid event, including
/// invalid UTF-8, are logged and skipped. A host fault is logged and the loop
/// moves on. Only read or write failures stop the run.
fn run(plugin: &mut RatioPlugin<MemoryHost>, input: impl BufRead, out: &mut impl Write) -> Result<(), DriverError> {
    plugin.start();
    flush_host(plugin.host_mut(), out)?;

    for line in input.split(b'\n') {
        let line = line?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let event = match parse_event(&line) {
            Ok(event) => into_host_event(plugin.host_mut(), event),
            Err(e) => {
                warn!(error = %e, "skipping malformed event line");
                continue;
            }
        };

        if let Err(e) = plugin.handle(event) {
            error!(error = %e, "host rejected mutation");
        }
        flush_host(plugin.host_mut(), out)?;
    }

    Ok(())
}

fn parse_event(line: &[u8]) -> Result<ScriptEvent, serde_json::Error> {
    serde_json::from_slice(line)
}

/// Apply the host-side part of a script event and return what the plugin sees.
fn into_host_event(host: &mut MemoryHost, event: ScriptEvent) -> HostEvent {
    match event {
        ScriptEvent::Select { ids } => {
            host.doc.set_selection(ids);
            HostEvent::SelectionChanged
        }
        ScriptEvent::Message { payload } => HostEvent::Message(payload),
    }
}

fn load_scene(path: &Path) -> Result<Scene, DriverError> {
    let raw = fs::read_to_string(path).map_err(|source| DriverError::SceneRead { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw).map_err(|source| DriverError::SceneJson { path: path.to_path_buf(), source })
}

/// Print pending notifications, then pending panel messages.
fn flush_host(host: &mut MemoryHost, out: &mut impl Write) -> Result<(), DriverError> {
    for text in host.drain_notifications() {
        writeln!(out, "{}", json!({ "notify": text }))?;
    }
    for message in host.drain_outbox() {
        writeln!(out, "{}", encode_outbound(&message)?)?;
    }
    out.flush()?;
    Ok(())
}
