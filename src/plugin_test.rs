#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;
use crate::consts::{NOTIFY_APPLIED_AND_LOCKED, NOTIFY_NOT_NUMBERS, NOTIFY_NOTHING_RESIZABLE};
use crate::doc::NodeKind;
use crate::host::test_helpers::{node, selected};
use crate::host::{MemoryHost, UiOptions};
use crate::message::OutboundMessage;

fn plugin(host: MemoryHost) -> RatioPlugin<MemoryHost> {
    RatioPlugin::new(host, PluginConfig::default())
}

fn selection_info(selection_count: usize, resizable_count: usize, dims: Option<(f64, f64)>) -> OutboundMessage {
    OutboundMessage::SelectionInfo {
        selection_count,
        resizable_count,
        width: dims.map(|d| d.0),
        height: dims.map(|d| d.1),
    }
}

#[test]
fn start_shows_ui_then_publishes() {
    let mut p = plugin(selected(vec![node(NodeKind::Frame, 200.0, 100.0)]));
    p.start();
    assert_eq!(p.host().ui(), Some(UiOptions { width: 350, height: 540 }));
    assert_eq!(p.host().outbox(), &[selection_info(1, 1, Some((200.0, 100.0)))]);
}

#[test]
fn start_uses_configured_panel_size() {
    let config = PluginConfig { ui: UiOptions { width: 400, height: 600 } };
    let mut p = RatioPlugin::new(MemoryHost::default(), config);
    p.start();
    assert_eq!(p.host().ui(), Some(config.ui));
}

#[test]
fn selection_change_republishes_live_state() {
    let a = node(NodeKind::Rectangle, 10.0, 10.0);
    let b = node(NodeKind::Rectangle, 20.0, 20.0);
    let b_id = b.id;
    let mut p = plugin(selected(vec![a, b]));

    p.handle(HostEvent::SelectionChanged).unwrap();
    p.host_mut().doc.set_selection(vec![b_id]);
    p.handle(HostEvent::SelectionChanged).unwrap();

    assert_eq!(p.host().outbox(), &[selection_info(2, 2, None), selection_info(1, 1, Some((20.0, 20.0)))]);
}

#[test]
fn request_selection_publishes() {
    let mut p = plugin(MemoryHost::default());
    p.handle(HostEvent::Message(json!({ "type": "request-selection" }))).unwrap();
    assert_eq!(p.host().outbox(), &[selection_info(0, 0, None)]);
}

#[test]
fn apply_ratio_resizes_then_publishes() {
    let mut p = plugin(selected(vec![node(NodeKind::Rectangle, 10.0, 10.0), node(NodeKind::Ellipse, 5.0, 8.0)]));
    p.handle(HostEvent::Message(json!({ "type": "apply-ratio", "width": 16, "height": 9 }))).unwrap();

    assert_eq!(p.host().notifications(), &[NOTIFY_APPLIED_AND_LOCKED.to_owned()]);
    assert_eq!(p.host().outbox(), &[selection_info(2, 2, Some((16.0, 9.0)))]);
}

#[test]
fn apply_ratio_with_nothing_resizable_still_publishes() {
    let mut p = plugin(selected(vec![node(NodeKind::Sticky, 240.0, 240.0)]));
    p.handle(HostEvent::Message(json!({ "type": "apply-ratio", "width": 16, "height": 9 }))).unwrap();

    assert_eq!(p.host().notifications(), &[NOTIFY_NOTHING_RESIZABLE.to_owned()]);
    assert_eq!(p.host().outbox(), &[selection_info(1, 0, None)]);
    assert!(p.host().calls().is_empty());
}

#[test]
fn invalid_apply_ratio_stops_after_notification() {
    let rect = node(NodeKind::Rectangle, 10.0, 10.0);
    let id = rect.id;
    let mut p = plugin(selected(vec![rect]));

    p.handle(HostEvent::Message(json!({ "type": "apply-ratio", "width": "abc", "height": 10 }))).unwrap();

    assert_eq!(p.host().notifications(), &[NOTIFY_NOT_NUMBERS.to_owned()]);
    assert!(p.host().outbox().is_empty());
    assert!(p.host().calls().is_empty());
    assert_eq!(p.host().node(id).unwrap().width, 10.0);
}

#[test]
fn unknown_and_untyped_messages_are_ignored() {
    let mut p = plugin(selected(vec![node(NodeKind::Rectangle, 10.0, 10.0)]));
    for payload in [json!({ "type": "cancel" }), json!({ "width": 1 }), json!(null), json!("apply-ratio")] {
        p.handle(HostEvent::Message(payload)).unwrap();
    }
    assert!(p.host().outbox().is_empty());
    assert!(p.host().notifications().is_empty());
}

#[test]
fn host_fault_is_returned_and_status_not_republished() {
    let mut rect = node(NodeKind::Rectangle, 10.0, 10.0);
    rect.locked = true;
    let id = rect.id;
    let mut p = plugin(selected(vec![rect]));

    let err = p
        .handle(HostEvent::Message(json!({ "type": "apply-ratio", "width": 5, "height": 5 })))
        .unwrap_err();

    assert_eq!(err, HostError::Locked(id));
    assert!(p.host().outbox().is_empty());
}

#[test]
fn into_host_returns_mutated_document() {
    let rect = node(NodeKind::Rectangle, 10.0, 10.0);
    let id = rect.id;
    let mut p = plugin(selected(vec![rect]));
    p.on_message(&json!({ "type": "apply-ratio", "width": 3, "height": 4 })).unwrap();

    let host = p.into_host();
    let n = host.doc.get(&id).unwrap();
    assert_eq!((n.width, n.height), (3.0, 4.0));
}
