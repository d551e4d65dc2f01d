use super::*;
use serde_json::json;

#[test]
fn test_palette_update_message() {
    let update = PaletteUpdate::new(vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    assert_eq!(update.message, "Extracted 3 colors from image");
}

#[test]
fn test_palette_update_wire_format() {
    let update = PaletteUpdate::new(vec![[0.5, 0.25, 0.125]]);
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(
        value,
        json!({
            "colors": [[0.5, 0.25, 0.125]],
            "message": "Extracted 1 colors from image"
        })
    );
}

#[test]
fn test_recording_notifier_keeps_order() {
    let notifier = RecordingNotifier::new();
    notifier.notify("a", json!(1));
    notifier.notify("b", json!(2));
    notifier.notify("a", json!(3));

    let events = notifier.events();
    assert_eq!(events.len(), 3);
    assert_eq!(events[1].event, "b");

    let named = notifier.named("a");
    assert_eq!(named.len(), 2);
    assert_eq!(named[1].payload, json!(3));
}

#[test]
fn test_send_serializes_typed_payload() {
    let notifier = RecordingNotifier::new();
    send(
        &notifier,
        PALETTE_UPDATE_EVENT,
        &PaletteUpdate::new(vec![[0.0, 0.0, 0.0]]),
    );

    let events = notifier.named(PALETTE_UPDATE_EVENT);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].payload["colors"], json!([[0.0, 0.0, 0.0]]));
}

#[test]
fn test_json_lines_notifier_writes_one_line_per_event() {
    let notifier = JsonLinesNotifier::new(Vec::new());
    notifier.notify(PALETTE_UPDATE_EVENT, json!({"colors": []}));
    notifier.notify(INVERT_PREVIEW_EVENT, json!({"node_id": "7"}));

    let out = String::from_utf8(notifier.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["event"], "color.palette.update");
    assert_eq!(first["data"]["colors"], json!([]));

    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["data"]["node_id"], "7");
}

#[test]
fn test_null_notifier_accepts_anything() {
    NullNotifier.notify("anything", json!(null));
}
