// Tests for the event wire format
//
// Consumers discriminate on which JSON key is present, so each variant must
// serialize to its own key set, and Done must be the literal [DONE] sentinel.

use meeting_insights::Event;
use serde_json::Value;

fn parse(event: Event) -> Value {
    serde_json::from_str(&event.wire_data()).expect("event payload must be JSON")
}

#[test]
fn test_status_payload_shape() {
    let value = parse(Event::Status {
        message: "Running speech recognition...".to_string(),
    });

    assert_eq!(value["tag"], "STATUS");
    assert_eq!(value["message"], "Running speech recognition...");
}

#[test]
fn test_error_payload_shape() {
    let value = parse(Event::Error {
        message: "File not found on server.".to_string(),
    });

    assert_eq!(value["tag"], "ERROR");
    assert_eq!(value["message"], "File not found on server.");
}

#[test]
fn test_payload_keys_discriminate_variants() {
    let cases = [
        (
            Event::TranscriptChunk {
                text: "hello".to_string(),
            },
            "transcript",
        ),
        (
            Event::SummaryChunk {
                text: "short".to_string(),
            },
            "summary",
        ),
        (
            Event::Decision {
                text: "ship it".to_string(),
            },
            "decision",
        ),
        (
            Event::ActionItem {
                text: "Alice ships the report".to_string(),
            },
            "action_item",
        ),
    ];

    for (event, key) in cases {
        let value = parse(event);
        let object = value.as_object().expect("object payload");

        assert_eq!(object.len(), 1, "exactly one key for {key}");
        assert!(object.contains_key(key));
    }
}

#[test]
fn test_done_is_literal_sentinel() {
    assert_eq!(Event::Done.wire_data(), "[DONE]");
}
