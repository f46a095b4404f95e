use eventflow_types::{
    display_date, iso_date, time_to_minutes, today_iso, EventRecord, Keyed, Snapshot, User,
    UserRole,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample_user() -> User {
    User {
        id: "42".to_string(),
        name: "Sample".to_string(),
        email: "sample@demo.com".to_string(),
        password: "123".to_string(),
        role: UserRole::Common,
        active: true,
    }
}

// ── Roles ───────────────────────────────────────────────────────

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&UserRole::Common).unwrap(), "\"common\"");
    assert_eq!(serde_json::to_string(&UserRole::Viewer).unwrap(), "\"viewer\"");
}

#[test]
fn role_parses_from_wire_name() {
    assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
    assert_eq!("viewer".parse::<UserRole>().unwrap(), UserRole::Viewer);
    assert!("superuser".parse::<UserRole>().is_err());
}

#[test]
fn role_display_matches_wire_name() {
    assert_eq!(UserRole::Common.to_string(), "common");
}

// ── Records ─────────────────────────────────────────────────────

#[test]
fn user_roundtrips_through_json() {
    let user = sample_user();
    let json = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn user_key_is_id() {
    assert_eq!(sample_user().key(), "42");
}

#[test]
fn event_preserves_unknown_fields() {
    let wire = json!({
        "id": "e1",
        "date": "2025-06-01",
        "time": "14:00",
        "description": "Quarterly review",
        "location": {"room": "3B"}
    });
    let event: EventRecord = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(event.key(), "e1");
    assert_eq!(event.field_str("date"), Some("2025-06-01"));

    let back = serde_json::to_value(&event).unwrap();
    assert_eq!(back, wire);
}

#[test]
fn event_builder_sets_fields() {
    let event = EventRecord::new("e2")
        .with_field("date", "2025-01-10")
        .with_field("description", "Setup");
    assert_eq!(event.field_str("description"), Some("Setup"));
    assert_eq!(event.field_str("missing"), None);
}

#[test]
fn snapshot_empty_only_when_both_collections_empty() {
    assert!(Snapshot::default().is_empty());
    let with_users = Snapshot::new(vec![sample_user()], Vec::new());
    assert!(!with_users.is_empty());
    let with_events = Snapshot::new(Vec::new(), vec![EventRecord::new("e1")]);
    assert!(!with_events.is_empty());
}

// ── Dates ───────────────────────────────────────────────────────

#[test]
fn display_date_converts_iso() {
    assert_eq!(display_date("2025-03-05"), "05/03/2025");
}

#[test]
fn display_date_passes_through_display_and_empty() {
    assert_eq!(display_date("05/03/2025"), "05/03/2025");
    assert_eq!(display_date(""), "");
    assert_eq!(display_date("not-a-date"), "not-a-date");
}

#[test]
fn iso_date_converts_display() {
    assert_eq!(iso_date("05/03/2025"), "2025-03-05");
    assert_eq!(iso_date("2025-03-05"), "2025-03-05");
    assert_eq!(iso_date(""), "");
}

#[test]
fn today_iso_is_well_formed() {
    let today = today_iso();
    assert_eq!(today.len(), 10);
    assert_eq!(iso_date(&today), today);
}

#[test]
fn time_to_minutes_parses_clock_times() {
    assert_eq!(time_to_minutes("00:00"), Some(0));
    assert_eq!(time_to_minutes("08:30"), Some(510));
    assert_eq!(time_to_minutes("23:59"), Some(1439));
    assert_eq!(time_to_minutes("25:00"), None);
    assert_eq!(time_to_minutes("nope"), None);
}
