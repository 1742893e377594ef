use super::*;
use std::str::FromStr;
use uuid::Uuid;

#[test]
fn test_typed_id_creation() {
    let id = ExpenditureId::new();
    assert!(!id.to_string().is_empty());
}

#[test]
fn test_typed_id_from_uuid() {
    let uuid = Uuid::new_v4();
    let id = DonationId::from_uuid(uuid);
    assert_eq!(id.into_inner(), uuid);
}

#[test]
fn test_typed_ids_are_unique() {
    assert_ne!(ExpenditureId::new(), ExpenditureId::new());
}

#[test]
fn test_typed_id_from_str() {
    let uuid = Uuid::new_v4();
    let id = ReportId::from_str(&uuid.to_string()).unwrap();
    assert_eq!(id.into_inner(), uuid);
}

#[test]
fn test_typed_id_from_str_error() {
    assert!(BudgetId::from_str("invalid").is_err());
}

#[test]
fn test_event_id_display_and_blank() {
    let id = EventId::from("e1");
    assert_eq!(id.to_string(), "e1");
    assert_eq!(id.as_str(), "e1");
    assert!(!id.is_blank());
    assert!(EventId::new("  ").is_blank());
}

#[test]
fn test_event_id_serializes_transparently() {
    let id = EventId::new("gala-2026");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"gala-2026\"");
}
