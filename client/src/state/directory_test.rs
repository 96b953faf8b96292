use super::*;

#[test]
fn directory_has_three_verified_records() {
    assert_eq!(records().len(), 3);
    assert!(records().iter().all(|r| r.status == IdentityStatus::Verified));
}

#[test]
fn lookup_finds_each_known_id() {
    for id in known_ids() {
        let record = lookup(id).expect("known id should resolve");
        assert_eq!(record.id, id);
    }
}

#[test]
fn lookup_ignores_letter_case() {
    assert_eq!(lookup("John.Doe").map(|r| r.name), Some("John Doe"));
    assert_eq!(lookup("JANE.SMITH").map(|r| r.name), Some("Jane Smith"));
    assert_eq!(lookup("bOb.WiLsOn").map(|r| r.last_verified), Some("2024-03-10"));
}

#[test]
fn lookup_misses_unknown_and_empty_keys() {
    assert!(lookup("jim.doe").is_none());
    assert!(lookup("").is_none());
    assert!(lookup(" john.doe").is_none());
}

#[test]
fn known_ids_keep_directory_order() {
    let ids: Vec<_> = known_ids().collect();
    assert_eq!(ids, vec!["john.doe", "jane.smith", "bob.wilson"]);
}

#[test]
fn record_serializes_status_as_snake_case() {
    let json = serde_json::to_value(lookup("john.doe").unwrap()).unwrap();
    assert_eq!(json["status"], "verified");
    assert_eq!(json["last_verified"], "2024-01-15");
}
