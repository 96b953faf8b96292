use super::*;

#[test]
fn table_has_five_metrics_in_order() {
    let names: Vec<_> = PERFORMANCE_METRICS.iter().map(|m| m.name).collect();
    assert_eq!(
        names,
        vec!["Query Time", "Verification Time", "Security Score", "Decentralization", "Cost Efficiency"]
    );
}

#[test]
fn series_follow_table_order() {
    assert_eq!(series(System::Traditional), vec![120.0, 200.0, 75.0, 20.0, 60.0]);
    assert_eq!(series(System::Blockchain), vec![80.0, 150.0, 95.0, 100.0, 85.0]);
}

#[test]
fn max_value_spans_both_systems() {
    assert_eq!(max_value(), 200.0);
}

#[test]
fn system_labels_and_strokes_are_distinct() {
    assert_eq!(System::Traditional.label(), "Traditional");
    assert_eq!(System::Blockchain.label(), "Blockchain");
    assert_ne!(System::Traditional.stroke(), System::Blockchain.stroke());
}

#[test]
fn key_differences_cover_four_claims() {
    let titles: Vec<_> = KEY_DIFFERENCES.iter().map(|d| d.title).collect();
    assert_eq!(titles, vec!["Security", "Decentralization", "Immutability", "Transparency"]);
}
