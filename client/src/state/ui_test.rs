use super::*;

#[test]
fn feature_default_is_verification() {
    assert_eq!(Feature::default(), Feature::Verification);
}

#[test]
fn feature_all_is_display_order() {
    assert_eq!(Feature::ALL, [Feature::Verification, Feature::Cryptography, Feature::Analysis]);
}

#[test]
fn feature_labels_are_capitalized() {
    let labels: Vec<_> = Feature::ALL.iter().map(|f| f.label()).collect();
    assert_eq!(labels, vec!["Verification", "Cryptography", "Analysis"]);
}

#[test]
fn feature_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Feature::Cryptography).unwrap(), "\"cryptography\"");
    let parsed: Feature = serde_json::from_str("\"analysis\"").unwrap();
    assert_eq!(parsed, Feature::Analysis);
}
