use super::*;

#[test]
fn hash_line_labels_hash() {
    assert_eq!(hash_line("am9obi5kb2U="), "Hash: am9obi5kb2U=");
    assert_eq!(hash_line(""), "Hash: ");
}

#[test]
fn property_badges_are_immutable_and_decentralized() {
    let labels: Vec<_> = PROPERTY_BADGES.iter().map(|(_, label)| *label).collect();
    assert_eq!(labels, vec!["Immutable", "Decentralized"]);
}
