use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::state::nodes::NODE_COUNT;

#[test]
fn demo_starts_on_verification_view() {
    let state = DemoState::default();
    assert_eq!(state.feature, Feature::Verification);
    assert_eq!(state.verification.tab, VerificationTab::Traditional);
    assert!(state.crypto.nodes.is_empty());
}

#[test]
fn john_doe_verifies_traditionally() {
    let mut state = DemoState::default();
    state.set_traditional_input("john.doe".to_owned());
    state.verify_traditional();
    let outcome = state.verification.traditional.visible_outcome().unwrap();
    assert!(outcome.verified());
    assert_eq!(outcome.record.map(|r| r.name), Some("John Doe"));
}

#[test]
fn jim_doe_fails_traditionally_but_passes_on_blockchain() {
    let mut state = DemoState::default();
    state.set_traditional_input("jim.doe".to_owned());
    state.verify_traditional();
    assert!(!state.verification.traditional.visible_outcome().unwrap().verified());

    state.select_tab(VerificationTab::Blockchain);
    state.set_blockchain_input("jim.doe".to_owned());
    state.verify_blockchain();
    assert!(state.verification.blockchain.visible_result().unwrap().verified);
}

#[test]
fn switching_views_preserves_verification_state() {
    let mut state = DemoState::default();
    state.set_traditional_input("jane.smith".to_owned());
    state.verify_traditional();
    state.select_tab(VerificationTab::Blockchain);
    state.set_blockchain_input("payload".to_owned());
    state.verify_blockchain();
    let before = state.verification.clone();

    state.select_feature(Feature::Cryptography);
    state.select_feature(Feature::Analysis);
    state.select_feature(Feature::Verification);

    assert_eq!(state.verification, before);
    assert_eq!(state.verification.tab, VerificationTab::Blockchain);
}

#[test]
fn switching_views_preserves_crypto_state() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut state = DemoState::default();
    state.init_nodes(&mut rng, 1_000_000_000);
    state.set_blockchain_input("payload".to_owned());
    state.select_feature(Feature::Cryptography);
    state.generate_keys(&mut rng);
    state.sign_data();
    let keys = state.crypto.key_pair.clone();
    let signature = state.crypto.signature.clone();
    let nodes = state.crypto.nodes.clone();

    state.select_feature(Feature::Verification);
    state.select_feature(Feature::Cryptography);

    assert_eq!(state.crypto.key_pair, keys);
    assert_eq!(state.crypto.signature, signature);
    assert_eq!(state.crypto.nodes, nodes);
}

#[test]
fn sign_data_reads_blockchain_payload() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut state = DemoState::default();
    state.generate_keys(&mut rng);

    state.sign_data();
    assert!(state.crypto.signature.is_none(), "empty payload must not sign");

    state.set_blockchain_input("hello".to_owned());
    state.sign_data();
    let private_key = state.crypto.key_pair.as_ref().unwrap().private_key.clone();
    assert_eq!(state.crypto.signature, Some(crate::state::crypto::sign("hello", &private_key)));
}

#[test]
fn init_nodes_runs_once() {
    let mut state = DemoState::default();
    state.init_nodes(&mut StdRng::seed_from_u64(1), 5_000_000);
    let first = state.crypto.nodes.clone();
    assert_eq!(first.len(), NODE_COUNT);

    state.init_nodes(&mut StdRng::seed_from_u64(2), 9_000_000);
    assert_eq!(state.crypto.nodes, first);
}
