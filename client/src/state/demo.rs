//! Top-level controller owning every view's retained state.
//!
//! DESIGN
//! ======
//! Each view keeps an independent slice (`verification`, `crypto`). Switching
//! features only flips `feature`, so a slice survives while its view is not
//! rendered. Randomness and time are passed in so transitions stay testable.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

use rand::Rng;

use crate::state::crypto::CryptoState;
use crate::state::nodes::generate_nodes;
use crate::state::ui::Feature;
use crate::state::verification::{VerificationState, VerificationTab};

#[derive(Clone, Debug, Default)]
pub struct DemoState {
    pub feature: Feature,
    pub verification: VerificationState,
    pub crypto: CryptoState,
}

impl DemoState {
    pub fn select_feature(&mut self, feature: Feature) {
        log::debug!("select feature {:?} -> {:?}", self.feature, feature);
        self.feature = feature;
    }

    pub fn select_tab(&mut self, tab: VerificationTab) {
        self.verification.tab = tab;
    }

    pub fn set_traditional_input(&mut self, input: String) {
        self.verification.traditional.input = input;
    }

    pub fn verify_traditional(&mut self) {
        self.verification.traditional.verify();
    }

    pub fn set_blockchain_input(&mut self, input: String) {
        self.verification.blockchain.input = input;
    }

    pub fn verify_blockchain(&mut self) {
        self.verification.blockchain.verify();
    }

    pub fn generate_keys<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.crypto.generate_keys(rng);
    }

    /// Sign the blockchain panel's payload with the current private key.
    pub fn sign_data(&mut self) {
        let payload = self.verification.blockchain.input.as_str();
        self.crypto.sign_data(payload);
    }

    /// Populate the node grid. Runs once; later calls are ignored.
    pub fn init_nodes<R: Rng + ?Sized>(&mut self, rng: &mut R, now_ms: u64) {
        if !self.crypto.nodes.is_empty() {
            return;
        }
        self.crypto.nodes = generate_nodes(rng, now_ms);
        log::debug!("initialized {} network nodes", self.crypto.nodes.len());
    }
}
