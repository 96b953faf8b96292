//! Traditional vs. blockchain verification panels.
//!
//! DESIGN
//! ======
//! The two panels are deliberately asymmetric: the traditional panel looks
//! the input up in the central directory and can fail, while the blockchain
//! panel encodes the input and always reports success. Each panel keeps its
//! own input and last result.

#[cfg(test)]
#[path = "verification_test.rs"]
mod verification_test;

use serde::{Deserialize, Serialize};

use crate::state::directory::{self, IdentityRecord};
use crate::util::mock_encode::mock_encode_prefix;

/// Maximum length of the displayed blockchain "hash".
pub const HASH_LEN: usize = 32;

/// Sub-tab of the verification view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationTab {
    #[default]
    Traditional,
    Blockchain,
}

impl VerificationTab {
    pub const ALL: [Self; 2] = [Self::Traditional, Self::Blockchain];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Traditional => "Traditional Verification",
            Self::Blockchain => "Blockchain Verification",
        }
    }
}

/// Result of a directory lookup, captured when the verify action ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraditionalOutcome {
    pub query: String,
    pub record: Option<&'static IdentityRecord>,
}

impl TraditionalOutcome {
    #[must_use]
    pub fn verified(&self) -> bool {
        self.record.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraditionalPanel {
    pub input: String,
    pub outcome: Option<TraditionalOutcome>,
}

impl TraditionalPanel {
    pub fn verify(&mut self) -> &TraditionalOutcome {
        let record = directory::lookup(&self.input);
        log::info!("traditional verification query={:?} verified={}", self.input, record.is_some());
        self.outcome.insert(TraditionalOutcome { query: self.input.clone(), record })
    }

    /// The result alert is shown only for a non-empty input after a verify.
    #[must_use]
    pub fn visible_outcome(&self) -> Option<&TraditionalOutcome> {
        if self.input.is_empty() {
            return None;
        }
        self.outcome.as_ref()
    }
}

/// Blockchain verification result. `verified` is always `true`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockchainResult {
    pub hash: String,
    pub verified: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockchainPanel {
    pub input: String,
    pub result: Option<BlockchainResult>,
}

impl BlockchainPanel {
    /// Encode the raw input as the "hash" and mark it verified, unconditionally.
    pub fn verify(&mut self) -> &BlockchainResult {
        let hash = mock_encode_prefix(&self.input, HASH_LEN);
        log::info!("blockchain verification hash={hash}");
        self.result.insert(BlockchainResult { hash, verified: true })
    }

    #[must_use]
    pub fn visible_result(&self) -> Option<&BlockchainResult> {
        if self.input.is_empty() {
            return None;
        }
        self.result.as_ref().filter(|r| r.verified)
    }
}

/// Retained state of the verification view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerificationState {
    pub tab: VerificationTab,
    pub traditional: TraditionalPanel,
    pub blockchain: BlockchainPanel,
}
