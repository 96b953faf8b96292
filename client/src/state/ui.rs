//! Top-level view selection.
//!
//! DESIGN
//! ======
//! The selected feature only chooses which retained slice is rendered; it
//! never owns or resets view state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use serde::{Deserialize, Serialize};

/// The three mutually exclusive views of the demo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    #[default]
    Verification,
    Cryptography,
    Analysis,
}

impl Feature {
    /// Display order of the feature buttons.
    pub const ALL: [Self; 3] = [Self::Verification, Self::Cryptography, Self::Analysis];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Verification => "Verification",
            Self::Cryptography => "Cryptography",
            Self::Analysis => "Analysis",
        }
    }
}
