//! Decorative network nodes shown beside the cryptography tools.
//!
//! DESIGN
//! ======
//! Nodes are generated once with random status and never updated. No
//! consensus runs; the summary simply counts the verified tags.

#[cfg(test)]
#[path = "nodes_test.rs"]
mod nodes_test;

use rand::Rng;
use serde::Serialize;

/// Number of nodes in the simulated network.
pub const NODE_COUNT: usize = 6;

/// A node is tagged pending when its draw is at or below this threshold.
const PENDING_THRESHOLD: f64 = 0.3;

/// Upper bound on how far in the past a node timestamp may lie.
const MAX_AGE_MS: u64 = 1_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    Verified,
    Pending,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NetworkNode {
    pub id: usize,
    pub status: NodeStatus,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
}

/// Generate [`NODE_COUNT`] nodes, each verified with roughly 70% probability
/// and stamped within the last [`MAX_AGE_MS`] milliseconds of `now_ms`.
pub fn generate_nodes<R: Rng + ?Sized>(rng: &mut R, now_ms: u64) -> Vec<NetworkNode> {
    (0..NODE_COUNT)
        .map(|id| {
            let status = if rng.gen_range(0.0..1.0) > PENDING_THRESHOLD {
                NodeStatus::Verified
            } else {
                NodeStatus::Pending
            };
            let age = rng.gen_range(0..MAX_AGE_MS);
            NetworkNode { id, status, timestamp_ms: now_ms.saturating_sub(age) }
        })
        .collect()
}

/// Verified-over-total tally for the node grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsensusSummary {
    pub verified: usize,
    pub total: usize,
}

impl ConsensusSummary {
    #[must_use]
    pub fn from_nodes(nodes: &[NetworkNode]) -> Self {
        let verified = nodes.iter().filter(|n| n.status == NodeStatus::Verified).count();
        Self { verified, total: nodes.len() }
    }

    /// Fraction of verified nodes; zero for an empty network.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.verified as f64 / self.total as f64
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("Network Consensus Status: {} / {} Nodes", self.verified, self.total)
    }
}
