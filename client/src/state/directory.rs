//! Central identity directory used by the traditional verification panel.
//!
//! DESIGN
//! ======
//! A fixed, read-only table standing in for a centralized identity database.
//! Records are compiled in; there is no mutation API.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use serde::Serialize;

/// Verification status carried by a directory record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityStatus {
    Verified,
}

/// A pre-registered identity in the central directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdentityRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub status: IdentityStatus,
    /// ISO date (`YYYY-MM-DD`) of the last verification.
    pub last_verified: &'static str,
}

static RECORDS: [IdentityRecord; 3] = [
    IdentityRecord {
        id: "john.doe",
        name: "John Doe",
        status: IdentityStatus::Verified,
        last_verified: "2024-01-15",
    },
    IdentityRecord {
        id: "jane.smith",
        name: "Jane Smith",
        status: IdentityStatus::Verified,
        last_verified: "2024-02-20",
    },
    IdentityRecord {
        id: "bob.wilson",
        name: "Bob Wilson",
        status: IdentityStatus::Verified,
        last_verified: "2024-03-10",
    },
];

/// Look up an identity by key, ignoring letter case.
pub fn lookup(key: &str) -> Option<&'static IdentityRecord> {
    let normalized = key.to_lowercase();
    RECORDS.iter().find(|record| record.id == normalized)
}

/// All registered ids, in directory order.
pub fn known_ids() -> impl Iterator<Item = &'static str> {
    RECORDS.iter().map(|record| record.id)
}

/// Every record in the directory.
pub fn records() -> &'static [IdentityRecord] {
    &RECORDS
}
