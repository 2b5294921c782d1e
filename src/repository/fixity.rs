//! Fixity checking for stored binary copies
//!
//! A fixity check recomputes the digest and size of every stored copy of a
//! binary and compares them with what the caller expects. Digests are SHA-256
//! and are rendered as `urn:sha-256:<hex>` URIs.

use super::store::{RepositoryStore, StoreResult};
use super::types::ResourceId;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

const DIGEST_URI_PREFIX: &str = "urn:sha-256:";

/// Outcome flag of a single fixity comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixityStatus {
    Success,
    BadChecksum,
    BadSize,
}

impl FixityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixityStatus::Success => "SUCCESS",
            FixityStatus::BadChecksum => "BAD_CHECKSUM",
            FixityStatus::BadSize => "BAD_SIZE",
        }
    }
}

impl fmt::Display for FixityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw bytes of a binary as held by one storage location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCopy {
    /// Backend-specific location identifier
    pub location: String,
    pub content: Vec<u8>,
}

impl StoredCopy {
    pub fn new(location: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        StoredCopy {
            location: location.into(),
            content: content.into(),
        }
    }
}

/// Checksum and size the caller believes a binary has
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedFixity {
    /// Digest URI, e.g. `urn:sha-256:…`
    pub checksum: String,
    pub size: u64,
}

impl ExpectedFixity {
    pub fn new(checksum: impl Into<String>, size: u64) -> Self {
        ExpectedFixity {
            checksum: checksum.into(),
            size,
        }
    }

    /// Expectation matching `content` exactly
    pub fn of(content: &[u8]) -> Self {
        ExpectedFixity {
            checksum: digest_uri(content),
            size: content.len() as u64,
        }
    }
}

/// Result of checking one stored copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixityResult {
    pub location: String,
    /// Computed digest URI
    pub checksum: String,
    /// Computed size in bytes
    pub size: u64,
    pub statuses: BTreeSet<FixityStatus>,
}

impl FixityResult {
    /// Compare computed values against `expected`
    ///
    /// `Success` is present exactly when both checksum and size match.
    pub fn new(location: impl Into<String>, checksum: impl Into<String>, size: u64, expected: &ExpectedFixity) -> Self {
        let checksum = checksum.into();
        let mut statuses = BTreeSet::new();
        if checksum != expected.checksum {
            statuses.insert(FixityStatus::BadChecksum);
        }
        if size != expected.size {
            statuses.insert(FixityStatus::BadSize);
        }
        if statuses.is_empty() {
            statuses.insert(FixityStatus::Success);
        }
        FixityResult {
            location: location.into(),
            checksum,
            size,
            statuses,
        }
    }

    pub fn is_success(&self) -> bool {
        self.statuses.contains(&FixityStatus::Success)
    }
}

/// `urn:sha-256:` URI of the SHA-256 digest of `content`
pub fn digest_uri(content: &[u8]) -> String {
    let digest = Sha256::digest(content);
    format!("{}{:x}", DIGEST_URI_PREFIX, digest)
}

/// Check every stored copy of the binary at `id`
pub fn check_fixity<S>(store: &S, id: &ResourceId, expected: &ExpectedFixity) -> StoreResult<Vec<FixityResult>>
where
    S: RepositoryStore + ?Sized,
{
    let copies = store.binary_copies(id)?;
    debug!("Checking fixity of {} across {} stored copies", id, copies.len());

    Ok(copies
        .iter()
        .map(|copy| {
            FixityResult::new(
                copy.location.clone(),
                digest_uri(&copy.content),
                copy.content.len() as u64,
                expected,
            )
        })
        .collect())
}
