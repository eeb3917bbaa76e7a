//! Group commitments: hash digests identifying a named group.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::hash::sha256_hex;

/// A commitment to a group label, independent of any individual prover.
///
/// Conventionally the SHA-256 hex digest of the label (e.g. `"Admin"`), but
/// any caller-supplied string is accepted; proofs bind to the commitment
/// byte-for-byte, whatever its format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupCommitment(String);

impl GroupCommitment {
    /// Commits to a group label by hashing it with SHA-256.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use membership_proof::GroupCommitment;
    ///
    /// let admin = GroupCommitment::from_label("Admin");
    /// assert_eq!(admin.as_str().len(), 64);
    /// ```
    pub fn from_label(label: &str) -> Self {
        Self(sha256_hex([label.as_bytes()]))
    }

    /// Wraps a pre-computed digest string. No format validation is performed.
    pub fn from_digest(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    /// Returns the commitment string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_commitment_is_sha256_digest() {
        let admin = GroupCommitment::from_label("Admin");
        assert_eq!(
            admin.as_str(),
            "c1c224b03cd9bc7b6a86d77f5dace40191766c485cd55dc48caf9ac873335d6f"
        );
    }

    #[test]
    fn distinct_labels_commit_differently() {
        assert_ne!(
            GroupCommitment::from_label("Admin"),
            GroupCommitment::from_label("Member")
        );
    }

    #[test]
    fn digest_is_taken_verbatim() {
        let raw = GroupCommitment::from_digest("anything goes here");
        assert_eq!(raw.as_str(), "anything goes here");
    }
}
