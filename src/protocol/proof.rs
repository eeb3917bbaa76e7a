//! The membership proof object.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A proof of group membership.
///
/// Produced by [`Prover::prove`](crate::Prover::prove) and checked by
/// [`Verifier::verify`](crate::Verifier::verify). Carries no mutable state;
/// a proof can be verified any number of times.
///
/// All three fields are lowercase hex strings:
///
/// - `commitment`: the prover's compressed public point (66 chars), used as
///   the prover's identity tag.
/// - `challenge`: SHA-256 digest binding the group commitment, the prover's
///   commitment, and the response (64 chars).
/// - `response`: a scalar derived from the proof nonce (at most 64 chars,
///   leading zero nibbles dropped).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    commitment: String,
    challenge: String,
    response: String,
}

impl Proof {
    /// Assembles a proof from its fields.
    ///
    /// This is typically called by [`Prover`](crate::Prover) and not
    /// directly by users.
    pub fn new(
        commitment: impl Into<String>,
        challenge: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            commitment: commitment.into(),
            challenge: challenge.into(),
            response: response.into(),
        }
    }

    /// Returns the prover's identity commitment.
    pub fn commitment(&self) -> &str {
        &self.commitment
    }

    /// Returns the challenge digest.
    pub fn challenge(&self) -> &str {
        &self.challenge
    }

    /// Returns the response scalar hex.
    pub fn response(&self) -> &str {
        &self.response
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Proof {{ commitment: {}, challenge: {}, response: {} }}",
            self.commitment, self.challenge, self.response
        )
    }
}
