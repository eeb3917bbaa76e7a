use subtle::ConstantTimeEq;
use tracing::debug;

use crate::hash::sha256_hex;
use crate::keypair;
use crate::{GroupCommitment, Proof, Result};

/// Verifier for group membership proofs.
///
/// Checks a [`Proof`] against the group commitment held by the verifier and
/// a claimed public key. Verification is all-or-nothing: a mismatch is the
/// defined `false` outcome, never an error.
pub struct Verifier {
    group_commitment: GroupCommitment,
}

impl Verifier {
    /// Creates a new verifier for the given group commitment.
    pub fn new(group_commitment: GroupCommitment) -> Self {
        Self { group_commitment }
    }

    /// Returns the group commitment this verifier checks against.
    pub fn group_commitment(&self) -> &GroupCommitment {
        &self.group_commitment
    }

    /// Verifies a membership proof against a claimed public key.
    ///
    /// The public key is taken as a SEC1 hex string (compressed or
    /// uncompressed) and re-encoded in compressed form before comparison
    /// with the proof's commitment. The challenge is recomputed as the
    /// digest of `group_commitment ∥ commitment ∥ response` and compared in
    /// constant time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Curve`](crate::Error::Curve) if `public_key_hex`
    /// cannot be decoded to a curve point. A proof that merely fails the
    /// checks yields `Ok(false)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use membership_proof::{GroupCommitment, KeyPair, Prover, SecureRng, Verifier};
    ///
    /// # fn main() -> membership_proof::Result<()> {
    /// let mut rng = SecureRng::new();
    /// let key_pair = KeyPair::generate(&mut rng);
    /// let public_hex = key_pair.public_key_hex();
    /// let group = GroupCommitment::from_label("Admin");
    ///
    /// let proof = Prover::new(key_pair).prove(&mut rng, &group)?;
    /// let verifier = Verifier::new(group);
    /// assert!(verifier.verify(&proof, &public_hex)?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn verify(&self, proof: &Proof, public_key_hex: &str) -> Result<bool> {
        let public_key = keypair::decode_public(public_key_hex)?;

        let recomputed = sha256_hex([
            self.group_commitment.as_str().as_bytes(),
            proof.commitment().as_bytes(),
            proof.response().as_bytes(),
        ]);
        let challenge_ok: bool = recomputed
            .as_bytes()
            .ct_eq(proof.challenge().as_bytes())
            .into();

        let key_ok = keypair::encode_public(&public_key, true) == proof.commitment();

        let valid = challenge_ok && key_ok;
        debug!(
            group = %self.group_commitment,
            commitment = %proof.commitment(),
            valid,
            "verified membership proof"
        );

        Ok(valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeyPair, Prover, SecureRng};

    #[test]
    fn accepts_honest_proof() {
        let mut rng = SecureRng::new();
        let key_pair = KeyPair::generate(&mut rng);
        let public_hex = key_pair.public_key_hex();
        let group = GroupCommitment::from_label("Admin");

        let proof = Prover::new(key_pair).prove(&mut rng, &group).unwrap();

        let verifier = Verifier::new(group.clone());
        assert_eq!(verifier.group_commitment(), &group);
        assert!(verifier.verify(&proof, &public_hex).unwrap());
    }

    #[test]
    fn rejects_different_group_commitment() {
        let mut rng = SecureRng::new();
        let key_pair = KeyPair::generate(&mut rng);
        let public_hex = key_pair.public_key_hex();

        let proof = Prover::new(key_pair)
            .prove(&mut rng, &GroupCommitment::from_label("Member"))
            .unwrap();

        let verifier = Verifier::new(GroupCommitment::from_label("Admin"));
        assert!(!verifier.verify(&proof, &public_hex).unwrap());
    }

    #[test]
    fn rejects_mismatched_public_key() {
        let mut rng = SecureRng::new();
        let group = GroupCommitment::from_label("Admin");

        let proof = Prover::new(KeyPair::generate(&mut rng))
            .prove(&mut rng, &group)
            .unwrap();

        let other = KeyPair::generate(&mut rng);
        let verifier = Verifier::new(group);
        assert!(!verifier.verify(&proof, &other.public_key_hex()).unwrap());
    }

    #[test]
    fn malformed_public_key_is_an_error() {
        let mut rng = SecureRng::new();
        let group = GroupCommitment::from_label("Admin");
        let proof = Prover::new(KeyPair::generate(&mut rng))
            .prove(&mut rng, &group)
            .unwrap();

        let verifier = Verifier::new(group);
        assert!(verifier.verify(&proof, "zz-not-hex").is_err());
    }

    #[test]
    fn accepts_uncompressed_public_key_encoding() {
        let mut rng = SecureRng::new();
        let key_pair = KeyPair::generate(&mut rng);
        let uncompressed = keypair::encode_public(key_pair.public_key(), false);
        let group = GroupCommitment::from_label("Admin");

        let proof = Prover::new(key_pair).prove(&mut rng, &group).unwrap();

        let verifier = Verifier::new(group);
        assert!(verifier.verify(&proof, &uncompressed).unwrap());
    }
}
