use rand_core::CryptoRngCore;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::hash::sha256_hex;
use crate::keypair::{self, KeyPair};
use crate::{Error, GroupCommitment, Proof, Result};

/// Number of random bytes drawn for the proof nonce.
const NONCE_BYTES: usize = 32;

/// Prover for group membership proofs.
///
/// Builds a [`Proof`] tying the prover's public point to a group commitment:
/// the challenge is the SHA-256 digest of
/// `group_commitment ∥ commitment ∥ response`, where `response` is a scalar
/// derived from a fresh random nonce.
///
/// # Security
///
/// - Always pass [`SecureRng`](crate::SecureRng) (or another
///   cryptographically secure generator) for nonce generation
/// - The response is derived from the nonce alone, never from the private
///   scalar; the proof is a binding tag for the (public key, group) pair,
///   not a zero-knowledge proof of private-key possession
pub struct Prover {
    key_pair: KeyPair,
}

impl Prover {
    /// Creates a new prover owning the given key pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use membership_proof::{KeyPair, Prover, SecureRng};
    ///
    /// let mut rng = SecureRng::new();
    /// let prover = Prover::new(KeyPair::generate(&mut rng));
    /// ```
    pub fn new(key_pair: KeyPair) -> Self {
        Self { key_pair }
    }

    /// Returns the prover's key pair.
    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    /// Generates a membership proof for the given group commitment.
    ///
    /// Consumes 32 bytes of randomness per call; nonce bytes that do not
    /// form a valid nonzero scalar below the curve order are resampled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSource`] if the generator cannot supply random
    /// bytes.
    pub fn prove<R: CryptoRngCore>(
        &self,
        rng: &mut R,
        group_commitment: &GroupCommitment,
    ) -> Result<Proof> {
        let commitment = self.key_pair.public_key_hex();

        let response = loop {
            let nonce = Nonce::random(rng)?;
            match keypair::scalar_hex_from_seed(nonce.bytes()) {
                Ok(scalar_hex) => break scalar_hex,
                // Nonce outside the scalar range, try again with fresh bytes.
                Err(_) => continue,
            }
        };

        let challenge = sha256_hex([
            group_commitment.as_str().as_bytes(),
            commitment.as_bytes(),
            response.as_bytes(),
        ]);

        debug!(
            group = %group_commitment,
            commitment = %commitment,
            "generated membership proof"
        );

        Ok(Proof::new(commitment, challenge, response))
    }
}

/// Secret nonce backing a single proof.
///
/// Automatically zeroized when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
struct Nonce {
    bytes: [u8; NONCE_BYTES],
}

impl Nonce {
    /// Draws a fresh nonce from the generator.
    fn random<R: CryptoRngCore>(rng: &mut R) -> Result<Self> {
        let mut bytes = [0u8; NONCE_BYTES];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| Error::RandomSource(e.to_string()))?;
        Ok(Self { bytes })
    }

    /// Returns the nonce bytes.
    fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
