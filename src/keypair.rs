//! secp256k1 key pairs and point/scalar hex encodings.
//!
//! All participants and proofs live on secp256k1. Public points travel as
//! SEC1 hex strings (compressed by default, 66 characters); scalars travel
//! as big-integer hex with leading zero nibbles dropped.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{PublicKey, SecretKey};
use rand_core::CryptoRngCore;

use crate::{Error, Result};

/// An exclusive secp256k1 key pair: a private scalar and its public point.
///
/// Created once per participant and never mutated. The private scalar is
/// zeroized when the pair is dropped (guaranteed by `k256::SecretKey`).
#[derive(Clone, Debug)]
pub struct KeyPair {
    secret: SecretKey,
    public: PublicKey,
}

impl KeyPair {
    /// Generates a fresh key pair from the given random number generator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use membership_proof::{KeyPair, SecureRng};
    ///
    /// let mut rng = SecureRng::new();
    /// let key_pair = KeyPair::generate(&mut rng);
    /// assert_eq!(key_pair.public_key_hex().len(), 66);
    /// ```
    pub fn generate<R: CryptoRngCore>(rng: &mut R) -> Self {
        let secret = SecretKey::random(rng);
        let public = secret.public_key();
        Self { secret, public }
    }

    /// Returns the public point.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Returns the compressed SEC1 hex encoding of the public point.
    pub fn public_key_hex(&self) -> String {
        encode_public(&self.public, true)
    }

    /// Returns the private scalar as big-integer hex.
    ///
    /// # Security
    ///
    /// The returned string is a secret and must not be logged or transmitted.
    pub fn private_scalar_hex(&self) -> String {
        scalar_bytes_to_hex(&self.secret.to_bytes())
    }
}

/// Encodes a public point as SEC1 hex, compressed or uncompressed.
pub fn encode_public(key: &PublicKey, compressed: bool) -> String {
    hex::encode(key.to_encoded_point(compressed).as_bytes())
}

/// Decodes a public point from SEC1 hex.
///
/// Both compressed (66 chars) and uncompressed (130 chars) encodings are
/// accepted.
///
/// # Errors
///
/// Returns [`Error::Curve`] if the string is not valid hex or the bytes do
/// not represent a point on the curve.
pub fn decode_public(encoded: &str) -> Result<PublicKey> {
    let bytes =
        hex::decode(encoded).map_err(|e| Error::Curve(format!("Invalid public key hex: {e}")))?;

    PublicKey::from_sec1_bytes(&bytes).map_err(|_| {
        Error::Curve("Bytes do not represent a valid secp256k1 point".to_string())
    })
}

/// Interprets 32 seed bytes as a secp256k1 private scalar and returns its
/// big-integer hex representation.
///
/// # Errors
///
/// Returns [`Error::Curve`] if the bytes are zero or not below the curve
/// order.
pub fn scalar_hex_from_seed(seed: &[u8]) -> Result<String> {
    let secret = SecretKey::from_slice(seed)
        .map_err(|_| Error::Curve("Seed is not a valid secp256k1 scalar".to_string()))?;

    Ok(scalar_bytes_to_hex(&secret.to_bytes()))
}

/// Hex-encodes big-endian scalar bytes, dropping leading zero nibbles to
/// match big-integer display form.
fn scalar_bytes_to_hex(bytes: &[u8]) -> String {
    let full = hex::encode(bytes);
    let trimmed = full.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
