//! Lightweight proofs of group membership over secp256k1.
//!
//! A prover holding an elliptic-curve key pair builds a [`Proof`] against a
//! [`GroupCommitment`] (the SHA-256 digest of a group label such as
//! `"Admin"`). A verifier checks the proof against the same group commitment
//! and the prover's claimed public key; the result is a plain boolean.
//!
//! The proof ties three hex strings together: the prover's compressed public
//! point (`commitment`), a scalar derived from a fresh random nonce
//! (`response`), and a SHA-256 digest binding group, commitment, and
//! response (`challenge`).
//!
//! # Security
//!
//! This is not a general zero-knowledge-proof library. The response scalar
//! derives from the nonce alone, so the proof demonstrates that *someone*
//! bound this public key to this group at generation time; it does not prove
//! possession of the matching private key. There is no revocation,
//! multi-group membership, persistence, or transport layer.
//!
//! # Examples
//!
//! ```rust
//! use membership_proof::{GroupCommitment, KeyPair, Prover, SecureRng, Verifier};
//!
//! # fn main() -> membership_proof::Result<()> {
//! let mut rng = SecureRng::new();
//! let key_pair = KeyPair::generate(&mut rng);
//! let public_hex = key_pair.public_key_hex();
//!
//! let group = GroupCommitment::from_label("Admin");
//! let proof = Prover::new(key_pair).prove(&mut rng, &group)?;
//!
//! let verifier = Verifier::new(group);
//! assert!(verifier.verify(&proof, &public_hex)?);
//! # Ok(())
//! # }
//! ```

/// Group commitments (hashed group labels).
pub mod commitment;
/// Error types.
pub mod error;
/// SHA-256 hashing helpers.
pub mod hash;
/// secp256k1 key pairs and hex encodings.
pub mod keypair;
/// Proof generation and verification.
pub mod protocol;
/// Secure randomness.
pub mod rng;

pub use commitment::GroupCommitment;
pub use error::{Error, Result};
pub use keypair::KeyPair;
pub use protocol::{Proof, Prover, Verifier};
pub use rng::SecureRng;
