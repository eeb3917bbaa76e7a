/// Membership proof type (commitment, challenge, response).
pub mod proof;
/// Prover implementation for generating membership proofs.
pub mod prover;
/// Verifier implementation for checking membership proofs.
pub mod verifier;

pub use proof::Proof;
pub use prover::Prover;
pub use verifier::Verifier;
