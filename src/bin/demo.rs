//! Two-user console walkthrough of the membership proof scheme.
//!
//! User A proves membership against the "Admin" group, user B against the
//! "Member" group. Both proofs are then verified against "Admin": only user
//! A's proof should pass.

use membership_proof::{GroupCommitment, KeyPair, Prover, SecureRng, Verifier};

fn main() -> membership_proof::Result<()> {
    println!("Group membership proofs over secp256k1\n");

    let mut rng = SecureRng::new();

    println!("Step 1: Generate key pairs for two users");
    let user_a = KeyPair::generate(&mut rng);
    let user_b = KeyPair::generate(&mut rng);
    let user_a_public = user_a.public_key_hex();
    let user_b_public = user_b.public_key_hex();
    println!("  User A public key: {user_a_public}");
    println!("  User B public key: {user_b_public}\n");

    println!("Step 2: Commit to the group labels");
    let admin_group = GroupCommitment::from_label("Admin");
    let member_group = GroupCommitment::from_label("Member");
    println!("  Admin group commitment:  {admin_group}");
    println!("  Member group commitment: {member_group}\n");

    println!("Step 3: Each user generates a membership proof");
    let user_a_proof = Prover::new(user_a).prove(&mut rng, &admin_group)?;
    let user_b_proof = Prover::new(user_b).prove(&mut rng, &member_group)?;
    println!("  User A proof: {user_a_proof}");
    println!("  User B proof: {user_b_proof}\n");

    println!("Step 4: Verify both proofs against the Admin group");
    let verifier = Verifier::new(admin_group);
    let a_is_admin = verifier.verify(&user_a_proof, &user_a_public)?;
    let b_is_admin = verifier.verify(&user_b_proof, &user_b_public)?;
    println!("  Is user A a member of Admin? {a_is_admin}");
    println!("  Is user B a member of Admin? {b_is_admin}");

    Ok(())
}
