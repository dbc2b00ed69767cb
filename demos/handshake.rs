//! Walkthrough of a UniformDH exchange between two parties.
//!
//! This example demonstrates:
//! - Creating a context per party
//! - Exchanging fixed-width public keys
//! - Deriving the shared secret on both sides
//! - Rejecting a malformed peer key

use uniform_dh::{UniformDh, GROUP_BYTES};

fn main() {
    println!("UniformDH: Handshake Example\n");

    println!("Step 1: Each party creates a context");
    let mut alice = UniformDh::new().expect("Context creation should succeed");
    let mut bob = UniformDh::new().expect("Context creation should succeed");
    println!("  Group: {}\n", alice.group().name());

    println!("Step 2: Exchange public keys");
    let alice_public = alice.public_key();
    let bob_public = bob.public_key();
    println!("  Alice sends {} bytes", alice_public.as_bytes().len());
    println!("  Bob sends {} bytes", bob_public.as_bytes().len());
    println!("  Alice's key starts with {}\n", hex::encode(&alice_public.as_bytes()[..8]));

    println!("Step 3: Derive the shared secret");
    let alice_secret = alice
        .shared_secret(&bob_public)
        .expect("Bob's key should be accepted");
    let bob_secret = bob
        .shared_secret(&alice_public)
        .expect("Alice's key should be accepted");
    println!("  Secret length: {} bytes", alice_secret.as_bytes().len());
    println!("  Secrets match: {}\n", alice_secret == bob_secret);

    println!("Step 4: A truncated key is rejected");
    let mut carol = UniformDh::new().expect("Context creation should succeed");
    match carol.shared_secret_from_bytes(&alice_public.as_bytes()[..GROUP_BYTES - 1]) {
        Ok(_) => println!("  Unexpectedly accepted"),
        Err(e) => println!("  Rejected: {}", e),
    }
}
