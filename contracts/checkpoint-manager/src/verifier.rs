//! Verification capabilities the checkpoint protocol depends on.
//!
//! Both are pure. The production implementations are `utils::bls::BlsAggregateVerifier`
//! and `BinaryMerkleVerifier`; tests substitute scripted ones.
use cosmwasm_std::Binary;

use checkpoint_merkle::verify_membership;

pub trait AggregateVerifier {
    /// `verify` checks `aggregate_signature` over `message` against exactly `public_keys`
    fn verify(&self, message: &[u8], aggregate_signature: &[u8], public_keys: &[&[u8]]) -> bool;
}

pub trait MerkleVerifier {
    /// `verify` checks that `leaf_hash` sits at `index` under `root`
    fn verify(&self, leaf_hash: &[u8], index: u64, proof: &[Binary], root: &[u8]) -> bool;
}

/// Position-ordered SHA-256 binary Merkle tree membership
pub struct BinaryMerkleVerifier;

impl MerkleVerifier for BinaryMerkleVerifier {
    fn verify(&self, leaf_hash: &[u8], index: u64, proof: &[Binary], root: &[u8]) -> bool {
        // Malformed proofs (bad node size, index past the tree) are plain non-members
        verify_membership(leaf_hash, index, proof, root).unwrap_or(false)
    }
}
