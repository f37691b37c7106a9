pub mod error;
pub mod hash;
pub mod proof;
pub mod tree;

pub use proof::{compute_root, verify_membership, Proof};
pub use tree::MerkleTree;
