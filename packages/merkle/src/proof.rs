use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;
use sha2::Sha256;

use crate::error::MerkleError;
use crate::hash::{inner_hash_opt, HASH_SIZE};

/// A `Proof` is a proof of a leaf's existence in a position-ordered binary Merkle tree.
///
/// `siblings` lists the sibling hashes from the leaf level up to (but excluding) the root.
/// The left / right placement at level `k` is given by bit `k` of `index`: a set bit means
/// the running hash is the right child.
#[cw_serde]
pub struct Proof {
    pub index: u64,
    pub leaf_hash: Binary,
    pub siblings: Vec<Binary>,
}

impl Proof {
    /// Trees deeper than this cannot be addressed by a `u64` index
    pub const MAX_HEIGHT: usize = 64;
}

fn validate_siblings<T: AsRef<[u8]>>(siblings: &[T]) -> Result<(), MerkleError> {
    if siblings.len() > Proof::MAX_HEIGHT {
        return Err(MerkleError::generic_err(format!(
            "Expected no more than {} siblings, got {}",
            Proof::MAX_HEIGHT,
            siblings.len()
        )));
    }
    for (i, sibling) in siblings.iter().enumerate() {
        if sibling.as_ref().len() != HASH_SIZE {
            return Err(MerkleError::generic_err(format!(
                "Expected sibling #{} size to be {}, got {}",
                i,
                HASH_SIZE,
                sibling.as_ref().len()
            )));
        }
    }
    Ok(())
}

/// Folds `leaf_hash` up through `siblings`, using the bits of `index` to order each pair.
pub fn compute_root<T: AsRef<[u8]>>(
    leaf_hash: &[u8],
    index: u64,
    siblings: &[T],
) -> Result<Vec<u8>, MerkleError> {
    validate_siblings(siblings)?;
    let height = siblings.len();
    if height < Proof::MAX_HEIGHT && index >> height != 0 {
        return Err(MerkleError::IndexOutOfRange { index, height });
    }

    let mut hasher = Sha256::default();
    let mut computed = leaf_hash.to_vec();
    let mut position = index;
    for sibling in siblings {
        computed = if position & 1 == 0 {
            inner_hash_opt(&mut hasher, &computed, sibling.as_ref())
        } else {
            inner_hash_opt(&mut hasher, sibling.as_ref(), &computed)
        };
        position >>= 1;
    }
    Ok(computed)
}

/// `verify_membership` checks that `leaf_hash` sits at `index` under `root`.
///
/// Malformed proofs are reported as errors; well-formed proofs for the wrong root yield `false`.
pub fn verify_membership<T: AsRef<[u8]>>(
    leaf_hash: &[u8],
    index: u64,
    siblings: &[T],
    root: &[u8],
) -> Result<bool, MerkleError> {
    let computed = compute_root(leaf_hash, index, siblings)?;
    Ok(computed == root)
}
