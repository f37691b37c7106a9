use sha2::{Digest, Sha256};

use crate::error::MerkleError;
use crate::hash::{inner_hash_opt, ZERO_HASH};
use crate::proof::Proof;

/// A position-ordered binary Merkle tree over pre-hashed leaves.
///
/// The leaf layer is padded with `ZERO_HASH` up to the next power of two, so every
/// proof has exactly `height` siblings and the leaf index bits drive the pair ordering.
#[derive(Clone, Debug, PartialEq)]
pub struct MerkleTree {
    /// `layers[0]` is the padded leaf layer, the last layer holds the root
    layers: Vec<Vec<Vec<u8>>>,
    num_leaves: usize,
}

impl MerkleTree {
    pub fn from_leaf_hashes(leaf_hashes: Vec<Vec<u8>>) -> Result<Self, MerkleError> {
        if leaf_hashes.is_empty() {
            return Err(MerkleError::generic_err(
                "Cannot build a tree without leaves",
            ));
        }
        let num_leaves = leaf_hashes.len();
        let mut leaves = leaf_hashes;
        leaves.resize(num_leaves.next_power_of_two(), ZERO_HASH.to_vec());

        let mut hasher = Sha256::new();
        let mut layers = vec![leaves];
        while layers[layers.len() - 1].len() > 1 {
            let next = layers[layers.len() - 1]
                .chunks(2)
                .map(|pair| inner_hash_opt(&mut hasher, &pair[0], &pair[1]))
                .collect();
            layers.push(next);
        }

        Ok(MerkleTree { layers, num_leaves })
    }

    pub fn root(&self) -> Vec<u8> {
        self.layers[self.layers.len() - 1][0].clone()
    }

    pub fn height(&self) -> usize {
        self.layers.len() - 1
    }

    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    /// `proof` returns the inclusion proof of the leaf at `index`
    pub fn proof(&self, index: u64) -> Result<Proof, MerkleError> {
        if index >= self.num_leaves as u64 {
            return Err(MerkleError::generic_err(format!(
                "Invalid index ({}) for a tree of {} leaves",
                index, self.num_leaves
            )));
        }
        let mut position = index as usize;
        let mut siblings = Vec::with_capacity(self.height());
        for layer in &self.layers[..self.height()] {
            siblings.push(layer[position ^ 1].clone().into());
            position >>= 1;
        }

        Ok(Proof {
            index,
            leaf_hash: self.layers[0][index as usize].clone().into(),
            siblings,
        })
    }
}
