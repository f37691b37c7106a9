//! Canonical encodings hashed into the validator set commitment and the signed
//! checkpoint message.
//!
//! Integers are 32-byte big-endian words, left padded. Byte strings are
//! length-prefixed with a word.
use cosmwasm_std::Uint256;
use sha2::{Digest, Sha256};

use crate::msg::checkpoint::{Checkpoint, CheckpointMetadata, FeedInput};
use crate::msg::validator::Validator;

const WORD_SIZE: usize = 32;
/// A price leaf is exactly two words, `(key, value)`
pub const PRICE_LEAF_SIZE: usize = 2 * WORD_SIZE;

fn update_word(hasher: &mut Sha256, be_bytes: &[u8]) {
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - be_bytes.len()..].copy_from_slice(be_bytes);
    hasher.update(word);
}

fn update_u64(hasher: &mut Sha256, value: u64) {
    update_word(hasher, &value.to_be_bytes());
}

fn update_bytes(hasher: &mut Sha256, data: &[u8]) {
    update_u64(hasher, data.len() as u64);
    hasher.update(data);
}

/// `validator_set_hash` commits to the ordered committee, including every member's voting power
pub fn validator_set_hash(validators: &[Validator]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    update_u64(&mut hasher, validators.len() as u64);
    for v in validators {
        update_bytes(&mut hasher, v.address.as_bytes());
        update_bytes(&mut hasher, &v.bls_public_key);
        update_word(&mut hasher, &v.voting_power.u128().to_be_bytes());
    }
    hasher.finalize().to_vec()
}

pub fn feed_inputs_hash(feed_inputs: &[FeedInput]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    update_u64(&mut hasher, feed_inputs.len() as u64);
    for input in feed_inputs {
        update_u64(&mut hasher, input.block_number);
        update_u64(&mut hasher, input.leaf_index);
        update_bytes(&mut hasher, &input.unhashed_leaf);
        update_u64(&mut hasher, input.proof.len() as u64);
        for node in &input.proof {
            update_bytes(&mut hasher, node);
        }
    }
    hasher.finalize().to_vec()
}

/// `checkpoint_message` is the message the committee signs for a checkpoint
pub fn checkpoint_message(
    chain_id: u64,
    checkpoint: &Checkpoint,
    metadata: &CheckpointMetadata,
    feed_inputs_hash: &[u8],
    validator_set_hash: &[u8],
) -> Vec<u8> {
    let mut hasher = Sha256::new();
    update_u64(&mut hasher, chain_id);
    update_u64(&mut hasher, checkpoint.block_number);
    update_bytes(&mut hasher, &metadata.block_hash);
    update_u64(&mut hasher, metadata.block_round);
    update_u64(&mut hasher, checkpoint.epoch);
    update_bytes(&mut hasher, &checkpoint.event_root);
    update_bytes(&mut hasher, &metadata.current_validator_set_hash);
    hasher.update(feed_inputs_hash);
    hasher.update(validator_set_hash);
    hasher.finalize().to_vec()
}

/// `decode_price_leaf` splits a price leaf into its `(key, value)` words
pub fn decode_price_leaf(leaf: &[u8]) -> Option<(Uint256, Uint256)> {
    if leaf.len() != PRICE_LEAF_SIZE {
        return None;
    }
    let mut key = [0u8; WORD_SIZE];
    let mut value = [0u8; WORD_SIZE];
    key.copy_from_slice(&leaf[..WORD_SIZE]);
    value.copy_from_slice(&leaf[WORD_SIZE..]);
    Some((Uint256::from_be_bytes(key), Uint256::from_be_bytes(value)))
}
