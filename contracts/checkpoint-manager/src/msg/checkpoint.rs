use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint256};

/// Signed context of a checkpoint. Only used to rebuild the signed message,
/// never persisted.
#[cw_serde]
pub struct CheckpointMetadata {
    pub block_hash: Binary,
    pub block_round: u64,
    pub current_validator_set_hash: Binary,
}

#[cw_serde]
pub struct Checkpoint {
    pub epoch: u64,
    pub block_number: u64,
    pub event_root: Binary,
}

impl Checkpoint {
    /// The synthetic checkpoint the ledger starts from
    pub fn origin() -> Self {
        Checkpoint {
            epoch: 0,
            block_number: 0,
            event_root: Binary::default(),
        }
    }
}

/// A batched leaf proven under the event root of the checkpoint it is submitted with
#[cw_serde]
pub struct FeedInput {
    pub block_number: u64,
    pub leaf_index: u64,
    /// ABI-style `(key, value)` pair of 32-byte big-endian words
    pub unhashed_leaf: Binary,
    pub proof: Vec<Binary>,
}

#[cw_serde]
pub struct CheckpointResponse {
    pub sequence: u64,
    pub epoch: u64,
    pub block_number: u64,
    pub event_root: Binary,
}

impl CheckpointResponse {
    pub fn new(sequence: u64, checkpoint: Checkpoint) -> Self {
        CheckpointResponse {
            sequence,
            epoch: checkpoint.epoch,
            block_number: checkpoint.block_number,
            event_root: checkpoint.event_root,
        }
    }
}

#[cw_serde]
pub struct CheckpointsResponse {
    pub checkpoints: Vec<CheckpointResponse>,
}

#[cw_serde]
pub struct EventRootResponse {
    pub event_root: Option<Binary>,
}

/// Latest block checkpointed in an epoch
#[cw_serde]
pub struct CheckpointByEpochResponse {
    pub exists: bool,
    pub block_number: u64,
}

/// Checkpoint block that finalises a given block
#[cw_serde]
pub struct CheckpointBlockResponse {
    pub exists: bool,
    pub block_number: u64,
}

#[cw_serde]
pub struct EventMembershipResponse {
    pub is_member: bool,
}

#[cw_serde]
pub struct PriceResponse {
    pub value: Uint256,
    pub exists: bool,
}

#[cw_serde]
pub struct PricesResponse {
    pub values: Vec<Uint256>,
    pub exists: Vec<bool>,
}
