use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint256};
use sha2::{Digest, Sha256};

use crate::error::ContractError;
use crate::msg::checkpoint::{Checkpoint, CheckpointMetadata, FeedInput};
use crate::msg::validator::Validator;
#[cfg(not(target_arch = "wasm32"))]
use {
    crate::msg::checkpoint::{
        CheckpointBlockResponse, CheckpointByEpochResponse, CheckpointResponse,
        CheckpointsResponse, EventMembershipResponse, EventRootResponse, PriceResponse,
        PricesResponse,
    },
    crate::msg::validator::{
        CurrentEpochResponse, TotalVotingPowerResponse, ValidatorSetHashResponse,
        ValidatorSetLengthResponse, ValidatorSetResponse,
    },
    crate::state::config::Config,
};

/// Signature namespace used when the instantiator does not provide one
pub const DEFAULT_DOMAIN_TAG: &[u8] = b"DOMAIN_CHECKPOINT_MANAGER";
/// Upper bound on a BLS hash-to-curve domain separation tag
const MAX_DOMAIN_BYTES: usize = 255;

// Common functions for contract messages
pub trait ContractMsg {
    fn validate(&self) -> Result<(), ContractError>;
    fn domain_to_bytes(&self) -> Result<Vec<u8>, ContractError>;
}

#[cw_serde]
pub struct InstantiateMsg {
    /// chain_id is mixed into every signed checkpoint message to prevent cross-deployment replay
    pub chain_id: u64,
    /// domain is the BLS domain separation tag of checkpoint signatures.
    /// NOTE: this is a hex string, not raw bytes. Defaults to `sha256("DOMAIN_CHECKPOINT_MANAGER")`
    pub domain: Option<String>,
    /// validators is the initial committee, in bitmap order
    pub validators: Vec<Validator>,
}

impl ContractMsg for InstantiateMsg {
    fn validate(&self) -> Result<(), ContractError> {
        let _ = self.domain_to_bytes()?;
        Ok(())
    }

    fn domain_to_bytes(&self) -> Result<Vec<u8>, ContractError> {
        match &self.domain {
            None => Ok(Sha256::digest(DEFAULT_DOMAIN_TAG).to_vec()),
            Some(domain) => {
                let bytes = hex::decode(domain).map_err(|_| {
                    ContractError::InvalidDomain(format!("not a valid hex string: {domain}"))
                })?;
                if bytes.is_empty() || bytes.len() > MAX_DOMAIN_BYTES {
                    return Err(ContractError::InvalidDomain(format!(
                        "expected 1 to {MAX_DOMAIN_BYTES} bytes, got {}",
                        bytes.len()
                    )));
                }
                Ok(bytes)
            }
        }
    }
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Submit a checkpoint signed by a quorum of the current committee, together with
    /// the feed inputs it commits to.
    Submit {
        metadata: CheckpointMetadata,
        checkpoint: Checkpoint,
        /// Aggregate BLS signature (G1) of the validators selected by `bitmap`
        signature: Binary,
        /// Full committee snapshot the signers agreed on
        validator_set: Vec<Validator>,
        /// Byte-packed signer selection, bit `i` is bit `i % 8` of byte `i / 8`
        bitmap: Binary,
        feed_inputs: Vec<FeedInput>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Config returns the chain id and signature domain of the contract
    #[returns(Config)]
    Config {},
    #[returns(ValidatorSetResponse)]
    ValidatorSet {},
    #[returns(ValidatorSetHashResponse)]
    ValidatorSetHash {},
    #[returns(ValidatorSetLengthResponse)]
    ValidatorSetLength {},
    /// Validator returns the committee member at `index`, in bitmap order
    #[returns(Validator)]
    Validator { index: u64 },
    #[returns(TotalVotingPowerResponse)]
    TotalVotingPower {},
    #[returns(CurrentEpochResponse)]
    CurrentEpoch {},
    /// LatestCheckpoint returns the last accepted checkpoint, or the origin one
    #[returns(CheckpointResponse)]
    LatestCheckpoint {},
    /// Checkpoint returns an accepted checkpoint by its sequence number. Sequence 0 is the origin
    #[returns(CheckpointResponse)]
    Checkpoint { sequence: u64 },
    /// Checkpoints returns the accepted checkpoints.
    ///
    /// `start_after` is the sequence number to start after, or `None` to start from the origin
    #[returns(CheckpointsResponse)]
    Checkpoints {
        start_after: Option<u64>,
        limit: Option<u32>,
        reverse: Option<bool>,
    },
    #[returns(EventRootResponse)]
    EventRootByBlock { block_number: u64 },
    /// CheckpointByEpoch returns the latest checkpointed block of `epoch`
    #[returns(CheckpointByEpochResponse)]
    CheckpointByEpoch { epoch: u64 },
    /// CheckpointBlock returns the checkpoint block finalising `block_number`, that is,
    /// the first epoch-closing checkpoint at or after it
    #[returns(CheckpointBlockResponse)]
    CheckpointBlock { block_number: u64 },
    /// EventMembershipByBlock checks the raw `leaf` at `leaf_index` against the event root
    /// checkpointed at `block_number`
    #[returns(EventMembershipResponse)]
    EventMembershipByBlock {
        block_number: u64,
        leaf: Binary,
        leaf_index: u64,
        proof: Vec<Binary>,
    },
    /// EventMembershipByEpoch checks the raw `leaf` at `leaf_index` against the latest event
    /// root checkpointed in `epoch`
    #[returns(EventMembershipResponse)]
    EventMembershipByEpoch {
        epoch: u64,
        leaf: Binary,
        leaf_index: u64,
        proof: Vec<Binary>,
    },
    #[returns(PriceResponse)]
    Price { key: Uint256 },
    /// Prices looks up each key, preserving order. Unknown keys read as `(0, false)`
    #[returns(PricesResponse)]
    Prices { keys: Vec<Uint256> },
}
