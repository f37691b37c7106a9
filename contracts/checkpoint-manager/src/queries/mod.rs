use cosmwasm_std::{Binary, Deps, StdResult, Uint256};

use checkpoint_merkle::hash::leaf_hash;

use crate::error::ContractError;
use crate::msg::checkpoint::{
    CheckpointBlockResponse, CheckpointByEpochResponse, CheckpointResponse, CheckpointsResponse,
    EventMembershipResponse, EventRootResponse, PriceResponse, PricesResponse,
};
use crate::msg::validator::{
    CurrentEpochResponse, TotalVotingPowerResponse, Validator, ValidatorSetHashResponse,
    ValidatorSetLengthResponse, ValidatorSetResponse,
};
use crate::state::checkpoints::{
    get_checkpoint, get_checkpoint_block, get_checkpoint_by_epoch, get_checkpoints,
    get_event_root_by_block, get_latest_checkpoint,
};
use crate::state::config::{Config, CONFIG};
use crate::state::prices::get_price;
use crate::state::validator_set::{
    get_current_epoch, get_total_voting_power, get_validator, get_validator_count,
    get_validator_set_hash, get_validators,
};
use crate::verifier::{BinaryMerkleVerifier, MerkleVerifier};

pub fn config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn validator_set(deps: Deps) -> StdResult<ValidatorSetResponse> {
    Ok(ValidatorSetResponse {
        validators: get_validators(deps.storage)?,
    })
}

pub fn validator_set_hash(deps: Deps) -> StdResult<ValidatorSetHashResponse> {
    Ok(ValidatorSetHashResponse {
        hash: get_validator_set_hash(deps.storage)?,
    })
}

pub fn validator_set_length(deps: Deps) -> StdResult<ValidatorSetLengthResponse> {
    Ok(ValidatorSetLengthResponse {
        length: get_validator_count(deps.storage)?,
    })
}

pub fn validator(deps: Deps, index: u64) -> Result<Validator, ContractError> {
    get_validator(deps.storage, index)
}

pub fn total_voting_power(deps: Deps) -> StdResult<TotalVotingPowerResponse> {
    Ok(TotalVotingPowerResponse {
        total_voting_power: get_total_voting_power(deps.storage)?,
    })
}

pub fn current_epoch(deps: Deps) -> StdResult<CurrentEpochResponse> {
    Ok(CurrentEpochResponse {
        epoch: get_current_epoch(deps.storage)?,
    })
}

pub fn latest_checkpoint(deps: Deps) -> StdResult<CheckpointResponse> {
    let (sequence, checkpoint) = get_latest_checkpoint(deps.storage)?;
    Ok(CheckpointResponse::new(sequence, checkpoint))
}

pub fn checkpoint(deps: Deps, sequence: u64) -> StdResult<CheckpointResponse> {
    let checkpoint = get_checkpoint(deps.storage, sequence)?;
    Ok(CheckpointResponse::new(sequence, checkpoint))
}

pub fn checkpoints(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
    reverse: Option<bool>,
) -> StdResult<CheckpointsResponse> {
    let checkpoints = get_checkpoints(deps.storage, start_after, limit, reverse)?;
    Ok(CheckpointsResponse {
        checkpoints: checkpoints
            .into_iter()
            .map(|(sequence, c)| CheckpointResponse::new(sequence, c))
            .collect(),
    })
}

pub fn event_root_by_block(deps: Deps, block_number: u64) -> StdResult<EventRootResponse> {
    Ok(EventRootResponse {
        event_root: get_event_root_by_block(deps.storage, block_number)?,
    })
}

pub fn checkpoint_by_epoch(deps: Deps, epoch: u64) -> StdResult<CheckpointByEpochResponse> {
    let checkpoint = get_checkpoint_by_epoch(deps.storage, epoch)?;
    Ok(CheckpointByEpochResponse {
        exists: checkpoint.is_some(),
        block_number: checkpoint.map(|c| c.block_number).unwrap_or_default(),
    })
}

pub fn checkpoint_block(deps: Deps, block_number: u64) -> StdResult<CheckpointBlockResponse> {
    let block = get_checkpoint_block(deps.storage, block_number)?;
    Ok(CheckpointBlockResponse {
        exists: block.is_some(),
        block_number: block.unwrap_or_default(),
    })
}

pub fn event_membership_by_block(
    deps: Deps,
    block_number: u64,
    leaf: &[u8],
    leaf_index: u64,
    proof: &[Binary],
) -> Result<EventMembershipResponse, ContractError> {
    let event_root = get_event_root_by_block(deps.storage, block_number)?
        .ok_or(ContractError::NoEventRootForBlockNumber(block_number))?;
    Ok(EventMembershipResponse {
        is_member: BinaryMerkleVerifier.verify(&leaf_hash(leaf), leaf_index, proof, &event_root),
    })
}

pub fn event_membership_by_epoch(
    deps: Deps,
    epoch: u64,
    leaf: &[u8],
    leaf_index: u64,
    proof: &[Binary],
) -> Result<EventMembershipResponse, ContractError> {
    let checkpoint = get_checkpoint_by_epoch(deps.storage, epoch)?
        .ok_or(ContractError::NoEventRootForEpoch(epoch))?;
    Ok(EventMembershipResponse {
        is_member: BinaryMerkleVerifier.verify(
            &leaf_hash(leaf),
            leaf_index,
            proof,
            &checkpoint.event_root,
        ),
    })
}

pub fn price(deps: Deps, key: Uint256) -> StdResult<PriceResponse> {
    let value = get_price(deps.storage, key)?;
    Ok(PriceResponse {
        exists: value.is_some(),
        value: value.unwrap_or_default(),
    })
}

pub fn prices(deps: Deps, keys: &[Uint256]) -> StdResult<PricesResponse> {
    let mut values = Vec::with_capacity(keys.len());
    let mut exists = Vec::with_capacity(keys.len());
    for key in keys {
        let value = get_price(deps.storage, *key)?;
        exists.push(value.is_some());
        values.push(value.unwrap_or_default());
    }
    Ok(PricesResponse { values, exists })
}
