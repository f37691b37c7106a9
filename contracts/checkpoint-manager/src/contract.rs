use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, QueryResponse, Response,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::exec::checkpoint::{handle_submit_checkpoint, Submission};
use crate::msg::contract::{ContractMsg, ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::queries;
use crate::state::config::{Config, CONFIG};
use crate::state::{checkpoints, validator_set};

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The committee given at instantiation is the only one the contract ever checks
/// checkpoints against.
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    msg.validate()?;
    for v in &msg.validators {
        deps.api.addr_validate(&v.address)?;
    }

    // initialise config
    let cfg = Config {
        chain_id: msg.chain_id,
        domain: Binary::new(msg.domain_to_bytes()?),
    };
    CONFIG.save(deps.storage, &cfg)?;

    let hash = validator_set::init(deps.storage, &msg.validators)?;
    checkpoints::init(deps.storage)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("validator_set_hash", hex::encode(hash.as_slice()))
        .add_attribute("validators", msg.validators.len().to_string()))
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<QueryResponse, ContractError> {
    match msg {
        QueryMsg::Config {} => Ok(to_json_binary(&queries::config(deps)?)?),
        QueryMsg::ValidatorSet {} => Ok(to_json_binary(&queries::validator_set(deps)?)?),
        QueryMsg::ValidatorSetHash {} => Ok(to_json_binary(&queries::validator_set_hash(deps)?)?),
        QueryMsg::ValidatorSetLength {} => {
            Ok(to_json_binary(&queries::validator_set_length(deps)?)?)
        }
        QueryMsg::Validator { index } => Ok(to_json_binary(&queries::validator(deps, index)?)?),
        QueryMsg::TotalVotingPower {} => Ok(to_json_binary(&queries::total_voting_power(deps)?)?),
        QueryMsg::CurrentEpoch {} => Ok(to_json_binary(&queries::current_epoch(deps)?)?),
        QueryMsg::LatestCheckpoint {} => Ok(to_json_binary(&queries::latest_checkpoint(deps)?)?),
        QueryMsg::Checkpoint { sequence } => {
            Ok(to_json_binary(&queries::checkpoint(deps, sequence)?)?)
        }
        QueryMsg::Checkpoints {
            start_after,
            limit,
            reverse,
        } => Ok(to_json_binary(&queries::checkpoints(
            deps,
            start_after,
            limit,
            reverse,
        )?)?),
        QueryMsg::EventRootByBlock { block_number } => Ok(to_json_binary(
            &queries::event_root_by_block(deps, block_number)?,
        )?),
        QueryMsg::CheckpointByEpoch { epoch } => {
            Ok(to_json_binary(&queries::checkpoint_by_epoch(deps, epoch)?)?)
        }
        QueryMsg::CheckpointBlock { block_number } => Ok(to_json_binary(
            &queries::checkpoint_block(deps, block_number)?,
        )?),
        QueryMsg::EventMembershipByBlock {
            block_number,
            leaf,
            leaf_index,
            proof,
        } => Ok(to_json_binary(&queries::event_membership_by_block(
            deps,
            block_number,
            &leaf,
            leaf_index,
            &proof,
        )?)?),
        QueryMsg::EventMembershipByEpoch {
            epoch,
            leaf,
            leaf_index,
            proof,
        } => Ok(to_json_binary(&queries::event_membership_by_epoch(
            deps,
            epoch,
            &leaf,
            leaf_index,
            &proof,
        )?)?),
        QueryMsg::Price { key } => Ok(to_json_binary(&queries::price(deps, key)?)?),
        QueryMsg::Prices { keys } => Ok(to_json_binary(&queries::prices(deps, &keys)?)?),
    }
}

/// this is a no-op just to test how this integrates with wasmd
pub fn migrate(_deps: DepsMut, _env: Env, _msg: Empty) -> Result<Response, ContractError> {
    Ok(Response::default())
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Submit {
            metadata,
            checkpoint,
            signature,
            validator_set,
            bitmap,
            feed_inputs,
        } => handle_submit_checkpoint(
            deps,
            &Submission {
                metadata: &metadata,
                checkpoint: &checkpoint,
                signature: &signature,
                validator_set: &validator_set,
                bitmap: &bitmap,
                feed_inputs: &feed_inputs,
            },
        ),
    }
}
