//! validator_set is the registry of the current committee.
//! It stores the ordered validators together with their commitment hash, the
//! total voting power and the current epoch.
use cosmwasm_std::{Binary, StdResult, Storage, Uint128};
use cw_storage_plus::Item;

use crate::error::ContractError;
use crate::msg::validator::Validator;
use crate::utils::digest::validator_set_hash;

pub const VALIDATORS: Item<Vec<Validator>> = Item::new("validators");
pub const VALIDATOR_SET_HASH: Item<Binary> = Item::new("validator_set_hash");
pub const TOTAL_VOTING_POWER: Item<Uint128> = Item::new("total_voting_power");
pub const CURRENT_EPOCH: Item<u64> = Item::new("current_epoch");

/// init stores the initial committee and resets the current epoch.
/// Every validator must carry a non-zero voting power.
pub fn init(storage: &mut dyn Storage, validators: &[Validator]) -> Result<Binary, ContractError> {
    if validators.is_empty() {
        return Err(ContractError::EmptyValidatorSet);
    }
    let mut total = Uint128::zero();
    for (index, v) in validators.iter().enumerate() {
        if v.voting_power.is_zero() {
            return Err(ContractError::VotingPowerZero { index });
        }
        total = total.checked_add(v.voting_power)?;
    }
    let hash = Binary::new(validator_set_hash(validators));

    VALIDATORS.save(storage, &validators.to_vec())?;
    VALIDATOR_SET_HASH.save(storage, &hash)?;
    TOTAL_VOTING_POWER.save(storage, &total)?;
    CURRENT_EPOCH.save(storage, &0)?;

    Ok(hash)
}

pub fn get_validators(storage: &dyn Storage) -> StdResult<Vec<Validator>> {
    VALIDATORS.load(storage)
}

pub fn get_validator(storage: &dyn Storage, index: u64) -> Result<Validator, ContractError> {
    let validators = VALIDATORS.load(storage)?;
    let len = validators.len() as u64;
    usize::try_from(index)
        .ok()
        .and_then(|i| validators.into_iter().nth(i))
        .ok_or(ContractError::ValidatorIndexOutOfBounds { index, len })
}

pub fn get_validator_count(storage: &dyn Storage) -> StdResult<u64> {
    Ok(VALIDATORS.load(storage)?.len() as u64)
}

pub fn get_validator_set_hash(storage: &dyn Storage) -> StdResult<Binary> {
    VALIDATOR_SET_HASH.load(storage)
}

pub fn get_total_voting_power(storage: &dyn Storage) -> StdResult<Uint128> {
    TOTAL_VOTING_POWER.load(storage)
}

pub fn get_current_epoch(storage: &dyn Storage) -> StdResult<u64> {
    CURRENT_EPOCH.load(storage)
}

pub(crate) fn set_current_epoch(storage: &mut dyn Storage, epoch: u64) -> StdResult<()> {
    CURRENT_EPOCH.save(storage, &epoch)
}
