use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

/// A committee member. The position of a validator in its set is its bit in
/// the submission bitmap.
#[cw_serde]
pub struct Validator {
    pub address: String,
    /// BLS12-381 G2 public key, compressed (96 bytes) or uncompressed (192 bytes)
    pub bls_public_key: Binary,
    pub voting_power: Uint128,
}

#[cw_serde]
pub struct ValidatorSetResponse {
    pub validators: Vec<Validator>,
}

#[cw_serde]
pub struct ValidatorSetHashResponse {
    pub hash: Binary,
}

#[cw_serde]
pub struct ValidatorSetLengthResponse {
    pub length: u64,
}

#[cw_serde]
pub struct TotalVotingPowerResponse {
    pub total_voting_power: Uint128,
}

#[cw_serde]
pub struct CurrentEpochResponse {
    pub epoch: u64,
}
