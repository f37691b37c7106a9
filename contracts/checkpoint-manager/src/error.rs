use checkpoint_merkle::error::MerkleError;
use cosmwasm_std::{OverflowError, StdError, Uint256};
use hex::FromHexError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    StdError(#[from] StdError),
    #[error("{0}")]
    Overflow(#[from] OverflowError),
    #[error("{0}")]
    HexError(#[from] FromHexError),
    #[error("{0}")]
    MerkleError(#[from] MerkleError),
    #[error("The validator set cannot be empty")]
    EmptyValidatorSet,
    #[error("Validator {index} has zero voting power")]
    VotingPowerZero { index: usize },
    #[error("Validator index {index} is out of bounds for a set of {len} validators")]
    ValidatorIndexOutOfBounds { index: u64, len: u64 },
    #[error("Invalid signature domain: {0}")]
    InvalidDomain(String),
    #[error("The validator set hash does not match the current validator set")]
    InvalidValidatorSetHash,
    #[error("Aggregate signature verification failed")]
    SignatureVerificationFailed,
    #[error("The bitmap selects no validator")]
    BitmapIsEmpty,
    #[error("Insufficient voting power: {signed} signed out of {total}")]
    InsufficientVotingPower { signed: Uint256, total: Uint256 },
    #[error("Checkpoint epoch {epoch} is older than the current epoch {current}")]
    InvalidEpoch { epoch: u64, current: u64 },
    #[error("Checkpoint block {block_number} does not advance past block {latest}")]
    EmptyCheckpoint { block_number: u64, latest: u64 },
    #[error("Invalid inclusion proof for feed input {index}")]
    InvalidProof { index: usize },
    #[error("Feed input {index} is not a (key, value) pair: {len} bytes")]
    InvalidFeedInput { index: usize, len: usize },
    #[error("No event root for block number {0}")]
    NoEventRootForBlockNumber(u64),
    #[error("No event root for epoch {0}")]
    NoEventRootForEpoch(u64),
}
