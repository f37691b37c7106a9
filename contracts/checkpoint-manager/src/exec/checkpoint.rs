use cosmwasm_std::{DepsMut, Event, Response, Storage, Uint256};

use crate::error::ContractError;
use crate::msg::checkpoint::{Checkpoint, CheckpointMetadata, FeedInput};
use crate::msg::validator::Validator;
use crate::state::config::CONFIG;
use crate::state::{checkpoints, prices, validator_set};
use crate::utils::bitmap::selected_indices;
use crate::utils::bls::BlsAggregateVerifier;
use crate::utils::digest::{
    checkpoint_message, decode_price_leaf, feed_inputs_hash, validator_set_hash,
};
use crate::verifier::{AggregateVerifier, BinaryMerkleVerifier, MerkleVerifier};
use checkpoint_merkle::hash::leaf_hash;

/// A checkpoint submission, as received from the submitter
pub struct Submission<'a> {
    pub metadata: &'a CheckpointMetadata,
    pub checkpoint: &'a Checkpoint,
    pub signature: &'a [u8],
    pub validator_set: &'a [Validator],
    pub bitmap: &'a [u8],
    pub feed_inputs: &'a [FeedInput],
}

/// Outcome of an accepted submission
#[derive(Debug, PartialEq)]
pub struct Accepted {
    pub sequence: u64,
    pub signers: usize,
    pub signed_voting_power: Uint256,
    /// set bitmap bits past the end of the committee
    pub ignored_bits: usize,
}

pub fn handle_submit_checkpoint(
    deps: DepsMut,
    submission: &Submission,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    let aggregate_verifier = BlsAggregateVerifier::new(&cfg.domain);

    let accepted = submit_checkpoint(
        deps.storage,
        &aggregate_verifier,
        &BinaryMerkleVerifier,
        cfg.chain_id,
        submission,
    )?;
    if accepted.ignored_bits > 0 {
        deps.api.debug(&format!(
            "checkpoint {}: ignored {} bitmap bits past the committee",
            submission.checkpoint.block_number, accepted.ignored_bits
        ));
    }

    let checkpoint = submission.checkpoint;
    let event = Event::new("submit_checkpoint")
        .add_attribute("sequence", accepted.sequence.to_string())
        .add_attribute("epoch", checkpoint.epoch.to_string())
        .add_attribute("block_number", checkpoint.block_number.to_string())
        .add_attribute("event_root", hex::encode(checkpoint.event_root.as_slice()))
        .add_attribute("signers", accepted.signers.to_string())
        .add_attribute(
            "signed_voting_power",
            accepted.signed_voting_power.to_string(),
        )
        .add_attribute("feed_inputs", submission.feed_inputs.len().to_string());

    Ok(Response::new()
        .add_attribute("action", "submit_checkpoint")
        .add_event(event))
}

/// submit_checkpoint verifies a submission against the registry and the ledger and,
/// only if every check passes, commits it.
///
/// The checks run in order and the first failure aborts the submission:
/// - the snapshot and the signed metadata both match the registered validator set
/// - the bitmap selects at least one validator
/// - the aggregate signature of the selected validators verifies over the checkpoint message
/// - the selected validators hold more than 2/3 of the voting power
/// - the epoch does not go back, and the block number moves forward
/// - every feed input is proven under the event root and is a `(key, value)` pair
pub fn submit_checkpoint<A: AggregateVerifier, M: MerkleVerifier>(
    storage: &mut dyn Storage,
    aggregate_verifier: &A,
    merkle_verifier: &M,
    chain_id: u64,
    submission: &Submission,
) -> Result<Accepted, ContractError> {
    let Submission {
        metadata,
        checkpoint,
        signature,
        validator_set,
        bitmap,
        feed_inputs,
    } = submission;

    let current_hash = validator_set::get_validator_set_hash(storage)?;
    let snapshot_hash = validator_set_hash(validator_set);
    if snapshot_hash != metadata.current_validator_set_hash.as_slice()
        || snapshot_hash != current_hash.as_slice()
    {
        return Err(ContractError::InvalidValidatorSetHash);
    }

    let message = checkpoint_message(
        chain_id,
        checkpoint,
        metadata,
        &feed_inputs_hash(feed_inputs),
        &snapshot_hash,
    );

    let selection = selected_indices(bitmap, validator_set.len());
    if selection.is_empty() {
        return Err(ContractError::BitmapIsEmpty);
    }
    let public_keys: Vec<&[u8]> = selection
        .indices
        .iter()
        .map(|&i| validator_set[i].bls_public_key.as_slice())
        .collect();
    if !aggregate_verifier.verify(&message, signature, &public_keys) {
        return Err(ContractError::SignatureVerificationFailed);
    }

    let signed = selection
        .indices
        .iter()
        .try_fold(Uint256::zero(), |acc, &i| {
            acc.checked_add(validator_set[i].voting_power.into())
        })?;
    let total: Uint256 = validator_set::get_total_voting_power(storage)?.into();
    if signed.checked_mul(Uint256::from(3u8))? <= total.checked_mul(Uint256::from(2u8))? {
        return Err(ContractError::InsufficientVotingPower { signed, total });
    }

    let current_epoch = validator_set::get_current_epoch(storage)?;
    if checkpoint.epoch < current_epoch {
        return Err(ContractError::InvalidEpoch {
            epoch: checkpoint.epoch,
            current: current_epoch,
        });
    }
    let (_, latest) = checkpoints::get_latest_checkpoint(storage)?;
    if checkpoint.block_number <= latest.block_number {
        return Err(ContractError::EmptyCheckpoint {
            block_number: checkpoint.block_number,
            latest: latest.block_number,
        });
    }

    for (index, input) in feed_inputs.iter().enumerate() {
        let hash = leaf_hash(&input.unhashed_leaf);
        if !merkle_verifier.verify(&hash, input.leaf_index, &input.proof, &checkpoint.event_root) {
            return Err(ContractError::InvalidProof { index });
        }
    }
    let updates = feed_inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            decode_price_leaf(&input.unhashed_leaf).ok_or(ContractError::InvalidFeedInput {
                index,
                len: input.unhashed_leaf.len(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // All good, commit
    validator_set::set_current_epoch(storage, checkpoint.epoch)?;
    let sequence = checkpoints::insert_checkpoint(storage, checkpoint)?;
    prices::set_prices(storage, &updates)?;

    Ok(Accepted {
        sequence,
        signers: selection.indices.len(),
        signed_voting_power: signed,
        ignored_bits: selection.ignored,
    })
}
