//! checkpoints is the ledger of accepted checkpoints.
//! Checkpoints are appended in strictly increasing block order and indexed by
//! sequence number, by block number and by epoch.
use cosmwasm_std::Order::{Ascending, Descending};
use cosmwasm_std::{Binary, StdResult, Storage};
use cw_storage_plus::{Bound, Item, Map};

use crate::msg::checkpoint::Checkpoint;

pub const CHECKPOINTS: Map<u64, Checkpoint> = Map::new("checkpoints");
pub const NEXT_SEQUENCE: Item<u64> = Item::new("next_sequence");
/// event root by checkpointed block number
pub const EVENT_ROOTS: Map<u64, Binary> = Map::new("event_roots");
/// latest checkpoint of each epoch
pub const EPOCH_CHECKPOINTS: Map<u64, Checkpoint> = Map::new("epoch_checkpoints");
/// epoch-closing block numbers, one per epoch, mapped to their epoch
pub const EPOCH_BOUNDARY_BLOCKS: Map<u64, u64> = Map::new("epoch_boundary_blocks");

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

/// init records the origin checkpoint at sequence 0
pub fn init(storage: &mut dyn Storage) -> StdResult<()> {
    CHECKPOINTS.save(storage, 0, &Checkpoint::origin())?;
    NEXT_SEQUENCE.save(storage, &1)
}

pub fn get_checkpoint(storage: &dyn Storage, sequence: u64) -> StdResult<Checkpoint> {
    CHECKPOINTS.load(storage, sequence)
}

/// get_latest_checkpoint returns the last accepted checkpoint with its sequence number
pub fn get_latest_checkpoint(storage: &dyn Storage) -> StdResult<(u64, Checkpoint)> {
    let sequence = NEXT_SEQUENCE.load(storage)? - 1;
    Ok((sequence, CHECKPOINTS.load(storage, sequence)?))
}

pub fn get_checkpoints(
    storage: &dyn Storage,
    start_after: Option<u64>,
    limit: Option<u32>,
    reverse: Option<bool>,
) -> StdResult<Vec<(u64, Checkpoint)>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let reverse = reverse.unwrap_or(false);

    let (start, end, order) = match (start_after, reverse) {
        (Some(start), true) => (None, Some(Bound::exclusive(start)), Descending),
        (Some(start), false) => (Some(Bound::exclusive(start)), None, Ascending),
        (None, true) => (None, None, Descending),
        (None, false) => (None, None, Ascending),
    };

    CHECKPOINTS
        .range(storage, start, end, order)
        .take(limit)
        .collect()
}

pub fn get_event_root_by_block(storage: &dyn Storage, block_number: u64) -> StdResult<Option<Binary>> {
    EVENT_ROOTS.may_load(storage, block_number)
}

pub fn get_checkpoint_by_epoch(storage: &dyn Storage, epoch: u64) -> StdResult<Option<Checkpoint>> {
    EPOCH_CHECKPOINTS.may_load(storage, epoch)
}

/// get_checkpoint_block returns the first epoch-closing block at or after `block_number`,
/// i.e. the checkpoint that finalises it
pub fn get_checkpoint_block(storage: &dyn Storage, block_number: u64) -> StdResult<Option<u64>> {
    EPOCH_BOUNDARY_BLOCKS
        .keys(storage, Some(Bound::inclusive(block_number)), None, Ascending)
        .next()
        .transpose()
}

/// insert_checkpoint appends a verified checkpoint and updates every index.
/// A later checkpoint of the same epoch replaces the earlier one as the epoch's boundary.
pub(crate) fn insert_checkpoint(storage: &mut dyn Storage, checkpoint: &Checkpoint) -> StdResult<u64> {
    let sequence = NEXT_SEQUENCE.load(storage)?;
    CHECKPOINTS.save(storage, sequence, checkpoint)?;
    NEXT_SEQUENCE.save(storage, &(sequence + 1))?;

    EVENT_ROOTS.save(storage, checkpoint.block_number, &checkpoint.event_root)?;

    if let Some(prev) = EPOCH_CHECKPOINTS.may_load(storage, checkpoint.epoch)? {
        EPOCH_BOUNDARY_BLOCKS.remove(storage, prev.block_number);
    }
    EPOCH_CHECKPOINTS.save(storage, checkpoint.epoch, checkpoint)?;
    EPOCH_BOUNDARY_BLOCKS.save(storage, checkpoint.block_number, &checkpoint.epoch)?;

    Ok(sequence)
}
