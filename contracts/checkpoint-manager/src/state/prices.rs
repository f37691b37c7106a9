use cosmwasm_std::{StdResult, Storage, Uint256};
use cw_storage_plus::Map;

/// Latest price by 32-byte big-endian key. Presence is existence of the entry.
pub const PRICES: Map<&[u8], Uint256> = Map::new("prices");

pub fn get_price(storage: &dyn Storage, key: Uint256) -> StdResult<Option<Uint256>> {
    PRICES.may_load(storage, &key.to_be_bytes())
}

/// set_prices applies price updates in order, so a later update of a key wins
pub(crate) fn set_prices(storage: &mut dyn Storage, updates: &[(Uint256, Uint256)]) -> StdResult<()> {
    for (key, value) in updates {
        PRICES.save(storage, &key.to_be_bytes(), value)?;
    }
    Ok(())
}
