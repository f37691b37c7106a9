use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;
use cw_storage_plus::Item;

pub(crate) const CONFIG: Item<Config> = Item::new("config");

#[cw_serde]
pub struct Config {
    pub chain_id: u64,
    /// domain separation tag of the committee's BLS signatures
    pub domain: Binary,
}
