use cosmwasm_schema::write_api;
use cosmwasm_std::Empty;

use checkpoint_manager::msg::contract::{ExecuteMsg, InstantiateMsg, QueryMsg};

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        query: QueryMsg,
        migrate: Empty,
        execute: ExecuteMsg,
    }
}
