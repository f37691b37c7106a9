//! state is the module that manages smart contract's system state
pub mod checkpoints;
pub mod config;
pub mod prices;
pub mod validator_set;
