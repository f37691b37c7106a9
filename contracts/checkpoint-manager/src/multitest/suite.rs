use anyhow::Result as AnyResult;
use derivative::Derivative;

use cosmwasm_std::{Addr, Binary, Empty, Uint128, Uint256};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use test_utils::{aggregate_sign, bitmap, bls_keys, BlsKey, FeedTree};

use crate::msg::checkpoint::{
    Checkpoint, CheckpointBlockResponse, CheckpointByEpochResponse, CheckpointMetadata,
    CheckpointResponse, CheckpointsResponse, EventMembershipResponse, EventRootResponse,
    FeedInput, PriceResponse, PricesResponse,
};
use crate::msg::contract::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::msg::validator::{
    CurrentEpochResponse, TotalVotingPowerResponse, Validator, ValidatorSetHashResponse,
    ValidatorSetLengthResponse, ValidatorSetResponse,
};
use crate::state::config::Config;
use crate::utils::digest::{checkpoint_message, feed_inputs_hash, validator_set_hash};

fn contract_checkpoint_manager() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(crate::execute, crate::instantiate, crate::query)
        .with_migrate(crate::migrate);
    Box::new(contract)
}

#[derive(Derivative)]
#[derivative(Default = "new")]
pub struct SuiteBuilder {
    #[derivative(Default(value = "vec![100, 200, 300, 400]"))]
    voting_powers: Vec<u128>,
    #[derivative(Default(value = "100"))]
    chain_id: u64,
    domain: Option<Vec<u8>>,
}

impl SuiteBuilder {
    /// Sets the committee, one validator per voting power
    pub fn with_voting_powers(mut self, voting_powers: &[u128]) -> Self {
        self.voting_powers = voting_powers.to_vec();
        self
    }

    pub fn with_domain(mut self, domain: &[u8]) -> Self {
        self.domain = Some(domain.to_vec());
        self
    }

    #[track_caller]
    pub fn build(self) -> Suite {
        self.try_build().unwrap()
    }

    pub fn try_build(self) -> AnyResult<Suite> {
        let mut app = App::default();
        let owner = app.api().addr_make("owner");

        let keys = bls_keys(self.voting_powers.len());
        let validators: Vec<Validator> = self
            .voting_powers
            .iter()
            .zip(&keys)
            .enumerate()
            .map(|(i, (&power, key))| Validator {
                address: app.api().addr_make(&format!("validator{i}")).to_string(),
                bls_public_key: Binary::new(key.public_key()),
                voting_power: Uint128::new(power),
            })
            .collect();

        let code_id = app.store_code_with_creator(owner.clone(), contract_checkpoint_manager());
        let contract = app.instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                chain_id: self.chain_id,
                domain: self.domain.map(hex::encode),
                validators: validators.clone(),
            },
            &[],
            "checkpoint-manager",
            Some(owner.to_string()),
        )?;

        let mut suite = Suite {
            app,
            code_id,
            contract,
            owner,
            keys,
            validators,
            chain_id: self.chain_id,
            domain: vec![],
        };
        suite.domain = suite.get_config().domain.to_vec();
        Ok(suite)
    }
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct Suite {
    #[derivative(Debug = "ignore")]
    pub app: App,
    /// The code id of the checkpoint-manager contract
    code_id: u64,
    /// Checkpoint manager contract address
    pub contract: Addr,
    /// Admin and checkpoint submitter
    pub owner: Addr,
    #[derivative(Debug = "ignore")]
    keys: Vec<BlsKey>,
    pub validators: Vec<Validator>,
    pub chain_id: u64,
    pub domain: Vec<u8>,
}

/// `feed_inputs` commits to the given price updates, returning the event root and the
/// proven feed inputs
pub fn feed_inputs(block_number: u64, prices: &[(u128, u128)]) -> (Binary, Vec<FeedInput>) {
    if prices.is_empty() {
        return (Binary::new(vec![0; 32]), vec![]);
    }
    let feed = FeedTree::from_prices(prices);
    let inputs = feed
        .leaves
        .iter()
        .enumerate()
        .map(|(i, leaf)| FeedInput {
            block_number,
            leaf_index: i as u64,
            unhashed_leaf: Binary::new(leaf.clone()),
            proof: feed.proof(i),
        })
        .collect();
    (feed.root(), inputs)
}

impl Suite {
    pub fn admin(&self) -> &str {
        self.owner.as_str()
    }

    /// `sign` returns the aggregate signature of `signers` over a checkpoint, as the
    /// committee would produce it
    pub fn sign(
        &self,
        chain_id: u64,
        checkpoint: &Checkpoint,
        metadata: &CheckpointMetadata,
        feed_inputs: &[FeedInput],
        signers: &[usize],
    ) -> Binary {
        let message = checkpoint_message(
            chain_id,
            checkpoint,
            metadata,
            &feed_inputs_hash(feed_inputs),
            &validator_set_hash(&self.validators),
        );
        let keys: Vec<&BlsKey> = signers.iter().map(|&i| &self.keys[i]).collect();
        Binary::new(aggregate_sign(&keys, &message, &self.domain))
    }

    /// `submit_msg` builds a properly signed submission of a checkpoint carrying `prices`
    pub fn submit_msg(
        &self,
        epoch: u64,
        block_number: u64,
        prices: &[(u128, u128)],
        signers: &[usize],
    ) -> ExecuteMsg {
        let (event_root, feed_inputs) = feed_inputs(block_number, prices);
        let checkpoint = Checkpoint {
            epoch,
            block_number,
            event_root,
        };
        let metadata = CheckpointMetadata {
            block_hash: Binary::new(block_number.to_be_bytes().repeat(4)),
            block_round: 0,
            current_validator_set_hash: Binary::new(validator_set_hash(&self.validators)),
        };
        let signature = self.sign(self.chain_id, &checkpoint, &metadata, &feed_inputs, signers);
        ExecuteMsg::Submit {
            metadata,
            checkpoint,
            signature,
            validator_set: self.validators.clone(),
            bitmap: Binary::new(bitmap(signers)),
            feed_inputs,
        }
    }

    #[track_caller]
    pub fn execute(&mut self, msg: &ExecuteMsg) -> AnyResult<AppResponse> {
        self.app
            .execute_contract(self.owner.clone(), self.contract.clone(), msg, &[])
    }

    /// Shortcut for submitting a checkpoint signed by `signers`
    #[track_caller]
    pub fn submit(
        &mut self,
        epoch: u64,
        block_number: u64,
        prices: &[(u128, u128)],
        signers: &[usize],
    ) -> AnyResult<AppResponse> {
        let msg = self.submit_msg(epoch, block_number, prices, signers);
        self.execute(&msg)
    }

    /// Shortcut for a checkpoint signed by the whole committee
    #[track_caller]
    pub fn submit_by_all(
        &mut self,
        epoch: u64,
        block_number: u64,
        prices: &[(u128, u128)],
    ) -> AnyResult<AppResponse> {
        let all: Vec<usize> = (0..self.validators.len()).collect();
        self.submit(epoch, block_number, prices, &all)
    }

    pub fn migrate(&mut self, addr: &str, msg: Empty) -> AnyResult<AppResponse> {
        self.app.migrate_contract(
            Addr::unchecked(addr),
            self.contract.clone(),
            &msg,
            self.code_id,
        )
    }

    #[track_caller]
    pub fn get_config(&self) -> Config {
        self.app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &QueryMsg::Config {})
            .unwrap()
    }

    #[track_caller]
    pub fn get_validator_set(&self) -> ValidatorSetResponse {
        self.app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &QueryMsg::ValidatorSet {})
            .unwrap()
    }

    #[track_caller]
    pub fn get_validator_set_hash(&self) -> ValidatorSetHashResponse {
        self.app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &QueryMsg::ValidatorSetHash {})
            .unwrap()
    }

    #[track_caller]
    pub fn get_validator_set_length(&self) -> ValidatorSetLengthResponse {
        self.app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &QueryMsg::ValidatorSetLength {})
            .unwrap()
    }

    pub fn get_validator(&self, index: u64) -> AnyResult<Validator> {
        Ok(self
            .app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &QueryMsg::Validator { index })?)
    }

    #[track_caller]
    pub fn get_total_voting_power(&self) -> TotalVotingPowerResponse {
        self.app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &QueryMsg::TotalVotingPower {})
            .unwrap()
    }

    #[track_caller]
    pub fn get_current_epoch(&self) -> u64 {
        let res: CurrentEpochResponse = self
            .app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &QueryMsg::CurrentEpoch {})
            .unwrap();
        res.epoch
    }

    #[track_caller]
    pub fn get_latest_checkpoint(&self) -> CheckpointResponse {
        self.app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &QueryMsg::LatestCheckpoint {})
            .unwrap()
    }

    pub fn get_checkpoint(&self, sequence: u64) -> AnyResult<CheckpointResponse> {
        Ok(self
            .app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &QueryMsg::Checkpoint { sequence })?)
    }

    #[track_caller]
    pub fn get_checkpoints(
        &self,
        start_after: Option<u64>,
        limit: Option<u32>,
        reverse: Option<bool>,
    ) -> CheckpointsResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                self.contract.clone(),
                &QueryMsg::Checkpoints {
                    start_after,
                    limit,
                    reverse,
                },
            )
            .unwrap()
    }

    #[track_caller]
    pub fn get_event_root_by_block(&self, block_number: u64) -> Option<Binary> {
        let res: EventRootResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.contract.clone(),
                &QueryMsg::EventRootByBlock { block_number },
            )
            .unwrap();
        res.event_root
    }

    #[track_caller]
    pub fn get_checkpoint_by_epoch(&self, epoch: u64) -> CheckpointByEpochResponse {
        self.app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &QueryMsg::CheckpointByEpoch { epoch })
            .unwrap()
    }

    #[track_caller]
    pub fn get_checkpoint_block(&self, block_number: u64) -> CheckpointBlockResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                self.contract.clone(),
                &QueryMsg::CheckpointBlock { block_number },
            )
            .unwrap()
    }

    pub fn get_event_membership_by_block(
        &self,
        block_number: u64,
        leaf: &[u8],
        leaf_index: u64,
        proof: &[Binary],
    ) -> AnyResult<bool> {
        let res: EventMembershipResponse = self.app.wrap().query_wasm_smart(
            self.contract.clone(),
            &QueryMsg::EventMembershipByBlock {
                block_number,
                leaf: Binary::new(leaf.to_vec()),
                leaf_index,
                proof: proof.to_vec(),
            },
        )?;
        Ok(res.is_member)
    }

    pub fn get_event_membership_by_epoch(
        &self,
        epoch: u64,
        leaf: &[u8],
        leaf_index: u64,
        proof: &[Binary],
    ) -> AnyResult<bool> {
        let res: EventMembershipResponse = self.app.wrap().query_wasm_smart(
            self.contract.clone(),
            &QueryMsg::EventMembershipByEpoch {
                epoch,
                leaf: Binary::new(leaf.to_vec()),
                leaf_index,
                proof: proof.to_vec(),
            },
        )?;
        Ok(res.is_member)
    }

    #[track_caller]
    pub fn get_price(&self, key: u128) -> PriceResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                self.contract.clone(),
                &QueryMsg::Price {
                    key: Uint256::from(key),
                },
            )
            .unwrap()
    }

    #[track_caller]
    pub fn get_prices(&self, keys: &[u128]) -> PricesResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                self.contract.clone(),
                &QueryMsg::Prices {
                    keys: keys.iter().map(|&k| Uint256::from(k)).collect(),
                },
            )
            .unwrap()
    }
}
