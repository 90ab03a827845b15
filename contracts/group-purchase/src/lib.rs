#![no_std]

use soroban_sdk::{contract, contractimpl, panic_with_error, symbol_short, Address, BytesN, Env};

mod admin;
mod contribution;
mod errors;
mod settlement;
mod storage;
mod types;

pub use errors::ContractError;
pub use types::*;

#[contract]
pub struct GroupPurchaseContract;

#[contractimpl]
impl GroupPurchaseContract {
    /// Set the immutable purchase configuration. The open period starts at
    /// deployment and runs for `duration_seconds`; contributions of exactly
    /// `item_price` of `token` are accepted until then.
    pub fn __constructor(
        env: Env,
        owner: Address,
        supplier: Address,
        token: Address,
        goal_amount: i128,
        duration_seconds: u64,
        item_price: i128,
    ) {
        if storage::has_config(&env) {
            panic_with_error!(&env, ContractError::AlreadyInitialized);
        }
        if goal_amount <= 0 || item_price <= 0 {
            panic_with_error!(&env, ContractError::InvalidAmount);
        }
        if duration_seconds == 0 {
            panic_with_error!(&env, ContractError::InvalidDuration);
        }

        let config = PurchaseConfig {
            owner,
            supplier,
            token,
            goal_amount,
            deadline: env.ledger().timestamp() + duration_seconds,
            item_price,
        };

        storage::set_config(&env, &config);
        storage::set_schema_version(&env, admin::SCHEMA_VERSION);

        env.events()
            .publish((symbol_short!("init"),), config.deadline);
    }

    // ─── Contributions ──────────────────────────────────────────────

    /// Contribute exactly `item_price` of the settlement token to the pool.
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<(), ContractError> {
        contribution::contribute(&env, contributor, amount)
    }

    /// Cumulative amount `contributor` has put into the pool.
    pub fn get_contribution(env: Env, contributor: Address) -> i128 {
        contribution::get_contribution(&env, contributor)
    }

    /// Check if `contributor` has at least one accepted contribution.
    pub fn has_contributed(env: Env, contributor: Address) -> bool {
        contribution::has_contributed(&env, contributor)
    }

    // ─── Settlement ─────────────────────────────────────────────────

    /// Settle the purchase once the deadline has passed. Anyone can call
    /// this: goal met pays the whole pot to the supplier, goal missed
    /// refunds every participant their cumulative contribution.
    pub fn finalize_group_purchase(env: Env) -> Result<(), ContractError> {
        settlement::finalize_group_purchase(&env)
    }

    // ─── Queries ────────────────────────────────────────────────────

    /// Identity permitted to upgrade and migrate the contract.
    pub fn owner(env: Env) -> Result<Address, ContractError> {
        let config = storage::get_config(&env).ok_or(ContractError::NotInitialized)?;
        Ok(config.owner)
    }

    /// Identity that receives the pot when the goal is met.
    pub fn supplier(env: Env) -> Result<Address, ContractError> {
        let config = storage::get_config(&env).ok_or(ContractError::NotInitialized)?;
        Ok(config.supplier)
    }

    /// Aggregate configuration + ledger snapshot for display.
    pub fn get_contract_info(env: Env) -> Result<ContractInfo, ContractError> {
        settlement::get_contract_info(&env)
    }

    /// Running sum of all accepted contributions.
    pub fn total_funds(env: Env) -> i128 {
        storage::get_total_funds(&env)
    }

    /// Number of distinct identities with an accepted contribution.
    pub fn get_participant_count(env: Env) -> u32 {
        contribution::participant_count(&env)
    }

    /// Derived lifecycle state: Open, Expired or Finalized.
    pub fn get_status(env: Env) -> Result<PurchaseStatus, ContractError> {
        settlement::get_status(&env)
    }

    // ─── Upgrade / Migration ────────────────────────────────────────

    /// Replace the contract's WASM. Only the owner can call this; storage
    /// and the contract address are untouched.
    pub fn upgrade(
        env: Env,
        operator: Address,
        new_wasm_hash: BytesN<32>,
    ) -> Result<(), ContractError> {
        admin::upgrade(&env, operator, new_wasm_hash)
    }

    /// Walk stored data up to the current schema version after an upgrade.
    /// Only the owner can call this.
    pub fn migrate(env: Env, operator: Address) -> Result<(), ContractError> {
        admin::migrate(&env, operator)
    }

    /// Schema version written by this code.
    pub fn version() -> u32 {
        admin::SCHEMA_VERSION
    }
}
