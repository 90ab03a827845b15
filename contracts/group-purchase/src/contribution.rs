use soroban_sdk::{symbol_short, token, Address, Env};

use crate::errors::ContractError;
use crate::settlement;
use crate::storage;
use crate::types::PurchaseStatus;

pub fn contribute(env: &Env, contributor: Address, amount: i128) -> Result<(), ContractError> {
    contributor.require_auth();

    let config = storage::get_config(env).ok_or(ContractError::NotInitialized)?;

    match settlement::current_status(env, &config) {
        PurchaseStatus::Open => {}
        PurchaseStatus::Expired => return Err(ContractError::DeadlinePassed),
        PurchaseStatus::Finalized => return Err(ContractError::AlreadyFinalized),
    }

    // Each contribution must equal the item price exactly
    if amount != config.item_price {
        return Err(ContractError::PriceMismatch);
    }

    // Transfer the payment from contributor to this contract
    let token_client = token::Client::new(env, &config.token);
    token_client.transfer(&contributor, &env.current_contract_address(), &amount);

    // Record contribution; repeat contributors accumulate under one entry
    let mut contributions = storage::get_contributions(env);
    let previous = contributions.get(contributor.clone()).unwrap_or(0);
    contributions.set(contributor.clone(), previous + amount);
    storage::set_contributions(env, &contributions);

    storage::set_total_funds(env, storage::get_total_funds(env) + amount);

    env.events()
        .publish((symbol_short!("contrib"),), (contributor, amount));

    Ok(())
}

pub fn get_contribution(env: &Env, contributor: Address) -> i128 {
    storage::get_contributions(env)
        .get(contributor)
        .unwrap_or(0)
}

pub fn has_contributed(env: &Env, contributor: Address) -> bool {
    storage::get_contributions(env).contains_key(contributor)
}

pub fn participant_count(env: &Env) -> u32 {
    storage::get_contributions(env).len()
}
