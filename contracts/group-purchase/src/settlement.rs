use soroban_sdk::{symbol_short, token, Env, Map};

use crate::errors::ContractError;
use crate::storage;
use crate::types::{ContractInfo, PurchaseConfig, PurchaseStatus};

pub fn current_status(env: &Env, config: &PurchaseConfig) -> PurchaseStatus {
    if storage::is_finalized(env) {
        PurchaseStatus::Finalized
    } else if env.ledger().timestamp() >= config.deadline {
        PurchaseStatus::Expired
    } else {
        PurchaseStatus::Open
    }
}

pub fn finalize_group_purchase(env: &Env) -> Result<(), ContractError> {
    let config = storage::get_config(env).ok_or(ContractError::NotInitialized)?;

    match current_status(env, &config) {
        PurchaseStatus::Open => return Err(ContractError::DeadlineNotReached),
        PurchaseStatus::Finalized => return Err(ContractError::AlreadyFinalized),
        PurchaseStatus::Expired => {}
    }

    let total = storage::get_total_funds(env);
    let contributions = storage::get_contributions(env);
    let token_client = token::Client::new(env, &config.token);
    let contract_addr = env.current_contract_address();

    if total >= config.goal_amount {
        // Goal met: the whole pot goes to the supplier
        token_client.transfer(&contract_addr, &config.supplier, &total);

        env.events().publish(
            (symbol_short!("purchased"),),
            (config.supplier.clone(), total),
        );
    } else {
        // Goal missed: every participant gets back exactly what they put in.
        // A failing transfer reverts the whole call, so the ledger is never
        // sealed with a refund outstanding.
        for (contributor, amount) in contributions.iter() {
            token_client.transfer(&contract_addr, &contributor, &amount);

            env.events()
                .publish((symbol_short!("refund"),), (contributor, amount));
        }
    }

    storage::set_contributions(env, &Map::new(env));
    storage::set_total_funds(env, 0);
    storage::set_finalized(env);

    env.events().publish((symbol_short!("finalized"),), total);

    Ok(())
}

pub fn get_contract_info(env: &Env) -> Result<ContractInfo, ContractError> {
    let config = storage::get_config(env).ok_or(ContractError::NotInitialized)?;

    Ok(ContractInfo {
        supplier: config.supplier,
        goal_amount: config.goal_amount,
        item_price: config.item_price,
        deadline: config.deadline,
        total_funds: storage::get_total_funds(env),
        participant_count: storage::get_contributions(env).len(),
        finalized: storage::is_finalized(env),
    })
}

pub fn get_status(env: &Env) -> Result<PurchaseStatus, ContractError> {
    let config = storage::get_config(env).ok_or(ContractError::NotInitialized)?;
    Ok(current_status(env, &config))
}
