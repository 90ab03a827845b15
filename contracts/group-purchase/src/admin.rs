use soroban_sdk::{symbol_short, Address, BytesN, Env};

use crate::errors::ContractError;
use crate::storage;

/// Storage schema version written by the current code. Bumped whenever the
/// layout of stored data changes; `migrate` walks storage from the stamped
/// version up to this one.
pub const SCHEMA_VERSION: u32 = 1;

pub fn upgrade(
    env: &Env,
    operator: Address,
    new_wasm_hash: BytesN<32>,
) -> Result<(), ContractError> {
    operator.require_auth();

    let config = storage::get_config(env).ok_or(ContractError::NotInitialized)?;
    if operator != config.owner {
        return Err(ContractError::Unauthorized);
    }

    env.deployer()
        .update_current_contract_wasm(new_wasm_hash.clone());

    env.events()
        .publish((symbol_short!("upgraded"),), new_wasm_hash);

    Ok(())
}

pub fn migrate(env: &Env, operator: Address) -> Result<(), ContractError> {
    operator.require_auth();

    let config = storage::get_config(env).ok_or(ContractError::NotInitialized)?;
    if operator != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let stored = storage::get_schema_version(env);
    if stored >= SCHEMA_VERSION {
        return Err(ContractError::MigrationNotNeeded);
    }

    // Per-version rewrite steps go here as the schema evolves; nothing
    // predates v1.
    storage::set_schema_version(env, SCHEMA_VERSION);

    env.events()
        .publish((symbol_short!("migrated"),), SCHEMA_VERSION);

    Ok(())
}
