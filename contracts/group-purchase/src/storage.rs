use soroban_sdk::{Address, Env, Map};

use crate::types::{DataKey, PurchaseConfig};

const INSTANCE_TTL_THRESHOLD: u32 = 100;
const INSTANCE_TTL_EXTEND: u32 = 500;
const PERSISTENT_TTL_THRESHOLD: u32 = 100;
const PERSISTENT_TTL_EXTEND: u32 = 1000;

// --- Config ---

pub fn get_config(env: &Env) -> Option<PurchaseConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &PurchaseConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

// --- Total Funds ---

pub fn get_total_funds(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalFunds)
        .unwrap_or(0)
}

pub fn set_total_funds(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalFunds, &total);
    extend_instance_ttl(env);
}

// --- Finalized Flag ---

pub fn is_finalized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Finalized)
        .unwrap_or(false)
}

pub fn set_finalized(env: &Env) {
    env.storage().instance().set(&DataKey::Finalized, &true);
    extend_instance_ttl(env);
}

// --- Contributions ---

pub fn get_contributions(env: &Env) -> Map<Address, i128> {
    let key = DataKey::Contributions;
    let result: Option<Map<Address, i128>> = env.storage().persistent().get(&key);
    match result {
        Some(contributions) => {
            extend_persistent_ttl(env, &key);
            contributions
        }
        None => Map::new(env),
    }
}

pub fn set_contributions(env: &Env, contributions: &Map<Address, i128>) {
    let key = DataKey::Contributions;
    env.storage().persistent().set(&key, contributions);
    extend_persistent_ttl(env, &key);
}

// --- Schema Version ---

pub fn get_schema_version(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::SchemaVersion)
        .unwrap_or(0)
}

pub fn set_schema_version(env: &Env, version: u32) {
    env.storage()
        .instance()
        .set(&DataKey::SchemaVersion, &version);
    extend_instance_ttl(env);
}

// --- TTL Management ---

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
