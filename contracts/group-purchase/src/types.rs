use soroban_sdk::{contracttype, Address};

/// Lifecycle state of the purchase. Derived from the finalized flag and the
/// ledger clock, never stored.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum PurchaseStatus {
    Open,      // Before the deadline, accepting contributions
    Expired,   // Deadline passed, awaiting settlement
    Finalized, // Settled, terminal
}

/// Immutable purchase configuration, fixed at construction.
#[contracttype]
#[derive(Clone, Debug)]
pub struct PurchaseConfig {
    pub owner: Address,
    pub supplier: Address,
    pub token: Address,
    pub goal_amount: i128,
    pub deadline: u64,
    pub item_price: i128,
}

/// Aggregate configuration + ledger snapshot consumed by frontends.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractInfo {
    pub supplier: Address,
    pub goal_amount: i128,
    pub item_price: i128,
    pub deadline: u64,
    pub total_funds: i128,
    pub participant_count: u32,
    pub finalized: bool,
}

/// Storage keys for all contract data.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    TotalFunds,
    Finalized,
    Contributions,
    SchemaVersion,
}
