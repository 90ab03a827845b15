use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InvalidDuration = 5,
    DeadlinePassed = 6,
    AlreadyFinalized = 7,
    PriceMismatch = 8,
    DeadlineNotReached = 9,
    MigrationNotNeeded = 10,
}
