use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    Paused = 4,
    InsufficientBalance = 5,
    InsufficientAllowance = 6,
    NegativeAmount = 7,
    InvalidExpiration = 8,
    Overflow = 9,
}
