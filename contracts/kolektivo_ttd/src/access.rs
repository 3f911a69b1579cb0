//! Guard predicates composed at the top of every mutating entry point.
//!
//! Each guard is a plain check against current storage and never writes.
//! Entry points call `require_auth` on the acting address first, then run
//! the guards they need, then mutate.

use soroban_sdk::{Address, Env};

use crate::{errors::TokenError, storage};

/// Returns the current owner, or `NotInitialized` before `initialize`.
pub fn require_initialized(env: &Env) -> Result<Address, TokenError> {
    storage::get_owner(env).ok_or(TokenError::NotInitialized)
}

/// Rejects any caller other than the community steward.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), TokenError> {
    let owner = require_initialized(env)?;
    if *caller != owner {
        return Err(TokenError::Unauthorized);
    }
    Ok(())
}

/// Pause blocks minting only; transfers and burns never call this.
pub fn require_not_paused(env: &Env) -> Result<(), TokenError> {
    if storage::is_paused(env) {
        return Err(TokenError::Paused);
    }
    Ok(())
}

/// Amounts are signed on the wire; only zero and above are accepted.
pub fn require_non_negative(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::NegativeAmount);
    }
    Ok(())
}
