use soroban_sdk::{Address, Env};

use crate::{errors::TokenError, storage};

/// Credits `to`. Fails with `Overflow` instead of wrapping.
pub fn receive_balance(env: &Env, to: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = storage::read_balance(env, to);
    let updated = balance.checked_add(amount).ok_or(TokenError::Overflow)?;
    storage::write_balance(env, to, updated);
    Ok(())
}

/// Debits `from`. The balance is left untouched when it cannot cover `amount`.
pub fn spend_balance(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = storage::read_balance(env, from);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    storage::write_balance(env, from, balance - amount);
    Ok(())
}

pub fn increase_supply(env: &Env, amount: i128) -> Result<(), TokenError> {
    let supply = storage::get_total_supply(env);
    let updated = supply.checked_add(amount).ok_or(TokenError::Overflow)?;
    storage::set_total_supply(env, updated);
    Ok(())
}

/// Only called after a successful `spend_balance`, so supply covers `amount`.
pub fn decrease_supply(env: &Env, amount: i128) {
    let supply = storage::get_total_supply(env);
    storage::set_total_supply(env, supply - amount);
}
