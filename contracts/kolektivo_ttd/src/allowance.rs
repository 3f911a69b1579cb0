use soroban_sdk::{Address, Env};

use crate::{
    errors::TokenError,
    storage::{self, AllowanceEntry},
};

fn live_amount(env: &Env, entry: &AllowanceEntry) -> i128 {
    if entry.expiration_ledger < env.ledger().sequence() {
        0
    } else {
        entry.amount
    }
}

/// Live allowance of `spender` over `from`'s balance; zero once expired.
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    storage::read_allowance_entry(env, from, spender).map_or(0, |entry| live_amount(env, &entry))
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), TokenError> {
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(TokenError::InvalidExpiration);
    }

    storage::write_allowance_entry(
        env,
        from,
        spender,
        &AllowanceEntry { amount, expiration_ledger },
    );
    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    let entry = match storage::read_allowance_entry(env, from, spender) {
        Some(entry) => entry,
        None if amount == 0 => return Ok(()),
        None => return Err(TokenError::InsufficientAllowance),
    };

    let available = live_amount(env, &entry);
    if available < amount {
        return Err(TokenError::InsufficientAllowance);
    }

    if amount > 0 {
        storage::write_allowance_entry(
            env,
            from,
            spender,
            &AllowanceEntry {
                amount: available - amount,
                expiration_ledger: entry.expiration_ledger,
            },
        );
    }
    Ok(())
}
