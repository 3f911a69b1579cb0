use soroban_sdk::{Address, Env};

use crate::storage;

pub fn is_partner(env: &Env, account: &Address) -> bool {
    storage::has_partner(env, account)
}

/// Registers `account`. Returns `false` when it was already a partner.
pub fn add_partner(env: &Env, account: &Address) -> bool {
    if is_partner(env, account) {
        return false;
    }
    storage::set_partner(env, account);
    true
}

/// Deregisters `account`. Returns `false` when it was not a partner.
pub fn remove_partner(env: &Env, account: &Address) -> bool {
    if !is_partner(env, account) {
        return false;
    }
    storage::remove_partner(env, account);
    true
}
