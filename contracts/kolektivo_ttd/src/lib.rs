#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod access;
mod allowance;
mod balance;
mod errors;
mod events;
mod partner;
mod storage;

#[cfg(test)]
mod test;

pub use errors::TokenError;

use events::TokenEvents;
use soroban_sdk::{contract, contractimpl, log, Address, Env, String};
use storage::TokenMetadata;

#[contract]
pub struct KolektivoTtd;

#[contractimpl]
impl KolektivoTtd {
    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// One-shot setup performed by the deploying account, which becomes the
    /// community steward.
    pub fn initialize(
        env: Env,
        owner: Address,
        decimals: u32,
        name: String,
        symbol: String,
    ) -> Result<(), TokenError> {
        if storage::has_owner(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        owner.require_auth();

        storage::set_owner(&env, &owner);
        storage::set_paused(&env, false);
        storage::set_total_supply(&env, 0);
        storage::set_metadata(&env, &TokenMetadata { decimals, name, symbol });
        storage::extend_instance_ttl(&env);

        log!(&env, "token initialized", owner);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Ownership
    // -----------------------------------------------------------------------

    pub fn owner(env: Env) -> Option<Address> {
        storage::get_owner(&env)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), TokenError> {
        caller.require_auth();
        access::require_owner(&env, &caller)?;

        storage::set_owner(&env, &new_owner);
        storage::extend_instance_ttl(&env);

        TokenEvents::ownership_transferred(&env, &caller, &new_owner);
        log!(&env, "ownership transferred", caller, new_owner);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Pause
    // -----------------------------------------------------------------------

    pub fn pause(env: Env, caller: Address) -> Result<(), TokenError> {
        caller.require_auth();
        access::require_owner(&env, &caller)?;

        storage::set_paused(&env, true);
        storage::extend_instance_ttl(&env);

        TokenEvents::paused(&env, &caller);
        log!(&env, "minting paused", caller);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), TokenError> {
        caller.require_auth();
        access::require_owner(&env, &caller)?;

        storage::set_paused(&env, false);
        storage::extend_instance_ttl(&env);

        TokenEvents::unpaused(&env, &caller);
        log!(&env, "minting unpaused", caller);
        Ok(())
    }

    pub fn paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    // -----------------------------------------------------------------------
    // Impact partners
    // -----------------------------------------------------------------------

    /// Adding an existing partner succeeds without emitting an event.
    pub fn add_partner(env: Env, caller: Address, account: Address) -> Result<(), TokenError> {
        caller.require_auth();
        access::require_owner(&env, &caller)?;

        if partner::add_partner(&env, &account) {
            TokenEvents::partner_added(&env, &account);
        }
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn remove_partner(env: Env, caller: Address, account: Address) -> Result<(), TokenError> {
        caller.require_auth();
        access::require_owner(&env, &caller)?;

        if partner::remove_partner(&env, &account) {
            TokenEvents::partner_removed(&env, &account);
        }
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn is_partner(env: Env, account: Address) -> bool {
        partner::is_partner(&env, &account)
    }

    // -----------------------------------------------------------------------
    // Supply
    // -----------------------------------------------------------------------

    /// Mints `amount` to `to`. The pause check runs before the owner check,
    /// so a paused token rejects every caller with `Paused`.
    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        caller.require_auth();
        access::require_initialized(&env)?;
        access::require_not_paused(&env)?;
        access::require_owner(&env, &caller)?;
        access::require_non_negative(amount)?;

        balance::receive_balance(&env, &to, amount)?;
        balance::increase_supply(&env, amount)?;
        storage::extend_instance_ttl(&env);

        TokenEvents::mint(&env, &caller, &to, amount);
        Ok(())
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        access::require_initialized(&env)?;
        access::require_non_negative(amount)?;

        burn_tokens(&env, &from, amount)
    }

    pub fn burn_from(
        env: Env,
        spender: Address,
        from: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        access::require_initialized(&env)?;
        access::require_non_negative(amount)?;

        allowance::spend_allowance(&env, &from, &spender, amount)?;
        burn_tokens(&env, &from, amount)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    // -----------------------------------------------------------------------
    // Transfers and allowances
    // -----------------------------------------------------------------------

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        allowance::read_allowance(&env, &from, &spender)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        from.require_auth();
        access::require_initialized(&env)?;
        access::require_non_negative(amount)?;

        allowance::write_allowance(&env, &from, &spender, amount, expiration_ledger)?;
        storage::extend_instance_ttl(&env);

        TokenEvents::approve(&env, &from, &spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::read_balance(&env, &id)
    }

    /// Transfers are not gated by the pause flag.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        access::require_initialized(&env)?;
        access::require_non_negative(amount)?;

        move_tokens(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        access::require_initialized(&env)?;
        access::require_non_negative(amount)?;

        allowance::spend_allowance(&env, &from, &spender, amount)?;
        move_tokens(&env, &from, &to, amount)
    }

    // -----------------------------------------------------------------------
    // Metadata
    // -----------------------------------------------------------------------

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Ok(metadata(&env)?.decimals)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Ok(metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Ok(metadata(&env)?.symbol)
    }
}

fn metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
    storage::get_metadata(env).ok_or(TokenError::NotInitialized)
}

/// Shared body of `transfer` and `transfer_from`.
fn move_tokens(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    balance::spend_balance(env, from, amount)?;
    balance::receive_balance(env, to, amount)?;
    storage::extend_instance_ttl(env);

    TokenEvents::transfer(env, from, to, amount);
    if partner::is_partner(env, to) {
        TokenEvents::impact_partner_transfer(env, from, to, amount);
    }
    Ok(())
}

fn burn_tokens(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    balance::spend_balance(env, from, amount)?;
    balance::decrease_supply(env, amount);
    storage::extend_instance_ttl(env);

    TokenEvents::burn(env, from, amount);
    Ok(())
}
