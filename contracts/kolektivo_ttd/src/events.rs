use soroban_sdk::{symbol_short, Address, Env, Symbol};
use soroban_token_sdk::TokenUtils;

pub struct TokenEvents;

impl TokenEvents {
    // SEP-41 standard events, published through soroban-token-sdk so
    // wallets and indexers see the same shapes as any Stellar token.

    /// Topics: `("mint", owner, to)`
    /// Data:   `amount`
    pub fn mint(env: &Env, owner: &Address, to: &Address, amount: i128) {
        TokenUtils::new(env).events().mint(owner.clone(), to.clone(), amount);
    }

    /// Topics: `("transfer", from, to)`
    /// Data:   `amount`
    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
        TokenUtils::new(env).events().transfer(from.clone(), to.clone(), amount);
    }

    pub fn burn(env: &Env, from: &Address, amount: i128) {
        TokenUtils::new(env).events().burn(from.clone(), amount);
    }

    pub fn approve(
        env: &Env,
        from: &Address,
        spender: &Address,
        amount: i128,
        expiration_ledger: u32,
    ) {
        TokenUtils::new(env)
            .events()
            .approve(from.clone(), spender.clone(), amount, expiration_ledger);
    }

    /// Emitted in addition to `transfer` when the recipient is a registered
    /// impact partner.
    ///
    /// Topics: `("impact_partner_transfer", from, to)`
    /// Data:   `amount`
    ///
    /// The name exceeds the 9-char `symbol_short!` limit, so it is built
    /// with `Symbol::new`.
    pub fn impact_partner_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
        env.events().publish(
            (Symbol::new(env, "impact_partner_transfer"), from.clone(), to.clone()),
            amount,
        );
    }

    pub fn ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
        env.events().publish(
            (Symbol::new(env, "ownership_transferred"), previous.clone(), new_owner.clone()),
            (),
        );
    }

    pub fn paused(env: &Env, owner: &Address) {
        env.events().publish((symbol_short!("paused"), owner.clone()), ());
    }

    pub fn unpaused(env: &Env, owner: &Address) {
        env.events().publish((symbol_short!("unpaused"), owner.clone()), ());
    }

    pub fn partner_added(env: &Env, account: &Address) {
        env.events().publish((Symbol::new(env, "partner_added"), account.clone()), ());
    }

    pub fn partner_removed(env: &Env, account: &Address) {
        env.events().publish((Symbol::new(env, "partner_removed"), account.clone()), ());
    }
}
