#![cfg(test)]

// ---------------------------------------------------------------------------
// KolektivoTTD test suite
//
// Structure
// ─────────
// 1. initialize — deployment hook, metadata, double-init guard
// 2. minting    — steward-only minting and supply bookkeeping
// 3. ownership  — ownership transfer and pause authorization
// 4. transfer   — member transfers, pause policy, impact partners
// 5. allowance  — approve / transfer_from / burn paths
// ---------------------------------------------------------------------------

mod ownership;

use soroban_sdk::{
    testutils::{Address as _, Events as _},
    Address, Env, IntoVal, String, Symbol, TryFromVal, Val, Vec,
};

use crate::{KolektivoTtd, KolektivoTtdClient};

pub const DECIMALS: u32 = 18;

pub struct Setup<'a> {
    pub env: Env,
    pub client: KolektivoTtdClient<'a>,
    pub steward: Address,
}

/// Registers and initializes a fresh token with every auth mocked.
/// The steward plays the role of the deploying account.
pub fn setup<'a>() -> Setup<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, KolektivoTtd);
    let client = KolektivoTtdClient::new(&env, &contract_id);
    let steward = Address::generate(&env);

    client.initialize(
        &steward,
        &DECIMALS,
        &String::from_str(&env, "Kolektivo Trinidad and Tobago Dollar"),
        &String::from_str(&env, "TTD"),
    );

    Setup { env, client, steward }
}

/// Counts `impact_partner_transfer` events published by `contract` with
/// the given payload.
pub fn partner_transfer_count(
    env: &Env,
    contract: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> usize {
    let topics: Vec<Val> =
        (Symbol::new(env, "impact_partner_transfer"), from.clone(), to.clone()).into_val(env);

    env.events()
        .all()
        .iter()
        .filter(|(id, event_topics, data)| {
            id == contract
                && *event_topics == topics
                && matches!(i128::try_from_val(env, data), Ok(v) if v == amount)
        })
        .count()
}

/// Counts events from `contract` whose topics match exactly.
pub fn event_count(env: &Env, contract: &Address, topics: Vec<Val>) -> usize {
    env.events()
        .all()
        .iter()
        .filter(|(id, event_topics, _)| id == contract && *event_topics == topics)
        .count()
}
