use soroban_sdk::{contracttype, Address, Env, String};

const DAY_IN_LEDGERS: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS; // ~30 days
const ENTRY_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;
const ENTRY_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub decimals: u32,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceEntry {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Owner,
    Paused,
    TotalSupply,
    Metadata,
    Balance(Address),
    Allowance(AllowanceKey),
    Partner(Address),
}

// ---------------------------------------------------------------------------
// Instance data: owner, pause flag, supply, metadata
// ---------------------------------------------------------------------------

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_metadata(env: &Env) -> Option<TokenMetadata> {
    env.storage().instance().get(&DataKey::Metadata)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ---------------------------------------------------------------------------
// Per-account data
// ---------------------------------------------------------------------------

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage().persistent().extend_ttl(&key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

pub fn has_partner(env: &Env, id: &Address) -> bool {
    env.storage().persistent().has(&DataKey::Partner(id.clone()))
}

pub fn set_partner(env: &Env, id: &Address) {
    let key = DataKey::Partner(id.clone());
    env.storage().persistent().set(&key, &true);
    env.storage().persistent().extend_ttl(&key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

pub fn remove_partner(env: &Env, id: &Address) {
    env.storage().persistent().remove(&DataKey::Partner(id.clone()));
}

/// Allowances live in temporary storage; an absent entry reads as zero.
pub fn read_allowance_entry(env: &Env, from: &Address, spender: &Address) -> Option<AllowanceEntry> {
    let key = DataKey::Allowance(AllowanceKey { from: from.clone(), spender: spender.clone() });
    env.storage().temporary().get(&key)
}

pub fn write_allowance_entry(env: &Env, from: &Address, spender: &Address, entry: &AllowanceEntry) {
    let key = DataKey::Allowance(AllowanceKey { from: from.clone(), spender: spender.clone() });
    env.storage().temporary().set(&key, entry);

    if entry.amount > 0 {
        // Clamped to the network limit; expiry itself is enforced on read.
        let live_for = entry
            .expiration_ledger
            .saturating_sub(env.ledger().sequence())
            .min(env.storage().max_ttl());
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}
