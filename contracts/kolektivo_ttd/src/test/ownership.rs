use soroban_sdk::{symbol_short, testutils::Address as _, Address, IntoVal, Symbol, Val, Vec};

use super::{event_count, setup};
use crate::TokenError;

#[test]
fn owned_by_community_steward() {
    let s = setup();
    assert_eq!(s.client.owner(), Some(s.steward.clone()));
}

#[test]
fn steward_can_transfer_ownership() {
    let s = setup();
    let new_owner = Address::generate(&s.env);

    s.client.transfer_ownership(&s.steward, &new_owner);

    assert_eq!(s.client.owner(), Some(new_owner.clone()));
    let topics = (Symbol::new(&s.env, "ownership_transferred"), s.steward.clone(), new_owner)
        .into_val(&s.env);
    assert_eq!(event_count(&s.env, &s.client.address, topics), 1);
}

#[test]
fn non_steward_cannot_transfer_ownership() {
    let s = setup();
    let alice = Address::generate(&s.env);

    assert_eq!(
        s.client.try_transfer_ownership(&alice, &alice),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(s.client.owner(), Some(s.steward));
}

#[test]
fn only_steward_can_pause() {
    let s = setup();
    let alice = Address::generate(&s.env);

    s.client.pause(&s.steward);
    assert!(s.client.paused());
    s.client.unpause(&s.steward);
    assert!(!s.client.paused());

    assert_eq!(s.client.try_pause(&alice), Err(Ok(TokenError::Unauthorized)));
    assert_eq!(s.client.try_unpause(&alice), Err(Ok(TokenError::Unauthorized)));
    assert!(!s.client.paused());
}

#[test]
fn previous_owner_loses_privileges() {
    let s = setup();
    let new_owner = Address::generate(&s.env);
    let partner = Address::generate(&s.env);
    let old = s.steward.clone();

    s.client.transfer_ownership(&old, &new_owner);

    assert_eq!(s.client.try_pause(&old), Err(Ok(TokenError::Unauthorized)));
    assert_eq!(s.client.try_unpause(&old), Err(Ok(TokenError::Unauthorized)));
    assert_eq!(s.client.try_mint(&old, &old, &100), Err(Ok(TokenError::Unauthorized)));
    assert_eq!(
        s.client.try_add_partner(&old, &partner),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(
        s.client.try_transfer_ownership(&old, &old),
        Err(Ok(TokenError::Unauthorized))
    );

    s.client.mint(&new_owner, &new_owner, &100);
    s.client.add_partner(&new_owner, &partner);
    s.client.pause(&new_owner);
    assert!(s.client.paused());
    s.client.unpause(&new_owner);
    assert!(!s.client.paused());

    assert_eq!(s.client.total_supply(), 100);
    assert!(s.client.is_partner(&partner));
}

#[test]
fn only_steward_manages_partners() {
    let s = setup();
    let alice = Address::generate(&s.env);
    let partner = Address::generate(&s.env);

    assert_eq!(
        s.client.try_add_partner(&alice, &partner),
        Err(Ok(TokenError::Unauthorized))
    );
    assert!(!s.client.is_partner(&partner));

    s.client.add_partner(&s.steward, &partner);
    assert_eq!(
        s.client.try_remove_partner(&alice, &partner),
        Err(Ok(TokenError::Unauthorized))
    );
    assert!(s.client.is_partner(&partner));

    s.client.remove_partner(&s.steward, &partner);
    assert!(!s.client.is_partner(&partner));
}

#[test]
fn adding_existing_partner_is_noop() {
    let s = setup();
    let partner = Address::generate(&s.env);

    let topics: Vec<Val> =
        (Symbol::new(&s.env, "partner_added"), partner.clone()).into_val(&s.env);

    s.client.add_partner(&s.steward, &partner);
    assert_eq!(event_count(&s.env, &s.client.address, topics.clone()), 1);

    assert_eq!(s.client.try_add_partner(&s.steward, &partner), Ok(Ok(())));
    assert!(s.client.is_partner(&partner));
    assert!(event_count(&s.env, &s.client.address, topics) <= 1);
}

#[test]
fn pause_and_unpause_emit_events() {
    let s = setup();
    let paused: Vec<Val> = (symbol_short!("paused"), s.steward.clone()).into_val(&s.env);
    let unpaused: Vec<Val> = (symbol_short!("unpaused"), s.steward.clone()).into_val(&s.env);

    s.client.pause(&s.steward);
    assert_eq!(event_count(&s.env, &s.client.address, paused), 1);

    s.client.unpause(&s.steward);
    assert_eq!(event_count(&s.env, &s.client.address, unpaused), 1);
}

#[test]
fn removing_non_partner_is_noop() {
    let s = setup();
    let stranger = Address::generate(&s.env);

    assert_eq!(s.client.try_remove_partner(&s.steward, &stranger), Ok(Ok(())));

    assert!(!s.client.is_partner(&stranger));
    let topics = (Symbol::new(&s.env, "partner_removed"), stranger.clone()).into_val(&s.env);
    assert_eq!(event_count(&s.env, &s.client.address, topics), 0);
}

#[test]
fn removing_partner_emits_event() {
    let s = setup();
    let partner = Address::generate(&s.env);
    s.client.add_partner(&s.steward, &partner);

    s.client.remove_partner(&s.steward, &partner);

    let topics = (Symbol::new(&s.env, "partner_removed"), partner.clone()).into_val(&s.env);
    assert_eq!(event_count(&s.env, &s.client.address, topics), 1);
}
