extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    vec, Address, Env, IntoVal, TryIntoVal, Val, Vec,
};

use crate::{Deposited, InterestWithdrawn, LotterySet, Withdrawn};

use super::test::{deposit_fixture, Fixture};

fn last_event_of(env: &Env, contract: &Address) -> (Vec<Val>, Val) {
    let mut found = None;
    for (emitter, topics, data) in env.events().all().iter() {
        if emitter == *contract {
            found = Some((topics, data));
        }
    }
    found.expect("no event from contract")
}

#[test]
fn test_deposit_emits_event() {
    let Fixture { s, amount } = deposit_fixture();
    let (topics, data) = last_event_of(&s.env, &s.pool.address);

    assert_eq!(
        topics,
        vec![
            &s.env,
            symbol_short!("deposited").into_val(&s.env),
            s.whale.into_val(&s.env),
        ]
    );
    let event: Deposited = data.try_into_val(&s.env).unwrap();
    assert_eq!(event.to, s.whale);
    assert_eq!(event.amount, amount);
}

#[test]
fn test_withdraw_emits_event() {
    let Fixture { s, amount } = deposit_fixture();
    s.pool
        .withdraw_from(&s.lottery, &s.whale, &s.whale, &amount);

    let (topics, data) = last_event_of(&s.env, &s.pool.address);
    assert_eq!(
        topics,
        vec![
            &s.env,
            symbol_short!("withdrawn").into_val(&s.env),
            s.whale.into_val(&s.env),
        ]
    );
    let event: Withdrawn = data.try_into_val(&s.env).unwrap();
    assert_eq!(event.from, s.whale);
    assert_eq!(event.to, s.whale);
    assert_eq!(event.amount, amount);
}

#[test]
fn test_set_lottery_emits_event() {
    let Fixture { s, .. } = deposit_fixture();
    let next = Address::generate(&s.env);
    s.pool.set_lottery(&s.owner, &next);

    let (topics, data) = last_event_of(&s.env, &s.pool.address);
    assert_eq!(
        topics,
        vec![
            &s.env,
            symbol_short!("lot_set").into_val(&s.env),
            next.into_val(&s.env),
        ]
    );
    let event: LotterySet = data.try_into_val(&s.env).unwrap();
    assert_eq!(event.lottery, next);
}

#[test]
fn test_withdraw_interest_emits_event() {
    let Fixture { s, .. } = deposit_fixture();
    s.env.ledger().with_mut(|li| li.timestamp += 14 * 86_400);
    let interest = s.pool.get_interest();
    s.pool.withdraw_interest(&s.lottery, &s.owner, &interest);

    let (topics, data) = last_event_of(&s.env, &s.pool.address);
    assert_eq!(
        topics,
        vec![
            &s.env,
            symbol_short!("swept").into_val(&s.env),
            s.owner.into_val(&s.env),
        ]
    );
    let event: InterestWithdrawn = data.try_into_val(&s.env).unwrap();
    assert_eq!(event.to, s.owner);
    assert_eq!(event.amount, interest);
}
