extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::Events,
    vec, Address, Env, IntoVal, TryIntoVal, Val, Vec,
};

use crate::{Participated, PrizePoolSet, WinnerPicked};

use super::test::{set_time, setup, setup_unwired, INTERVAL, TICKET};

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
fn test_participate_emits_joined() {
    let s = setup();
    let player = s.player();
    s.lottery.participate(&player);

    let (topics, data) = last_event_of(&s.env, &s.lottery.address);
    assert_eq!(
        topics,
        vec![
            &s.env,
            symbol_short!("joined").into_val(&s.env),
            player.into_val(&s.env),
        ]
    );
    let event: Participated = data.try_into_val(&s.env).unwrap();
    assert_eq!(event.player, player);
    assert_eq!(event.amount, TICKET);
    assert_eq!(event.deadline, s.lottery.deadline());
}

#[test]
fn test_pick_winner_emits_winner() {
    let s = setup();
    s.lottery.participate(&s.player());
    s.lottery.participate(&s.player());
    set_time(&s.env, s.lottery.deadline() + INTERVAL);
    let draw = s.lottery.pick_winner();

    let (topics, data) = last_event_of(&s.env, &s.lottery.address);
    assert_eq!(
        topics,
        vec![
            &s.env,
            symbol_short!("winner").into_val(&s.env),
            draw.winner.into_val(&s.env),
        ]
    );
    let event: WinnerPicked = data.try_into_val(&s.env).unwrap();
    assert_eq!(event.winner, draw.winner);
    assert_eq!(event.prize, draw.prize);
}

#[test]
fn test_set_prize_pool_emits_pool_set() {
    let s = setup_unwired();
    s.lottery.set_prize_pool(&s.owner, &s.pool.address);

    let (topics, data) = last_event_of(&s.env, &s.lottery.address);
    assert_eq!(
        topics,
        vec![
            &s.env,
            symbol_short!("pool_set").into_val(&s.env),
            s.pool.address.into_val(&s.env),
        ]
    );
    let event: PrizePoolSet = data.try_into_val(&s.env).unwrap();
    assert_eq!(event.prize_pool, s.pool.address);
}
