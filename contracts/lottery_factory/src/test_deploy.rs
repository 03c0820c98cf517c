//! Lottery creation against the compiled lottery wasm.
//!
//! Build it first with `make build` (or point `LOTTERY_WASM` at a `.wasm`).
//! Without it these tests report the missing artifact and return early.

extern crate std;

use std::path::PathBuf;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    vec, Address, Bytes, Env, IntoVal, TryIntoVal,
};

use lottery::{LotteryState, YieldLotteryClient};
use lottery_shared::Error;

use crate::{LotteryCreated, LotteryFactory, LotteryFactoryClient};

const TICKET: i128 = 100_0000000;
const INTERVAL: u64 = 14 * 86_400;
const WASM_TARGETS: [&str; 2] = ["wasm32-unknown-unknown", "wasm32v1-none"];

fn lottery_wasm() -> Option<std::vec::Vec<u8>> {
    if let Ok(path) = std::env::var("LOTTERY_WASM") {
        return std::fs::read(path).ok();
    }
    let target = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target");
    WASM_TARGETS
        .iter()
        .map(|triple| target.join(triple).join("release/lottery.wasm"))
        .find_map(|path| std::fs::read(path).ok())
}

struct Deployment {
    env: Env,
    factory: LotteryFactoryClient<'static>,
    owner: Address,
    token: Address,
}

fn deployment() -> Option<Deployment> {
    let Some(wasm) = lottery_wasm() else {
        std::eprintln!("lottery.wasm not found; run `make build` to exercise deployment");
        return None;
    };
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = 1_700_000_000);

    let hash = env
        .deployer()
        .upload_contract_wasm(Bytes::from_slice(&env, &wasm));
    let owner = Address::generate(&env);
    let factory = LotteryFactoryClient::new(&env, &env.register(LotteryFactory, ()));
    factory.initialize(&owner, &hash);

    let token = Address::generate(&env);
    Some(Deployment {
        env,
        factory,
        owner,
        token,
    })
}

#[test]
fn test_create_lottery_deploys_initialised_round() {
    let Some(d) = deployment() else { return };
    let predicted = d.factory.predict_address(&0);

    let lottery = d
        .factory
        .create_lottery(&d.owner, &d.token, &TICKET, &INTERVAL);

    assert_eq!(lottery, predicted);
    assert_eq!(d.factory.all_lotteries(), vec![&d.env, lottery.clone()]);
    assert_eq!(d.factory.lottery_count(), 1);
    assert_eq!(d.factory.nonce(), 1);

    let round = YieldLotteryClient::new(&d.env, &lottery);
    assert_eq!(round.owner(), d.owner);
    assert_eq!(round.factory(), d.factory.address);
    assert_eq!(round.token(), d.token);
    assert_eq!(round.ticket_price(), TICKET);
    assert_eq!(round.interval(), INTERVAL);
    assert_eq!(round.state(), LotteryState::Configured);
    assert_eq!(
        round.try_initialize(&d.factory.address, &d.owner, &d.token, &TICKET, &INTERVAL),
        Err(Ok(Error::AlreadyInitialized))
    );
}

#[test]
fn test_create_lottery_emits_created() {
    let Some(d) = deployment() else { return };
    let lottery = d
        .factory
        .create_lottery(&d.owner, &d.token, &TICKET, &INTERVAL);

    let mut found = None;
    for (emitter, topics, data) in d.env.events().all().iter() {
        if emitter == d.factory.address {
            found = Some((topics, data));
        }
    }
    let (topics, data) = found.expect("no event from factory");
    assert_eq!(
        topics,
        vec![
            &d.env,
            symbol_short!("created").into_val(&d.env),
            lottery.into_val(&d.env),
        ]
    );
    let event: LotteryCreated = data.try_into_val(&d.env).unwrap();
    assert_eq!(
        event,
        LotteryCreated {
            lottery,
            owner: d.owner,
            token: d.token,
            ticket_price: TICKET,
            interval: INTERVAL,
            nonce: 0,
        }
    );
}

#[test]
fn test_lotteries_created_in_one_ledger_get_distinct_addresses() {
    let Some(d) = deployment() else { return };
    let first = d
        .factory
        .create_lottery(&d.owner, &d.token, &TICKET, &INTERVAL);
    let predicted = d.factory.predict_address(&1);
    let second = d
        .factory
        .create_lottery(&d.owner, &d.token, &(TICKET * 2), &INTERVAL);

    assert_ne!(first, second);
    assert_eq!(second, predicted);
    assert_eq!(d.factory.all_lotteries(), vec![&d.env, first, second.clone()]);
    assert_eq!(d.factory.nonce(), 2);
    assert_eq!(
        YieldLotteryClient::new(&d.env, &second).ticket_price(),
        TICKET * 2
    );
}
