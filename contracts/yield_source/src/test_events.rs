extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, String, TryIntoVal, Val, Vec,
};

use mock_market::{MockMoneyMarket, MockMoneyMarketClient};

use crate::{Claimed, MarketYieldSource, MarketYieldSourceClient, RedeemedToken, SuppliedTokenTo};

const AMOUNT: i128 = 50_000_0000000;

fn setup() -> (Env, MarketYieldSourceClient<'static>, token::Client<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let owner = Address::generate(&env);
    let admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(admin.clone());
    let asset = token::Client::new(&env, &sac.address());

    let market = MockMoneyMarketClient::new(&env, &env.register(MockMoneyMarket, ()));
    market.initialize(&admin, &500);
    token::StellarAssetClient::new(&env, &asset.address).mint(&market.address, &AMOUNT);

    let ys = MarketYieldSourceClient::new(&env, &env.register(MarketYieldSource, ()));
    ys.initialize(
        &owner,
        &asset.address,
        &market.address,
        &7,
        &String::from_str(&env, "Shares"),
        &String::from_str(&env, "SH"),
    );

    let user = Address::generate(&env);
    token::StellarAssetClient::new(&env, &asset.address).mint(&user, &AMOUNT);
    asset.approve(&user, &ys.address, &AMOUNT, &(env.ledger().sequence() + 1_000));
    (env, ys, asset, owner, user)
}

/// Last event published by `contract`.
fn last_event_of(env: &Env, contract: &Address) -> (Vec<Val>, Val) {
    let mut found = None;
    for (address, topics, data) in env.events().all().iter() {
        if address == *contract {
            found = Some((topics, data));
        }
    }
    found.expect("No events found")
}

#[test]
fn test_supplied_event() {
    let (env, ys, _, owner, user) = setup();
    ys.supply_token_to(&owner, &user, &user, &AMOUNT);

    let (topics, data) = last_event_of(&env, &ys.address);
    let expected_topics = vec![
        &env,
        symbol_short!("supplied").into_val(&env),
        user.into_val(&env),
    ];
    assert_eq!(topics, expected_topics);

    let event: SuppliedTokenTo = data.try_into_val(&env).unwrap();
    assert_eq!(
        event,
        SuppliedTokenTo {
            from: user.clone(),
            to: user.clone(),
            amount: AMOUNT,
            shares: AMOUNT,
        }
    );
}

#[test]
fn test_redeemed_event() {
    let (env, ys, _, owner, user) = setup();
    ys.supply_token_to(&owner, &user, &user, &AMOUNT);
    ys.redeem_token(&owner, &user, &user, &1_000);

    let (topics, data) = last_event_of(&env, &ys.address);
    assert_eq!(
        topics,
        vec![
            &env,
            symbol_short!("redeemed").into_val(&env),
            user.into_val(&env),
        ]
    );
    let event: RedeemedToken = data.try_into_val(&env).unwrap();
    assert_eq!(event.shares, 1_000);
    assert_eq!(event.amount, 1_000);
}

#[test]
fn test_claimed_event() {
    let (env, ys, _, owner, user) = setup();
    ys.supply_token_to(&owner, &user, &user, &AMOUNT);
    env.ledger().with_mut(|li| li.timestamp += 14 * 86_400);

    let interest = ys.get_total_interest();
    ys.withdraw_interest(&owner, &owner);

    let (topics, data) = last_event_of(&env, &ys.address);
    assert_eq!(
        topics,
        vec![
            &env,
            symbol_short!("claimed").into_val(&env),
            owner.into_val(&env),
        ]
    );
    let event: Claimed = data.try_into_val(&env).unwrap();
    assert_eq!(
        event,
        Claimed {
            recipient: owner,
            amount: interest,
        }
    );
}
