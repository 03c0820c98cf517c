extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, InvokeError, String,
};

use lottery_shared::{zero_address, Error};
use mock_market::{MockMoneyMarket, MockMoneyMarketClient};

use crate::{MarketYieldSource, MarketYieldSourceClient};

const RATE_BPS: u32 = 500;
const DECIMALS: u32 = 7;
const SUPPLY: i128 = 1_000_000_0000000;
const RESERVE: i128 = 100_000_0000000;
const TWO_WEEKS: u64 = 14 * 86_400;

struct Setup {
    env: Env,
    ys: MarketYieldSourceClient<'static>,
    market: MockMoneyMarketClient<'static>,
    asset: token::Client<'static>,
    owner: Address,
    whale: Address,
}

fn setup() -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(token_admin.clone());
    let asset = token::Client::new(&env, &sac.address());

    let market_id = env.register(MockMoneyMarket, ());
    let market = MockMoneyMarketClient::new(&env, &market_id);
    market.initialize(&token_admin, &RATE_BPS);

    let minter = token::StellarAssetClient::new(&env, &asset.address);
    minter.mint(&market_id, &RESERVE);

    let ys_id = env.register(MarketYieldSource, ());
    let ys = MarketYieldSourceClient::new(&env, &ys_id);
    ys.initialize(
        &owner,
        &asset.address,
        &market_id,
        &DECIMALS,
        &String::from_str(&env, "Shares USDC"),
        &String::from_str(&env, "SHU"),
    );

    let whale = Address::generate(&env);
    minter.mint(&whale, &(SUPPLY * 2));

    Setup {
        env,
        ys,
        market,
        asset,
        owner,
        whale,
    }
}

fn approve(s: &Setup, amount: i128) {
    let horizon = s.env.ledger().sequence() + 10_000;
    s.asset.approve(&s.whale, &s.ys.address, &amount, &horizon);
}

fn supply(s: &Setup, amount: i128) {
    approve(s, amount);
    s.ys.supply_token_to(&s.owner, &s.whale, &s.whale, &amount);
}

fn advance(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}

#[test]
fn test_deployment() {
    let s = setup();
    assert_eq!(s.ys.owner(), s.owner);
    assert_eq!(s.ys.deposit_token(), s.asset.address);
    assert_eq!(s.ys.market(), s.market.address);
    assert_eq!(s.ys.decimals(), DECIMALS);
    assert_eq!(s.ys.name(), String::from_str(&s.env, "Shares USDC"));
    assert_eq!(s.ys.symbol(), String::from_str(&s.env, "SHU"));
    assert_eq!(s.ys.total_supply(), 0);
    assert_eq!(s.ys.get_total_interest(), 0);
    // One-time unlimited allowance for the market.
    assert_eq!(s.asset.allowance(&s.ys.address, &s.market.address), i128::MAX);
}

#[test]
fn test_initialize_twice_fails() {
    let s = setup();
    let other = Address::generate(&s.env);
    assert_eq!(
        s.ys.try_initialize(
            &other,
            &s.asset.address,
            &s.market.address,
            &DECIMALS,
            &String::from_str(&s.env, "Other"),
            &String::from_str(&s.env, "OTH"),
        ),
        Err(Ok(Error::AlreadyInitialized))
    );
}

#[test]
fn test_initialize_validates_arguments() {
    let s = setup();
    let name = String::from_str(&s.env, "Shares USDC");
    let symbol = String::from_str(&s.env, "SHU");
    let zero = zero_address(&s.env);

    let fresh = MarketYieldSourceClient::new(&s.env, &s.env.register(MarketYieldSource, ()));
    assert_eq!(
        fresh.try_initialize(&s.owner, &zero, &s.market.address, &DECIMALS, &name, &symbol),
        Err(Ok(Error::ZeroAddress))
    );
    assert_eq!(
        fresh.try_initialize(&s.owner, &s.asset.address, &zero, &DECIMALS, &name, &symbol),
        Err(Ok(Error::ZeroAddress))
    );
    assert_eq!(
        fresh.try_initialize(&s.owner, &s.asset.address, &s.market.address, &18, &name, &symbol),
        Err(Ok(Error::DecimalsMismatch))
    );
}

#[test]
fn test_supply_for_two_weeks_accrues_interest() {
    let s = setup();
    let whale_before = s.asset.balance(&s.whale);
    supply(&s, SUPPLY);

    assert_eq!(s.ys.total_supply(), SUPPLY);
    assert_eq!(s.ys.balance_of(&s.whale), SUPPLY);
    assert_eq!(s.market.balance(&s.asset.address, &s.ys.address), SUPPLY);
    assert_eq!(s.asset.balance(&s.whale), whale_before - SUPPLY);
    assert_eq!(s.asset.balance(&s.ys.address), 0);

    advance(&s.env, TWO_WEEKS);

    assert_eq!(s.ys.balance_of(&s.whale), SUPPLY);
    assert!(s.ys.get_total_interest() > 0);
    assert!(s.ys.total_balance() > SUPPLY);
}

#[test]
fn test_interest_is_non_decreasing() {
    let s = setup();
    supply(&s, SUPPLY);
    let mut previous = s.ys.get_total_interest();
    for _ in 0..5 {
        advance(&s.env, 86_400);
        let current = s.ys.get_total_interest();
        assert!(current >= previous);
        previous = current;
    }
}

#[test]
fn test_supply_rejects_invalid_input() {
    let s = setup();
    approve(&s, SUPPLY);
    let zero = zero_address(&s.env);

    assert_eq!(
        s.ys.try_supply_token_to(&s.owner, &s.whale, &s.whale, &0),
        Err(Ok(Error::InvalidAmount))
    );
    assert_eq!(
        s.ys.try_supply_token_to(&s.owner, &zero, &s.whale, &1),
        Err(Ok(Error::ZeroAddress))
    );
    assert_eq!(
        s.ys.try_supply_token_to(&s.owner, &s.whale, &zero, &1),
        Err(Ok(Error::ZeroAddress))
    );
    assert_eq!(
        s.ys.try_supply_token_to(&s.whale, &s.whale, &s.whale, &1),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(s.ys.total_supply(), 0);
}

#[test]
fn test_supply_without_allowance_fails() {
    let s = setup();
    // The asset contract's AllowanceError (9) is outside the lottery code space.
    assert_eq!(
        s.ys
            .try_supply_token_to(&s.owner, &s.whale, &s.whale, &SUPPLY),
        Err(Err(InvokeError::Contract(9)))
    );
    assert_eq!(s.ys.total_supply(), 0);
    assert_eq!(s.ys.balance_of(&s.whale), 0);
}

#[test]
fn test_redeem_returns_principal() {
    let s = setup();
    supply(&s, SUPPLY);
    advance(&s.env, TWO_WEEKS);

    let redeem = SUPPLY / 10;
    let whale_before = s.asset.balance(&s.whale);
    let interest_before = s.ys.get_total_interest();

    s.ys.redeem_token(&s.owner, &s.whale, &s.whale, &redeem);

    assert_eq!(s.asset.balance(&s.whale), whale_before + redeem);
    assert_eq!(s.ys.balance_of(&s.whale), SUPPLY - redeem);
    assert_eq!(s.ys.total_supply(), SUPPLY - redeem);
    assert!(s.ys.get_total_interest() >= interest_before);
}

#[test]
fn test_redeem_rejects_invalid_input() {
    let s = setup();
    supply(&s, SUPPLY);
    let zero = zero_address(&s.env);

    assert_eq!(
        s.ys.try_redeem_token(&s.owner, &s.whale, &s.whale, &0),
        Err(Ok(Error::InvalidAmount))
    );
    assert_eq!(
        s.ys.try_redeem_token(&s.owner, &zero, &s.whale, &1),
        Err(Ok(Error::ZeroAddress))
    );
    assert_eq!(
        s.ys.try_redeem_token(&s.owner, &s.whale, &zero, &1),
        Err(Ok(Error::ZeroAddress))
    );
    assert_eq!(
        s.ys.try_redeem_token(&s.whale, &s.whale, &s.whale, &1),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        s.ys.try_redeem_token(&s.owner, &s.whale, &s.whale, &(SUPPLY * 2)),
        Err(Ok(Error::InsufficientBalance))
    );
}

#[test]
fn test_withdraw_interest_leaves_principal() {
    let s = setup();
    supply(&s, SUPPLY);
    advance(&s.env, TWO_WEEKS);

    let interest = s.ys.get_total_interest();
    assert!(interest > 0);
    assert_eq!(s.asset.balance(&s.owner), 0);

    assert_eq!(s.ys.withdraw_interest(&s.owner, &s.owner), interest);
    assert_eq!(s.asset.balance(&s.owner), interest);
    assert_eq!(s.ys.get_total_interest(), 0);
    assert_eq!(s.ys.total_balance(), SUPPLY);
}

#[test]
fn test_withdraw_interest_rejects_invalid_input() {
    let s = setup();
    assert_eq!(
        s.ys.try_withdraw_interest(&s.whale, &s.owner),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        s.ys.try_withdraw_interest(&s.owner, &zero_address(&s.env)),
        Err(Ok(Error::ZeroAddress))
    );
}

#[test]
fn test_redeem_interest_pays_part_of_interest() {
    let s = setup();
    supply(&s, SUPPLY);
    advance(&s.env, TWO_WEEKS);

    let interest = s.ys.get_total_interest();
    let part = interest / 3;
    s.ys.redeem_interest(&s.owner, &s.owner, &part);

    assert_eq!(s.asset.balance(&s.owner), part);
    assert_eq!(s.ys.get_total_interest(), interest - part);
    assert_eq!(s.ys.total_supply(), SUPPLY);
    assert_eq!(s.ys.balance_of(&s.whale), SUPPLY);
}

#[test]
fn test_redeem_interest_cannot_reach_principal() {
    let s = setup();
    supply(&s, SUPPLY);
    advance(&s.env, TWO_WEEKS);
    let interest = s.ys.get_total_interest();

    assert_eq!(
        s.ys.try_redeem_interest(&s.owner, &s.owner, &(interest + 1)),
        Err(Ok(Error::InsufficientBalance))
    );
    assert_eq!(
        s.ys.try_redeem_interest(&s.owner, &s.owner, &0),
        Err(Ok(Error::InvalidAmount))
    );
    assert_eq!(
        s.ys.try_redeem_interest(&s.owner, &zero_address(&s.env), &1),
        Err(Ok(Error::ZeroAddress))
    );
    assert_eq!(
        s.ys.try_redeem_interest(&s.whale, &s.whale, &1),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(s.ys.get_total_interest(), interest);
}

#[test]
fn test_initialize_at_later_ledger_grants_lasting_allowance() {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.sequence_number = 2_000_000);

    let owner = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(token_admin.clone());
    let asset = token::Client::new(&env, &sac.address());
    let market = MockMoneyMarketClient::new(&env, &env.register(MockMoneyMarket, ()));
    market.initialize(&token_admin, &RATE_BPS);

    let ys = MarketYieldSourceClient::new(&env, &env.register(MarketYieldSource, ()));
    ys.initialize(
        &owner,
        &asset.address,
        &market.address,
        &DECIMALS,
        &String::from_str(&env, "Shares USDC"),
        &String::from_str(&env, "SHU"),
    );

    assert_eq!(asset.allowance(&ys.address, &market.address), i128::MAX);
}

#[test]
fn test_transfer_ownership() {
    let s = setup();
    assert_eq!(
        s.ys.try_transfer_ownership(&s.owner, &zero_address(&s.env)),
        Err(Ok(Error::ZeroAddress))
    );

    s.ys.transfer_ownership(&s.owner, &s.whale);
    assert_eq!(s.ys.owner(), s.whale);

    // The new owner can supply, the old one cannot.
    approve(&s, SUPPLY);
    assert_eq!(
        s.ys.try_supply_token_to(&s.owner, &s.whale, &s.whale, &SUPPLY),
        Err(Ok(Error::Unauthorized))
    );
    s.ys.supply_token_to(&s.whale, &s.whale, &s.whale, &SUPPLY);
    assert_eq!(s.ys.balance_of(&s.whale), SUPPLY);
}
