use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LotteryCreated {
    pub lottery: Address,
    pub owner: Address,
    pub token: Address,
    pub ticket_price: i128,
    pub interval: u64,
    pub nonce: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WasmHashUpdated {
    pub lottery_wasm_hash: BytesN<32>,
}

pub fn emit_lottery_created(env: &Env, event: LotteryCreated) {
    env.events()
        .publish((symbol_short!("created"), event.lottery.clone()), event);
}

pub fn emit_wasm_hash_updated(env: &Env, event: WasmHashUpdated) {
    env.events().publish((symbol_short!("wasm_set"),), event);
}
