//! Application configuration loaded from environment variables.

use crate::errors::{IndexerError, Result};

/// `getEvents` accepts at most 5 filters of at most 5 contract ids each.
pub const MAX_CONTRACT_IDS: usize = 25;

#[derive(Debug, Clone)]
pub struct Config {
    /// Soroban RPC endpoint (e.g. https://soroban-testnet.stellar.org)
    pub rpc_url: String,
    /// Contracts to follow (Strkey format): factory, lotteries, pools, strategies, yield sources
    pub contract_ids: Vec<String>,
    /// Path to the SQLite database file
    pub database_url: String,
    /// Port for the REST API server
    pub api_port: u16,
    /// How often (in seconds) to poll the RPC for new events
    pub poll_interval_secs: u64,
    /// Maximum number of events to fetch per RPC request
    pub events_per_page: u32,
    /// Ledger to start from if no cursor is saved
    pub start_ledger: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            rpc_url: var("RPC_URL", "https://soroban-testnet.stellar.org"),
            contract_ids: parse_contract_ids(lookup("CONTRACT_IDS").as_deref())?,
            database_url: var("DATABASE_URL", "sqlite:./lottery_events.db"),
            api_port: parse("API_PORT", &var("API_PORT", "3001"))?,
            poll_interval_secs: parse("POLL_INTERVAL_SECS", &var("POLL_INTERVAL_SECS", "5"))?,
            events_per_page: parse("EVENTS_PER_PAGE", &var("EVENTS_PER_PAGE", "100"))?,
            start_ledger: parse("START_LEDGER", &var("START_LEDGER", "0"))?,
        })
    }
}

fn parse<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| IndexerError::Config(format!("Invalid {key}: {raw}")))
}

fn parse_contract_ids(raw: Option<&str>) -> Result<Vec<String>> {
    let raw = raw.ok_or_else(|| {
        IndexerError::Config("CONTRACT_IDS environment variable is required".to_string())
    })?;

    let mut ids: Vec<String> = Vec::new();
    for id in raw.split(',').map(str::trim).filter(|id| !id.is_empty()) {
        if !id.starts_with('C') {
            return Err(IndexerError::Config(format!(
                "CONTRACT_IDS entry is not a contract strkey: {id}"
            )));
        }
        if !ids.iter().any(|known| known == id) {
            ids.push(id.to_string());
        }
    }

    if ids.is_empty() {
        return Err(IndexerError::Config("CONTRACT_IDS is empty".to_string()));
    }
    if ids.len() > MAX_CONTRACT_IDS {
        return Err(IndexerError::Config(format!(
            "CONTRACT_IDS lists {} contracts, at most {MAX_CONTRACT_IDS} are supported",
            ids.len()
        )));
    }
    Ok(ids)
}
