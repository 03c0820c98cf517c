//! Soroban RPC client: polls `getEvents` and decodes lottery events.
//!
//! ## Resilience
//!
//! * Exponential back-off is applied when the RPC returns an error or rate-limit
//!   response, up to [`MAX_BACKOFF_SECS`] seconds.
//! * Transient network errors (connection reset, timeout) are retried silently.
//!
//! ## Formats
//!
//! Events are requested with `xdrFormat: "json"`, so topics and payloads
//! arrive as `topicJson` / `valueJson`. Nodes that ignore the flag answer with
//! base64 XDR in `topic` / `value`; for those only the topic symbol and simple
//! scalar subjects are decoded.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::errors::{IndexerError, Result};
use crate::events::{EventKind, LotteryEvent};

const MAX_BACKOFF_SECS: u64 = 60;
const INITIAL_BACKOFF_SECS: u64 = 2;
/// `getEvents` limit on contract ids per filter.
const IDS_PER_FILTER: usize = 5;

// ─────────────────────────────────────────────────────────
// JSON-RPC response shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    pub result: Option<EventsResult>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EventsResult {
    pub events: Vec<RawEvent>,
    pub cursor: Option<String>,
    #[serde(rename = "latestLedger")]
    pub latest_ledger: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawEvent {
    /// Base64 XDR topics (when the node ignores `xdrFormat`).
    #[serde(default)]
    pub topic: Vec<String>,
    #[serde(rename = "topicJson", default)]
    pub topic_json: Vec<Value>,
    #[serde(rename = "valueJson")]
    pub value_json: Option<Value>,
    #[serde(rename = "contractId")]
    pub contract_id: Option<String>,
    #[serde(rename = "txHash")]
    pub tx_hash: Option<String>,
    pub id: Option<String>,
    pub ledger: Option<u64>,
    #[serde(rename = "ledgerClosedAt")]
    pub ledger_closed_at: Option<String>,
    #[serde(rename = "inSuccessfulContractCall")]
    pub in_successful_contract_call: Option<bool>,
}

// ─────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────

/// Fetch a page of events for `contract_ids` from the RPC.
///
/// * `start_ledger`: the ledger sequence to scan from (inclusive).
/// * `cursor`: optional opaque pagination cursor from a previous response.
/// * `limit`: maximum number of events to return.
///
/// Returns `(events, next_cursor, latest_ledger)`.
pub async fn fetch_events(
    client: &Client,
    rpc_url: &str,
    contract_ids: &[String],
    start_ledger: u32,
    cursor: Option<&str>,
    limit: u32,
) -> Result<(Vec<RawEvent>, Option<String>, Option<u64>)> {
    let mut backoff = INITIAL_BACKOFF_SECS;
    let params = build_params(contract_ids, start_ledger, cursor, limit);

    loop {
        let response = client
            .post(rpc_url)
            .json(&json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "getEvents",
                "params": params,
            }))
            .send()
            .await;

        let resp = match response {
            Ok(resp) => resp,
            Err(e) => {
                warn!("RPC request failed (will retry in {backoff}s): {e}");
                backoff = sleep_backoff(backoff).await;
                continue;
            }
        };

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Rate-limited by RPC (will retry in {backoff}s)");
            backoff = sleep_backoff(backoff).await;
            continue;
        }

        let body: RpcResponse = resp.json().await?;

        if let Some(err) = body.error {
            // Invalid request / unknown method will not fix themselves.
            if err.code == -32600 || err.code == -32601 || err.code == -32602 {
                return Err(IndexerError::Rpc {
                    code: err.code,
                    message: err.message,
                });
            }
            warn!(
                "RPC soft error (will retry in {backoff}s): {} {}",
                err.code, err.message
            );
            backoff = sleep_backoff(backoff).await;
            continue;
        }

        let result = body.result.ok_or_else(|| {
            IndexerError::EventParse("Empty result from getEvents".to_string())
        })?;

        debug!(
            "Fetched {} events (latest_ledger={:?})",
            result.events.len(),
            result.latest_ledger
        );

        return Ok((result.events, result.cursor, result.latest_ledger));
    }
}

async fn sleep_backoff(backoff: u64) -> u64 {
    tokio::time::sleep(Duration::from_secs(backoff)).await;
    (backoff * 2).min(MAX_BACKOFF_SECS)
}

fn build_params(
    contract_ids: &[String],
    start_ledger: u32,
    cursor: Option<&str>,
    limit: u32,
) -> Value {
    let filters: Vec<Value> = contract_ids
        .chunks(IDS_PER_FILTER)
        .map(|ids| json!({ "type": "contract", "contractIds": ids }))
        .collect();

    let mut params = json!({
        "filters": filters,
        "pagination": { "limit": limit },
        "xdrFormat": "json",
    });

    if let Some(cur) = cursor {
        params["pagination"]["cursor"] = json!(cur);
    } else {
        params["startLedger"] = json!(start_ledger);
    }

    params
}

// ─────────────────────────────────────────────────────────
// Event decoding
// ─────────────────────────────────────────────────────────

/// Decode raw RPC events into [`LotteryEvent`]s.
///
/// Events from failed contract calls and events without a contract id are dropped.
pub fn decode_events(raw: &[RawEvent]) -> Vec<LotteryEvent> {
    raw.iter().filter_map(decode_single).collect()
}

fn decode_single(raw: &RawEvent) -> Option<LotteryEvent> {
    if raw.in_successful_contract_call == Some(false) {
        return None;
    }
    let contract_id = match &raw.contract_id {
        Some(id) => id.clone(),
        None => {
            debug!("Skipping event without contract id: {:?}", raw.id);
            return None;
        }
    };

    let kind = EventKind::from_topic(&topic_string(raw, 0)?);
    let subject = topic_string(raw, 1);

    let ledger = raw.ledger.unwrap_or(0) as i64;
    let timestamp = raw
        .ledger_closed_at
        .as_deref()
        .and_then(parse_iso_to_unix)
        .unwrap_or(0);

    let (actor, amount) = match &raw.value_json {
        Some(value) => decode_data(value, kind),
        None => (None, None),
    };

    Some(LotteryEvent {
        event_id: raw.id.clone(),
        event_type: kind.as_str().to_string(),
        subject,
        actor,
        amount,
        ledger,
        timestamp,
        contract_id,
        tx_hash: raw.tx_hash.clone(),
    })
}

/// Topic `index` as a plain string, from JSON when present, else from XDR.
fn topic_string(raw: &RawEvent, index: usize) -> Option<String> {
    if let Some(v) = raw.topic_json.get(index) {
        return scalar_string(v);
    }
    raw.topic.get(index).map(|t| decode_xdr_topic(t))
}

/// Pull the actor and amount out of an event payload.
fn decode_data(value: &Value, kind: EventKind) -> (Option<String>, Option<String>) {
    let fields = flatten_map(value);
    (
        extract_field(&fields, kind.actor_fields()),
        extract_field(&fields, kind.amount_fields()),
    )
}

fn extract_field(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| fields.get(*key).and_then(scalar_string))
}

/// Turn a contract struct payload into a plain `{field: value}` object.
///
/// Accepts the XDR-JSON shape `{"map": [{"key": {"symbol": k}, "val": v}]}` as
/// well as already-flat objects.
fn flatten_map(value: &Value) -> Map<String, Value> {
    if let Some(entries) = value.get("map").and_then(Value::as_array) {
        return entries
            .iter()
            .filter_map(|entry| {
                let key = entry.get("key").and_then(scalar_string)?;
                let val = entry.get("val")?.clone();
                Some((key, val))
            })
            .collect();
    }
    value.as_object().cloned().unwrap_or_default()
}

/// Render an XDR-JSON scalar (`{"symbol": "joined"}`, `{"address": "C.."}`,
/// `{"i128": "100"}`, `{"type": "u64", "value": 5}`) or a bare JSON scalar as a string.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(map) => {
            if let Some(inner) = map.get("value") {
                return scalar_string(inner);
            }
            if let Some(parts) = map.get("i128").filter(|v| v.is_object()) {
                return i128_from_parts(parts).map(|n| n.to_string());
            }
            map.values().next().and_then(scalar_string)
        }
        _ => None,
    }
}

/// `{"hi": .., "lo": ..}` as emitted for large i128 values.
fn i128_from_parts(parts: &Value) -> Option<i128> {
    let hi = parts.get("hi").and_then(Value::as_i64)?;
    let lo = parts.get("lo").and_then(Value::as_u64)?;
    Some(((hi as i128) << 64) | lo as i128)
}

// XDR `ScValType` discriminants used in topics.
const SCV_U64: u32 = 5;
const SCV_SYMBOL: u32 = 15;

/// Decode a base64 XDR `ScVal` topic.
///
/// Symbols and `u64`s decode to their value; anything else (addresses
/// included) is kept as `xdr:<hex>` so it still groups consistently.
fn decode_xdr_topic(raw: &str) -> String {
    let bytes = match BASE64.decode(raw) {
        Ok(bytes) => bytes,
        Err(_) => return raw.to_string(),
    };
    match read_u32(&bytes, 0) {
        Some(SCV_SYMBOL) => {
            let decoded = read_u32(&bytes, 4)
                .map(|len| len as usize)
                .and_then(|len| bytes.get(8..8 + len))
                .and_then(|sym| std::str::from_utf8(sym).ok());
            if let Some(sym) = decoded {
                return sym.to_string();
            }
        }
        Some(SCV_U64) => {
            if let Some(n) = bytes
                .get(4..12)
                .and_then(|b| <[u8; 8]>::try_from(b).ok())
                .map(u64::from_be_bytes)
            {
                return n.to_string();
            }
        }
        _ => {}
    }
    format!("xdr:{}", hex::encode(&bytes))
}

fn read_u32(bytes: &[u8], at: usize) -> Option<u32> {
    bytes
        .get(at..at + 4)
        .and_then(|b| <[u8; 4]>::try_from(b).ok())
        .map(u32::from_be_bytes)
}

/// Parse an ISO-8601 timestamp string into a Unix epoch (seconds).
fn parse_iso_to_unix(s: &str) -> Option<i64> {
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.timestamp())
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────
