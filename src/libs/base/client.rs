//! The [`BaseClient`] type encapsulates a connection to a Base node and
//! exposes a small set of async helpers implemented over plain JSON-RPC
//! using `reqwest`.  Alloy is used for primitive types only; contract
//! reads go through the provider-backed interface in
//! [`crate::libs::base::erc20`].
use alloy::primitives::{Address, U256};
use anyhow::{Context, Result};
use reqwest::Client as HttpClient;
use serde_json::Value;
use url::Url;

/// A thin JSON-RPC client for the Base chain.  Only the read methods
/// the session runner needs are wrapped; anything else would go
/// through [`BaseClient::raw_call`].
#[derive(Clone, Debug)]
pub struct BaseClient {
    rpc_url: Url,
    http: HttpClient,
}

impl BaseClient {
    pub fn new(rpc_url: Url) -> Self {
        Self {
            rpc_url,
            http: HttpClient::new(),
        }
    }

    pub fn url(&self) -> &Url {
        &self.rpc_url
    }

    /// Numeric chain identifier of the remote node (`eth_chainId`).
    pub async fn chain_id(&self) -> Result<u64> {
        let res = self.rpc("eth_chainId", serde_json::json!([])).await?;
        let hex = res.as_str().context("chainId not string")?;
        parse_quantity(hex).context("bad chainId hex")
    }

    /// Latest block number of the remote node (`eth_blockNumber`).
    pub async fn block_number(&self) -> Result<u64> {
        let res = self.rpc("eth_blockNumber", serde_json::json!([])).await?;
        let hex = res.as_str().context("blockNumber not string")?;
        parse_quantity(hex).context("bad blockNumber hex")
    }

    /// Native balance of `address` at the given block tag, in wei.
    pub async fn get_balance_at(&self, address: Address, block: &str) -> Result<U256> {
        let res = self
            .rpc("eth_getBalance", serde_json::json!([address, block]))
            .await?;
        let hex = res.as_str().context("balance not string")?;
        parse_u256(hex)
    }

    /// Issue an arbitrary JSON-RPC call and receive a `serde_json::Value`
    /// as the response.
    pub async fn raw_call(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        self.rpc(method, Value::Array(params)).await
    }

    async fn rpc(&self, method: &str, params: Value) -> Result<Value> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let res = self
            .http
            .post(self.rpc_url.as_str())
            .json(&body)
            .send()
            .await?;
        let status = res.status();
        let bytes = res.bytes().await?;
        // Try to decode JSON; if it fails, surface useful diagnostics
        let v: Value = match serde_json::from_slice(&bytes) {
            Ok(json) => json,
            Err(e) => {
                let mut sample = String::from_utf8_lossy(&bytes).to_string();
                if sample.len() > 512 {
                    sample.truncate(512);
                }
                // common provider misconfig: HTML/empty response or wrong endpoint
                let hint = if sample.trim_start().starts_with('<') {
                    "Response looks like HTML; the endpoint may be a gateway page or blocked. Ensure it is a valid HTTPS JSON-RPC endpoint."
                } else if sample.trim().is_empty() {
                    "Empty body from RPC. Endpoint may be down or require authentication."
                } else {
                    "Non-JSON response from RPC."
                };
                return Err(anyhow::anyhow!(
                    "RPC decode error ({status}): {e}. {hint}\nEndpoint: {}\nSample: {}",
                    self.rpc_url,
                    sample
                ));
            }
        };
        if let Some(err) = v.get("error") {
            anyhow::bail!("rpc error: {}", err);
        }
        Ok(v.get("result").cloned().unwrap_or(Value::Null))
    }
}

/// Parse a hex quantity (`"0x10"`) into a `u64`.
fn parse_quantity(hex: &str) -> Result<u64> {
    let stripped = hex
        .trim()
        .trim_start_matches("0x")
        .trim_start_matches("0X");
    u64::from_str_radix(stripped, 16).with_context(|| format!("not a hex quantity: `{hex}`"))
}

/// Parse an arbitrarily wide hex quantity into a `U256`.
fn parse_u256(hex: &str) -> Result<U256> {
    let mut stripped = hex
        .trim()
        .trim_start_matches("0x")
        .trim_start_matches("0X");

    if stripped.is_empty() {
        return Ok(U256::ZERO);
    }

    // Pad to even length if needed (RPC can return "0x0", "0x1", etc.)
    let padded;
    if stripped.len() % 2 == 1 {
        padded = format!("0{}", stripped);
        stripped = &padded;
    }

    let bytes = hex::decode(stripped).with_context(|| format!("bad hex quantity: `{hex}`"))?;
    Ok(U256::from_be_slice(&bytes))
}
