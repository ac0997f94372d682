//! The session runner.  One run connects the wallet, reads chain
//! state over JSON-RPC, optionally inspects a contract address and an
//! ERC-20 token, and reports everything through the output surface.
use std::sync::atomic::{AtomicBool, Ordering};

use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use anyhow::Result;
use thiserror::Error;

use crate::app::surface::Surface;
use crate::app::wallet::WalletConnect;
use crate::libs::base::client::BaseClient;
use crate::libs::base::erc20;
use crate::libs::base::networks::NetworkParams;
use crate::libs::base::spells::{format_eth, format_units};

#[derive(Debug, Error)]
pub enum RunError {
    /// A non-empty address input was not `0x` + 40 hex digits.
    #[error("Invalid address: {0}")]
    Validation(String),
    /// The wallet or an RPC call failed or returned nothing usable.
    #[error(transparent)]
    External(#[from] anyhow::Error),
    /// A run was started while another one is still in flight.
    #[error("a session is already running")]
    Busy,
}

/// Check that `input` is a well-formed 40-hex-digit address and return
/// it trimmed.  Case is not significant and no checksum is enforced.
pub fn validate_address(input: &str) -> Result<String, RunError> {
    let t = input.trim();
    let well_formed =
        t.len() == 42 && t.starts_with("0x") && t[2..].bytes().all(|b| b.is_ascii_hexdigit());
    if well_formed {
        Ok(t.to_string())
    } else {
        Err(RunError::Validation(t.to_string()))
    }
}

/// Chain-state seam.  Everything the runner reads from the network
/// goes through here, so hosts and tests can substitute their own
/// source of truth.
#[allow(async_fn_in_trait)]
pub trait ChainState {
    async fn chain_id(&self) -> Result<u64>;
    async fn block_number(&self) -> Result<u64>;
    async fn native_balance(&self, address: Address) -> Result<U256>;
    async fn token_name(&self, token: Address) -> Result<String>;
    async fn token_symbol(&self, token: Address) -> Result<String>;
    async fn token_decimals(&self, token: Address) -> Result<u8>;
    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256>;
}

/// Production [`ChainState`]: raw quantities through the JSON-RPC
/// [`BaseClient`], ERC-20 reads through an alloy provider.
#[derive(Clone, Debug)]
pub struct ChainReader<P> {
    rpc: BaseClient,
    provider: P,
}

impl<P: Provider + Clone> ChainReader<P> {
    pub fn new(rpc: BaseClient, provider: P) -> Self {
        Self { rpc, provider }
    }
}

impl<P: Provider + Clone> ChainState for ChainReader<P> {
    async fn chain_id(&self) -> Result<u64> {
        self.rpc.chain_id().await
    }

    async fn block_number(&self) -> Result<u64> {
        self.rpc.block_number().await
    }

    async fn native_balance(&self, address: Address) -> Result<U256> {
        self.rpc.get_balance_at(address, "latest").await
    }

    async fn token_name(&self, token: Address) -> Result<String> {
        erc20::token_name(self.provider.clone(), token).await
    }

    async fn token_symbol(&self, token: Address) -> Result<String> {
        erc20::token_symbol(self.provider.clone(), token).await
    }

    async fn token_decimals(&self, token: Address) -> Result<u8> {
        erc20::token_decimals(self.provider.clone(), token).await
    }

    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256> {
        erc20::token_balance_of(self.provider.clone(), token, owner).await
    }
}

/// Runs one session at a time.  A second `run` while one is in flight
/// is rejected with [`RunError::Busy`] before anything is written to
/// the caller's surface.
#[derive(Debug, Default)]
pub struct SessionRunner {
    busy: AtomicBool,
}

impl SessionRunner {
    pub fn new() -> Self {
        Self {
            busy: AtomicBool::new(false),
        }
    }

    /// Execute the full session sequence.  On failure the surface is
    /// left with status `Error` and a final `Error: …` log line;
    /// whatever was logged before the failure stays visible.
    pub async fn run<W, C, S>(
        &self,
        net: &NetworkParams,
        wallet: &W,
        chain: &C,
        contract: Option<&str>,
        token: Option<&str>,
        surface: &mut S,
    ) -> Result<(), RunError>
    where
        W: WalletConnect,
        C: ChainState,
        S: Surface,
    {
        if self.busy.swap(true, Ordering::SeqCst) {
            return Err(RunError::Busy);
        }
        let res = self
            .run_inner(net, wallet, chain, contract, token, surface)
            .await;
        self.busy.store(false, Ordering::SeqCst);

        if let Err(e) = &res {
            surface.set_status("Error");
            surface.log(&format!("Error: {e}"));
        }
        res
    }

    async fn run_inner<W, C, S>(
        &self,
        net: &NetworkParams,
        wallet: &W,
        chain: &C,
        contract: Option<&str>,
        token: Option<&str>,
        surface: &mut S,
    ) -> Result<(), RunError>
    where
        W: WalletConnect,
        C: ChainState,
        S: Surface,
    {
        surface.log(&format!(
            "Built for Base — target={} chainId={}",
            net.network.display_name(),
            net.chain_id
        ));
        surface.log(&format!("Explorer: {}", net.explorer));
        surface.log(&format!("RPC: {}", net.rpc_url));

        surface.set_status("Connecting wallet…");
        let addresses = wallet.request_addresses().await?;
        let user = *addresses
            .first()
            .ok_or_else(|| anyhow::anyhow!("No address returned from wallet"))?;
        surface.log(&format!("Connected address: {user}"));
        surface.log(&format!("Basescan address: {}/address/{user}", net.explorer));

        surface.set_status("Reading chain state…");
        let (rpc_chain_id, block_number, balance_wei) = tokio::try_join!(
            chain.chain_id(),
            chain.block_number(),
            chain.native_balance(user),
        )?;
        surface.log(&format!("RPC chainId: {rpc_chain_id}"));
        surface.log(&format!("Latest block: {block_number}"));
        surface.log(&format!("Native balance: {} ETH", format_eth(balance_wei)));

        if rpc_chain_id != net.chain_id {
            surface.log(&format!(
                "Warning: wallet/RPC mismatch. Expected {} but RPC returned {}.",
                net.chain_id, rpc_chain_id
            ));
        }

        if let Some(raw) = contract.filter(|s| !s.trim().is_empty()) {
            let ca = validate_address(raw)?;
            surface.log(&format!("Contract address: {ca}"));
            surface.log(&format!("Basescan contract: {}/address/{ca}", net.explorer));
            surface.log(&format!(
                "Basescan verification: {}/address/{ca}#code",
                net.explorer
            ));
        }

        if let Some(raw) = token.filter(|s| !s.trim().is_empty()) {
            let token_str = validate_address(raw)?;
            let token_addr: Address = token_str
                .parse()
                .map_err(|_| RunError::Validation(token_str.clone()))?;

            surface.set_status("Reading ERC-20 metadata & balance…");
            let (name, symbol, decimals, token_bal) = tokio::try_join!(
                chain.token_name(token_addr),
                chain.token_symbol(token_addr),
                chain.token_decimals(token_addr),
                chain.token_balance(token_addr, user),
            )?;

            surface.log(&format!("Token: {token_str}"));
            surface.log(&format!(
                "Token Basescan: {}/address/{token_str}",
                net.explorer
            ));
            surface.log(&format!("Token name: {name}"));
            surface.log(&format!("Token symbol: {symbol}"));
            surface.log(&format!("Token decimals: {decimals}"));
            surface.log(&format!(
                "Token balance (approx): {}",
                format_units(token_bal, decimals)
            ));
        }

        surface.set_status("Done.");
        Ok(())
    }
}
