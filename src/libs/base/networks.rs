use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::libs::config::Config;

/// Selectable target network.  Resolved once per run into
/// [`NetworkParams`]; nothing else in the crate branches on the
/// variant directly.
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Network {
    Base,
    BaseSepolia,
}

/// Network parameters resolved from a [`Network`] selection and the
/// runtime [`Config`].
#[derive(Debug, Clone)]
pub struct NetworkParams {
    pub network: Network,
    pub chain_id: u64,
    pub rpc_url: Url,
    pub explorer: &'static str,
}

impl Network {
    pub fn chain_id(self) -> u64 {
        match self {
            Network::Base => 8453,
            Network::BaseSepolia => 84532,
        }
    }

    pub fn explorer(self) -> &'static str {
        match self {
            Network::Base => "https://basescan.org",
            Network::BaseSepolia => "https://sepolia.basescan.org",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Network::Base => "Base",
            Network::BaseSepolia => "Base Sepolia",
        }
    }

    pub fn rpc_url(self, cfg: &Config) -> &str {
        match self {
            Network::Base => &cfg.base_rpc,
            Network::BaseSepolia => &cfg.base_sepolia_rpc,
        }
    }

    /// Resolve chain id, RPC endpoint and explorer for this selection.
    /// The configured RPC URL must be parseable; otherwise an error
    /// propagates to the caller.
    pub fn resolve(self, cfg: &Config) -> Result<NetworkParams> {
        let raw = self.rpc_url(cfg);
        let rpc_url = Url::parse(raw).with_context(|| format!("Failed to parse RPC URL: {raw}"))?;
        Ok(NetworkParams {
            network: self,
            chain_id: self.chain_id(),
            rpc_url,
            explorer: self.explorer(),
        })
    }
}
