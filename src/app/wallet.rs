//! Wallet seam.  The session runner only ever asks a wallet for its
//! account addresses; how those addresses come to exist is the
//! implementation's business.
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use anyhow::{Context, Result};

use crate::libs::config::Config;

#[allow(async_fn_in_trait)]
pub trait WalletConnect {
    /// The first returned address is the active account.
    async fn request_addresses(&self) -> Result<Vec<Address>>;
}

/// Wallet identity derived from a configured private key.  The key is
/// used only to derive the address; nothing is ever signed.
#[derive(Clone, Debug)]
pub struct KeyWallet {
    address: Address,
}

impl KeyWallet {
    pub fn new(private_key: &str) -> Result<Self> {
        let signer: PrivateKeySigner = private_key
            .parse()
            .context("PRIVATE_KEY did not contain a valid hex encoded secret")?;
        Ok(Self {
            address: signer.address(),
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::new(&cfg.private_key)
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

impl WalletConnect for KeyWallet {
    async fn request_addresses(&self) -> Result<Vec<Address>> {
        Ok(vec![self.address])
    }
}
