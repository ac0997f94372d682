//! Read-only ERC-20 interface.  Metadata and balance queries go
//! through an alloy provider; ABI encoding is generated by `sol!`.
use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use anyhow::{Context, Result};

alloy::sol! {
    #[sol(rpc)]
    interface IERC20Meta {
        function name() view returns (string);
        function symbol() view returns (string);
        function decimals() view returns (uint8);
        function balanceOf(address owner) view returns (uint256);
    }
}

pub async fn token_name<P: Provider + Clone>(provider: P, token: Address) -> Result<String> {
    IERC20Meta::new(token, provider)
        .name()
        .call()
        .await
        .with_context(|| format!("name() call failed for {token}"))
}

pub async fn token_symbol<P: Provider + Clone>(provider: P, token: Address) -> Result<String> {
    IERC20Meta::new(token, provider)
        .symbol()
        .call()
        .await
        .with_context(|| format!("symbol() call failed for {token}"))
}

pub async fn token_decimals<P: Provider + Clone>(provider: P, token: Address) -> Result<u8> {
    IERC20Meta::new(token, provider)
        .decimals()
        .call()
        .await
        .with_context(|| format!("decimals() call failed for {token}"))
}

pub async fn token_balance_of<P: Provider + Clone>(
    provider: P,
    token: Address,
    owner: Address,
) -> Result<U256> {
    IERC20Meta::new(token, provider)
        .balanceOf(owner)
        .call()
        .await
        .with_context(|| format!("balanceOf() call failed for {token}"))
}
