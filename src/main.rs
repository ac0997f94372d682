use alloy::providers::ProviderBuilder;
use anyhow::Result;
use clap::Parser;

use cobalt::app::runner::{ChainReader, SessionRunner};
use cobalt::app::surface::TermSurface;
use cobalt::app::wallet::KeyWallet;
use cobalt::libs::base::client::BaseClient;
use cobalt::libs::base::networks::Network;
use cobalt::libs::config::{load_env, Config};
use cobalt::libs::writing::cc;
use cobalt::log;

#[derive(Parser, Debug)]
#[command(name = "cobalt", about = "Connect a wallet and inspect Base chain state")]
struct Cli {
    /// Target network.
    #[arg(long, value_enum, default_value = "base-sepolia")]
    network: Network,
    /// Contract address to link on the explorer (no call is made).
    #[arg(long)]
    contract: Option<String>,
    /// ERC-20 token address to inspect.
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    load_env();
    let cli = Cli::parse();
    let cfg = Config::new();

    let net = cli.network.resolve(&cfg)?;
    let wallet = KeyWallet::from_config(&cfg)?;
    let rpc = BaseClient::new(net.rpc_url.clone());
    let provider = ProviderBuilder::new().connect_http(net.rpc_url.clone());
    let chain = ChainReader::new(rpc, provider);

    let runner = SessionRunner::new();
    let mut surface = TermSurface::new();
    if let Err(e) = runner
        .run(
            &net,
            &wallet,
            &chain,
            cli.contract.as_deref(),
            cli.token.as_deref(),
            &mut surface,
        )
        .await
    {
        log!(cc::RED, "session failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
