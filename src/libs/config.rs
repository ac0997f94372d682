use {
    dotenv::dotenv,
    serde::{Deserialize, Serialize},
};

pub fn load_env() {
    dotenv().ok();
}

/// Runtime configuration, read once from the environment. RPC endpoints
/// fall back to the public Base nodes when unset.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub base_rpc: String,
    pub base_sepolia_rpc: String,
    pub private_key: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            base_rpc: std::env::var("BASE_RPC_URL")
                .unwrap_or_else(|_| "https://mainnet.base.org".to_string()),
            base_sepolia_rpc: std::env::var("BASE_SEPOLIA_RPC_URL")
                .unwrap_or_else(|_| "https://sepolia.base.org".to_string()),
            private_key: std::env::var("PRIVATE_KEY").expect("config.rs: PRIVATE_KEY is not set"),
        }
    }
}
