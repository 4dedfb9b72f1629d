//! Environment-supplied provider configuration.

/// Production network identifier.
pub const MAINNET_CHAIN_ID: &str = "SN_MAIN";
/// Test network identifier.
pub const SEPOLIA_CHAIN_ID: &str = "SN_SEPOLIA";

const DEFAULT_RPC_URL: &str = "https://free-rpc.nethermind.io/sepolia-juno";

/// RPC endpoint and the two networks a session may operate against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    pub rpc_url: String,
    pub mainnet_chain_id: String,
    pub testnet_chain_id: String,
}

impl ProviderConfig {
    /// Read the RPC endpoint from the build environment, falling back to a
    /// public node. Inlined at compile time since there is no runtime
    /// environment in the browser.
    pub fn from_env() -> Self {
        Self {
            rpc_url: option_env!("PREDFI_RPC_URL")
                .unwrap_or(DEFAULT_RPC_URL)
                .to_string(),
            mainnet_chain_id: MAINNET_CHAIN_ID.to_string(),
            testnet_chain_id: SEPOLIA_CHAIN_ID.to_string(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
