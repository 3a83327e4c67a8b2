use ethers::types::Address;

use super::client::ChainClient;

/// A named public RPC endpoint.
#[derive(Debug, Clone, Copy)]
pub struct ChainEndpoint {
    pub name: &'static str,
    pub rpc: &'static str,
}

/// Fallback public RPCs, probed in order.
pub const PUBLIC_ENDPOINTS: &[ChainEndpoint] = &[
    ChainEndpoint { name: "ethereum", rpc: "https://rpc.flashbots.net" },
    ChainEndpoint { name: "arbitrum", rpc: "https://arb1.arbitrum.io/rpc" },
    ChainEndpoint { name: "optimism", rpc: "https://mainnet.optimism.io" },
    ChainEndpoint { name: "polygon", rpc: "https://polygon-rpc.com" },
    ChainEndpoint { name: "base", rpc: "https://mainnet.base.org" },
    ChainEndpoint { name: "bsc", rpc: "https://bsc-dataseed.binance.org" },
    ChainEndpoint { name: "avalanche", rpc: "https://api.avax.network/ext/bc/C/rpc" },
    ChainEndpoint { name: "gnosis", rpc: "https://rpc.gnosischain.com" },
];

/// Finds which network an address has code on.
pub struct ChainScanner {
    endpoints: &'static [ChainEndpoint],
}

impl ChainScanner {
    pub fn new() -> Self {
        Self {
            endpoints: PUBLIC_ENDPOINTS,
        }
    }

    /// Probe the configured chains sequentially (gentle on public RPCs) and
    /// return a client for the first one holding code at the address.
    /// Individual probe failures are logged and skipped; `None` means no
    /// probed chain has code there.
    pub async fn locate(&self, address: Address) -> Option<ChainClient> {
        tracing::info!(?address, chains = self.endpoints.len(), "scanning chains");

        for endpoint in self.endpoints {
            match ChainClient::connect(endpoint.name, endpoint.rpc).await {
                Ok(client) => match client.is_contract(address).await {
                    Ok(true) => {
                        tracing::info!(chain = endpoint.name, "contract located");
                        return Some(client);
                    }
                    Ok(false) => {}
                    Err(e) => {
                        tracing::debug!(chain = endpoint.name, "probe failed: {e}");
                    }
                },
                Err(e) => {
                    tracing::debug!(chain = endpoint.name, "connect failed: {e}");
                }
            }
        }

        None
    }
}

impl Default for ChainScanner {
    fn default() -> Self {
        Self::new()
    }
}
