use std::sync::Arc;

use ethers::prelude::*;

use crate::utils::{ExplainerError, Result};

/// JSON-RPC client for one chain.
pub struct ChainClient {
    provider: Arc<Provider<Http>>,
    chain: String,
    chain_id: u64,
}

impl ChainClient {
    pub async fn connect(chain: &str, rpc_url: &str) -> Result<Self> {
        let provider = Provider::<Http>::try_from(rpc_url).map_err(|e| {
            ExplainerError::RpcError(ProviderError::CustomError(format!(
                "invalid RPC URL: {e}"
            )))
        })?;
        let provider = Arc::new(provider);

        let chain_id = provider.get_chainid().await?.as_u64();
        tracing::debug!(chain, chain_id, "connected");

        Ok(Self {
            provider,
            chain: chain.to_string(),
            chain_id,
        })
    }

    /// Fetch deployed bytecode as a `0x`-prefixed hex string.
    ///
    /// An address with no code is not a contract; that is fatal for the
    /// whole analysis, never a partially-empty report.
    pub async fn get_bytecode(&self, address: Address) -> Result<String> {
        tracing::debug!(?address, "fetching bytecode");

        let code = self.provider.get_code(address, None).await?;
        if code.is_empty() {
            return Err(ExplainerError::ContractNotFound(format!("{address:?}")));
        }

        Ok(format!("0x{}", hex::encode(&code)))
    }

    pub async fn is_contract(&self, address: Address) -> Result<bool> {
        let code = self.provider.get_code(address, None).await?;
        Ok(!code.is_empty())
    }

    pub fn chain(&self) -> &str {
        &self.chain
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }
}
