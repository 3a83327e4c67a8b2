use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplainerError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("RPC error: {0}")]
    RpcError(#[from] ethers::providers::ProviderError),

    #[error("No bytecode at address {0} (is this an EOA?)")]
    ContractNotFound(String),

    #[error("Bytecode analysis failed: {0}")]
    AnalysisError(String),

    #[error("Assembled report violates the output schema: {0}")]
    SchemaViolation(String),

    #[error("Report invariant violated: {0}")]
    InvariantViolation(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExplainerError>;
