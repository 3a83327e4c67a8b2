use contract_explainer::blockchain::{parse_address, ChainClient, ChainScanner};
use contract_explainer::{AnalysisInput, ExplainerError, ExplanationEngine, Result};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        println!("contract-explainer v{}", contract_explainer::VERSION);
        return Ok(());
    }

    if args.len() < 2 {
        eprintln!("contract-explainer v{}", contract_explainer::VERSION);
        eprintln!("\nUsage:");
        eprintln!("  {} <ADDRESS> [--rpc URL] [--chain NAME]", args[0]);
        eprintln!("\nOptions:");
        eprintln!("  --rpc URL       Use the given RPC endpoint instead of scanning public chains");
        eprintln!("  --chain NAME    Chain label for the report when --rpc is set (default: custom)");
        eprintln!("  --version, -v   Show version information");
        std::process::exit(1);
    }

    let address_str = &args[1];
    let address = parse_address(address_str)?;

    let mut rpc_url: Option<String> = None;
    let mut chain_label: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--rpc" => {
                if i + 1 < args.len() {
                    rpc_url = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: missing value for --rpc");
                    std::process::exit(1);
                }
            }
            "--chain" => {
                if i + 1 < args.len() {
                    chain_label = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: missing value for --chain");
                    std::process::exit(1);
                }
            }
            other => {
                eprintln!("Unknown argument: {other}");
                i += 1;
            }
        }
    }

    let client = match rpc_url {
        Some(url) => {
            let label = chain_label.unwrap_or_else(|| "custom".to_string());
            ChainClient::connect(&label, &url).await?
        }
        None => ChainScanner::new()
            .locate(address)
            .await
            .ok_or_else(|| ExplainerError::ContractNotFound(address_str.clone()))?,
    };

    let bytecode = client.get_bytecode(address).await?;
    let chain = client.chain().to_string();

    let engine = ExplanationEngine::new();
    let input = AnalysisInput::from_bytecode(format!("{address:?}"), chain, bytecode);
    let report = engine.explain(&input)?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
