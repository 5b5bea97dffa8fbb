use ethlook::config::{Config, RPC_URL_ENV};
use ethlook::rpc::{RpcClient, TxStatus};
use ethlook::search::LookupQuery;
use ethlook::ui;

use anyhow::{bail, Context, Result};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        // Use {:#} to get the full error chain from anyhow
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let mut config = Config::load()?;
    let rpc_url = resolve_endpoint(&mut config)?;

    debug!(rpc_url, "connecting");
    let client = RpcClient::new(&rpc_url).context("Failed to connect to the node endpoint")?;

    loop {
        let input = ui::prompt_line("Enter a transaction hash or address: ")?;

        match LookupQuery::parse(&input) {
            LookupQuery::TxHash(hash) => {
                let info = client
                    .get_transaction(hash)
                    .await
                    .context("Failed to retrieve transaction")?;
                for line in ui::tx_lines(&info) {
                    println!("{line}");
                }

                // Pending transactions have no receipt, so skip the fetch
                let status = if info.pending {
                    TxStatus::Pending
                } else {
                    client
                        .receipt_status(hash)
                        .await
                        .context("Failed to retrieve receipt")?
                };
                println!("{}", ui::status_line(status));
            }
            LookupQuery::Address(address) => {
                let info = client
                    .get_address(address)
                    .await
                    .context("Failed to retrieve account state")?;
                for line in ui::address_lines(&info) {
                    println!("{line}");
                }
            }
        }

        let response = ui::prompt_line("Search again? (y/n): ")?;
        if !ui::wants_another_search(&response) {
            break;
        }
    }

    Ok(())
}

/// Resolve the RPC endpoint: env var, then config file, then a one-time
/// interactive prompt whose answer is persisted for subsequent runs.
fn resolve_endpoint(config: &mut Config) -> Result<String> {
    if let Some(url) = config.resolve_rpc_url() {
        return Ok(url);
    }

    let url = ui::prompt_line("Enter an RPC endpoint URL: ")?;
    if url.is_empty() {
        bail!("No RPC endpoint configured (set {RPC_URL_ENV} or enter a URL at the prompt)");
    }

    config.set_rpc(url.clone())?;
    Ok(url)
}
