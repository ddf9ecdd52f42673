use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use xmr_gateway::config::GatewayConfig;
use xmr_gateway::gateway;
use xmr_gateway::rpc::WalletRpcClient;
use xmr_gateway::utils::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cfg = GatewayConfig::from_env()?;
    info!(
        "connecting to wallet daemon at {}:{}",
        cfg.daemon.host, cfg.daemon.port
    );

    // A failed probe aborts startup; the gateway never serves traffic with
    // a daemon it could not reach.
    let client = Arc::new(WalletRpcClient::connect(&cfg.daemon).await?);

    gateway::serve(&cfg, client).await
}
