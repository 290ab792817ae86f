use clap::Parser;
use deploy_scripts::{cli::Cli, config::NetworkConfig, errors::ScriptError, utils::setup_client};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    dotenvy::dotenv().ok();

    let Cli {
        priv_key,
        network,
        rpc_url,
        deployments_path,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let network = NetworkConfig::for_name(&network)?;
    let rpc_url = rpc_url.unwrap_or_else(|| network.rpc_url.to_string());
    let client = setup_client(&priv_key, &rpc_url, network.chain_id).await?;

    command.run(client, &network, &deployments_path).await
}
