#[macro_use]
extern crate log;

use anyhow::Context as _;
use asset_gateway_client::{dispatcher, Config, GrpcGateway, Identity, Signer, Transport};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        error!("failed to run the application: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env();
    config.log();

    let identity = Identity::from_cert_file(config.msp_id.clone(), &config.cert_path)
        .context("loading client certificate")?;
    let signer =
        Signer::from_key_dir(&config.key_directory_path).context("loading signing key")?;
    let transport = Transport::connect(
        &config.peer_endpoint,
        &config.tls_cert_path,
        &config.peer_host_alias,
    )
    .await
    .context("connecting to peer")?;

    let gateway = GrpcGateway::builder(transport.channel(), identity, signer)
        .channel_name(config.channel_name.clone())
        .contract(config.chaincode_name.clone())
        .build();

    // The loop owns the terminal; whatever way it ends, the session and the
    // transport are released in reverse acquisition order.
    let stdin = std::io::stdin();
    let result = dispatcher::run(&gateway, stdin.lock(), std::io::stdout()).await;

    gateway.close();
    transport.close();

    result.context("operator I/O failed")?;
    Ok(())
}
