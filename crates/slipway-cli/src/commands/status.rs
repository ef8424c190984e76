use std::path::PathBuf;

use slipway_cloud::ServiceClient;
use slipway_core::SlipwayConfig;

pub async fn status() -> anyhow::Result<()> {
    let config = SlipwayConfig::load(&PathBuf::from("."))?;
    let names = config.names()?;

    let output = ServiceClient::new()
        .describe(&names.cluster, &names.service, &config.project.region)
        .await?;

    println!("{output}");
    Ok(())
}
