use std::path::PathBuf;

use slipway_cloud::ServiceClient;
use slipway_core::SlipwayConfig;

/// Force a new deployment so the service re-pulls its fixed tag.
pub async fn deploy() -> anyhow::Result<()> {
    let config = SlipwayConfig::load(&PathBuf::from("."))?;
    let names = config.names()?;

    println!(
        "Redeploying {service} (tag {tag})...",
        service = names.service,
        tag = config.deployment_tag()
    );
    ServiceClient::new()
        .redeploy(&names.cluster, &names.service, &config.project.region)
        .await?;

    println!("Deployment started.");
    Ok(())
}
