use std::path::PathBuf;

use slipway_core::SlipwayConfig;

/// Print the provisioned resource endpoints.
pub async fn outputs() -> anyhow::Result<()> {
    let config = SlipwayConfig::load(&PathBuf::from("."))?;
    let names = config.names()?;
    let host = super::resolve_registry_host(&config).await?;

    println!(
        "registry_uri  = {host}/{repo}",
        repo = names.image_repository
    );
    println!("region        = {region}", region = config.project.region);
    println!("source_bucket = {bucket}", bucket = names.source_bucket);

    Ok(())
}
