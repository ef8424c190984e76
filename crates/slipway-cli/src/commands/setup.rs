use std::path::PathBuf;

use slipway_cloud::{RegistryClient, StoreClient};
use slipway_core::SlipwayConfig;
use slipway_pipeline::{BuildLauncher, CloudBuildLauncher};

/// One-time provisioning: source bucket, image repository, initial upload,
/// and (when configured) an immediate first build.
pub async fn setup() -> anyhow::Result<()> {
    let config = SlipwayConfig::load(&PathBuf::from("."))?;
    let names = config.names()?;
    let region = &config.project.region;

    let store = StoreClient::new();
    let registry = RegistryClient::new();

    println!("Ensuring source bucket {bucket}...", bucket = names.source_bucket);
    store.ensure_bucket(&names.source_bucket, region).await?;

    println!(
        "Ensuring image repository {repo}...",
        repo = names.image_repository
    );
    registry
        .ensure_repository(&names.image_repository, region)
        .await?;

    println!(
        "Uploading {dir}/ to {bucket}...",
        dir = config.pipeline.source_dir,
        bucket = names.source_bucket
    );
    store
        .sync_up(
            &PathBuf::from(&config.pipeline.source_dir),
            &names.source_bucket,
            &config.pipeline.watch_prefix,
        )
        .await?;

    if config.pipeline.push_on_setup {
        println!("Running initial build...");
        let request = super::build_request(&config).await?;
        let report = CloudBuildLauncher::new(request).launch().await?;
        println!(
            "Pushed {latest} and {derived}",
            latest = report.latest_image,
            derived = report.derived_image
        );
    }

    println!();
    println!("Setup complete.");
    Ok(())
}
