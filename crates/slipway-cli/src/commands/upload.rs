use std::path::PathBuf;

use slipway_cloud::StoreClient;
use slipway_core::SlipwayConfig;

/// Sync the local source directory into the bucket under the watched prefix.
pub async fn upload() -> anyhow::Result<()> {
    let config = SlipwayConfig::load(&PathBuf::from("."))?;
    let names = config.names()?;

    let source_dir = PathBuf::from(&config.pipeline.source_dir);
    if !source_dir.is_dir() {
        anyhow::bail!(
            "source directory '{dir}' not found. Set [pipeline].source_dir in slipway.toml.",
            dir = config.pipeline.source_dir
        );
    }

    println!(
        "Uploading {dir}/ to {bucket}/{prefix}...",
        dir = config.pipeline.source_dir,
        bucket = names.source_bucket,
        prefix = config.pipeline.watch_prefix
    );
    StoreClient::new()
        .sync_up(
            &source_dir,
            &names.source_bucket,
            &config.pipeline.watch_prefix,
        )
        .await?;

    println!("Upload complete.");
    Ok(())
}
