use std::path::PathBuf;

use slipway_core::SlipwayConfig;
use slipway_pipeline::{BuildLauncher, CloudBuildLauncher};

/// Run a single build job now, without waiting for a store notification.
pub async fn build() -> anyhow::Result<()> {
    let config = SlipwayConfig::load(&PathBuf::from("."))?;
    let request = super::build_request(&config).await?;

    let report = CloudBuildLauncher::new(request).launch().await?;

    println!("Built and pushed:");
    println!("  {image}", image = report.latest_image);
    println!("  {image}", image = report.derived_image);
    if let Some(version) = &report.source_version {
        println!("Source version: {version}");
    }
    println!(
        "Finished in {secs:.1}s",
        secs = report.elapsed.as_secs_f64()
    );

    Ok(())
}
