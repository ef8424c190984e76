mod build;
mod deploy;
mod init;
mod outputs;
mod setup;
mod status;
mod upload;
mod watch;

pub use build::build;
pub use deploy::deploy;
pub use init::init;
pub use outputs::outputs;
pub use setup::setup;
pub use status::status;
pub use upload::upload;
pub use watch::watch;

use std::path::PathBuf;

use slipway_cloud::{RegistryClient, registry_host};
use slipway_core::SlipwayConfig;
use slipway_pipeline::BuildRequest;

/// Root directory per-job working directories are allocated under.
pub(crate) const WORK_DIR: &str = ".slipway/work";

/// Registry endpoint host for the configured account, resolving the account
/// id from the active credentials when slipway.toml does not pin one.
pub(crate) async fn resolve_registry_host(config: &SlipwayConfig) -> anyhow::Result<String> {
    let account_id = match &config.project.account_id {
        Some(id) => id.clone(),
        None => RegistryClient::new().resolve_account().await?,
    };
    Ok(registry_host(&account_id, &config.project.region))
}

/// Assemble everything one build job needs from the loaded configuration.
pub(crate) async fn build_request(config: &SlipwayConfig) -> anyhow::Result<BuildRequest> {
    let names = config.names()?;
    let host = resolve_registry_host(config).await?;

    Ok(BuildRequest {
        bucket: names.source_bucket,
        prefix: config.pipeline.watch_prefix.clone(),
        image_repo: format!("{host}/{repo}", repo = names.image_repository),
        registry_host: host,
        region: config.project.region.clone(),
        hash_length: config.pipeline.hash_length,
        work_root: PathBuf::from(WORK_DIR),
    })
}
