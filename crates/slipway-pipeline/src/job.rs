use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use slipway_cloud::{
    AuthError, BuildToolError, CliExecutor, DockerClient, PushError, RegistryClient, StoreClient,
    StoreError,
};
use slipway_core::{FALLBACK_TAG, derive_tag};
use tracing::info;

use crate::source;

/// Everything one build job needs, resolved once at system setup.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// Source bucket to read from
    pub bucket: String,
    /// Watched key prefix; the job syncs the whole prefix, not the
    /// triggering object
    pub prefix: String,
    /// Registry endpoint host
    pub registry_host: String,
    /// Fully-qualified image repository (`host/repo`, no tag)
    pub image_repo: String,
    /// Cloud region
    pub region: String,
    /// Derived-tag truncation length
    pub hash_length: usize,
    /// Root directory per-job working directories are allocated under
    pub work_root: PathBuf,
}

/// Durable record of one finished build job.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub source_version: Option<String>,
    pub derived_tag: String,
    pub latest_image: String,
    pub derived_image: String,
    pub elapsed: Duration,
}

/// Run one build job: authenticate → build → publish.
///
/// `workdir` must be exclusive to this job; concurrent jobs each get their
/// own so one job's sync never mutates another's build context.
///
/// Phases execute strictly in order; the first failure aborts the job. A
/// failed second push leaves the first push in place, which is accepted:
/// `latest` pushes are overwritable and a re-run converges.
pub async fn execute<E: CliExecutor>(
    request: &BuildRequest,
    workdir: &Path,
    registry: &RegistryClient<E>,
    store: &StoreClient<E>,
    docker: &DockerClient<E>,
) -> Result<BuildReport, JobError> {
    let started = Instant::now();

    // Source provisioning: always the store's current state, never the
    // specific object that triggered the job.
    store
        .sync_down(&request.bucket, &request.prefix, workdir)
        .await
        .map_err(|e| JobError::Build {
            source: BuildError::Fetch { source: e },
        })?;

    info!(phase = "authenticate", host = %request.registry_host, "build job started");
    registry
        .authenticate(&request.region, &request.registry_host)
        .await
        .map_err(|e| JobError::Auth { source: e })?;

    let source_version = source::resolve_version(workdir);
    let derived_tag = derive_tag(source_version.as_deref(), request.hash_length);
    let latest_image = format!("{repo}:{FALLBACK_TAG}", repo = request.image_repo);
    let derived_image = format!("{repo}:{derived_tag}", repo = request.image_repo);

    info!(phase = "build", tag = %derived_tag, "building image");
    docker
        .build(workdir, "Dockerfile", &latest_image)
        .await
        .map_err(|e| JobError::Build {
            source: BuildError::Tool { source: e },
        })?;
    docker
        .tag(&latest_image, &derived_image)
        .await
        .map_err(|e| JobError::Build {
            source: BuildError::Tool { source: e },
        })?;

    info!(phase = "publish", latest = %latest_image, derived = %derived_image, "pushing tags");
    registry
        .push(&latest_image)
        .await
        .map_err(|e| JobError::Publish { source: e })?;
    registry
        .push(&derived_image)
        .await
        .map_err(|e| JobError::Publish { source: e })?;

    let elapsed = started.elapsed();
    info!(elapsed_ms = elapsed.as_millis() as u64, tag = %derived_tag, "build job succeeded");

    Ok(BuildReport {
        source_version,
        derived_tag,
        latest_image,
        derived_image,
        elapsed,
    })
}

// ── Error types ──

/// Terminal failure kinds of a build job. None are retried internally;
/// re-running is the responsibility of whatever triggers the next job.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("registry authentication failed")]
    Auth { source: AuthError },

    #[error("image build failed")]
    Build { source: BuildError },

    #[error("image publish failed")]
    Publish { source: PushError },
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to allocate job working directory")]
    Workdir { source: std::io::Error },

    #[error("failed to fetch source from artifact store")]
    Fetch { source: StoreError },

    #[error("container build failed")]
    Tool { source: BuildToolError },
}
