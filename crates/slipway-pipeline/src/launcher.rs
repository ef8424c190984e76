use std::path::Path;

use async_trait::async_trait;
use slipway_cloud::{CliExecutor, DockerClient, RealExecutor, RegistryClient, StoreClient};
use tempfile::TempDir;

use crate::job::{self, BuildError, BuildReport, BuildRequest, JobError};

/// Seam between the event watcher and the build executor.
///
/// The watcher only knows "a build was requested"; it passes no payload.
#[async_trait]
pub trait BuildLauncher: Send + Sync {
    async fn launch(&self) -> Result<BuildReport, JobError>;
}

/// Production launcher running build jobs against the cloud clients.
pub struct CloudBuildLauncher<E: CliExecutor = RealExecutor> {
    registry: RegistryClient<E>,
    store: StoreClient<E>,
    docker: DockerClient<E>,
    request: BuildRequest,
}

impl CloudBuildLauncher<RealExecutor> {
    pub fn new(request: BuildRequest) -> Self {
        Self {
            registry: RegistryClient::new(),
            store: StoreClient::new(),
            docker: DockerClient::new(),
            request,
        }
    }
}

impl<E: CliExecutor> CloudBuildLauncher<E> {
    pub fn with_clients(
        registry: RegistryClient<E>,
        store: StoreClient<E>,
        docker: DockerClient<E>,
        request: BuildRequest,
    ) -> Self {
        Self {
            registry,
            store,
            docker,
            request,
        }
    }
}

#[async_trait]
impl<E: CliExecutor> BuildLauncher for CloudBuildLauncher<E> {
    async fn launch(&self) -> Result<BuildReport, JobError> {
        // Each job gets an exclusive working directory so concurrent jobs
        // never share a sync target or build context. Removed on drop once
        // the job finishes.
        let workdir = allocate_workdir(&self.request.work_root).map_err(|e| JobError::Build {
            source: BuildError::Workdir { source: e },
        })?;

        job::execute(
            &self.request,
            workdir.path(),
            &self.registry,
            &self.store,
            &self.docker,
        )
        .await
    }
}

fn allocate_workdir(root: &Path) -> std::io::Result<TempDir> {
    std::fs::create_dir_all(root)?;
    tempfile::Builder::new().prefix("job-").tempdir_in(root)
}
