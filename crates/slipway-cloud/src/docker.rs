use std::path::Path;

use crate::args;
use crate::command::CommandError;
use crate::executor::{CliExecutor, RealExecutor};

/// Container build tool operations.
///
/// Requires an execution environment allowed to run nested container builds
/// (a privileged builder in hosted setups, the local daemon otherwise).
pub struct DockerClient<E: CliExecutor = RealExecutor> {
    executor: E,
}

impl DockerClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for DockerClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CliExecutor> DockerClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Build an image from a source directory, producing `tag` locally.
    ///
    /// `dockerfile` is resolved relative to the context, not the current
    /// directory.
    pub async fn build(
        &self,
        context: &Path,
        dockerfile: &str,
        tag: &str,
    ) -> Result<(), BuildToolError> {
        let dockerfile = context.join(dockerfile);
        let dockerfile = dockerfile
            .to_str()
            .ok_or_else(|| BuildToolError::InvalidPath(dockerfile.clone()))?;
        let context = context
            .to_str()
            .ok_or_else(|| BuildToolError::InvalidPath(context.to_path_buf()))?;

        self.executor
            .exec_streaming(
                "docker",
                &args(["build", "-t", tag, "-f", dockerfile, context]),
            )
            .await
            .map_err(|e| BuildToolError::Build {
                tag: tag.to_owned(),
                source: e,
            })
    }

    /// Apply an additional tag to a locally built image.
    pub async fn tag(&self, source: &str, target: &str) -> Result<(), BuildToolError> {
        self.executor
            .exec("docker", &args(["tag", source, target]))
            .await
            .map_err(|e| BuildToolError::Tag {
                target: target.to_owned(),
                source: e,
            })?;

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BuildToolError {
    #[error("build context path is not valid UTF-8: {0}")]
    InvalidPath(std::path::PathBuf),

    #[error("container build for {tag} failed")]
    Build { tag: String, source: CommandError },

    #[error("failed to tag image as {target}")]
    Tag {
        target: String,
        source: CommandError,
    },
}
