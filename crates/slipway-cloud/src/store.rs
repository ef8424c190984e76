use std::path::Path;

use crate::args;
use crate::command::CommandError;
use crate::executor::{CliExecutor, RealExecutor};

/// Artifact store operations (source bundle storage).
///
/// Builds always read the *current* store contents under the watched prefix,
/// never an individual triggering object.
pub struct StoreClient<E: CliExecutor = RealExecutor> {
    executor: E,
}

impl StoreClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for StoreClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CliExecutor> StoreClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Ensure the source bucket exists, creating it if needed.
    pub async fn ensure_bucket(&self, bucket: &str, region: &str) -> Result<(), StoreError> {
        let exists = self
            .executor
            .exec("aws", &args(["s3api", "head-bucket", "--bucket", bucket]))
            .await
            .is_ok();

        if !exists {
            self.executor
                .exec(
                    "aws",
                    &args([
                        "s3api",
                        "create-bucket",
                        "--bucket",
                        bucket,
                        "--region",
                        region,
                    ]),
                )
                .await
                .map_err(|e| StoreError::EnsureBucket {
                    bucket: bucket.to_owned(),
                    source: e,
                })?;
        }

        Ok(())
    }

    /// Upload a local source directory under the given prefix.
    pub async fn sync_up(
        &self,
        source_dir: &Path,
        bucket: &str,
        prefix: &str,
    ) -> Result<(), StoreError> {
        let source = source_dir
            .to_str()
            .ok_or_else(|| StoreError::InvalidPath(source_dir.to_path_buf()))?;
        let dest = store_uri(bucket, prefix);

        self.executor
            .exec_streaming("aws", &args(["s3", "sync", source, &dest]))
            .await
            .map_err(|e| StoreError::Sync {
                from: source.to_owned(),
                to: dest,
                source: e,
            })
    }

    /// Fetch the current store contents under a prefix into a local directory.
    pub async fn sync_down(
        &self,
        bucket: &str,
        prefix: &str,
        dest_dir: &Path,
    ) -> Result<(), StoreError> {
        let dest = dest_dir
            .to_str()
            .ok_or_else(|| StoreError::InvalidPath(dest_dir.to_path_buf()))?;
        let source = store_uri(bucket, prefix);

        self.executor
            .exec_streaming("aws", &args(["s3", "sync", &source, dest]))
            .await
            .map_err(|e| StoreError::Sync {
                from: source,
                to: dest.to_owned(),
                source: e,
            })
    }
}

fn store_uri(bucket: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        format!("s3://{bucket}")
    } else {
        format!("s3://{bucket}/{}", prefix.trim_end_matches('/'))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to ensure source bucket '{bucket}'")]
    EnsureBucket {
        bucket: String,
        source: CommandError,
    },

    #[error("store sync from {from} to {to} failed")]
    Sync {
        from: String,
        to: String,
        source: CommandError,
    },

    #[error("path is not valid UTF-8: {0}")]
    InvalidPath(std::path::PathBuf),
}
