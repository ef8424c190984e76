use crate::args;
use crate::command::CommandError;
use crate::executor::{CliExecutor, RealExecutor};

/// Image registry operations, parameterized over the executor for
/// testability.
///
/// Authentication follows the registry's token exchange: a short-lived login
/// token fetched with the account credentials is piped straight into
/// `docker login --password-stdin` without touching disk.
pub struct RegistryClient<E: CliExecutor = RealExecutor> {
    executor: E,
}

impl RegistryClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for RegistryClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry endpoint host for an account + region pair.
pub fn registry_host(account_id: &str, region: &str) -> String {
    format!("{account_id}.dkr.ecr.{region}.amazonaws.com")
}

impl<E: CliExecutor> RegistryClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Account id of the active credentials.
    pub async fn resolve_account(&self) -> Result<String, RegistryError> {
        let output = self
            .executor
            .exec(
                "aws",
                &args([
                    "sts",
                    "get-caller-identity",
                    "--query",
                    "Account",
                    "--output",
                    "text",
                ]),
            )
            .await
            .map_err(|e| RegistryError::Account { source: e })?;

        Ok(output.trim().to_owned())
    }

    /// Log the local build tool in to the registry endpoint.
    pub async fn authenticate(&self, region: &str, host: &str) -> Result<(), AuthError> {
        let token = self
            .executor
            .exec(
                "aws",
                &args(["ecr", "get-login-password", "--region", region]),
            )
            .await
            .map_err(|e| AuthError::Token { source: e })?;

        self.executor
            .exec_with_stdin(
                "docker",
                &args(["login", "--username", "AWS", "--password-stdin", host]),
                token.trim().as_bytes(),
            )
            .await
            .map_err(|e| AuthError::Login {
                host: host.to_owned(),
                source: e,
            })?;

        Ok(())
    }

    /// Ensure the image repository exists, creating it if needed.
    pub async fn ensure_repository(&self, name: &str, region: &str) -> Result<(), RegistryError> {
        let exists = self
            .executor
            .exec(
                "aws",
                &args([
                    "ecr",
                    "describe-repositories",
                    "--repository-names",
                    name,
                    "--region",
                    region,
                ]),
            )
            .await
            .is_ok();

        if !exists {
            self.executor
                .exec(
                    "aws",
                    &args([
                        "ecr",
                        "create-repository",
                        "--repository-name",
                        name,
                        "--region",
                        region,
                    ]),
                )
                .await
                .map_err(|e| RegistryError::Ensure {
                    name: name.to_owned(),
                    source: e,
                })?;
        }

        Ok(())
    }

    /// Push a fully-qualified image reference (`host/repo:tag`).
    pub async fn push(&self, image: &str) -> Result<(), PushError> {
        self.executor
            .exec_streaming("docker", &args(["push", image]))
            .await
            .map_err(|e| PushError::Push {
                image: image.to_owned(),
                source: e,
            })
    }
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("failed to obtain registry login token")]
    Token { source: CommandError },

    #[error("docker login to {host} failed")]
    Login { host: String, source: CommandError },
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to resolve account id from active credentials")]
    Account { source: CommandError },

    #[error("failed to ensure image repository '{name}'")]
    Ensure { name: String, source: CommandError },
}

#[derive(Debug, thiserror::Error)]
pub enum PushError {
    #[error("failed to push image {image}")]
    Push { image: String, source: CommandError },
}
