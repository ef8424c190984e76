use crate::args;
use crate::command::CommandError;
use crate::executor::{CliExecutor, RealExecutor};

/// Deployment target operations (the managed compute service running the
/// published image).
///
/// The service references a fixed tag chosen at configuration time; pushing
/// a new image never rolls the deployment. [`ServiceClient::redeploy`] is the
/// explicit separate action that does.
pub struct ServiceClient<E: CliExecutor = RealExecutor> {
    executor: E,
}

impl ServiceClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for ServiceClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CliExecutor> ServiceClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Force a fresh deployment so the service re-pulls its configured tag.
    pub async fn redeploy(
        &self,
        cluster: &str,
        service: &str,
        region: &str,
    ) -> Result<(), ServiceError> {
        self.executor
            .exec(
                "aws",
                &args([
                    "ecs",
                    "update-service",
                    "--cluster",
                    cluster,
                    "--service",
                    service,
                    "--region",
                    region,
                    "--force-new-deployment",
                ]),
            )
            .await
            .map_err(|e| ServiceError::Redeploy {
                service: service.to_owned(),
                source: e,
            })?;

        Ok(())
    }

    /// Current deployment state of the service.
    pub async fn describe(
        &self,
        cluster: &str,
        service: &str,
        region: &str,
    ) -> Result<String, ServiceError> {
        self.executor
            .exec(
                "aws",
                &args([
                    "ecs",
                    "describe-services",
                    "--cluster",
                    cluster,
                    "--services",
                    service,
                    "--region",
                    region,
                    "--query",
                    "services[0].{status:status,running:runningCount,desired:desiredCount,taskDefinition:taskDefinition}",
                    "--output",
                    "table",
                ]),
            )
            .await
            .map_err(|e| ServiceError::Describe {
                service: service.to_owned(),
                source: e,
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("failed to redeploy service '{service}'")]
    Redeploy {
        service: String,
        source: CommandError,
    },

    #[error("failed to describe service '{service}'")]
    Describe {
        service: String,
        source: CommandError,
    },
}
