//! External collaborators for slipway: artifact store, image registry,
//! container build tool, and deployment target.
//!
//! Every client wraps a vendor CLI behind [`CliExecutor`] so the pipeline
//! can be exercised against mocks without credentials or a daemon.

pub mod command;
pub mod docker;
pub mod executor;
pub mod registry;
pub mod service;
pub mod store;

pub use command::CommandError;
pub use docker::{BuildToolError, DockerClient};
pub use executor::{CliExecutor, RealExecutor};
pub use registry::{AuthError, PushError, RegistryClient, RegistryError, registry_host};
pub use service::{ServiceClient, ServiceError};
pub use store::{StoreClient, StoreError};

pub(crate) fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}
