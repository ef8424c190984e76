use serde::{Deserialize, Serialize};

use crate::event::EventKind;

/// slipway.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlipwayConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub deploy: DeployConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Repository/service name; every provisioned resource name derives from it
    pub repository: Option<String>,
    /// Deployment stage label (suffixed onto every resource name)
    #[serde(default = "default_stage")]
    pub stage: String,
    /// Cloud region
    #[serde(default = "default_region")]
    pub region: String,
    /// Account id owning the image registry. Resolved from the active
    /// credentials when not set.
    pub account_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Default image tag, combined with the stage for the deployment tag
    #[serde(default = "default_tag")]
    pub default_tag: String,
    /// Push an initial image during `slipway setup` instead of waiting for
    /// the trigger path
    #[serde(default = "default_push_on_setup")]
    pub push_on_setup: bool,
    /// Local directory holding the service source to upload
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    /// Key prefix under which uploads trigger builds ("" = watch everything)
    #[serde(default = "default_watch_prefix")]
    pub watch_prefix: String,
    /// Event kinds that qualify for a build
    #[serde(default = "default_events")]
    pub events: Vec<EventKind>,
    /// Truncation length for the derived version tag
    #[serde(default = "default_hash_length")]
    pub hash_length: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Fixed tag the running service references. Defaults to
    /// `{default_tag}-{stage}`; publishing a new image never changes it.
    pub tag: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            repository: None,
            stage: default_stage(),
            region: default_region(),
            account_id: None,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_tag: default_tag(),
            push_on_setup: default_push_on_setup(),
            source_dir: default_source_dir(),
            watch_prefix: default_watch_prefix(),
            events: default_events(),
            hash_length: default_hash_length(),
        }
    }
}

impl SlipwayConfig {
    /// Load from slipway.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join("slipway.toml");
        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            let mut config: Self =
                toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                    path: config_path,
                    source: e,
                })?;
            // A zero truncation length would derive an empty tag
            config.pipeline.hash_length = config.pipeline.hash_length.max(1);
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Names of the provisioned resources, all derived from repository + stage.
    pub fn names(&self) -> crate::Result<ResourceNames> {
        let repository = self
            .project
            .repository
            .as_deref()
            .ok_or(crate::Error::RepositoryNotSet)?;
        Ok(ResourceNames::new(repository, &self.project.stage))
    }

    /// The fixed tag the deployment target pulls.
    pub fn deployment_tag(&self) -> String {
        self.deploy.tag.clone().unwrap_or_else(|| {
            format!(
                "{tag}-{stage}",
                tag = self.pipeline.default_tag,
                stage = self.project.stage
            )
        })
    }
}

/// Provisioned resource names, all following the `{repository}-{stage}`
/// convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    pub image_repository: String,
    pub source_bucket: String,
    pub cluster: String,
    pub service: String,
}

impl ResourceNames {
    pub fn new(repository: &str, stage: &str) -> Self {
        let base = format!("{repository}-{stage}");
        Self {
            image_repository: base.clone(),
            source_bucket: format!("{base}-source-bucket"),
            cluster: format!("{base}-cluster"),
            service: format!("{base}-service"),
        }
    }
}

fn default_stage() -> String {
    "staging".to_owned()
}

fn default_region() -> String {
    "us-east-1".to_owned()
}

fn default_tag() -> String {
    "0.0.1".to_owned()
}

fn default_push_on_setup() -> bool {
    true
}

fn default_source_dir() -> String {
    "microservice".to_owned()
}

fn default_watch_prefix() -> String {
    "microservice/".to_owned()
}

fn default_events() -> Vec<EventKind> {
    vec![
        EventKind::PutObject,
        EventKind::CopyObject,
        EventKind::CompleteMultipartUpload,
    ]
}

fn default_hash_length() -> usize {
    7
}
