use slipway_core::{EventKind, ResourceNames, SlipwayConfig};
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_no_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = SlipwayConfig::load(tmp.path()).unwrap();

    assert!(config.project.repository.is_none());
    assert_eq!(config.project.stage, "staging");
    assert_eq!(config.project.region, "us-east-1");
    assert!(config.project.account_id.is_none());
    assert_eq!(config.pipeline.default_tag, "0.0.1");
    assert!(config.pipeline.push_on_setup);
    assert_eq!(config.pipeline.source_dir, "microservice");
    assert_eq!(config.pipeline.watch_prefix, "microservice/");
    assert_eq!(
        config.pipeline.events,
        vec![
            EventKind::PutObject,
            EventKind::CopyObject,
            EventKind::CompleteMultipartUpload,
        ]
    );
    assert_eq!(config.pipeline.hash_length, 7);
    assert!(config.deploy.tag.is_none());
}

#[test]
fn load_parses_full_config() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[project]
repository = "ec2-service"
stage = "production"
region = "eu-west-1"
account_id = "123456789012"

[pipeline]
default_tag = "1.2.0"
push_on_setup = false
source_dir = "svc"
watch_prefix = "svc/"
events = ["PutObject"]
hash_length = 12

[deploy]
tag = "pinned"
"#;
    std::fs::write(tmp.path().join("slipway.toml"), toml).unwrap();

    let config = SlipwayConfig::load(tmp.path()).unwrap();

    assert_eq!(config.project.repository.as_deref(), Some("ec2-service"));
    assert_eq!(config.project.stage, "production");
    assert_eq!(config.project.region, "eu-west-1");
    assert_eq!(config.project.account_id.as_deref(), Some("123456789012"));
    assert_eq!(config.pipeline.default_tag, "1.2.0");
    assert!(!config.pipeline.push_on_setup);
    assert_eq!(config.pipeline.source_dir, "svc");
    assert_eq!(config.pipeline.watch_prefix, "svc/");
    assert_eq!(config.pipeline.events, vec![EventKind::PutObject]);
    assert_eq!(config.pipeline.hash_length, 12);
    assert_eq!(config.deploy.tag.as_deref(), Some("pinned"));
}

#[test]
fn load_partial_config_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[project]
repository = "partial"
"#;
    std::fs::write(tmp.path().join("slipway.toml"), toml).unwrap();

    let config = SlipwayConfig::load(tmp.path()).unwrap();

    assert_eq!(config.project.repository.as_deref(), Some("partial"));
    // Defaults preserved
    assert_eq!(config.project.stage, "staging");
    assert_eq!(config.pipeline.watch_prefix, "microservice/");
    assert_eq!(config.pipeline.hash_length, 7);
}

#[test]
fn load_clamps_zero_hash_length() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("slipway.toml"),
        "[pipeline]\nhash_length = 0",
    )
    .unwrap();

    let config = SlipwayConfig::load(tmp.path()).unwrap();

    // An empty derived tag would make the image reference invalid
    assert_eq!(config.pipeline.hash_length, 1);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("slipway.toml"), "not valid {{{{ toml").unwrap();

    let result = SlipwayConfig::load(tmp.path());
    assert!(result.is_err());

    let err = result.unwrap_err().to_string();
    assert!(err.contains("parse"));
}

#[test]
fn load_empty_config_returns_defaults() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("slipway.toml"), "").unwrap();

    let config = SlipwayConfig::load(tmp.path()).unwrap();
    assert_eq!(config.project.region, "us-east-1");
}

// ── Resource Names ──

#[test]
fn names_follow_repository_stage_convention() {
    let names = ResourceNames::new("ec2-service", "staging");

    assert_eq!(names.image_repository, "ec2-service-staging");
    assert_eq!(names.source_bucket, "ec2-service-staging-source-bucket");
    assert_eq!(names.cluster, "ec2-service-staging-cluster");
    assert_eq!(names.service, "ec2-service-staging-service");
}

#[test]
fn names_require_repository() {
    let config = SlipwayConfig::default();
    let err = config.names().unwrap_err().to_string();

    assert!(err.contains("repository"));
}

#[test]
fn names_from_config() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("slipway.toml"),
        "[project]\nrepository = \"my-api\"\nstage = \"dev\"",
    )
    .unwrap();

    let config = SlipwayConfig::load(tmp.path()).unwrap();
    let names = config.names().unwrap();

    assert_eq!(names.source_bucket, "my-api-dev-source-bucket");
}

// ── Deployment Tag ──

#[test]
fn deployment_tag_combines_default_tag_and_stage() {
    let config = SlipwayConfig::default();
    assert_eq!(config.deployment_tag(), "0.0.1-staging");
}

#[test]
fn deployment_tag_respects_explicit_override() {
    let mut config = SlipwayConfig::default();
    config.deploy.tag = Some("pinned".to_owned());
    assert_eq!(config.deployment_tag(), "pinned");
}
