use std::path::Path;

/// Write a starter slipway.toml into the current directory.
pub fn init() -> anyhow::Result<()> {
    let config_path = Path::new("slipway.toml");
    if config_path.exists() {
        anyhow::bail!("slipway.toml already exists");
    }

    let starter = r#"[project]
repository = "ec2-service"
# stage = "staging"
# region = "us-east-1"
# account_id = "123456789012"

[pipeline]
# default_tag = "0.0.1"
# push_on_setup = true
# source_dir = "microservice"
# watch_prefix = "microservice/"
# hash_length = 7

[deploy]
# tag = "0.0.1-staging"
"#;
    std::fs::write(config_path, starter)?;
    println!("Created slipway.toml");

    println!();
    println!("Next steps:");
    println!();
    println!("  1. Set [project].repository to your service name");
    println!();
    println!("  2. Provision the source bucket and image repository:");
    println!("     slipway setup");
    println!();
    println!("  3. Push source changes and build:");
    println!("     slipway upload && slipway build");

    Ok(())
}
