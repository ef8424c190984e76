use std::path::PathBuf;
use std::sync::Arc;

use slipway_core::{SlipwayConfig, StorageEvent};
use slipway_pipeline::{BuildTrigger, CloudBuildLauncher, EventWatcher};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::warn;

/// Run the event watcher over newline-delimited JSON notifications on stdin.
///
/// Malformed lines are logged and skipped; the watcher exits when stdin
/// closes.
pub async fn watch() -> anyhow::Result<()> {
    let config = SlipwayConfig::load(&PathBuf::from("."))?;
    let trigger = BuildTrigger::from_config(&config)?;
    let request = super::build_request(&config).await?;

    let launcher = Arc::new(CloudBuildLauncher::new(request));
    let watcher = EventWatcher::new(trigger, launcher);

    let (tx, rx) = mpsc::channel(64);
    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<StorageEvent>(&line) {
                Ok(event) => {
                    if tx.send(event).await.is_err() {
                        break;
                    }
                }
                Err(e) => warn!(error = %e, "skipping malformed notification"),
            }
        }
    });

    println!("Watching for store notifications on stdin...");
    watcher.run(rx).await;
    reader.await?;

    Ok(())
}
