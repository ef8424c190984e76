use std::sync::Arc;

use slipway_core::StorageEvent;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::launcher::BuildLauncher;
use crate::trigger::BuildTrigger;

/// Matches artifact-store notifications against the trigger and dispatches
/// build jobs.
///
/// Dispatch is fire-and-forget: the watcher never awaits a job, records its
/// outcome, or serializes jobs against each other. Lost or duplicated
/// notifications are tolerated; builds are idempotent, so a missed event
/// costs freshness and a duplicate costs compute, nothing else.
pub struct EventWatcher<L: BuildLauncher + 'static> {
    trigger: BuildTrigger,
    launcher: Arc<L>,
}

impl<L: BuildLauncher + 'static> EventWatcher<L> {
    pub fn new(trigger: BuildTrigger, launcher: Arc<L>) -> Self {
        Self { trigger, launcher }
    }

    /// Consume the notification stream until it closes, launching exactly
    /// one job per qualifying event.
    pub async fn run(&self, mut events: mpsc::Receiver<StorageEvent>) {
        while let Some(event) = events.recv().await {
            if !self.trigger.matches(&event) {
                debug!(
                    key = %event.target_key,
                    kind = ?event.event_kind,
                    "ignoring non-qualifying event"
                );
                continue;
            }

            info!(key = %event.target_key, "qualifying event, launching build job");
            let launcher = Arc::clone(&self.launcher);
            tokio::spawn(async move {
                match launcher.launch().await {
                    Ok(report) => {
                        info!(tag = %report.derived_tag, "build job finished");
                    }
                    Err(e) => error!(error = %e, "build job failed"),
                }
            });
        }
    }
}
