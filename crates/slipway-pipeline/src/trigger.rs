use slipway_core::{EventKind, SlipwayConfig, StorageEvent};

/// Declarative filter deciding which artifact-store events start a build.
///
/// Configured once at setup and evaluated statelessly per event.
#[derive(Debug, Clone)]
pub struct BuildTrigger {
    kinds: Vec<EventKind>,
    prefix: String,
    store: String,
}

impl BuildTrigger {
    pub fn new(kinds: Vec<EventKind>, prefix: impl Into<String>, store: impl Into<String>) -> Self {
        Self {
            kinds,
            prefix: prefix.into(),
            store: store.into(),
        }
    }

    /// Trigger for the configured source bucket and watch prefix.
    pub fn from_config(config: &SlipwayConfig) -> slipway_core::Result<Self> {
        let names = config.names()?;
        Ok(Self::new(
            config.pipeline.events.clone(),
            config.pipeline.watch_prefix.clone(),
            names.source_bucket,
        ))
    }

    /// An event qualifies iff its kind is in the allow-set, it targets the
    /// watched store, and its key falls under the configured prefix. An
    /// empty prefix watches the whole store.
    pub fn matches(&self, event: &StorageEvent) -> bool {
        self.kinds.contains(&event.event_kind)
            && event.source_store_id == self.store
            && event.target_key.starts_with(&self.prefix)
    }
}
