//! The build-and-publish trigger pipeline.
//!
//! # Flow
//!
//! ```text
//! operator upload ── StoreClient::sync_up
//!   store event   ── StorageEvent (JSON notification)
//!   trigger       ── BuildTrigger::matches (kind + store + key prefix)
//!   dispatch      ── EventWatcher: one fire-and-forget job per match
//!   build job     ── authenticate → build → publish
//! ```
//!
//! # Concurrency
//!
//! Jobs are never serialized against each other: near-simultaneous
//! qualifying events run concurrent jobs, and the floating `latest` tag ends
//! up reflecting whichever job publishes last. Within one job the phases run
//! strictly in order and a failure in any phase aborts the job with no retry
//! and no rollback of tags already pushed.

pub mod job;
pub mod launcher;
pub mod source;
pub mod trigger;
pub mod watcher;

pub use job::{BuildError, BuildReport, BuildRequest, JobError};
pub use launcher::{BuildLauncher, CloudBuildLauncher};
pub use trigger::BuildTrigger;
pub use watcher::EventWatcher;
