//! Core types and configuration for slipway.
//!
//! This crate defines the `slipway.toml` schema ([`SlipwayConfig`]), the
//! resource-naming convention ([`ResourceNames`]), the artifact-store
//! notification schema ([`StorageEvent`]), and image-tag derivation.

pub mod config;
pub mod error;
pub mod event;
pub mod tag;

pub use config::{DeployConfig, PipelineConfig, ProjectConfig, ResourceNames, SlipwayConfig};
pub use error::{Error, Result};
pub use event::{EventKind, StorageEvent};
pub use tag::{FALLBACK_TAG, derive_tag};
