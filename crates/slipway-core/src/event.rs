use serde::{Deserialize, Deserializer, Serialize};

/// Kind of artifact-store write, named after the store's own API call names.
///
/// `Other` absorbs kinds this version does not know about so a notification
/// stream carrying new kinds does not fail to parse; unknown kinds never
/// qualify for a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventKind {
    PutObject,
    CopyObject,
    CompleteMultipartUpload,
    Other,
}

// Manual impl because the derive's catch-all only exists for tagged enums.
impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(match name.as_str() {
            "PutObject" => Self::PutObject,
            "CopyObject" => Self::CopyObject,
            "CompleteMultipartUpload" => Self::CompleteMultipartUpload,
            _ => Self::Other,
        })
    }
}

/// A single artifact-store change notification.
///
/// Wire format (JSON, one object per line on the watch input):
/// `{ "eventKind": "PutObject", "targetKey": "microservice/app.mjs",
///    "sourceStoreId": "my-service-staging-source-bucket" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageEvent {
    pub event_kind: EventKind,
    pub target_key: String,
    pub source_store_id: String,
}
