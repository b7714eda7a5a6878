//! Platform resource models shared across messages.

use serde::{Deserialize, Serialize};

use crate::status::{HealthStatus, LifecycleStatus, StreamStatus};

/// A remote broadcast resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastResource {
    /// Identifier of the broadcast on the platform.
    pub id: String,

    /// Broadcast title.
    pub title: String,

    /// Scheduled start time, as reported by the platform.
    pub scheduled_start_time: Option<String>,

    /// Embeddable HTML for the broadcast's monitor stream.
    pub monitor_embed_html: Option<String>,

    /// Current lifecycle status.
    pub lifecycle_status: LifecycleStatus,
}

/// The ingestion stream bound to a broadcast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamResource {
    /// Identifier of the stream on the platform.
    pub id: String,

    /// Stream title.
    pub title: String,

    /// CDN ingestion endpoint for this stream.
    pub ingestion: IngestionInfo,

    /// Current transmission status.
    pub stream_status: StreamStatus,

    /// Current stream health.
    pub health_status: HealthStatus,
}

/// CDN ingestion endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionInfo {
    /// Ingestion address (e.g., "rtmp://a.rtmp.example.com/live2").
    pub address: String,

    /// Stream name/key appended to the address by the ingest client.
    pub stream_name: String,
}
