//! The broadcast API client trait.

use async_trait::async_trait;

use livecast_ipc::{BroadcastResource, StreamResource, TransitionTarget};

use crate::error::ApiResult;

/// Client for the platform's broadcast lifecycle API.
///
/// Every call is independently fallible. Lookup and transition calls return
/// `Ok(None)` when the platform answers but the resource is missing; `Err`
/// means the call itself failed.
#[async_trait]
pub trait BroadcastApi: Send + Sync {
    /// Fetch a broadcast by id.
    async fn get_broadcast(&self, broadcast_id: &str) -> ApiResult<Option<BroadcastResource>>;

    /// Fetch an ingestion stream by id.
    async fn get_stream(&self, stream_id: &str) -> ApiResult<Option<StreamResource>>;

    /// Transition a broadcast to the given lifecycle status. Returns the
    /// updated broadcast when the platform accepts the transition.
    async fn transition_broadcast(
        &self,
        broadcast_id: &str,
        target: TransitionTarget,
    ) -> ApiResult<Option<BroadcastResource>>;

    /// Delete a broadcast resource.
    async fn delete_broadcast(&self, broadcast_id: &str) -> ApiResult<()>;
}
