//! Broadcast session state.

use livecast_ipc::{
    BroadcastResource, DesiredState, HealthStatus, LifecycleStatus, StreamResource, StreamStatus,
};

/// Statuses stored by the last successful poll. Display-only diagnostics;
/// transitions are decided on the freshly fetched values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObservedStatus {
    /// Last-fetched broadcast lifecycle status.
    pub lifecycle: Option<LifecycleStatus>,

    /// Last-fetched stream transmission status.
    pub stream: Option<StreamStatus>,

    /// Last-fetched stream health.
    pub health: Option<HealthStatus>,
}

/// State for one publishing session.
///
/// Created on `start`, destroyed on `finish`/`cancel`. The resource ids
/// never change for the session's lifetime; the rest is written only by the
/// reconciliation pass.
#[derive(Debug, Clone)]
pub struct BroadcastSession {
    broadcast_id: String,
    stream_id: String,
    desired: DesiredState,
    observed: ObservedStatus,
    is_live: bool,
}

impl BroadcastSession {
    /// Create a session publishing `broadcast` over `stream`.
    pub fn new(broadcast: &BroadcastResource, stream: &StreamResource) -> Self {
        Self {
            broadcast_id: broadcast.id.clone(),
            stream_id: stream.id.clone(),
            desired: DesiredState::Live,
            observed: ObservedStatus::default(),
            is_live: false,
        }
    }

    /// Identifier of the broadcast this session publishes.
    pub fn broadcast_id(&self) -> &str {
        &self.broadcast_id
    }

    /// Identifier of the ingestion stream bound to the broadcast.
    pub fn stream_id(&self) -> &str {
        &self.stream_id
    }

    /// The lifecycle status currently being driven toward.
    pub fn desired(&self) -> DesiredState {
        self.desired
    }

    /// Statuses from the last successful poll.
    pub fn observed(&self) -> ObservedStatus {
        self.observed
    }

    /// True once a live transition has been confirmed by the platform.
    pub fn is_live(&self) -> bool {
        self.is_live
    }

    /// Store the statuses fetched by a poll.
    pub(crate) fn record_observation(
        &mut self,
        lifecycle: LifecycleStatus,
        stream: StreamStatus,
        health: HealthStatus,
    ) {
        self.observed = ObservedStatus {
            lifecycle: Some(lifecycle),
            stream: Some(stream),
            health: Some(health),
        };
    }

    /// A new transition attempt starts on the primary path.
    pub(crate) fn begin_live_attempt(&mut self) {
        self.desired = DesiredState::Live;
    }

    /// The platform confirmed the live transition.
    pub(crate) fn mark_live(&mut self) {
        self.is_live = true;
    }

    /// The live transition was rejected; the attempt drops to testing.
    pub(crate) fn mark_fallback(&mut self) {
        self.is_live = false;
        self.desired = DesiredState::Testing;
    }

    /// Diagnostic line for the status sink, available once a poll has
    /// stored a full observation.
    pub fn status_line(&self) -> Option<String> {
        let lifecycle = self.observed.lifecycle?;
        let stream = self.observed.stream?;
        let health = self.observed.health?;
        Some(format!("status: {} [{};{}]", lifecycle, stream, health))
    }
}
