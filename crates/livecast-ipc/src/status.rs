//! Closed status vocabularies for the streaming platform.
//!
//! The platform reports these as free-form strings on the wire; keeping
//! them as enums makes the reconciliation decisions exhaustive.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a broadcast resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifecycleStatus {
    /// The broadcast was never started.
    Abandoned,

    /// The broadcast is finished.
    Complete,

    /// Created but with incomplete settings; not ready to transition.
    Created,

    /// The broadcast is active and visible to its audience.
    Live,

    /// The broadcast is transitioning to live status.
    LiveStarting,

    /// Settings are complete; the broadcast can transition to live or testing.
    Ready,

    /// The broadcast has been reclaimed.
    Reclaimed,

    /// The broadcast was removed by an admin action.
    Revoked,

    /// The broadcast is transitioning to testing status.
    TestStarting,

    /// The broadcast is only visible to the partner.
    Testing,
}

impl LifecycleStatus {
    /// Returns true once the platform is transmitting to the audience
    /// (either already live or in the process of going live).
    pub fn is_on_air(self) -> bool {
        matches!(self, Self::Live | Self::LiveStarting)
    }

    /// Wire string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Abandoned => "abandoned",
            Self::Complete => "complete",
            Self::Created => "created",
            Self::Live => "live",
            Self::LiveStarting => "liveStarting",
            Self::Ready => "ready",
            Self::Reclaimed => "reclaimed",
            Self::Revoked => "revoked",
            Self::TestStarting => "testStarting",
            Self::Testing => "testing",
        }
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transmission status of an ingestion stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StreamStatus {
    /// The user is sending data on the stream.
    Active,

    /// Created but without valid CDN settings.
    Created,

    /// An error condition exists on the stream.
    Error,

    /// The user is not sending data on the stream.
    Inactive,

    /// The stream has valid CDN settings.
    Ready,
}

impl StreamStatus {
    /// Wire string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Created => "created",
            Self::Error => "error",
            Self::Inactive => "inactive",
            Self::Ready => "ready",
        }
    }
}

impl fmt::Display for StreamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Health of an ingestion stream as diagnosed by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HealthStatus {
    /// No configuration issues of warning severity or worse.
    Good,

    /// No configuration issues of error severity.
    Ok,

    /// The stream has issues of error severity.
    Bad,

    /// The platform has no information about the stream yet.
    NoData,
}

impl HealthStatus {
    /// Wire string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Ok => "ok",
            Self::Bad => "bad",
            Self::NoData => "noData",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle statuses a broadcast may be transitioned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitionTarget {
    /// Make the broadcast visible to its audience.
    Live,

    /// Transmit to the monitor stream only.
    Testing,

    /// End the broadcast; the platform stops transmitting.
    Complete,
}

impl TransitionTarget {
    /// Wire string for this target.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Testing => "testing",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for TransitionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
