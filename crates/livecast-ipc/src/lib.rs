//! Typed host<->controller messages for livecast.
//!
//! This crate defines the message and status types shared between the
//! publishing controller and the host application that embeds it.

mod events;
mod state;
mod status;
mod types;

pub use events::PublisherEvent;
pub use state::{DesiredState, PublisherState};
pub use status::{HealthStatus, LifecycleStatus, StreamStatus, TransitionTarget};
pub use types::{BroadcastResource, IngestionInfo, StreamResource};

use crossbeam_channel::{Receiver, Sender};

/// Channel capacity for events (Controller → Host).
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Creates a bounded event channel.
pub fn event_channel() -> (Sender<PublisherEvent>, Receiver<PublisherEvent>) {
    crossbeam_channel::bounded(EVENT_CHANNEL_CAPACITY)
}
