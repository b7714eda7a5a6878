//! Broadcast publishing controller for livecast.
//!
//! This crate owns the poll schedule and the desired/observed state
//! reconciliation that drives a remote broadcast toward live, and tears
//! the broadcast down on finish or cancel.

mod controller;
mod preferences;
mod session;
mod surface;

pub use controller::PublishingController;
pub use preferences::{IngestionEndpoint, IngestionPreferences};
pub use session::{BroadcastSession, ObservedStatus};
pub use surface::{Notifier, StatusSink, ON_AIR_STATUS_TEXT};

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Sender;

use livecast_api::BroadcastApi;
use livecast_ipc::PublisherEvent;

/// Period between reconciliation passes.
pub const STATUS_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Create a publishing controller wired to its collaborators.
pub fn create_controller(
    api: Arc<dyn BroadcastApi>,
    sink: Arc<dyn StatusSink>,
    notifier: Arc<dyn Notifier>,
    preferences: Arc<IngestionPreferences>,
    event_tx: Sender<PublisherEvent>,
) -> PublishingController {
    PublishingController::new(api, sink, notifier, preferences, event_tx)
}
