//! Events sent from the controller to the host.

use serde::{Deserialize, Serialize};

use crate::state::PublisherState;

/// Events that the publishing controller can send to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PublisherEvent {
    /// Controller state has changed.
    StateChanged {
        /// Previous state.
        previous: Box<PublisherState>,

        /// Current state.
        current: Box<PublisherState>,
    },

    /// The live view should be torn down. Emitted exactly once per
    /// finish or cancel, on every branch.
    ViewDismissed,
}
