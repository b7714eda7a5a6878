//! The broadcast publishing controller.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Sender;
use parking_lot::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, instrument, warn};

use livecast_api::BroadcastApi;
use livecast_ipc::{
    BroadcastResource, PublisherEvent, PublisherState, StreamResource, TransitionTarget,
};

use crate::preferences::IngestionPreferences;
use crate::session::BroadcastSession;
use crate::surface::{Notifier, StatusSink, ON_AIR_STATUS_TEXT};
use crate::STATUS_POLL_INTERVAL;

/// Coordinates the lifecycle of a remote broadcast.
///
/// One controller owns at most one [`BroadcastSession`] at a time. `start`
/// arms a poll task that reconciles the observed platform state against the
/// desired one every poll period; `finish` and `cancel` disarm it and issue
/// the terminal platform call. The controller must live inside a tokio
/// runtime (`start` spawns the poll task).
pub struct PublishingController {
    core: Arc<ControllerCore>,
    poll_task: Mutex<Option<JoinHandle<()>>>,
    poll_interval: Duration,
}

/// State shared between the controller surface and the poll task.
struct ControllerCore {
    api: Arc<dyn BroadcastApi>,
    sink: Arc<dyn StatusSink>,
    notifier: Arc<dyn Notifier>,
    preferences: Arc<IngestionPreferences>,
    event_tx: Sender<PublisherEvent>,
    session: RwLock<Option<BroadcastSession>>,
    state: RwLock<PublisherState>,
}

impl PublishingController {
    /// Create a controller wired to its collaborators.
    pub fn new(
        api: Arc<dyn BroadcastApi>,
        sink: Arc<dyn StatusSink>,
        notifier: Arc<dyn Notifier>,
        preferences: Arc<IngestionPreferences>,
        event_tx: Sender<PublisherEvent>,
    ) -> Self {
        Self {
            core: Arc::new(ControllerCore {
                api,
                sink,
                notifier,
                preferences,
                event_tx,
                session: RwLock::new(None),
                state: RwLock::new(PublisherState::Idle),
            }),
            poll_task: Mutex::new(None),
            poll_interval: STATUS_POLL_INTERVAL,
        }
    }

    /// Override the poll period.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Current controller state.
    pub fn state(&self) -> PublisherState {
        self.core.state.read().clone()
    }

    /// Snapshot of the active session, if any.
    pub fn session(&self) -> Option<BroadcastSession> {
        self.core.session.read().clone()
    }

    /// Start publishing `broadcast` over `stream`.
    ///
    /// Creates a fresh session, arms the status poll timer and performs an
    /// immediate reconciliation pass. Starting the schedule itself cannot
    /// fail; poll failures surface through later passes.
    #[instrument(name = "start_publishing", skip(self, broadcast, stream))]
    pub fn start(&self, broadcast: &BroadcastResource, stream: &StreamResource) -> bool {
        info!(
            broadcast_id = %broadcast.id,
            stream_id = %stream.id,
            "Starting broadcast publishing"
        );

        // The ingest transport picks the endpoint up from the shared store.
        if let Err(e) = self
            .core
            .preferences
            .store(&stream.ingestion.address, &stream.ingestion.stream_name)
        {
            warn!(address = %stream.ingestion.address, "Ignoring unusable ingestion address: {}", e);
        }

        *self.core.session.write() = Some(BroadcastSession::new(broadcast, stream));
        self.core.transition_to(PublisherState::Publishing {
            broadcast_id: broadcast.id.clone(),
        });

        self.arm_poll_timer();
        true
    }

    /// Finish publishing: stop polling, complete the broadcast, dismiss the
    /// live view.
    ///
    /// Returns `false` only when no broadcast was supplied; the outcome of
    /// the complete transition itself is logged and otherwise ignored.
    #[instrument(name = "finish_publishing", skip(self, broadcast))]
    pub async fn finish(&self, broadcast: Option<&BroadcastResource>) -> bool {
        self.disarm_poll_timer();

        let Some(broadcast) = broadcast else {
            self.core.dismiss();
            return false;
        };

        // The broadcast is over; the platform stops transmitting.
        match self
            .core
            .api
            .transition_broadcast(&broadcast.id, TransitionTarget::Complete)
            .await
        {
            Ok(Some(_)) => info!(broadcast_id = %broadcast.id, "Broadcast completed"),
            Ok(None) => debug!(broadcast_id = %broadcast.id, "Complete transition returned no broadcast"),
            Err(e) => warn!(broadcast_id = %broadcast.id, "Complete transition failed: {}", e),
        }

        self.core.dismiss();
        true
    }

    /// Cancel publishing: stop polling, delete the broadcast, dismiss the
    /// live view.
    ///
    /// The session's own record decides which broadcast to delete; a failed
    /// delete is the one error surfaced to the user.
    #[instrument(name = "cancel_publishing", skip(self, broadcast))]
    pub async fn cancel(&self, broadcast: Option<&BroadcastResource>) {
        self.disarm_poll_timer();

        if broadcast.is_some() {
            let session_id = self
                .core
                .session
                .read()
                .as_ref()
                .map(|s| s.broadcast_id().to_string());

            if let Some(broadcast_id) = session_id {
                match self.core.api.delete_broadcast(&broadcast_id).await {
                    Ok(()) => info!(%broadcast_id, "Broadcast deleted"),
                    Err(e) => {
                        warn!(%broadcast_id, "Broadcast delete failed: {}", e);
                        self.core.notifier.warn(
                            "Sorry, system error while delete video",
                            "You can try to do it in your YouTube account",
                        );
                    }
                }
            }
        }

        self.core.dismiss();
    }

    /// Arm the poll timer, replacing any previous one. The first tick fires
    /// immediately, so the initial pass does not wait for the poll period.
    fn arm_poll_timer(&self) {
        let mut task = self.poll_task.lock();
        if let Some(handle) = task.take() {
            handle.abort();
        }

        let core = Arc::clone(&self.core);
        let interval = self.poll_interval;
        *task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // A tick that fires while a pass is still in flight is skipped
            // rather than queued, so passes never overlap.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                core.reconcile_pass().await;
            }
        }));
    }

    /// Disarm the poll timer. Safe to call when never armed.
    fn disarm_poll_timer(&self) {
        if let Some(handle) = self.poll_task.lock().take() {
            handle.abort();
            debug!("Poll timer disarmed");
        }
    }
}

impl Drop for PublishingController {
    fn drop(&mut self) {
        self.disarm_poll_timer();
    }
}

impl ControllerCore {
    /// One reconciliation pass: fetch broadcast and stream state, then
    /// drive the broadcast toward live if it is not there yet.
    async fn reconcile_pass(&self) {
        let Some((broadcast_id, stream_id)) = self.session_ids() else {
            return;
        };

        // Fetch failures are transient: drop this pass, the next tick retries.
        let broadcast = match self.api.get_broadcast(&broadcast_id).await {
            Ok(Some(broadcast)) => broadcast,
            Ok(None) => {
                debug!(%broadcast_id, "Broadcast not found, retrying next tick");
                return;
            }
            Err(e) => {
                debug!(%broadcast_id, "Broadcast fetch failed: {}", e);
                return;
            }
        };

        // Stream status only means anything next to a known broadcast
        // status, so it is fetched second.
        let stream = match self.api.get_stream(&stream_id).await {
            Ok(Some(stream)) => stream,
            Ok(None) => {
                debug!(%stream_id, "Stream not found, retrying next tick");
                return;
            }
            Err(e) => {
                debug!(%stream_id, "Stream fetch failed: {}", e);
                return;
            }
        };

        let lifecycle = broadcast.lifecycle_status;
        let status_line = {
            let mut guard = self.session.write();
            // The session may have been torn down while a fetch was in flight.
            let Some(session) = guard.as_mut() else {
                return;
            };
            session.record_observation(lifecycle, stream.stream_status, stream.health_status);
            session.status_line()
        };

        if lifecycle.is_on_air() {
            self.sink.show_status(ON_AIR_STATUS_TEXT);
            if !self.state.read().is_on_air() {
                self.transition_to(PublisherState::OnAir {
                    broadcast_id: broadcast_id.clone(),
                });
            }
            return;
        }

        if let Some(line) = status_line {
            self.sink.show_status(&line);
        }
        if self.state.read().is_on_air() {
            self.transition_to(PublisherState::Publishing {
                broadcast_id: broadcast_id.clone(),
            });
        }

        self.drive_toward_live(&broadcast_id).await;
    }

    /// Attempt the live transition, dropping to testing when the platform
    /// rejects it.
    async fn drive_toward_live(&self, broadcast_id: &str) {
        self.with_session(|s| s.begin_live_attempt());

        if self
            .drive_transition(broadcast_id, TransitionTarget::Live)
            .await
        {
            info!(%broadcast_id, "Transition to live accepted");
            self.with_session(|s| s.mark_live());
        } else {
            debug!(%broadcast_id, "Transition to live rejected, falling back to testing");
            self.with_session(|s| s.mark_fallback());
            // Best effort: keeps the broadcast in an operator-visible state
            // while the next pass retries the live path.
            let _ = self
                .drive_transition(broadcast_id, TransitionTarget::Testing)
                .await;
        }
    }

    /// Issue one transition call; true when the platform accepted it.
    async fn drive_transition(&self, broadcast_id: &str, target: TransitionTarget) -> bool {
        match self.api.transition_broadcast(broadcast_id, target).await {
            Ok(Some(_)) => true,
            Ok(None) => false,
            Err(e) => {
                debug!(%broadcast_id, target = %target, "Transition failed: {}", e);
                false
            }
        }
    }

    fn session_ids(&self) -> Option<(String, String)> {
        self.session
            .read()
            .as_ref()
            .map(|s| (s.broadcast_id().to_string(), s.stream_id().to_string()))
    }

    fn with_session(&self, f: impl FnOnce(&mut BroadcastSession)) {
        if let Some(session) = self.session.write().as_mut() {
            f(session);
        }
    }

    /// Tear down the session and tell the host to drop the live view.
    fn dismiss(&self) {
        *self.session.write() = None;
        self.send_event(PublisherEvent::ViewDismissed);
        if !self.state.read().is_idle() {
            self.transition_to(PublisherState::Idle);
        }
    }

    fn transition_to(&self, new_state: PublisherState) {
        let previous = {
            let mut state = self.state.write();
            let prev = state.clone();
            *state = new_state.clone();
            prev
        };

        debug!(
            previous = %previous.name(),
            current = %new_state.name(),
            "State transition"
        );

        self.send_event(PublisherEvent::StateChanged {
            previous: Box::new(previous),
            current: Box::new(new_state),
        });
    }

    fn send_event(&self, event: PublisherEvent) {
        if let Err(e) = self.event_tx.try_send(event) {
            warn!("Failed to send event: {}", e);
        }
    }
}
