//! Single-task event loop
//!
//! One task owns the [`Session`]. Events arrive on an mpsc channel and are
//! applied in order; after each one the derived [`SessionView`] is
//! published on a watch channel, so readers always see the latest state
//! rather than a backlog. Effects run as spawned tasks that report back by
//! posting events, which keeps every mutation on the loop.
//!
//! Spawned tasks only hold weak senders: the loop ends as soon as every
//! [`RuntimeHandle`] is dropped, even with a request still in flight.

use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::api::RecordsApi;
use crate::session::{Effect, Event, Session, SessionView};
use crate::{store, submission};

const EVENT_BUFFER: usize = 64;

/// Event loop owning the session
pub struct Runtime {
    api: Arc<dyn RecordsApi>,
    session: Session,
    events_rx: mpsc::Receiver<Event>,
    events_tx: mpsc::WeakSender<Event>,
    views_tx: watch::Sender<SessionView>,
}

/// Input side for front ends: post events, watch views
#[derive(Clone)]
pub struct RuntimeHandle {
    events_tx: mpsc::Sender<Event>,
    views_rx: watch::Receiver<SessionView>,
}

impl Runtime {
    pub fn new(api: Arc<dyn RecordsApi>) -> (Self, RuntimeHandle) {
        let session = Session::new();
        let (events_tx, events_rx) = mpsc::channel(EVENT_BUFFER);
        let (views_tx, views_rx) = watch::channel(session.view());

        let runtime = Self {
            api,
            session,
            events_rx,
            events_tx: events_tx.downgrade(),
            views_tx,
        };
        let handle = RuntimeHandle {
            events_tx,
            views_rx,
        };

        (runtime, handle)
    }

    /// Run until every handle is dropped, returning the final session
    pub async fn run(mut self) -> Session {
        info!("Session event loop started");
        self.spawn_initial_load();

        while let Some(event) = self.events_rx.recv().await {
            debug!(?event, "Applying event");

            if let Some(effect) = self.session.update(event) {
                self.perform(effect);
            }
            self.views_tx.send_replace(self.session.view());
        }

        info!("Session event loop stopped");
        self.session
    }

    fn spawn_initial_load(&self) {
        let api = Arc::clone(&self.api);
        let events_tx = self.events_tx.clone();

        tokio::spawn(async move {
            let result = store::load(api.as_ref()).await;
            post(&events_tx, Event::RecordsLoaded(result)).await;
        });
    }

    fn perform(&self, effect: Effect) {
        let events_tx = self.events_tx.clone();

        match effect {
            Effect::Submit(candidate) => {
                let api = Arc::clone(&self.api);
                tokio::spawn(async move {
                    let result = submission::submit(api.as_ref(), candidate).await;
                    post(&events_tx, Event::SubmissionCompleted(result)).await;
                });
            }
            Effect::DismissError { generation, after } => {
                tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    post(&events_tx, Event::ErrorDismissed(generation)).await;
                });
            }
        }
    }
}

/// Deliver an event if the loop is still running
async fn post(events_tx: &mpsc::WeakSender<Event>, event: Event) {
    match events_tx.upgrade() {
        Some(tx) => {
            // Loop stopped between upgrade and send
            let _ = tx.send(event).await;
        }
        None => debug!("Event loop gone, dropping {:?}", event),
    }
}

impl RuntimeHandle {
    /// Queue an event; false once the loop has stopped
    pub async fn send(&self, event: Event) -> bool {
        self.events_tx.send(event).await.is_ok()
    }

    /// A receiver that observes every published view
    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.views_rx.clone()
    }

    /// Latest published view
    pub fn current(&self) -> SessionView {
        self.views_rx.borrow().clone()
    }
}
