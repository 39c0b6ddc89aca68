//! Local mirror of the remote catalog and the actions that keep it in sync.
//!
//! The store never holds its lock across a remote call. Each action resolves
//! independently and applies its own transition to whatever state is current at
//! that moment, so mutations commit in response-arrival order.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use shared::{domain::MovieId, protocol::MovieRecord};
use tokio::sync::{broadcast, Mutex};
use tracing::{info, warn};

use crate::{
    catalog_client::CatalogClient,
    error::{ActionError, CatalogClientError},
    form::FormInputModel,
};

const EVENT_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    Loading,
    Ready(Vec<MovieRecord>),
    /// Terminal for the session.
    Failed(String),
}

impl CatalogState {
    pub fn movies(&self) -> &[MovieRecord] {
        match self {
            CatalogState::Ready(movies) => movies,
            CatalogState::Loading | CatalogState::Failed(_) => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Create,
    Delete { id: MovieId },
}

/// A create/delete failure reported once to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransientNotice {
    pub action: StoreAction,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    StateChanged(CatalogState),
    TransientError(TransientNotice),
}

/// Only a `Loading` state accepts the list outcome.
pub fn apply_list_result(
    state: &CatalogState,
    result: Result<Vec<MovieRecord>, CatalogClientError>,
) -> CatalogState {
    match state {
        CatalogState::Loading => match result {
            Ok(movies) => CatalogState::Ready(movies),
            Err(err) => CatalogState::Failed(err.to_string()),
        },
        other => other.clone(),
    }
}

pub fn apply_created(state: &CatalogState, record: MovieRecord) -> CatalogState {
    match state {
        CatalogState::Ready(movies) => {
            let mut movies = movies.clone();
            // Ids are unique; a record echoed twice replaces the earlier copy in place.
            match movies.iter_mut().find(|movie| movie.id == record.id) {
                Some(existing) => *existing = record,
                None => movies.push(record),
            }
            CatalogState::Ready(movies)
        }
        other => other.clone(),
    }
}

pub fn apply_deleted(state: &CatalogState, id: MovieId) -> CatalogState {
    match state {
        CatalogState::Ready(movies) => CatalogState::Ready(
            movies
                .iter()
                .filter(|movie| movie.id != id)
                .cloned()
                .collect(),
        ),
        other => other.clone(),
    }
}

pub struct CatalogStateStore {
    client: Arc<dyn CatalogClient>,
    state: Mutex<CatalogState>,
    load_started: AtomicBool,
    events: broadcast::Sender<StoreEvent>,
}

impl CatalogStateStore {
    pub fn new(client: Arc<dyn CatalogClient>) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Arc::new(Self {
            client,
            state: Mutex::new(CatalogState::Loading),
            load_started: AtomicBool::new(false),
            events,
        })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub async fn snapshot(&self) -> CatalogState {
        self.state.lock().await.clone()
    }

    pub async fn movies(&self) -> Vec<MovieRecord> {
        self.state.lock().await.movies().to_vec()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.is_loading()
    }

    pub async fn error(&self) -> Option<String> {
        self.state.lock().await.error().map(str::to_string)
    }

    /// Fetches the catalog once. Later calls return the current state without a request.
    pub async fn load(&self) -> CatalogState {
        if self.load_started.swap(true, Ordering::SeqCst) {
            return self.snapshot().await;
        }

        let result = self.client.list().await;
        let next = {
            let mut guard = self.state.lock().await;
            let next = apply_list_result(&guard, result);
            *guard = next.clone();
            next
        };

        match &next {
            CatalogState::Ready(movies) => info!(count = movies.len(), "catalog loaded"),
            CatalogState::Failed(message) => warn!(error = %message, "catalog load failed"),
            CatalogState::Loading => {}
        }
        self.publish_state(next.clone());
        next
    }

    /// Validates the draft, creates the record remotely and appends the server's copy.
    /// The form is reset only after the service confirms the create.
    pub async fn submit(&self, form: &mut FormInputModel) -> Result<MovieRecord, ActionError> {
        let movie = form.validate()?;
        self.ensure_ready().await?;

        let record = match self.client.create(&movie).await {
            Ok(record) => record,
            Err(err) => {
                self.notify_failure(StoreAction::Create, "Failed to add movie", &err);
                return Err(err.into());
            }
        };

        let next = {
            let mut guard = self.state.lock().await;
            let next = apply_created(&guard, record.clone());
            *guard = next.clone();
            next
        };
        form.reset();
        info!(id = %record.id, title = %record.title, "movie added");
        self.publish_state(next);
        Ok(record)
    }

    /// Deletes remotely, then drops the matching record if it is still present.
    pub async fn delete(&self, id: MovieId) -> Result<(), ActionError> {
        self.ensure_ready().await?;

        if let Err(err) = self.client.delete(id).await {
            self.notify_failure(StoreAction::Delete { id }, "Failed to delete movie", &err);
            return Err(err.into());
        }

        let next = {
            let mut guard = self.state.lock().await;
            let next = apply_deleted(&guard, id);
            *guard = next.clone();
            next
        };
        info!(%id, "movie deleted");
        self.publish_state(next);
        Ok(())
    }

    async fn ensure_ready(&self) -> Result<(), ActionError> {
        match &*self.state.lock().await {
            CatalogState::Ready(_) => Ok(()),
            _ => Err(ActionError::NotReady),
        }
    }

    fn publish_state(&self, state: CatalogState) {
        let _ = self.events.send(StoreEvent::StateChanged(state));
    }

    fn notify_failure(&self, action: StoreAction, summary: &str, err: &CatalogClientError) {
        warn!(?action, error = %err, "{summary}");
        let _ = self
            .events
            .send(StoreEvent::TransientError(TransientNotice {
                action,
                message: format!("{summary}: {err}"),
            }));
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
