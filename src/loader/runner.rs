//! Async driver for load sequences.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::federation::{ComponentRef, RuntimeLocator};
use crate::mvi::Reducer;

use super::error::LoadError;
use super::extract::extract_component;
use super::intent::LoadIntent;
use super::reducer::LoadReducer;
use super::request::LoadRequest;
use super::state::{LoadSequence, LoadState};
use super::timeout;

/// Run one attempt: locate a runtime, race its load against the timeout,
/// extract the component.
pub async fn attempt_load(
    locator: &dyn RuntimeLocator,
    request: &LoadRequest,
) -> Result<ComponentRef, LoadError> {
    let runtime = locator.locate().ok_or(LoadError::NoRuntimeFound)?;
    tracing::debug!(
        runtime = runtime.name(),
        module_path = request.module_path(),
        "Using federation runtime"
    );

    let message = format!(
        "Timeout loading remote component from {} after {}ms",
        request.module_path(),
        request.timeout().as_millis()
    );
    let module = timeout::race(
        runtime.load_remote(request.module_path()),
        request.timeout(),
        Some(message),
    )
    .await?;

    Ok(extract_component(&module, request.export_name())?)
}

fn dispatch(sequence: &watch::Sender<LoadSequence>, intent: LoadIntent) {
    sequence.send_if_modified(|current| {
        let next = LoadReducer::reduce(current.clone(), intent);
        if next == *current {
            false
        } else {
            *current = next;
            true
        }
    });
}

async fn drive(
    locator: Arc<dyn RuntimeLocator>,
    request: LoadRequest,
    generation: u64,
    sequence: Arc<watch::Sender<LoadSequence>>,
) {
    let module_path = request.module_path();
    let mut attempt: u32 = 0;

    loop {
        tracing::info!(
            module_path,
            attempt = attempt + 1,
            max_attempts = request.max_attempts(),
            "Loading remote component"
        );

        match attempt_load(locator.as_ref(), &request).await {
            Ok(component) => {
                tracing::info!(
                    module_path,
                    component = component.name(),
                    "Remote component loaded"
                );
                dispatch(
                    &sequence,
                    LoadIntent::AttemptSucceeded {
                        generation,
                        component,
                    },
                );
                return;
            }
            Err(err) => {
                tracing::warn!(
                    module_path,
                    attempt = attempt + 1,
                    kind = err.kind(),
                    error = %err,
                    "Remote component attempt failed"
                );
                dispatch(
                    &sequence,
                    LoadIntent::AttemptFailed {
                        generation,
                        error: err.to_string(),
                    },
                );

                if attempt >= request.retry_count() {
                    tracing::error!(
                        module_path,
                        attempts = attempt + 1,
                        error = %err,
                        "Giving up on remote component"
                    );
                    return;
                }

                tracing::info!(
                    module_path,
                    delay_ms = request.retry_delay().as_millis() as u64,
                    "Retrying remote component load"
                );
                tokio::time::sleep(request.retry_delay()).await;
                attempt += 1;
            }
        }
    }
}

/// Loads remote components for one logical consumer.
///
/// Each [`load`](Self::load) starts a new sequence and abandons the previous
/// one: its task is aborted (dropping pending timers and races) and any
/// event it still manages to dispatch carries a stale generation.
pub struct RemoteLoader {
    locator: Arc<dyn RuntimeLocator>,
    sequence: Arc<watch::Sender<LoadSequence>>,
    generation: AtomicU64,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl RemoteLoader {
    pub fn new<L: RuntimeLocator + 'static>(locator: L) -> Self {
        Self::with_locator(Arc::new(locator))
    }

    pub fn with_locator(locator: Arc<dyn RuntimeLocator>) -> Self {
        let (sequence, _) = watch::channel(LoadSequence::default());
        Self {
            locator,
            sequence: Arc::new(sequence),
            generation: AtomicU64::new(0),
            task: Mutex::new(None),
        }
    }

    /// Start a load sequence for `request`.
    ///
    /// Must be called within a tokio runtime.
    pub fn load(&self, request: LoadRequest) -> LoadHandle {
        let mut task = self.task.lock();
        if let Some(previous) = task.take() {
            previous.abort();
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(
            generation,
            module_path = request.module_path(),
            "Starting load sequence"
        );
        dispatch(
            &self.sequence,
            LoadIntent::Begin {
                generation,
                retry_count: request.retry_count(),
            },
        );

        let handle = LoadHandle {
            rx: self.sequence.subscribe(),
            generation,
        };
        *task = Some(tokio::spawn(drive(
            Arc::clone(&self.locator),
            request,
            generation,
            Arc::clone(&self.sequence),
        )));
        handle
    }

    /// Load and wait for the terminal state.
    pub async fn run(&self, request: LoadRequest) -> LoadState {
        let mut handle = self.load(request);
        match handle.settled().await {
            Some(state) => state,
            // The sender lives as long as `self`, so the channel can't close here.
            None => handle.current(),
        }
    }

    /// Current state of the latest sequence.
    pub fn state(&self) -> LoadState {
        self.sequence.borrow().state().clone()
    }

    /// Full reducer model of the latest sequence.
    pub fn sequence(&self) -> LoadSequence {
        self.sequence.borrow().clone()
    }
}

impl Drop for RemoteLoader {
    fn drop(&mut self) {
        if let Some(task) = self.task.get_mut().take() {
            task.abort();
        }
    }
}

/// Stream of [`LoadState`] values for a consumer.
///
/// Always reflects the loader's latest sequence; once a newer `load`
/// supersedes the one that created this handle, the handle reports the
/// newer sequence.
pub struct LoadHandle {
    rx: watch::Receiver<LoadSequence>,
    generation: u64,
}

impl LoadHandle {
    /// Generation of the sequence that created this handle.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current(&self) -> LoadState {
        self.rx.borrow().state().clone()
    }

    /// Wait for the next state change.
    ///
    /// Returns `None` once the loader is gone.
    pub async fn changed(&mut self) -> Option<LoadState> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().state().clone())
    }

    /// Wait until a sequence at least as new as this handle's settles.
    ///
    /// Returns `None` if the loader is dropped first.
    pub async fn settled(&mut self) -> Option<LoadState> {
        let generation = self.generation;
        self.rx
            .wait_for(|sequence| {
                sequence.generation() >= generation && sequence.state().is_terminal()
            })
            .await
            .ok()
            .map(|sequence| sequence.state().clone())
    }
}
