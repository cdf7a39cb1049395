//! Screenshot capture collaborator.
//!
//! The actual rasterize/prompt/save round-trip happens on the far side of a
//! process boundary; this module bridges it into the synchronous event loop.
//! Requests go into a channel, a background task drives the async backend,
//! and the event loop polls the outcome without ever blocking on it.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use thiserror::Error;
use tokio::sync::{Mutex, mpsc};

/// Filename template for saved captures.
const FILENAME_TEMPLATE: &str = "pineshot_%Y%m%d_%H%M%S";

/// One capture request, carrying the suggested save location the prompt
/// starts from.
#[derive(Debug, Clone)]
pub struct CaptureRequest {
    pub suggested_path: PathBuf,
}

impl Default for CaptureRequest {
    fn default() -> Self {
        Self {
            suggested_path: default_save_path(),
        }
    }
}

/// Outcome of a capture-and-save round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Image written to the given path.
    Saved(PathBuf),
    /// The user dismissed the save prompt.
    Cancelled,
    /// Rasterization or the file write failed.
    Failed(String),
}

/// Errors the capture pipeline can produce.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("capture cancelled: {0}")]
    Cancelled(String),

    #[error("failed to write capture: {0}")]
    Io(#[from] std::io::Error),

    #[error("capture failed: {0}")]
    Backend(String),

    #[error("capture service not running")]
    ServiceStopped,
}

/// The far side of the capture boundary: rasterize the overlay region,
/// prompt for a location, write the file.
#[async_trait]
pub trait CaptureBackend: Send + Sync {
    async fn capture_and_save(&self, request: &CaptureRequest) -> Result<PathBuf, CaptureError>;
}

/// Bridges capture requests from the event loop to the async backend.
///
/// Requests are non-blocking; outcomes land in a mailbox the event loop
/// drains with [`CaptureService::try_take_outcome`].
#[derive(Clone)]
pub struct CaptureService {
    request_tx: mpsc::UnboundedSender<CaptureRequest>,
    outcome: Arc<Mutex<Option<SaveOutcome>>>,
}

impl CaptureService {
    /// Creates the service and spawns its background task.
    pub fn new(runtime_handle: &tokio::runtime::Handle, backend: Arc<dyn CaptureBackend>) -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<CaptureRequest>();
        let outcome = Arc::new(Mutex::new(None));

        let outcome_clone = outcome.clone();
        runtime_handle.spawn(async move {
            while let Some(request) = request_rx.recv().await {
                log::debug!("processing capture request: {:?}", request.suggested_path);

                let result = match backend.capture_and_save(&request).await {
                    Ok(path) => {
                        log::info!("capture saved: {}", path.display());
                        SaveOutcome::Saved(path)
                    }
                    Err(CaptureError::Cancelled(reason)) => {
                        log::info!("capture cancelled: {reason}");
                        SaveOutcome::Cancelled
                    }
                    Err(err) => {
                        let message = err.to_string();
                        log::error!("capture failed: {message}");
                        SaveOutcome::Failed(message)
                    }
                };

                *outcome_clone.lock().await = Some(result);
            }
        });

        Self {
            request_tx,
            outcome,
        }
    }

    /// Queues a capture request; returns immediately.
    pub fn request(&self, request: CaptureRequest) -> Result<(), CaptureError> {
        self.request_tx
            .send(request)
            .map_err(|_| CaptureError::ServiceStopped)
    }

    /// Takes the outcome of the last capture, if one has arrived.
    ///
    /// Non-blocking; returns `None` while a request is still in flight or
    /// when nothing was requested.
    pub fn try_take_outcome(&self) -> Option<SaveOutcome> {
        self.outcome.try_lock().ok().and_then(|mut slot| slot.take())
    }
}

/// Default save location: `pineshot_<timestamp>.png` in the user's download
/// folder (falling back to the home directory).
pub fn default_save_path() -> PathBuf {
    let directory = dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    directory.join(generate_filename())
}

/// Generates a timestamped capture filename.
pub fn generate_filename() -> String {
    format!("{}.png", Local::now().format(FILENAME_TEMPLATE))
}

/// Expand tilde (~) in configured save paths.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
