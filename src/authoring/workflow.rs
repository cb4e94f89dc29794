//! Async driver for the authoring pipeline.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::{ApiClient, ApiError};
use crate::mvi::Reducer;

use super::intent::AuthoringIntent;
use super::preview::PreviewHandle;
use super::reducer::AuthoringReducer;
use super::state::{AuthoringDraft, Phase};

/// Errors surfaced to the presentation boundary by workflow gestures.
///
/// None of these are fatal: the draft stays in its prior phase and every
/// failure is recoverable by retrying the gesture.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A service request for this draft is already in flight.
    #[error("A request for this draft is already in flight")]
    Busy,

    /// Save was invoked before any generation succeeded.
    #[error("Generate content before saving")]
    NothingGenerated,

    /// The gesture needs an active draft and there is none.
    #[error("No draft in progress")]
    NoDraft,

    /// The local preview could not be materialized.
    #[error("Failed to create local preview: {0}")]
    Preview(#[from] std::io::Error),

    /// The underlying service call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

type Callback = Box<dyn Fn(&AuthoringDraft) + Send + Sync>;

/// Handle returned by [`AuthoringWorkflow::subscribe`].
pub type DraftSubscriberId = u64;

#[derive(Default)]
struct Subscribers {
    callbacks: HashMap<DraftSubscriberId, Callback>,
    next_id: DraftSubscriberId,
}

/// Draft plus its epoch, guarded together so that epoch checks and
/// transitions are atomic.
struct Pipeline {
    draft: AuthoringDraft,
    /// Bumped on every file selection; resolutions issued under an older
    /// epoch are discarded instead of touching the new draft.
    epoch: u64,
}

/// Drives upload → caption → generate → save → reset for one draft.
///
/// Cheap to clone; clones share the same draft. At most one service
/// request per phase is in flight: a gesture that would start a second
/// one is rejected with [`WorkflowError::Busy`], while re-selecting a
/// file is the implicit cancel that abandons the in-flight draft.
#[derive(Clone)]
pub struct AuthoringWorkflow {
    client: ApiClient,
    reset_delay: Duration,
    pipeline: Arc<Mutex<Pipeline>>,
    subscribers: Arc<RwLock<Subscribers>>,
}

impl AuthoringWorkflow {
    /// `reset_delay` is how long the post-save success indicator stays
    /// up before the draft resets.
    pub fn new(client: ApiClient, reset_delay: Duration) -> Self {
        Self {
            client,
            reset_delay,
            pipeline: Arc::new(Mutex::new(Pipeline {
                draft: AuthoringDraft::default(),
                epoch: 0,
            })),
            subscribers: Arc::new(RwLock::new(Subscribers::default())),
        }
    }

    /// Snapshot of the current draft.
    pub fn draft(&self) -> AuthoringDraft {
        self.pipeline.lock().draft.clone()
    }

    /// Register a callback invoked with every draft change.
    pub fn subscribe<F>(&self, callback: F) -> DraftSubscriberId
    where
        F: Fn(&AuthoringDraft) + Send + Sync + 'static,
    {
        let mut subscribers = self.subscribers.write();
        let id = subscribers.next_id;
        subscribers.next_id += 1;
        subscribers.callbacks.insert(id, Box::new(callback));
        id
    }

    /// Remove a previously registered subscriber.
    pub fn unsubscribe(&self, id: DraftSubscriberId) {
        self.subscribers.write().callbacks.remove(&id);
    }

    /// User selected an image: start a fresh draft and upload the bytes
    /// for captioning.
    ///
    /// Selecting a file at any non-Empty phase abandons the prior draft;
    /// its in-flight responses resolve later and are discarded by epoch.
    pub async fn select_file(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<(), WorkflowError> {
        let preview = PreviewHandle::new(&bytes, file_name)?;

        let (epoch, snapshot) = {
            let mut pipeline = self.pipeline.lock();
            pipeline.epoch += 1;
            pipeline.draft = AuthoringReducer::reduce(
                std::mem::take(&mut pipeline.draft),
                AuthoringIntent::FileSelected { preview },
            );
            (pipeline.epoch, pipeline.draft.clone())
        };
        self.notify(&snapshot);

        match self.client.upload_for_caption(bytes, file_name).await {
            Ok(resp) => {
                if self
                    .apply_if_current(
                        epoch,
                        AuthoringIntent::UploadSucceeded {
                            temp_image_id: resp.temp_image_id,
                            caption: resp.caption,
                        },
                    )
                    .is_none()
                {
                    debug!(epoch, "caption response for abandoned draft discarded");
                }
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "caption upload failed");
                self.apply_if_current(epoch, AuthoringIntent::UploadFailed);
                Err(e.into())
            }
        }
    }

    /// Edit the caption text. Local mutation only; returns whether the
    /// edit was accepted in the current phase.
    pub fn edit_caption(&self, caption: impl Into<String>) -> bool {
        let snapshot = {
            let mut pipeline = self.pipeline.lock();
            if !pipeline.draft.can_edit_caption() {
                return false;
            }
            pipeline.draft = AuthoringReducer::reduce(
                std::mem::take(&mut pipeline.draft),
                AuthoringIntent::CaptionEdited {
                    caption: caption.into(),
                },
            );
            pipeline.draft.clone()
        };
        self.notify(&snapshot);
        true
    }

    /// Generate candidate content from the current caption.
    ///
    /// Returns whether the response was applied (`false` when a
    /// re-upload abandoned this draft while the request was in flight).
    pub async fn generate(&self) -> Result<bool, WorkflowError> {
        let (epoch, caption, snapshot) = {
            let mut pipeline = self.pipeline.lock();
            match pipeline.draft.phase {
                Phase::Uploading | Phase::Generating | Phase::Saving => {
                    return Err(WorkflowError::Busy)
                }
                Phase::Empty | Phase::Saved => return Err(WorkflowError::NoDraft),
                Phase::AwaitingCaptionEdit | Phase::Reviewing => {}
            }
            pipeline.draft = AuthoringReducer::reduce(
                std::mem::take(&mut pipeline.draft),
                AuthoringIntent::GenerateRequested,
            );
            (
                pipeline.epoch,
                pipeline.draft.caption.clone(),
                pipeline.draft.clone(),
            )
        };
        self.notify(&snapshot);

        match self.client.generate(&caption).await {
            Ok(content) => {
                let applied = self
                    .apply_if_current(epoch, AuthoringIntent::GenerationSucceeded { content })
                    .is_some();
                if !applied {
                    debug!(epoch, "generation for abandoned draft discarded");
                }
                Ok(applied)
            }
            Err(e) => {
                warn!(error = %e, "generation failed");
                self.apply_if_current(epoch, AuthoringIntent::GenerationFailed);
                Err(e.into())
            }
        }
    }

    /// Persist the reviewed draft. On success the success indicator is
    /// shown and the draft resets automatically after the configured
    /// delay. The result store is not touched.
    pub async fn save(&self) -> Result<String, WorkflowError> {
        let (epoch, temp_image_id, content, snapshot) = {
            let mut pipeline = self.pipeline.lock();
            match pipeline.draft.phase {
                Phase::Uploading | Phase::Generating | Phase::Saving => {
                    return Err(WorkflowError::Busy)
                }
                Phase::Empty | Phase::Saved => return Err(WorkflowError::NoDraft),
                // Allowing a save before generation succeeded would
                // persist an empty product; rejected.
                Phase::AwaitingCaptionEdit => return Err(WorkflowError::NothingGenerated),
                Phase::Reviewing => {}
            }
            let Some(content) = pipeline.draft.generated.clone() else {
                return Err(WorkflowError::NothingGenerated);
            };
            let Some(temp_image_id) = pipeline.draft.temp_image_id.clone() else {
                return Err(WorkflowError::NoDraft);
            };
            pipeline.draft = AuthoringReducer::reduce(
                std::mem::take(&mut pipeline.draft),
                AuthoringIntent::SaveRequested,
            );
            (
                pipeline.epoch,
                temp_image_id,
                content,
                pipeline.draft.clone(),
            )
        };
        self.notify(&snapshot);

        match self.client.save_product(&temp_image_id, &content).await {
            Ok(product_id) => {
                info!(product_id = %product_id, "product saved");
                let applied = self
                    .apply_if_current(
                        epoch,
                        AuthoringIntent::SaveSucceeded {
                            product_id: product_id.clone(),
                        },
                    )
                    .is_some();
                if applied {
                    self.schedule_reset(epoch);
                }
                Ok(product_id)
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                self.apply_if_current(epoch, AuthoringIntent::SaveFailed);
                Err(e.into())
            }
        }
    }

    /// Arrange for the draft to reset once the success indicator has
    /// been up for the configured delay. The reset is epoch-tagged: a
    /// re-upload during the indicator keeps the new draft intact.
    fn schedule_reset(&self, epoch: u64) {
        let workflow = self.clone();
        let delay = self.reset_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if workflow
                .apply_if_current(epoch, AuthoringIntent::ResetElapsed)
                .is_none()
            {
                debug!(epoch, "auto-reset skipped, draft was superseded");
            }
        });
    }

    /// Apply an intent only if `epoch` is still the current draft epoch.
    ///
    /// Returns the new snapshot when applied. Subscribers are notified
    /// only when the draft actually changed.
    fn apply_if_current(
        &self,
        epoch: u64,
        intent: AuthoringIntent,
    ) -> Option<AuthoringDraft> {
        let (snapshot, changed) = {
            let mut pipeline = self.pipeline.lock();
            if pipeline.epoch != epoch {
                return None;
            }
            let before = pipeline.draft.clone();
            pipeline.draft =
                AuthoringReducer::reduce(std::mem::take(&mut pipeline.draft), intent);
            let changed = pipeline.draft != before;
            (pipeline.draft.clone(), changed)
        };
        if changed {
            self.notify(&snapshot);
        }
        Some(snapshot)
    }

    fn notify(&self, draft: &AuthoringDraft) {
        let subscribers = self.subscribers.read();
        for callback in subscribers.callbacks.values() {
            callback(draft);
        }
    }
}
