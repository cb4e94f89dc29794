//! Draft state for the authoring pipeline.

use crate::api::types::GeneratedContent;
use crate::authoring::preview::PreviewHandle;
use crate::mvi::State;

/// Where the draft currently sits in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No authoring in progress.
    #[default]
    Empty,
    /// Image selected, caption request in flight.
    Uploading,
    /// Caption arrived; the user may correct it before generating.
    AwaitingCaptionEdit,
    /// Generation request in flight.
    Generating,
    /// Generated content available for review.
    Reviewing,
    /// Persist request in flight.
    Saving,
    /// Persisted; success indicator up until the auto-reset fires.
    Saved,
}

/// The in-progress authoring record.
///
/// Created on first file selection; destroyed (reset to default) a fixed
/// delay after a successful save, or implicitly abandoned by re-upload.
/// Disjoint from the result store: a saved draft becomes a product only
/// through the persistence service, never locally.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthoringDraft {
    pub phase: Phase,
    /// Local preview of the selected image.
    pub preview: Option<PreviewHandle>,
    /// Server-issued temp asset handle from the caption upload.
    pub temp_image_id: Option<String>,
    /// Caption text, user-correctable before generation.
    pub caption: String,
    /// Candidate product content; absent until generation succeeds.
    pub generated: Option<GeneratedContent>,
    /// Id returned by the persist call, shown with the success indicator.
    pub saved_product_id: Option<String>,
}

impl State for AuthoringDraft {}

impl AuthoringDraft {
    /// Whether the caption is editable in the current phase.
    pub fn can_edit_caption(&self) -> bool {
        matches!(self.phase, Phase::AwaitingCaptionEdit | Phase::Reviewing)
    }

    /// Whether a generate gesture is accepted (including regeneration
    /// from review).
    pub fn can_generate(&self) -> bool {
        matches!(self.phase, Phase::AwaitingCaptionEdit | Phase::Reviewing)
    }

    /// Whether a save gesture is accepted.
    pub fn can_save(&self) -> bool {
        self.phase == Phase::Reviewing && self.generated.is_some()
    }

    /// Whether the transient success indicator should be shown.
    pub fn shows_success(&self) -> bool {
        self.phase == Phase::Saved
    }

    /// Whether a service request for this draft is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            Phase::Uploading | Phase::Generating | Phase::Saving
        )
    }
}
