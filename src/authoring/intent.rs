//! Intents for the authoring pipeline.

use crate::api::types::GeneratedContent;
use crate::authoring::preview::PreviewHandle;
use crate::mvi::Intent;

/// Gestures and service resolutions that drive the authoring draft.
#[derive(Debug, Clone)]
pub enum AuthoringIntent {
    /// User selected an image file. Discards any in-progress draft.
    FileSelected { preview: PreviewHandle },

    /// Caption upload resolved successfully.
    UploadSucceeded {
        temp_image_id: String,
        caption: String,
    },

    /// Caption upload failed. The preview is kept so the user can
    /// recover by re-uploading.
    UploadFailed,

    /// User edited the caption text. Local mutation only.
    CaptionEdited { caption: String },

    /// User invoked "generate".
    GenerateRequested,

    /// Generation resolved successfully.
    GenerationSucceeded { content: GeneratedContent },

    /// Generation failed; prior generated content stays untouched.
    GenerationFailed,

    /// User invoked "save".
    SaveRequested,

    /// Persist resolved with a product id.
    SaveSucceeded { product_id: String },

    /// Persist failed; the draft stays reviewable.
    SaveFailed,

    /// The post-save reset delay elapsed.
    ResetElapsed,
}

impl Intent for AuthoringIntent {}
