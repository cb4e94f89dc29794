//! Reducer for the authoring pipeline.

use crate::mvi::Reducer;

use super::intent::AuthoringIntent;
use super::state::{AuthoringDraft, Phase};

/// Pure state transitions for the authoring draft.
///
/// Intents that are invalid for the current phase leave the state
/// unchanged; the workflow driver rejects them with an error before
/// dispatch, and stale resolutions are already filtered by draft epoch.
pub struct AuthoringReducer;

impl Reducer for AuthoringReducer {
    type State = AuthoringDraft;
    type Intent = AuthoringIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Re-selecting a file at any phase is an implicit cancel:
            // every other draft field is discarded.
            AuthoringIntent::FileSelected { preview } => AuthoringDraft {
                phase: Phase::Uploading,
                preview: Some(preview),
                ..Default::default()
            },

            AuthoringIntent::UploadSucceeded {
                temp_image_id,
                caption,
            } => match state.phase {
                Phase::Uploading => AuthoringDraft {
                    phase: Phase::AwaitingCaptionEdit,
                    temp_image_id: Some(temp_image_id),
                    caption,
                    ..state
                },
                _ => state,
            },

            AuthoringIntent::UploadFailed => match state.phase {
                // Back to Empty but with the preview kept: the UI shows
                // the selection without a caption, recoverable by
                // re-upload.
                Phase::Uploading => AuthoringDraft {
                    phase: Phase::Empty,
                    temp_image_id: None,
                    ..state
                },
                _ => state,
            },

            AuthoringIntent::CaptionEdited { caption } => {
                if state.can_edit_caption() {
                    AuthoringDraft { caption, ..state }
                } else {
                    state
                }
            }

            AuthoringIntent::GenerateRequested => {
                if state.can_generate() {
                    AuthoringDraft {
                        phase: Phase::Generating,
                        ..state
                    }
                } else {
                    state
                }
            }

            AuthoringIntent::GenerationSucceeded { content } => match state.phase {
                Phase::Generating => AuthoringDraft {
                    phase: Phase::Reviewing,
                    generated: Some(content),
                    ..state
                },
                _ => state,
            },

            AuthoringIntent::GenerationFailed => match state.phase {
                // Prior generated content (from an earlier round) stays.
                Phase::Generating => AuthoringDraft {
                    phase: Phase::AwaitingCaptionEdit,
                    ..state
                },
                _ => state,
            },

            AuthoringIntent::SaveRequested => {
                if state.can_save() {
                    AuthoringDraft {
                        phase: Phase::Saving,
                        ..state
                    }
                } else {
                    state
                }
            }

            AuthoringIntent::SaveSucceeded { product_id } => match state.phase {
                Phase::Saving => AuthoringDraft {
                    phase: Phase::Saved,
                    saved_product_id: Some(product_id),
                    ..state
                },
                _ => state,
            },

            AuthoringIntent::SaveFailed => match state.phase {
                Phase::Saving => AuthoringDraft {
                    phase: Phase::Reviewing,
                    ..state
                },
                _ => state,
            },

            AuthoringIntent::ResetElapsed => match state.phase {
                Phase::Saved => AuthoringDraft::default(),
                _ => state,
            },
        }
    }
}
