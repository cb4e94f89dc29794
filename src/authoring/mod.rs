//! Multi-stage content-authoring pipeline.
//!
//! Drives upload → caption-edit → generate → review → save → reset for a
//! single product draft. Pure state transitions live in the reducer;
//! network calls and the post-save reset timer live in the workflow
//! driver, which tags every resolution with a draft epoch so that a
//! re-upload deterministically discards late responses from the
//! abandoned draft.

mod intent;
mod preview;
mod reducer;
mod state;
mod workflow;

pub use intent::AuthoringIntent;
pub use preview::PreviewHandle;
pub use reducer::AuthoringReducer;
pub use state::{AuthoringDraft, Phase};
pub use workflow::{AuthoringWorkflow, DraftSubscriberId, WorkflowError};
