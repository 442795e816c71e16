//! Use cases.
//!
//! The classifier builds the HUD tree, the renderer hands it to the host and
//! the dispatcher turns clicks back into host calls.

pub mod classifier;
pub mod dispatcher;
pub mod render;

pub use classifier::{ClassificationContext, Classifier, Stage};
pub use dispatcher::{DispatchError, DispatchOutcome, DispatchRequest, Dispatcher};
pub use render::HudRenderer;
