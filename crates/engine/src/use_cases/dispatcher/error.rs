//! Dispatch errors.

use tahud_shared::PayloadError;

use crate::infrastructure::ports::PortError;

/// Errors that abort a dispatch. Stale targets are not errors; they skip.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Invalid payload: {0}")]
    Payload(#[from] PayloadError),
    #[error("Host call failed: {0}")]
    Port(#[from] PortError),
}
