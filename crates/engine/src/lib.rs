//! Token Action HUD D&D 5e engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - the classifier, the dispatcher and the HUD renderer
//! - `infrastructure/` - port traits toward the host plus in-memory adapters
//! - `app` - composition of the above behind one coordinator

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Shared snapshot builders for unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::{App, ConfigPorts, HostPorts};
