//! Infrastructure layer - ports and in-memory adapters.
//!
//! The host game engine lives behind the port traits in `ports`; everything
//! else here is an adapter the binary can run without a live host.

pub mod conditions;
pub mod counters;
pub mod i18n;
pub mod ports;
pub mod settings;
pub mod tracing_host;
