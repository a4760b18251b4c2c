//! Core sizing logic and its supporting crates, re-exported under stable
//! module names.
//!
//! The engine is a pure, synchronous computation: every sizing request is a
//! function of (mission legs, configuration) with no hidden state. Keeping
//! the logic in library crates lets multiple front-ends (CLI, future GUI or
//! web) share it; this facade is what front-ends and the integration test
//! suite link against.

pub use sizer_aero as aero;
pub use sizer_atmosphere as atmosphere;
pub use sizer_config as config;
pub use sizer_core as core;
pub use sizer_energy as energy;
pub use sizer_export as export;
pub use sizer_hybrid as hybrid;
pub use sizer_routes as routes;
pub use sizer_sizing as sizing;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
