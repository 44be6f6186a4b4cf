//! stratum-core: shared vocabulary for the Stratum architecture engine.
//!
//! Errors, configuration, tracing setup, constants, and the passport-annotated
//! graph model consumed by the analysis crate and by downstream linters and
//! diagram renderers.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
