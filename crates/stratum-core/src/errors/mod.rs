//! Error handling for Stratum.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod classification_error;
pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod parse_error;
pub mod pipeline_error;
pub mod scan_error;

pub use classification_error::ClassificationError;
pub use config_error::ConfigError;
pub use error_code::StratumErrorCode;
pub use graph_error::GraphError;
pub use parse_error::ParseError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use scan_error::ScanError;
