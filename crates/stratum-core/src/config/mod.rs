//! Configuration system for Stratum.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod layout_config;
pub mod scan_config;
pub mod stratum_config;
pub mod view_config;

pub use layout_config::LayoutConfig;
pub use scan_config::{ParseFailurePolicy, ScanConfig};
pub use stratum_config::{ConfigOverrides, StratumConfig};
pub use view_config::ViewConfig;
