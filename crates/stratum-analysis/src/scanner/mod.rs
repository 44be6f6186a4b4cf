//! Scanner subsystem: lazy, restartable file discovery.
//!
//! The reader walks the source tree depth-first, pruning excluded and hidden
//! directories before descending into them, and yields one `SourceFile` per
//! eligible file. Nothing is read until the consumer pulls the next record.

pub mod language_detect;
pub mod reader;
pub mod types;

pub use language_detect::Language;
pub use reader::{SourceFiles, SourceReader};
pub use types::ScanStats;
