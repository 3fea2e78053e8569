pub mod config;
pub mod error;
pub mod types;

pub use config::{CategoryPolicy, OverlayConfig, OverlayPolicy, SnapshotConfig};
pub use error::{OverlayError, Result};
pub use types::{EntityId, OverlayCategory, PlayerId, Point, ProcessId, Tick};
