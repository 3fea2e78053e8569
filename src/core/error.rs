use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to save snapshot {path:?}: {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Cannot allocate a {width}x{height} canvas")]
    CanvasSize { width: u32, height: u32 },

    #[error("World must have a finite, positive size (got {width}x{height})")]
    InvalidWorld { width: f64, height: f64 },

    #[error("Embedded label font could not be parsed")]
    LabelFont,

    #[error("Invalid config TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    ConfigInvalid(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OverlayError>;
