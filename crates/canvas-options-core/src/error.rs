use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvasOptionsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Unknown bounding box scale method: {0}")]
    UnknownScaleMethod(String),

    #[error("Invalid panel event '{input}': {reason}")]
    InvalidEvent { input: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CanvasOptionsError>;
