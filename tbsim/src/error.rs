use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("expected exactly 3 bodies, got {0}")]
    InvalidBodyCount(usize),

    #[error("body {index} is invalid: {reason}")]
    InvalidBody { index: usize, reason: String },

    #[error("invalid render settings: {0}")]
    InvalidRender(String),

    #[error("color path has {colors} entries but the trajectory has {segments} segments")]
    ColorPathTooShort { segments: usize, colors: usize },
}
