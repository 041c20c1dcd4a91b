use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutbreakError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image error: {0}")]
    ImageError(#[from] image::error::ImageError),
}

pub type Result<T> = std::result::Result<T, OutbreakError>;
