use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("asset io: {0}")]
    Io(#[from] std::io::Error),
    #[error("texture decode: {0}")]
    Decode(#[from] image::ImageError),
    #[error("malformed sheet descriptor: {0}")]
    Sheet(#[from] serde_json::Error),
}
