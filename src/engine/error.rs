use std::path::PathBuf;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("no image path given")]
    EmptyPath,
    #[error("no image loaded")]
    NoImageLoaded,
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("adjustment {0} must be finite")]
    NonFiniteAdjustment(&'static str),
    #[error("cannot infer an image format for {0:?}")]
    UnsupportedFormat(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
