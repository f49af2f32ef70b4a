use thiserror::Error;

pub type CarouselResult<T> = Result<T, CarouselError>;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid render frame: {0}")]
    InvalidFrame(String),

    #[error("invalid listener: {0}")]
    InvalidListener(String),

    #[error("listener with id `{0}` is already registered")]
    DuplicateListener(String),
}
