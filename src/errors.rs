use thiserror::Error;

pub type Result<T> = std::result::Result<T, CycleError>;

#[derive(Debug, Error)]
pub enum CycleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("the display server denied the keyboard grab")]
    GrabDenied,
    #[error("the keyboard event stream closed during a gesture")]
    EventStreamClosed,
    #[error("cycling requires at least one modifier key")]
    NoModifierKeys,
}
