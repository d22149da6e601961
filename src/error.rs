use thiserror::Error;

/// Errors returned by the underglow controller
///
/// `E` is the error type of the [`crate::OutputSink`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnderglowError<E> {
    /// The LED strip was not found at startup
    #[error("LED strip is not available")]
    NotReady,

    /// The LED strip rejected a frame
    #[error("failed to push frame to LED strip: {0:?}")]
    Io(E),
}
