use std::io;

use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ComposeError {
    // Validation
    #[error("please enter a valid link")]
    InvalidUrl,
    #[error("please enter a name for the QR code")]
    EmptyLabel,

    // Save
    #[error("a folder must be selected to save the QR code")]
    NoDirectory,
    #[error("{0}")]
    Io(#[from] io::Error),

    // Pipeline
    #[error("could not generate the QR code: {0}")]
    Encoding(#[from] qrcode::types::QrError),
    #[error("could not generate the QR code: {0}")]
    Image(#[from] image::ImageError),
}

impl ComposeError {
    /// True for errors caused by the user's input rather than by the pipeline.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidUrl | Self::EmptyLabel)
    }
}

pub type ComposeResult<T> = Result<T, ComposeError>;

#[cfg(test)]
mod error_tests {
    use std::io;

    use super::ComposeError;

    #[test]
    fn test_io_message_is_verbatim() {
        let err = ComposeError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.to_string(), "denied");
    }

    #[test]
    fn test_is_validation() {
        assert!(ComposeError::InvalidUrl.is_validation());
        assert!(ComposeError::EmptyLabel.is_validation());
        assert!(!ComposeError::NoDirectory.is_validation());
        assert!(!ComposeError::Encoding(qrcode::types::QrError::DataTooLong).is_validation());
    }
}
