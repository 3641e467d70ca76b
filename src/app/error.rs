use thiserror::Error;

/// Failure taxonomy for the two filesystem operations the editor
/// performs. Both display as the underlying message, which is what the
/// error dialogs show the user. A cancelled dialog is not an error and
/// never reaches this type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Read(#[source] std::io::Error),

    #[error("{0}")]
    Write(#[source] std::io::Error),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_display_shows_underlying_message() {
        let err = AppError::Read(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert_eq!(err.to_string(), "file not found");

        let err = AppError::Write(io::Error::new(io::ErrorKind::PermissionDenied, "access denied"));
        assert_eq!(err.to_string(), "access denied");
    }

    #[test]
    fn test_source_preserved() {
        use std::error::Error;
        let err = AppError::Write(io::Error::new(io::ErrorKind::PermissionDenied, "access denied"));
        assert!(err.source().is_some());
    }
}
