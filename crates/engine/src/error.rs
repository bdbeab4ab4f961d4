use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Error: File '{}' not found.", .path.display())]
    NotFound { path: PathBuf },

    #[error("Error: Could not decode file '{}' as UTF-8.", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Error: Failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Classify an I/O failure on `path`, keeping `NotFound` distinct.
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_path() {
        let err = ScanError::from_io(
            PathBuf::from("./does-not-exist.ino"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, ScanError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            "Error: File './does-not-exist.ino' not found."
        );
    }

    #[test]
    fn other_io_errors_are_file_read() {
        let err = ScanError::from_io(
            PathBuf::from("weather.ino"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, ScanError::FileRead { .. }));
        assert!(err.to_string().contains("weather.ino"));
    }
}
