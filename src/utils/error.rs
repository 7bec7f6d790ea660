use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileSiftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Failed to copy {} to {}: {reason}", src.display(), dest.display())]
    CopyFailed {
        src: PathBuf,
        dest: PathBuf,
        reason: String,
    },

    #[error("Failed to move {} to {}: {reason}", src.display(), dest.display())]
    MoveFailed {
        src: PathBuf,
        dest: PathBuf,
        reason: String,
    },

    #[error("Failed to delete {}: {reason}", path.display())]
    DeleteFailed { path: PathBuf, reason: String },

    #[error("Failed to rename {} to {}: {reason}", src.display(), dest.display())]
    RenameFailed {
        src: PathBuf,
        dest: PathBuf,
        reason: String,
    },

    #[error("Invalid file size: {0}")]
    InvalidSize(String),

    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    #[error("No folder is open")]
    NoDirectoryOpen,

    #[error("No routine named \"{0}\"")]
    RoutineNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Background task failed: {0}")]
    Task(String),
}

impl FileSiftError {
    /// io::Error를 경로 정보가 담긴 에러로 변환
    pub fn from_io(err: std::io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FileSiftError::PathNotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => FileSiftError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => FileSiftError::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, FileSiftError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};
    use std::path::Path;

    #[test]
    fn test_from_io_maps_not_found() {
        let err = FileSiftError::from_io(Error::from(ErrorKind::NotFound), Path::new("/x"));
        assert!(matches!(err, FileSiftError::PathNotFound { .. }));
    }

    #[test]
    fn test_from_io_maps_permission_denied() {
        let err =
            FileSiftError::from_io(Error::from(ErrorKind::PermissionDenied), Path::new("/x"));
        assert!(matches!(err, FileSiftError::PermissionDenied { .. }));
    }

    #[test]
    fn test_error_messages_include_path() {
        let err = FileSiftError::NotADirectory {
            path: PathBuf::from("/tmp/file.txt"),
        };
        assert_eq!(err.to_string(), "Not a directory: /tmp/file.txt");
    }
}
