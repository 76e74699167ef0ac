// ABOUTME: Custom error types for termimg with user-friendly messages
// ABOUTME: Distinguishes unreadable files, undecodable images, and external encoder failures

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TermImgError {
    #[error("Failed to read image file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {}: {source}", .path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode PNG: {0}")]
    ImageEncode(#[source] image::ImageError),

    #[error("Failed to start `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Image task failed: {0}")]
    Task(String),
}

impl TermImgError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            TermImgError::FileRead { .. } => Some("Check that the path exists and is readable"),
            TermImgError::ImageDecode { .. } => {
                Some("Supported formats: PNG, JPEG, GIF, WebP, TIFF, BMP")
            }
            TermImgError::CommandSpawn { .. } => {
                Some("Install libsixel so that `img2sixel` is on your PATH")
            }
            _ => None,
        }
    }

    pub(crate) fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TermImgError::FileRead {
            path: path.into(),
            source,
        }
    }
}

impl From<tokio::task::JoinError> for TermImgError {
    fn from(err: tokio::task::JoinError) -> Self {
        TermImgError::Task(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_messages() {
        let err = TermImgError::file_read(
            "/tmp/missing.png",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to read image file /tmp/missing.png: No such file or directory"
        );

        let err = TermImgError::CommandFailed {
            command: "img2sixel \"a.png\"".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "`img2sixel \"a.png\"` exited with exit status: 1: boom"
        );

        assert_eq!(
            TermImgError::Task("cancelled".to_string()).to_string(),
            "Image task failed: cancelled"
        );
    }

    #[test]
    fn test_help_text() {
        let err = TermImgError::file_read("x", io::Error::other("nope"));
        assert_eq!(
            err.help_text(),
            Some("Check that the path exists and is readable")
        );

        let err = TermImgError::CommandSpawn {
            command: "img2sixel".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.help_text().unwrap().contains("img2sixel"));

        assert_eq!(TermImgError::Task("x".to_string()).help_text(), None);
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error;

        let err = TermImgError::file_read("x", io::Error::other("inner"));
        assert_eq!(err.source().unwrap().to_string(), "inner");
    }
}
