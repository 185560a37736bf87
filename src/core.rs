use thiserror::Error;

use crate::vfs::Handle;

/// The file system capability set consumed by static-file-serving
/// collaborators such as an HTTP handler.
///
/// The only entry point is [`FileSystem::open`]; reading, seeking, metadata
/// and directory listings all go through the returned [`Handle`].
pub trait FileSystem {
    /// Opens the file or directory at `path`.
    ///
    /// `path` must be absolute and slash-separated, exactly as the keys of
    /// the backing content map. Fails with [`FsError::NotFound`] when the
    /// path is neither a file nor a synthesized directory.
    fn open(&self, path: &str) -> Result<Handle<'_>>;
}

/// Errors raised by file system lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// The path is neither a file key nor a synthesized directory.
    #[error("{path} does not exist")]
    NotFound {
        /// The path that was looked up.
        path: String,
    },
}

impl FsError {
    /// Returns `true` for lookup misses, which an HTTP collaborator
    /// translates into a 404 response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, FsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = FsError::NotFound {
            path: "/missing".to_string(),
        };
        assert_eq!(err.to_string(), "/missing does not exist");
        assert!(err.is_not_found());
    }
}
