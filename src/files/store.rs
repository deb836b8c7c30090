//! Whole-file reads and writes against the configured directory

use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Permissions for files created by POST.
#[cfg(unix)]
const CREATE_MODE: u32 = 0o600;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The name would resolve outside the root directory
    #[error("file name escapes the store root: {0}")]
    Forbidden(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reads and writes files below a fixed root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory prefix, used verbatim
    root: String,
}

impl FileStore {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve `name` to `root + "/" + name`.
    ///
    /// Names containing `..`, a leading `/` or a drive prefix are rejected.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, StoreError> {
        let escapes = Path::new(name).components().any(|component| {
            matches!(
                component,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });

        if escapes {
            return Err(StoreError::Forbidden(name.to_string()));
        }

        Ok(PathBuf::from(format!("{}/{}", self.root, name)))
    }

    /// Read the whole file.
    pub async fn read(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.resolve(name)?;
        let contents = fs::read(&path).await?;

        tracing::debug!(path = %path.display(), bytes = contents.len(), "Read file");
        Ok(contents)
    }

    /// Create or truncate the file and write `contents` to it.
    pub async fn write(&self, name: &str, contents: &[u8]) -> Result<(), StoreError> {
        let path = self.resolve(name)?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(CREATE_MODE);

        let mut file = options.open(&path).await?;
        file.write_all(contents).await?;
        file.flush().await?;

        tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_joins_with_slash() {
        let store = FileStore::new("/tmp/data");
        assert_eq!(
            store.resolve("a/b.txt").unwrap(),
            PathBuf::from("/tmp/data/a/b.txt")
        );
    }

    #[test]
    fn resolve_rejects_parent_components() {
        let store = FileStore::new("/tmp/data");
        assert!(matches!(
            store.resolve("../etc/passwd"),
            Err(StoreError::Forbidden(_))
        ));
        assert!(matches!(
            store.resolve("a/../../b"),
            Err(StoreError::Forbidden(_))
        ));
    }

    #[test]
    fn resolve_rejects_absolute_names() {
        let store = FileStore::new("/tmp/data");
        assert!(matches!(
            store.resolve("/etc/passwd"),
            Err(StoreError::Forbidden(_))
        ));
    }
}
