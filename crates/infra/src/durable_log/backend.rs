use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tracing::{debug, instrument};

use stockroom_core::{StoreError, StoreResult};

/// Backing resource of a durable log.
///
/// Every call is a scoped acquisition: open, read or write the whole contents,
/// close. No handle is held between calls.
pub trait LogBackend {
    /// Full contents of the resource, or `None` if it does not exist yet.
    fn read(&self) -> StoreResult<Option<String>>;

    /// Replace the full contents of the resource.
    fn write(&self, contents: &str) -> StoreResult<()>;

    /// Human-readable location (for display and diagnostics).
    fn location(&self) -> String;
}

impl<B> LogBackend for Arc<B>
where
    B: LogBackend + ?Sized,
{
    fn read(&self) -> StoreResult<Option<String>> {
        (**self).read()
    }

    fn write(&self, contents: &str) -> StoreResult<()> {
        (**self).write(contents)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// File-backed log resource.
///
/// Writes go to a sibling `*.tmp` file that is then renamed over the target,
/// so a failed save never leaves a half-written log behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(action: &str, path: &Path, err: io::Error) -> StoreError {
        StoreError::persistence(format!("failed to {action} {}: {err}", path.display()))
    }
}

impl LogBackend for FileBackend {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read(&self) -> StoreResult<Option<String>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("log file does not exist");
                return Ok(None);
            }
            Err(err) => return Err(Self::io_error("read", &self.path, err)),
        };

        debug!(bytes = bytes.len(), "read log file");
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| StoreError::format(format!("log is not valid UTF-8: {e}")))
    }

    #[instrument(skip(self, contents), fields(path = %self.path.display(), bytes = contents.len()))]
    fn write(&self, contents: &str) -> StoreResult<()> {
        let staging = self.staging_path();
        if let Err(err) = fs::write(&staging, contents) {
            let _ = fs::remove_file(&staging);
            return Err(Self::io_error("write", &staging, err));
        }

        if let Err(err) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(Self::io_error("replace", &self.path, err));
        }

        debug!("wrote log file");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory log resource for tests/dev.
///
/// Clones share the same contents, so two logs built from clones of one
/// backend see each other's saves the way two logs on one file would.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    contents: Arc<RwLock<Option<String>>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(RwLock::new(Some(contents.into()))),
        }
    }
}

impl LogBackend for InMemoryBackend {
    fn read(&self) -> StoreResult<Option<String>> {
        let contents = self
            .contents
            .read()
            .map_err(|_| StoreError::persistence("lock poisoned"))?;
        Ok(contents.clone())
    }

    fn write(&self, contents: &str) -> StoreResult<()> {
        let mut slot = self
            .contents
            .write()
            .map_err(|_| StoreError::persistence("lock poisoned"))?;
        *slot = Some(contents.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
