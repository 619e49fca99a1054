use crate::error::BotError;
use crate::models::signal::Signal;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Holds the single "last signal sent" marker.
#[async_trait]
pub trait SignalStore: Send + Sync {
    /// `Ok(None)` when no signal has been recorded yet.
    async fn load(&self) -> Result<Option<Signal>, BotError>;

    async fn save(&self, signal: Signal) -> Result<(), BotError>;
}

/// Marker stored as a plain string (`BUY`, `SELL`, `WAIT`) in a text file.
pub struct FileSignalStore {
    path: PathBuf,
}

impl FileSignalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SignalStore for FileSignalStore {
    async fn load(&self) -> Result<Option<Signal>, BotError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No signal marker yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<Signal>() {
            Ok(signal) => Ok(Some(signal)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable signal marker");
                Ok(None)
            }
        }
    }

    async fn save(&self, signal: Signal) -> Result<(), BotError> {
        // Write-then-rename replaces the marker atomically.
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, signal.as_str()).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), signal = %signal, "Signal marker saved");
        Ok(())
    }
}

/// In-process marker, lost on restart.
#[derive(Default)]
pub struct MemorySignalStore {
    marker: RwLock<Option<Signal>>,
}

impl MemorySignalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marker(signal: Signal) -> Self {
        Self {
            marker: RwLock::new(Some(signal)),
        }
    }
}

#[async_trait]
impl SignalStore for MemorySignalStore {
    async fn load(&self) -> Result<Option<Signal>, BotError> {
        Ok(*self.marker.read().await)
    }

    async fn save(&self, signal: Signal) -> Result<(), BotError> {
        *self.marker.write().await = Some(signal);
        Ok(())
    }
}
