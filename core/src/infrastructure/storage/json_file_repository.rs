use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::domain::{
    common::{StorageConfig, entities::app_errors::CoreError},
    product_analysis::entities::ProductAnalysis,
    profile::entities::UserProfile,
    storage::ports::ClientStateRepository,
};

pub const HISTORY_FILE: &str = "scanned_history.json";
pub const PROFILE_FILE: &str = "user_profile.json";

/// Stores each record as a JSON document in the data directory.
///
/// Writes are serialized; clones share the same write lock.
#[derive(Debug, Clone)]
pub struct JsonFileStateRepository {
    data_dir: PathBuf,
    write_lock: Arc<Mutex<()>>,
    write_seq: Arc<AtomicU64>,
}

impl JsonFileStateRepository {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            data_dir: PathBuf::from(&config.data_dir),
            write_lock: Arc::default(),
            write_seq: Arc::default(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    async fn read_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<Option<T>, CoreError> {
        let path = self.data_dir.join(file_name);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No stored state yet");
                return Ok(None);
            }
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                return Err(CoreError::PersistenceReadError(e.to_string()));
            }
        };

        serde_json::from_slice(&bytes).map(Some).map_err(|e| {
            error!("Failed to parse {}: {}", path.display(), e);
            CoreError::PersistenceReadError(e.to_string())
        })
    }

    /// Writes a uniquely named sibling temp file and renames it over the record.
    async fn write_json<T: Serialize + ?Sized>(&self, file_name: &str, value: &T) -> Result<(), CoreError> {
        let path = self.data_dir.join(file_name);
        let seq = self.write_seq.fetch_add(1, Ordering::Relaxed);
        let tmp_path = self
            .data_dir
            .join(format!("{}.{}.{}.tmp", file_name, std::process::id(), seq));

        let bytes = serde_json::to_vec_pretty(value)
            .map_err(|e| CoreError::PersistenceWriteError(e.to_string()))?;

        let _guard = self.write_lock.lock().await;
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| CoreError::PersistenceWriteError(e.to_string()))?;
        tokio::fs::write(&tmp_path, bytes)
            .await
            .map_err(|e| CoreError::PersistenceWriteError(e.to_string()))?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &path).await {
            error!("Failed to write {}: {}", path.display(), e);
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(CoreError::PersistenceWriteError(e.to_string()));
        }

        Ok(())
    }
}

impl ClientStateRepository for JsonFileStateRepository {
    async fn load_history(&self) -> Result<Vec<ProductAnalysis>, CoreError> {
        Ok(self.read_json(HISTORY_FILE).await?.unwrap_or_default())
    }

    async fn save_history(&self, entries: &[ProductAnalysis]) -> Result<(), CoreError> {
        self.write_json(HISTORY_FILE, entries).await
    }

    async fn load_profile(&self) -> Result<Option<UserProfile>, CoreError> {
        self.read_json(PROFILE_FILE).await
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<(), CoreError> {
        self.write_json(PROFILE_FILE, profile).await
    }
}
