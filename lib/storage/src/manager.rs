use chrono::{DateTime, Utc};
use lsmsearch_core::{DataFile, DatasetSource, Error, RecordKind, Result};
use parking_lot::RwLock;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

struct CachedDataset {
    data: Arc<DataFile>,
    loaded_at: DateTime<Utc>,
}

/// Summary of the cached dataset for API responses
#[derive(Debug, Clone, Serialize)]
pub struct StorageStatus {
    pub path: String,
    pub loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<String>,
    pub buildings: usize,
    pub locks: usize,
    pub groups: usize,
    pub media: usize,
}

/// Loads the JSON dataset file and caches the parsed snapshot.
///
/// Readers always receive a whole `Arc<DataFile>`; reloads swap the
/// snapshot under the write lock, so an in-flight search keeps the one
/// it started with.
pub struct StorageManager {
    path: PathBuf,
    cache: RwLock<Option<CachedDataset>>,
}

impl StorageManager {
    /// Create a manager that reads `path` lazily on first load
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cache: RwLock::new(None),
        }
    }

    /// Create a manager and load the dataset immediately
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let manager = Self::new(path);
        manager.load()?;
        Ok(manager)
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cache.read().is_some()
    }

    /// Cached snapshot, reading the file on a cache miss
    pub fn load(&self) -> Result<Arc<DataFile>> {
        if let Some(cached) = self.cache.read().as_ref() {
            return Ok(cached.data.clone());
        }

        let mut cache = self.cache.write();
        // Another reader may have filled the cache while we waited
        if let Some(cached) = cache.as_ref() {
            return Ok(cached.data.clone());
        }

        let data = Arc::new(read_dataset(&self.path)?);
        *cache = Some(CachedDataset {
            data: data.clone(),
            loaded_at: Utc::now(),
        });
        info!("Dataset loaded from {:?}", self.path);
        Ok(data)
    }

    /// Re-read the file and replace the cached snapshot.
    ///
    /// On failure the previous snapshot stays cached.
    pub fn reload(&self) -> Result<Arc<DataFile>> {
        let data = Arc::new(read_dataset(&self.path)?);
        *self.cache.write() = Some(CachedDataset {
            data: data.clone(),
            loaded_at: Utc::now(),
        });
        info!("Dataset reloaded from {:?}", self.path);
        Ok(data)
    }

    /// Drop the cached snapshot; the next load reads the file again
    pub fn invalidate(&self) {
        *self.cache.write() = None;
    }

    pub fn status(&self) -> StorageStatus {
        let cache = self.cache.read();
        let count = |kind: RecordKind| cache.as_ref().map(|c| c.data.count(kind)).unwrap_or(0);

        StorageStatus {
            path: self.path.display().to_string(),
            loaded: cache.is_some(),
            loaded_at: cache.as_ref().map(|c| c.loaded_at.to_rfc3339()),
            buildings: count(RecordKind::Building),
            locks: count(RecordKind::Lock),
            groups: count(RecordKind::Group),
            media: count(RecordKind::Medium),
        }
    }
}

impl DatasetSource for StorageManager {
    fn load(&self) -> Result<Arc<DataFile>> {
        StorageManager::load(self)
    }
}

/// Parse a dataset file; a `null` document is reported as unavailable
pub fn read_dataset(path: &Path) -> Result<DataFile> {
    let text = std::fs::read_to_string(path)?;
    let parsed: Option<DataFile> = serde_json::from_str(&text)?;
    parsed.ok_or_else(|| Error::DatasetUnavailable(format!("{} contains no dataset", path.display())))
}
