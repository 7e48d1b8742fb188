use std::{io::ErrorKind, marker::PhantomData, path::{Path, PathBuf}};
use tokio::{fs, sync::Mutex};
use tracing::warn;

use crate::errors::ServiceError;

/// JSON file holding a whole collection as one array document.
///
/// Every call reloads the file; mutations rewrite it wholesale. A missing or
/// unparsable file reads as an empty collection. The internal mutex is held
/// across each load/mutate/save cycle, so mutations through the same store
/// never lose each other's writes. Other processes writing the same file are
/// not coordinated.
pub struct JsonArrayStore<T> {
    file_path: PathBuf,
    lock: Mutex<()>,
    _items: PhantomData<fn() -> T>,
}

impl<T> JsonArrayStore<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into(), lock: Mutex::new(()), _items: PhantomData }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    async fn read_items(&self) -> Result<Vec<T>, ServiceError> {
        let bytes = match fs::read(&self.file_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ServiceError::Db(format!("read {}: {e}", self.file_path.display()))),
        };
        match serde_json::from_slice(&bytes) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "unreadable collection document; treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn write_items(&self, items: &[T]) -> Result<(), ServiceError> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| ServiceError::Db(e.to_string()))?;
            }
        }
        let data = serde_json::to_vec_pretty(items).map_err(|e| ServiceError::Db(e.to_string()))?;

        let mut tmp = self.file_path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, data).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        fs::rename(&tmp, &self.file_path).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }

    /// Load the current collection.
    pub async fn load(&self) -> Result<Vec<T>, ServiceError> {
        let _guard = self.lock.lock().await;
        self.read_items().await
    }

    /// Replace the whole collection.
    pub async fn save(&self, items: &[T]) -> Result<(), ServiceError> {
        let _guard = self.lock.lock().await;
        self.write_items(items).await
    }

    /// Load, apply `f`, and persist. Nothing is written when `f` fails.
    pub async fn update<F, R>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, ServiceError>,
    {
        let _guard = self.lock.lock().await;
        let mut items = self.read_items().await?;
        let out = f(&mut items)?;
        self.write_items(&items).await?;
        Ok(out)
    }
}
