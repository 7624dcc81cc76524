//! maison-storage-json
//!
//! Filesystem-backed JSON collaborators: room catalog files and the
//! reservation outbox.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use maison_core::{CatalogService, CoreError, ReservationDispatcher};
use maison_domain::{Confirmation, RoomCatalog};
use thiserror::Error;

const JSON_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Serialization error in {path}: {source}")]
    Serde {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StorageError {
    fn io(path: &Path, source: io::Error) -> Self {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn serde(path: &Path, source: serde_json::Error) -> Self {
        StorageError::Serde {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Reads a JSON array of room entries and validates it.
pub fn load_catalog(path: &Path) -> Result<RoomCatalog, StorageError> {
    let data = fs::read_to_string(path).map_err(|err| StorageError::io(path, err))?;
    let catalog: RoomCatalog =
        serde_json::from_str(&data).map_err(|err| StorageError::serde(path, err))?;
    CatalogService::validate(&catalog)?;
    tracing::debug!(path = %path.display(), rooms = catalog.len(), "room catalog loaded");
    Ok(catalog)
}

/// Writes a catalog as pretty JSON, staging through a temporary file.
pub fn save_catalog(path: &Path, catalog: &RoomCatalog) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(catalog).map_err(|err| StorageError::serde(path, err))?;
    write_atomic(path, &json)
}

/// Drops each confirmation as `<reference>.json` into a directory picked up
/// by the reservation service.
#[derive(Debug, Clone)]
pub struct JsonOutboxDispatcher {
    dir: PathBuf,
}

impl JsonOutboxDispatcher {
    pub fn new(dir: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&dir).map_err(|err| StorageError::io(&dir, err))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, confirmation: &Confirmation) -> PathBuf {
        self.dir.join(format!(
            "{}.{}",
            confirmation.reference().simple(),
            JSON_EXTENSION
        ))
    }

    pub fn write(&self, confirmation: &Confirmation) -> Result<PathBuf, StorageError> {
        let path = self.path_for(confirmation);
        let json = serde_json::to_string_pretty(confirmation)
            .map_err(|err| StorageError::serde(&path, err))?;
        write_atomic(&path, &json)?;
        Ok(path)
    }

    /// Reads back every confirmation in the outbox, oldest submission first.
    pub fn pending(&self) -> Result<Vec<Confirmation>, StorageError> {
        let mut entries = Vec::new();
        let listing = fs::read_dir(&self.dir).map_err(|err| StorageError::io(&self.dir, err))?;
        for entry in listing {
            let path = entry.map_err(|err| StorageError::io(&self.dir, err))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(JSON_EXTENSION) {
                continue;
            }
            let data = fs::read_to_string(&path).map_err(|err| StorageError::io(&path, err))?;
            let confirmation: Confirmation =
                serde_json::from_str(&data).map_err(|err| StorageError::serde(&path, err))?;
            entries.push(confirmation);
        }
        entries.sort_by_key(|confirmation| confirmation.submitted_at());
        Ok(entries)
    }
}

impl ReservationDispatcher for JsonOutboxDispatcher {
    fn dispatch(&self, confirmation: &Confirmation) {
        match self.write(confirmation) {
            Ok(path) => tracing::info!(
                reference = %confirmation.reference(),
                path = %path.display(),
                "reservation written to outbox"
            ),
            Err(err) => tracing::error!(
                reference = %confirmation.reference(),
                error = %err,
                "failed to write reservation to outbox"
            ),
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| StorageError::io(parent, err))?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp).map_err(|err| StorageError::io(&tmp, err))?;
    file.write_all(data.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|err| StorageError::io(&tmp, err))?;
    fs::rename(&tmp, path).map_err(|err| StorageError::io(path, err))?;
    Ok(())
}
