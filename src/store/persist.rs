use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::STORE_VERSION;
use crate::store::{InMemoryMapStore, StoreError};

#[derive(Serialize, Deserialize)]
struct StoreSnapshot {
    version: u32,
    store: InMemoryMapStore,
}

impl InMemoryMapStore {
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let snapshot = StoreSnapshot {
            version: STORE_VERSION,
            store: self.clone(),
        };
        let writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer_pretty(writer, &snapshot)?;
        info!(path = %path.as_ref().display(), "store saved");
        Ok(())
    }

    /// Loads a snapshot; a missing file is an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no store file, starting empty");
            return Ok(Self::new());
        }
        let reader = BufReader::new(File::open(path)?);
        let snapshot: StoreSnapshot = serde_json::from_reader(reader)?;
        if snapshot.version != STORE_VERSION {
            return Err(StoreError::IncompatibleVersion {
                expected: STORE_VERSION,
                found: snapshot.version,
            });
        }
        Ok(snapshot.store)
    }
}
