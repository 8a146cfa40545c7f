// Copyright 2025 Waymark Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! JSON file store for the memory collection

use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use waymark_core::{JournalError, JournalResult, Memory, MemoryCollection, MemoryId};

/// File name of the persisted collection
const MEMORIES_FILE: &str = "memories.json";
/// Subdirectory holding rotated backups
const BACKUPS_DIR: &str = "backups";

/// Local JSON storage for travel memories.
///
/// The whole collection lives in a single `memories.json` under the storage
/// directory. Saves back up the previous file under `backups/` and write
/// through a temporary sibling renamed into place, so a crash mid-write
/// never leaves a truncated collection behind.
#[derive(Debug)]
pub struct JournalStore {
    storage_dir: PathBuf,
    memories_file: PathBuf,
    backups_dir: PathBuf,
    max_backups: usize,
}

impl JournalStore {
    /// Open a store rooted at `storage_dir`, creating the directory
    /// structure if needed.
    pub fn open(storage_dir: impl AsRef<Path>, max_backups: usize) -> JournalResult<Self> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        let memories_file = storage_dir.join(MEMORIES_FILE);
        let backups_dir = storage_dir.join(BACKUPS_DIR);

        fs::create_dir_all(&storage_dir)?;
        fs::create_dir_all(&backups_dir)?;

        Ok(Self {
            storage_dir,
            memories_file,
            backups_dir,
            max_backups,
        })
    }

    /// Directory this store persists into
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Load the full collection. A missing file yields an empty collection.
    pub fn load(&self) -> JournalResult<MemoryCollection> {
        if !self.memories_file.exists() {
            return Ok(MemoryCollection::new());
        }

        let content = fs::read_to_string(&self.memories_file)?;
        let collection: MemoryCollection = serde_json::from_str(&content).map_err(|e| {
            JournalError::Serialization(format!(
                "invalid JSON in {}: {}",
                self.memories_file.display(),
                e
            ))
        })?;

        debug!(
            memories = collection.len(),
            file = %self.memories_file.display(),
            "loaded memory collection"
        );
        Ok(collection)
    }

    /// Persist the collection: back up the existing file, write atomically,
    /// then prune old backups.
    pub fn save(&self, collection: &mut MemoryCollection) -> JournalResult<()> {
        if self.memories_file.exists() {
            self.create_backup()?;
        }

        collection.metadata.total_memories = collection.memories.len();
        collection.metadata.updated_at = Utc::now();

        let content = serde_json::to_string_pretty(collection)?;

        let temp_file = self.memories_file.with_extension("tmp");
        if let Err(e) = fs::write(&temp_file, &content).and_then(|_| {
            fs::rename(&temp_file, &self.memories_file)
        }) {
            // Never leave a stale temp file behind
            let _ = fs::remove_file(&temp_file);
            return Err(JournalError::Storage(format!(
                "failed to write {}: {}",
                self.memories_file.display(),
                e
            )));
        }

        self.prune_backups()?;

        debug!(
            memories = collection.len(),
            file = %self.memories_file.display(),
            "saved memory collection"
        );
        Ok(())
    }

    /// Add a single memory and persist the collection
    pub fn add_memory(&self, memory: Memory) -> JournalResult<()> {
        let mut collection = self.load()?;
        collection.add_memory(memory);
        self.save(&mut collection)
    }

    /// Look up a memory by ID
    pub fn get_memory(&self, id: &MemoryId) -> JournalResult<Option<Memory>> {
        let collection = self.load()?;
        Ok(collection.get_memory_by_id(id).cloned())
    }

    /// All stored memories
    pub fn list_memories(&self) -> JournalResult<Vec<Memory>> {
        Ok(self.load()?.memories)
    }

    fn create_backup(&self) -> JournalResult<()> {
        let timestamp = Utc::now().format("%Y%m%d-%H%M%S");
        let backup_file = self.backups_dir.join(format!("memories-{timestamp}.json"));
        fs::copy(&self.memories_file, &backup_file)?;
        debug!(backup = %backup_file.display(), "created backup");
        Ok(())
    }

    /// Remove old backups, keeping only the `max_backups` most recent by
    /// modification time.
    fn prune_backups(&self) -> JournalResult<()> {
        let mut backups: Vec<(PathBuf, std::time::SystemTime)> = Vec::new();

        for entry in fs::read_dir(&self.backups_dir)? {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !name.starts_with("memories-") || !name.ends_with(".json") {
                continue;
            }
            let modified = entry.metadata()?.modified()?;
            backups.push((path, modified));
        }

        backups.sort_by(|a, b| b.1.cmp(&a.1));

        for (path, _) in backups.into_iter().skip(self.max_backups) {
            if let Err(e) = fs::remove_file(&path) {
                warn!(backup = %path.display(), error = %e, "failed to remove old backup");
            }
        }

        Ok(())
    }
}
