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

//! Journal configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the journal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Directory holding memories.json and backups/
    pub storage_dir: PathBuf,

    /// Maximum number of backup files to retain
    pub backup_count: usize,

    /// Maximum memories the journal will hold
    pub max_memories: usize,

    /// Configuration format version
    pub version: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        let storage_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".waymark");

        Self {
            storage_dir,
            backup_count: 5,
            max_memories: 10_000,
            version: "1.0".to_string(),
        }
    }
}

impl JournalConfig {
    /// Configuration rooted at a custom storage directory
    pub fn with_storage_dir(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JournalConfig::default();
        assert_eq!(config.backup_count, 5);
        assert_eq!(config.max_memories, 10_000);
        assert!(config.storage_dir.ends_with(".waymark"));
    }

    #[test]
    fn test_custom_storage_dir() {
        let config = JournalConfig::with_storage_dir("/tmp/journal");
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/journal"));
        assert_eq!(config.backup_count, 5);
    }
}
