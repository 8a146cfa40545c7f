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

//! Memory types
//!
//! Memories are the atomic unit of the journal. Each one records a single
//! travel experience: where it happened, when, a free-text description, and
//! the tags (manual plus extracted) attached to it.

use crate::error::{JournalError, JournalResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Collection format version written into metadata
pub const COLLECTION_VERSION: &str = "1.0";

/// Unique identifier for a memory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryId(pub String);

impl MemoryId {
    /// Generate a new unique ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from an existing string
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for MemoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MemoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single travel memory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memory {
    /// Unique memory ID
    pub id: MemoryId,
    /// Where the memory took place
    pub location: String,
    /// When the memory occurred
    pub date: NaiveDate,
    /// Free-text description of the experience
    pub description: String,
    /// Tags attached to this memory (manual and extracted)
    #[serde(default)]
    pub tags: Vec<String>,
    /// When the memory was created
    pub created_at: DateTime<Utc>,
    /// When the memory was last updated
    pub updated_at: DateTime<Utc>,
}

impl Memory {
    /// Create a new memory.
    ///
    /// Location and description must be non-blank; both are trimmed before
    /// storage. Timestamps are stamped automatically.
    pub fn new(
        location: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> JournalResult<Self> {
        let location = location.into();
        let description = description.into();

        if location.trim().is_empty() {
            return Err(JournalError::Validation(
                "Location cannot be empty".to_string(),
            ));
        }
        if description.trim().is_empty() {
            return Err(JournalError::Validation(
                "Description cannot be empty".to_string(),
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id: MemoryId::new(),
            location: location.trim().to_string(),
            date,
            description: description.trim().to_string(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Set tags
    pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(|t| t.into()).collect();
        self
    }

    /// Add a single tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Replace the tag list and bump the updated timestamp
    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
        self.updated_at = Utc::now();
    }
}

/// Metadata tracked alongside the collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionMetadata {
    /// Collection format version
    pub version: String,
    /// When the collection was first created
    pub created_at: DateTime<Utc>,
    /// When the collection was last written
    pub updated_at: DateTime<Utc>,
    /// Number of memories in the collection
    pub total_memories: usize,
}

impl Default for CollectionMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            version: COLLECTION_VERSION.to_string(),
            created_at: now,
            updated_at: now,
            total_memories: 0,
        }
    }
}

/// Every memory in the journal plus collection metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryCollection {
    /// All stored memories
    #[serde(default)]
    pub memories: Vec<Memory>,
    /// Collection metadata, kept in sync on mutation
    #[serde(default)]
    pub metadata: CollectionMetadata,
}

impl Default for MemoryCollection {
    fn default() -> Self {
        Self {
            memories: Vec::new(),
            metadata: CollectionMetadata::default(),
        }
    }
}

impl MemoryCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memories in the collection
    pub fn len(&self) -> usize {
        self.memories.len()
    }

    /// Whether the collection holds no memories
    pub fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }

    /// Add a memory and update metadata
    pub fn add_memory(&mut self, memory: Memory) {
        self.memories.push(memory);
        self.metadata.total_memories = self.memories.len();
        self.metadata.updated_at = Utc::now();
    }

    /// Look up a memory by ID
    pub fn get_memory_by_id(&self, id: &MemoryId) -> Option<&Memory> {
        self.memories.iter().find(|m| m.id == *id)
    }

    /// Look up a memory by ID, mutably
    pub fn get_memory_by_id_mut(&mut self, id: &MemoryId) -> Option<&mut Memory> {
        self.memories.iter_mut().find(|m| m.id == *id)
    }
}
