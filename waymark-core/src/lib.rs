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

//! Waymark core types
//!
//! Shared data model for the travel memory journal:
//! - **Memory**: a single travel experience (location, date, description, tags)
//! - **MemoryCollection**: every memory plus collection metadata
//! - **JournalConfig**: application configuration with sensible defaults
//! - **JournalError**: error type used across all Waymark crates

pub mod config;
pub mod error;
pub mod memory;

// Re-exports
pub use config::JournalConfig;
pub use error::{JournalError, JournalResult};
pub use memory::{CollectionMetadata, Memory, MemoryCollection, MemoryId};
