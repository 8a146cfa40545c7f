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

//! Waymark journal service
//!
//! High-level operations over the store and the tag extractor: adding
//! memories with automatic tagging, listing and searching, re-tagging, and
//! collection statistics.

pub mod service;
pub mod stats;

// Re-exports
pub use service::JournalService;
pub use stats::{DateRange, JournalStats};
