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

//! Collection statistics types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Earliest and latest memory dates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

/// Statistics over the whole memory collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalStats {
    /// Total number of memories
    pub total_memories: usize,
    /// Total tag occurrences across all memories
    pub total_tags: usize,
    /// Number of distinct tags
    pub unique_tags: usize,
    /// Top tags by frequency, most common first (at most 10)
    pub most_common_tags: Vec<(String, usize)>,
    /// Distinct locations, in order of first appearance
    pub locations_visited: Vec<String>,
    /// Span of memory dates, if any memories exist
    pub date_range: Option<DateRange>,
}

impl JournalStats {
    /// Stats for an empty collection
    pub fn empty() -> Self {
        Self {
            total_memories: 0,
            total_tags: 0,
            unique_tags: 0,
            most_common_tags: Vec::new(),
            locations_visited: Vec::new(),
            date_range: None,
        }
    }
}
