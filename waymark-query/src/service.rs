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

//! Journal service orchestrating storage and tag extraction

use crate::stats::{DateRange, JournalStats};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;
use waymark_core::{JournalResult, Memory, MemoryId};
use waymark_storage::JournalStore;
use waymark_tags::TagExtractor;

/// Number of entries reported in `most_common_tags`
const TOP_TAG_COUNT: usize = 10;

/// High-level service for managing travel memories.
///
/// Owns the JSON store and the tag extractor; every mutation goes through
/// automatic tag extraction so stored memories are always tagged.
pub struct JournalService {
    store: JournalStore,
    extractor: TagExtractor,
}

impl JournalService {
    /// Create a service persisting under `storage_dir`
    pub fn new(storage_dir: impl AsRef<Path>, max_backups: usize) -> JournalResult<Self> {
        Ok(Self {
            store: JournalStore::open(storage_dir, max_backups)?,
            extractor: TagExtractor::new(),
        })
    }

    /// The underlying tag extractor
    pub fn extractor(&self) -> &TagExtractor {
        &self.extractor
    }

    /// Add a new memory with automatic tag extraction.
    ///
    /// Tags are the manual tags followed by the extracted ones, deduplicated
    /// preserving order (manual tags take precedence in ordering).
    pub fn add_memory(
        &self,
        location: &str,
        date: NaiveDate,
        description: &str,
        manual_tags: &[String],
    ) -> JournalResult<MemoryId> {
        let auto_tags = self.extractor.extract_tags(description);
        let tags = merge_tags(manual_tags, &auto_tags);

        let memory = Memory::new(location, date, description)?.tags(tags);
        let id = memory.id.clone();

        self.store.add_memory(memory)?;
        info!(%id, location, "added memory");
        Ok(id)
    }

    /// Look up a memory by ID
    pub fn get_memory(&self, id: &MemoryId) -> JournalResult<Option<Memory>> {
        self.store.get_memory(id)
    }

    /// List memories chronologically (oldest first), optionally filtered to
    /// those carrying any of `tag_filter`, optionally limited.
    pub fn list_memories(
        &self,
        limit: Option<usize>,
        tag_filter: &[String],
    ) -> JournalResult<Vec<Memory>> {
        let mut memories = self.store.list_memories()?;
        memories.sort_by_key(|m| m.date);

        if !tag_filter.is_empty() {
            memories.retain(|m| m.tags.iter().any(|t| tag_filter.contains(t)));
        }

        if let Some(limit) = limit {
            memories.truncate(limit);
        }

        Ok(memories)
    }

    /// Re-extract tags for an existing memory, merging them into its current
    /// tag list. Returns the updated memory, or `None` if the ID is unknown.
    pub fn retag_memory(&self, id: &MemoryId) -> JournalResult<Option<Memory>> {
        let mut collection = self.store.load()?;

        let Some(memory) = collection.get_memory_by_id_mut(id) else {
            return Ok(None);
        };

        let auto_tags = self.extractor.extract_tags(&memory.description);
        let tags = merge_tags(&memory.tags, &auto_tags);
        memory.set_tags(tags);
        let updated = memory.clone();

        self.store.save(&mut collection)?;
        info!(%id, tags = updated.tags.len(), "re-tagged memory");
        Ok(Some(updated))
    }

    /// Re-process every memory carrying fewer than `min_tags` tags.
    /// Returns the number of memories processed.
    pub fn retag_sparse(&self, min_tags: usize) -> JournalResult<usize> {
        let memories = self.store.list_memories()?;
        let mut processed = 0;

        for memory in memories {
            if memory.tags.len() < min_tags {
                self.retag_memory(&memory.id)?;
                processed += 1;
            }
        }

        Ok(processed)
    }

    /// The memory with the most tags, if any exist. Ties go to the earliest
    /// stored memory.
    pub fn top_memory(&self) -> JournalResult<Option<Memory>> {
        let memories = self.store.list_memories()?;
        Ok(memories.into_iter().fold(None, |best, m| match best {
            Some(b) if m.tags.len() <= b.tags.len() => Some(b),
            _ => Some(m),
        }))
    }

    /// Statistics over the whole collection
    pub fn statistics(&self) -> JournalResult<JournalStats> {
        let memories = self.store.list_memories()?;
        if memories.is_empty() {
            return Ok(JournalStats::empty());
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut tag_order: Vec<&str> = Vec::new();
        let mut total_tags = 0;
        for memory in &memories {
            for tag in &memory.tags {
                total_tags += 1;
                let count = counts.entry(tag.as_str()).or_insert(0);
                if *count == 0 {
                    tag_order.push(tag.as_str());
                }
                *count += 1;
            }
        }

        // Stable sort keeps first-seen order among equal counts
        let mut most_common: Vec<(String, usize)> = tag_order
            .iter()
            .map(|t| (t.to_string(), counts[t]))
            .collect();
        most_common.sort_by(|a, b| b.1.cmp(&a.1));
        most_common.truncate(TOP_TAG_COUNT);

        let mut seen = HashSet::new();
        let locations_visited: Vec<String> = memories
            .iter()
            .map(|m| m.location.clone())
            .filter(|l| seen.insert(l.clone()))
            .collect();

        let earliest = memories.iter().map(|m| m.date).min();
        let latest = memories.iter().map(|m| m.date).max();
        let date_range = earliest
            .zip(latest)
            .map(|(earliest, latest)| DateRange { earliest, latest });

        Ok(JournalStats {
            total_memories: memories.len(),
            total_tags,
            unique_tags: counts.len(),
            most_common_tags: most_common,
            locations_visited,
            date_range,
        })
    }

    /// Memories whose description contains `query` (case-insensitive)
    pub fn search_descriptions(&self, query: &str) -> JournalResult<Vec<Memory>> {
        let query = query.to_lowercase();
        let mut memories = self.store.list_memories()?;
        memories.retain(|m| m.description.to_lowercase().contains(&query));
        Ok(memories)
    }

    /// Memories whose location contains `query` (case-insensitive)
    pub fn search_locations(&self, query: &str) -> JournalResult<Vec<Memory>> {
        let query = query.to_lowercase();
        let mut memories = self.store.list_memories()?;
        memories.retain(|m| m.location.to_lowercase().contains(&query));
        Ok(memories)
    }
}

/// Deduplicate `primary` followed by `secondary`, preserving first-seen order
fn merge_tags(primary: &[String], secondary: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    primary
        .iter()
        .chain(secondary.iter())
        .filter(|t| seen.insert(t.to_string()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service(dir: &Path) -> JournalService {
        JournalService::new(dir, 5).unwrap()
    }

    #[test]
    fn test_add_memory_extracts_tags() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path());

        let id = svc
            .add_memory(
                "Paris",
                date(2024, 6, 15),
                "Had coffee at a restaurant, then visited the museum",
                &[],
            )
            .unwrap();

        let memory = svc.get_memory(&id).unwrap().unwrap();
        assert!(memory.tags.contains(&"coffee".to_string()));
        assert!(memory.tags.contains(&"restaurant".to_string()));
        assert!(memory.tags.contains(&"museum".to_string()));
    }

    #[test]
    fn test_manual_tags_come_first() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path());

        let id = svc
            .add_memory(
                "Barcelona",
                date(2024, 6, 16),
                "Gaudi architecture tour",
                &["gaudi".to_string(), "architecture".to_string()],
            )
            .unwrap();

        let memory = svc.get_memory(&id).unwrap().unwrap();
        assert_eq!(memory.tags[0], "gaudi");
        assert_eq!(memory.tags[1], "architecture");
        // "architecture" extracted too, but not duplicated
        let count = memory
            .tags
            .iter()
            .filter(|t| t.as_str() == "architecture")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_list_is_chronological_with_filter_and_limit() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path());

        svc.add_memory("B", date(2024, 5, 2), "museum day", &[]).unwrap();
        svc.add_memory("A", date(2024, 5, 1), "beach day", &[]).unwrap();
        svc.add_memory("C", date(2024, 5, 3), "another museum", &[]).unwrap();

        let all = svc.list_memories(None, &[]).unwrap();
        let locations: Vec<_> = all.iter().map(|m| m.location.as_str()).collect();
        assert_eq!(locations, vec!["A", "B", "C"]);

        let museums = svc
            .list_memories(None, &["museum".to_string()])
            .unwrap();
        assert_eq!(museums.len(), 2);

        let limited = svc.list_memories(Some(1), &[]).unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].location, "A");
    }

    #[test]
    fn test_retag_memory_merges_into_existing() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path());

        let id = svc
            .add_memory("Rome", date(2024, 4, 1), "wine with dinner", &["evening".to_string()])
            .unwrap();

        let updated = svc.retag_memory(&id).unwrap().unwrap();
        assert_eq!(updated.tags[0], "evening");
        assert!(updated.tags.contains(&"wine".to_string()));
        assert!(updated.tags.contains(&"dinner".to_string()));

        let missing = MemoryId::from_string("no-such-id".to_string());
        assert!(svc.retag_memory(&missing).unwrap().is_none());
    }

    #[test]
    fn test_retag_sparse_counts_processed() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path());

        // Plenty of tags
        svc.add_memory("Paris", date(2024, 1, 1), "restaurant wine museum art", &[])
            .unwrap();
        // No extractable tags
        svc.add_memory("Nowhere", date(2024, 1, 2), "an uneventful afternoon", &[])
            .unwrap();

        let processed = svc.retag_sparse(2).unwrap();
        assert_eq!(processed, 1);
    }

    #[test]
    fn test_top_memory() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path());
        assert!(svc.top_memory().unwrap().is_none());

        svc.add_memory("A", date(2024, 1, 1), "quiet walk", &[]).unwrap();
        svc.add_memory("B", date(2024, 1, 2), "restaurant wine museum art beach", &[])
            .unwrap();

        let top = svc.top_memory().unwrap().unwrap();
        assert_eq!(top.location, "B");
    }

    #[test]
    fn test_statistics() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path());
        assert_eq!(svc.statistics().unwrap().total_memories, 0);

        svc.add_memory("Paris", date(2024, 2, 1), "museum and art", &[]).unwrap();
        svc.add_memory("Paris", date(2024, 2, 3), "more art and wine", &[]).unwrap();
        svc.add_memory("Lyon", date(2024, 2, 2), "wine tasting", &[]).unwrap();

        let stats = svc.statistics().unwrap();
        assert_eq!(stats.total_memories, 3);
        assert_eq!(stats.locations_visited, vec!["Paris", "Lyon"]);
        assert_eq!(
            stats.date_range,
            Some(DateRange {
                earliest: date(2024, 2, 1),
                latest: date(2024, 2, 3),
            })
        );
        // "art" and "wine" both appear twice and lead the ranking
        let top: Vec<&str> = stats
            .most_common_tags
            .iter()
            .take(2)
            .map(|(t, _)| t.as_str())
            .collect();
        assert!(top.contains(&"art"));
        assert!(top.contains(&"wine"));
    }

    #[test]
    fn test_search() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path());

        svc.add_memory("Kyoto", date(2024, 3, 1), "Tea ceremony in a temple", &[])
            .unwrap();
        svc.add_memory("Tokyo", date(2024, 3, 2), "Ramen at midnight", &[]).unwrap();

        let by_text = svc.search_descriptions("TEA").unwrap();
        assert_eq!(by_text.len(), 1);
        assert_eq!(by_text[0].location, "Kyoto");

        let by_location = svc.search_locations("kyo").unwrap();
        assert_eq!(by_location.len(), 2);

        assert!(svc.search_descriptions("glacier").unwrap().is_empty());
    }

    #[test]
    fn test_merge_tags_order() {
        let merged = merge_tags(
            &["b".to_string(), "a".to_string()],
            &["a".to_string(), "c".to_string()],
        );
        assert_eq!(merged, vec!["b", "a", "c"]);
    }
}
