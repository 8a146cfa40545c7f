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

//! Keyword matching and the extraction API

use crate::taxonomy::Taxonomy;
use crate::text::normalize;
use crate::variants::variants;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Extracted tags grouped by category, in taxonomy declaration order.
/// Categories without matches are omitted.
pub type CategorizedTags = Vec<(String, Vec<String>)>;

/// Word-boundary patterns for one keyword: the exact form plus its
/// morphological variants, all compiled once at construction.
struct KeywordPatterns {
    exact: Regex,
    variants: Vec<Regex>,
}

/// Rule-based tag extractor.
///
/// Holds the taxonomy, the keyword -> categories reverse index, and the
/// precompiled match patterns. Immutable after construction.
pub struct TagExtractor {
    taxonomy: Taxonomy,
    reverse_index: HashMap<String, Vec<String>>,
    patterns: HashMap<String, KeywordPatterns>,
}

impl Default for TagExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TagExtractor {
    /// Extractor over the built-in travel taxonomy
    pub fn new() -> Self {
        Self::with_taxonomy(Taxonomy::travel())
    }

    /// Extractor over a caller-supplied taxonomy
    pub fn with_taxonomy(taxonomy: Taxonomy) -> Self {
        let reverse_index = taxonomy.reverse_index();

        let mut patterns = HashMap::new();
        for category in taxonomy.iter() {
            for keyword in &category.keywords {
                patterns
                    .entry(keyword.clone())
                    .or_insert_with(|| Self::compile_patterns(keyword));
            }
        }
        debug!(
            keywords = patterns.len(),
            categories = taxonomy.len(),
            "compiled tag extraction patterns"
        );

        Self {
            taxonomy,
            reverse_index,
            patterns,
        }
    }

    /// The taxonomy this extractor matches against
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    fn compile_patterns(keyword: &str) -> KeywordPatterns {
        let lower = keyword.to_lowercase();

        // Identical candidates (the doubled-consonant repeat) compile once.
        let mut seen = HashSet::new();
        let variant_patterns = variants(&lower)
            .into_iter()
            .filter(|v| seen.insert(v.clone()))
            .map(|v| Self::word_pattern(&v))
            .collect();

        KeywordPatterns {
            exact: Self::word_pattern(&lower),
            variants: variant_patterns,
        }
    }

    fn word_pattern(word: &str) -> Regex {
        Regex::new(&format!(r"\b{}\b", regex::escape(word))).unwrap()
    }

    /// Scan normalized text for keyword matches.
    ///
    /// Categories are scanned in taxonomy declaration order (or in the order
    /// of `categories`, skipping unknown names, when non-empty), keywords in
    /// per-category order. The exact keyword is tried first; single-word
    /// keywords fall back to their morphological variants, stopping at the
    /// first hit. Every hit records the canonical keyword. The result keeps
    /// duplicates: a keyword declared under two categories is reported twice.
    pub fn find_keywords(&self, normalized_text: &str, categories: &[String]) -> Vec<String> {
        let mut found = Vec::new();

        let scan: Vec<_> = if categories.is_empty() {
            self.taxonomy.iter().collect()
        } else {
            categories
                .iter()
                .filter_map(|name| self.taxonomy.get(name))
                .collect()
        };

        for category in scan {
            for keyword in &category.keywords {
                let Some(patterns) = self.patterns.get(keyword) else {
                    continue;
                };

                if patterns.exact.is_match(normalized_text) {
                    found.push(keyword.clone());
                    continue;
                }

                if patterns
                    .variants
                    .iter()
                    .any(|p| p.is_match(normalized_text))
                {
                    found.push(keyword.clone());
                }
            }
        }

        found
    }

    /// Extract tags from a memory description.
    ///
    /// Blank input short-circuits to an empty list. Otherwise the text is
    /// normalized, matched, and deduplicated preserving first-seen order.
    pub fn extract_tags(&self, description: &str) -> Vec<String> {
        self.extract_tags_filtered(description, &[])
    }

    /// Extract tags restricted to the given categories.
    ///
    /// An empty `categories` slice means no restriction; unknown category
    /// names are ignored.
    pub fn extract_tags_filtered(&self, description: &str, categories: &[String]) -> Vec<String> {
        if description.trim().is_empty() {
            return Vec::new();
        }

        let text = normalize(description);
        let found = self.find_keywords(&text, categories);

        let mut seen = HashSet::new();
        found
            .into_iter()
            .filter(|tag| seen.insert(tag.clone()))
            .collect()
    }

    /// Extract tags grouped by category.
    ///
    /// Runs an unfiltered extraction, then assigns each tag to every
    /// category it belongs to via the reverse index. Categories appear in
    /// taxonomy declaration order; categories without matches are omitted.
    pub fn extract_tags_by_category(&self, description: &str) -> CategorizedTags {
        let all_tags = self.extract_tags(description);

        let mut categorized: CategorizedTags = self
            .taxonomy
            .iter()
            .map(|c| (c.name.clone(), Vec::new()))
            .collect();

        for tag in &all_tags {
            if let Some(category_names) = self.reverse_index.get(tag) {
                for name in category_names {
                    if let Some((_, tags)) =
                        categorized.iter_mut().find(|(n, _)| n == name)
                    {
                        if !tags.contains(tag) {
                            tags.push(tag.clone());
                        }
                    }
                }
            }
        }

        categorized.retain(|(_, tags)| !tags.is_empty());
        categorized
    }
}
