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

//! Rule-based tag extraction for travel memory descriptions
//!
//! Maps free-text descriptions onto a controlled vocabulary of travel tags:
//! - **Taxonomy**: ordered category -> keyword table (built-in travel table,
//!   overridable with any table of the same shape)
//! - **Preprocessor**: lowercasing, punctuation stripping, whitespace
//!   normalization
//! - **Matcher**: word-boundary keyword matching with morphological variants
//!   (plurals, verb forms), always reporting the canonical declared keyword
//! - **Extraction API**: flat ordered-deduplicated tag lists, optional
//!   category filtering, and per-category partitioning
//!
//! The extractor is immutable after construction: all patterns and the
//! keyword -> category reverse index are built once, so a single instance is
//! safe to share read-only across threads.
//!
//! # Example
//!
//! ```
//! use waymark_tags::TagExtractor;
//!
//! let extractor = TagExtractor::new();
//! let tags = extractor.extract_tags("Had coffee at a restaurant, then the museum.");
//! assert!(tags.contains(&"coffee".to_string()));
//! assert!(tags.contains(&"museum".to_string()));
//! ```

pub mod extractor;
pub mod taxonomy;
pub mod text;
pub mod variants;

// Re-exports
pub use extractor::{CategorizedTags, TagExtractor};
pub use taxonomy::{TagCategory, TagError, Taxonomy};
pub use text::normalize;
pub use variants::variants;
