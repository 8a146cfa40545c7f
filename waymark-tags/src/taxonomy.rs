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

//! Tag taxonomy
//!
//! The taxonomy is the controlled vocabulary for tag extraction: an ordered
//! table of categories, each holding an ordered list of keywords. Declaration
//! order is part of the contract — extraction results follow category order,
//! then per-category keyword order. A keyword may appear in more than one
//! category (e.g. "art" under both culture and shopping).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors from taxonomy construction
#[derive(Debug, Error)]
pub enum TagError {
    /// Caller supplied a malformed taxonomy table
    #[error("Invalid taxonomy: {0}")]
    InvalidTaxonomy(String),
}

/// A named category and its ordered keyword list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCategory {
    /// Category name, unique within a taxonomy
    pub name: String,
    /// Keywords in declaration order
    pub keywords: Vec<String>,
}

impl TagCategory {
    /// Create a category from a name and keyword list
    pub fn new(name: impl Into<String>, keywords: Vec<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(|k| k.into()).collect(),
        }
    }
}

/// Ordered category -> keyword table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    categories: Vec<TagCategory>,
}

/// Built-in travel taxonomy, constructed once per process.
static TRAVEL_TAXONOMY: Lazy<Taxonomy> = Lazy::new(|| {
    let table: &[(&str, &[&str])] = &[
        (
            "food",
            &[
                "restaurant", "cafe", "coffee", "wine", "beer", "tasting",
                "market", "street food", "cuisine", "cooking", "bakery",
                "bar", "pub", "brewery", "vineyard", "dining", "lunch",
                "dinner", "breakfast", "snack", "local food", "specialty",
            ],
        ),
        (
            "culture",
            &[
                "museum", "temple", "church", "art", "architecture", "history",
                "monument", "palace", "castle", "gallery", "exhibition",
                "cultural", "heritage", "traditional", "festival", "ceremony",
                "performance", "theater", "music", "dance", "sculpture",
                "painting", "historic",
            ],
        ),
        (
            "outdoor",
            &[
                "hiking", "beach", "mountain", "nature", "park", "forest",
                "lake", "river", "ocean", "trail", "camping", "climbing",
                "swimming", "surfing", "kayaking", "cycling", "walking",
                "trekking", "wildlife", "scenic", "viewpoint", "sunrise",
                "sunset", "photography",
            ],
        ),
        (
            "transport",
            &[
                "flight", "train", "bus", "taxi", "metro", "subway",
                "ferry", "boat", "car", "rental", "uber", "lyft",
                "walking", "cycling", "scooter", "rickshaw", "tram",
                "cable car", "funicular", "helicopter", "transfer",
            ],
        ),
        (
            "accommodation",
            &[
                "hotel", "hostel", "airbnb", "resort", "guesthouse",
                "bed and breakfast", "camping", "glamping", "motel",
                "inn", "lodge", "villa", "apartment", "homestay",
                "boutique", "luxury", "budget", "booking", "check-in",
                "room", "suite",
            ],
        ),
        (
            "shopping",
            &[
                "market", "mall", "store", "shop", "boutique", "souvenir",
                "gift", "local", "craft", "handmade", "antique",
                "vintage", "fashion", "clothing", "jewelry", "art",
                "books", "spices", "textiles", "bargaining", "purchase",
            ],
        ),
        (
            "entertainment",
            &[
                "nightlife", "club", "bar", "live music", "concert",
                "show", "casino", "games", "sports", "event",
                "party", "dancing", "karaoke", "comedy", "cinema",
                "theater", "amusement park", "theme park", "festival",
            ],
        ),
        (
            "experience",
            &[
                "amazing", "beautiful", "incredible", "stunning", "awesome",
                "wonderful", "fantastic", "memorable", "unique", "special",
                "relaxing", "exciting", "adventurous", "peaceful", "romantic",
                "fun", "interesting", "inspiring", "breathtaking", "unforgettable",
            ],
        ),
    ];

    Taxonomy {
        categories: table
            .iter()
            .map(|(name, keywords)| TagCategory::new(*name, keywords.to_vec()))
            .collect(),
    }
});

impl Taxonomy {
    /// Build a taxonomy from caller-supplied categories.
    ///
    /// Category names must be unique and non-blank. Keywords may repeat
    /// across categories.
    pub fn new(categories: Vec<TagCategory>) -> Result<Self, TagError> {
        let mut seen = HashSet::new();
        for category in &categories {
            if category.name.trim().is_empty() {
                return Err(TagError::InvalidTaxonomy(
                    "category name cannot be blank".to_string(),
                ));
            }
            if !seen.insert(category.name.clone()) {
                return Err(TagError::InvalidTaxonomy(format!(
                    "duplicate category name: {}",
                    category.name
                )));
            }
        }
        Ok(Self { categories })
    }

    /// An independent copy of the built-in travel taxonomy.
    ///
    /// Each caller gets its own clone; mutating it cannot affect other
    /// consumers or later copies.
    pub fn travel() -> Self {
        TRAVEL_TAXONOMY.clone()
    }

    /// Categories in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &TagCategory> {
        self.categories.iter()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the taxonomy holds no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Look up a category by name
    pub fn get(&self, name: &str) -> Option<&TagCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Whether a category with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Category names in declaration order
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Derive the keyword -> categories reverse index.
    ///
    /// One entry per distinct keyword, listing every category it belongs to
    /// in taxonomy declaration order. Pure derivation; callers cache it.
    pub fn reverse_index(&self) -> HashMap<String, Vec<String>> {
        let mut index: HashMap<String, Vec<String>> = HashMap::new();
        for category in &self.categories {
            for keyword in &category.keywords {
                index
                    .entry(keyword.clone())
                    .or_default()
                    .push(category.name.clone());
            }
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_taxonomy_shape() {
        let taxonomy = Taxonomy::travel();
        assert_eq!(taxonomy.len(), 8);
        assert!(taxonomy.contains("food"));
        assert!(taxonomy.contains("culture"));
        assert!(taxonomy.contains("experience"));
        assert!(!taxonomy.contains("weather"));

        let food = taxonomy.get("food").unwrap();
        assert_eq!(food.keywords[0], "restaurant");
        assert!(food.keywords.contains(&"street food".to_string()));
    }

    #[test]
    fn test_travel_copies_are_independent() {
        let mut first = Taxonomy::travel();
        first.categories.clear();
        let second = Taxonomy::travel();
        assert_eq!(second.len(), 8);
    }

    #[test]
    fn test_reverse_index_declaration_order() {
        let taxonomy = Taxonomy::travel();
        let index = taxonomy.reverse_index();

        // "art" is declared under culture first, then shopping
        assert_eq!(index["art"], vec!["culture", "shopping"]);
        // "market" under food first, then shopping
        assert_eq!(index["market"], vec!["food", "shopping"]);
        // single-category keyword
        assert_eq!(index["museum"], vec!["culture"]);
    }

    #[test]
    fn test_new_rejects_duplicate_categories() {
        let result = Taxonomy::new(vec![
            TagCategory::new("food", vec!["wine"]),
            TagCategory::new("food", vec!["beer"]),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_blank_category_name() {
        let result = Taxonomy::new(vec![TagCategory::new("  ", vec!["wine"])]);
        assert!(result.is_err());
    }
}
