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

//! End-to-end properties of the tag extraction engine

use std::collections::HashSet;
use waymark_tags::{TagCategory, TagExtractor, Taxonomy};

const SAMPLES: &[&str] = &[
    "Had amazing pasta at a local restaurant and great wine",
    "Started the morning with coffee at a charming cafe",
    "Went hiking in the mountains and enjoyed beautiful nature",
    "Took the train to the city, then used metro and walked around",
    "Stayed at a lovely hotel near the city center",
    "Great restaurant! Amazing wine... Beautiful art, incredible museum.",
    "This description contains no travel keywords whatsoever",
    "",
];

#[test]
fn extraction_is_idempotent() {
    let extractor = TagExtractor::new();
    for sample in SAMPLES {
        let first = extractor.extract_tags(sample);
        let second = extractor.extract_tags(sample);
        assert_eq!(first, second, "input: {sample:?}");
    }
}

#[test]
fn extraction_never_duplicates_tags() {
    let extractor = TagExtractor::new();
    for sample in SAMPLES {
        let tags = extractor.extract_tags(sample);
        let distinct: HashSet<&String> = tags.iter().collect();
        assert_eq!(distinct.len(), tags.len(), "input: {sample:?}");
    }
}

#[test]
fn extraction_is_case_insensitive() {
    let extractor = TagExtractor::new();
    for sample in SAMPLES {
        let original = extractor.extract_tags(sample);
        let upper = extractor.extract_tags(&sample.to_uppercase());
        let lower = extractor.extract_tags(&sample.to_lowercase());
        assert_eq!(original, upper, "input: {sample:?}");
        assert_eq!(original, lower, "input: {sample:?}");
    }
}

#[test]
fn category_filter_yields_a_subset() {
    let extractor = TagExtractor::new();
    let filter = vec!["food".to_string(), "culture".to_string()];

    for sample in SAMPLES {
        let all: HashSet<String> = extractor.extract_tags(sample).into_iter().collect();
        let filtered = extractor.extract_tags_filtered(sample, &filter);

        for tag in &filtered {
            assert!(all.contains(tag), "{tag} missing from unfiltered result");
            let in_filter = filter.iter().any(|name| {
                extractor
                    .taxonomy()
                    .get(name)
                    .map(|c| c.keywords.contains(tag))
                    .unwrap_or(false)
            });
            assert!(in_filter, "{tag} does not belong to a filtered category");
        }
    }
}

#[test]
fn categorized_tags_round_trip() {
    let extractor = TagExtractor::new();
    for sample in SAMPLES {
        let flat: HashSet<String> = extractor.extract_tags(sample).into_iter().collect();
        let categorized = extractor.extract_tags_by_category(sample);

        let partitioned: HashSet<String> = categorized
            .iter()
            .flat_map(|(_, tags)| tags.iter().cloned())
            .collect();

        assert_eq!(flat, partitioned, "input: {sample:?}");
    }
}

#[test]
fn word_boundaries_are_respected() {
    let extractor = TagExtractor::new();

    let tags = extractor.extract_tags("restaurateur");
    assert!(!tags.contains(&"restaurant".to_string()));

    let tags = extractor.extract_tags("the restaurant");
    assert!(tags.contains(&"restaurant".to_string()));
}

#[test]
fn variants_report_the_declared_form() {
    let extractor = TagExtractor::new();

    // "walking" is declared; the bare base form matches it
    let tags = extractor.extract_tags("we walked all day");
    assert!(tags.contains(&"walking".to_string()));

    // "mountain" is declared; the plural matches it
    let tags = extractor.extract_tags("hiked through the mountains");
    assert!(tags.contains(&"mountain".to_string()));
    assert!(!tags.contains(&"mountains".to_string()));

    // "hiking" is declared and matches itself exactly
    let tags = extractor.extract_tags("went hiking yesterday");
    assert!(tags.contains(&"hiking".to_string()));
}

#[test]
fn blank_input_yields_nothing() {
    let extractor = TagExtractor::new();
    assert_eq!(extractor.extract_tags(""), Vec::<String>::new());
    assert_eq!(extractor.extract_tags("   "), Vec::<String>::new());
}

#[test]
fn punctuation_does_not_block_matches() {
    let extractor = TagExtractor::new();
    let tags = extractor.extract_tags("Great wine! Amazing art...");
    assert!(tags.contains(&"wine".to_string()));
    assert!(tags.contains(&"art".to_string()));
}

#[test]
fn end_to_end_ordering_follows_taxonomy_declaration() {
    let taxonomy = Taxonomy::new(vec![
        TagCategory::new("food", vec!["restaurant", "coffee", "wine"]),
        TagCategory::new("culture", vec!["museum", "art"]),
    ])
    .unwrap();
    let extractor = TagExtractor::with_taxonomy(taxonomy);

    let tags =
        extractor.extract_tags("Had coffee at a restaurant, then visited the museum and saw art.");

    let expected: HashSet<&str> = ["coffee", "restaurant", "museum", "art"].into_iter().collect();
    let actual: HashSet<&str> = tags.iter().map(|t| t.as_str()).collect();
    assert_eq!(actual, expected);

    // Order is category declaration order, then per-category keyword order,
    // not the order words appear in the text.
    assert_eq!(tags, vec!["restaurant", "coffee", "museum", "art"]);
}

#[test]
fn long_descriptions_stay_fast() {
    let extractor = TagExtractor::new();

    let description = "Amazing trip! Started in Paris with incredible restaurant \
        experiences, visited the Louvre museum, took the train to Rome, explored \
        ancient monuments, had amazing pasta and wine, flew to Barcelona, saw \
        stunning architecture, went to beaches, took the bus to Madrid, enjoyed \
        tapas and local markets, cycled through Amsterdam, stayed at a boutique \
        hotel, walked through parks, took the metro everywhere. "
        .repeat(5);

    let start = std::time::Instant::now();
    let tags = extractor.extract_tags(&description);
    let elapsed = start.elapsed();

    assert!(
        elapsed < std::time::Duration::from_secs(1),
        "extraction took {elapsed:?}"
    );
    assert!(tags.len() > 10);
    assert!(tags.contains(&"restaurant".to_string()));
    assert!(tags.contains(&"museum".to_string()));
}
