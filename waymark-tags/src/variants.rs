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

//! Morphological variant generation
//!
//! Heuristic plural and verb-form candidates for a keyword. A match on any
//! variant reports the canonical keyword, never the variant string.

/// Candidate variants for a keyword, in testing order.
///
/// Multi-word keywords (internal space) are never variant-expanded. Rules:
/// - `+s` and `+es` plurals
/// - `y` -> `ies` (city -> cities)
/// - keywords ending in `ing` test the bare base, base+`ed`, base+`s`
///   (walking -> walk, walked, walks)
/// - other keywords test `+ing` and `+ed`; keywords whose last two
///   characters are identical re-add `+ing` (run -> running). The repeat is
///   intentional and harmless.
pub fn variants(keyword: &str) -> Vec<String> {
    if keyword.contains(' ') {
        return Vec::new();
    }

    let mut candidates = Vec::new();

    candidates.push(format!("{keyword}s"));
    candidates.push(format!("{keyword}es"));

    if let Some(stem) = keyword.strip_suffix('y') {
        candidates.push(format!("{stem}ies"));
    }

    if let Some(base) = keyword.strip_suffix("ing") {
        candidates.push(base.to_string());
        candidates.push(format!("{base}ed"));
        candidates.push(format!("{base}s"));
    } else {
        candidates.push(format!("{keyword}ing"));
        candidates.push(format!("{keyword}ed"));

        let chars: Vec<char> = keyword.chars().collect();
        if chars.len() > 2 && chars[chars.len() - 1] == chars[chars.len() - 2] {
            candidates.push(format!("{keyword}ing"));
        }
    }

    // The keyword "ing" would produce an empty base
    candidates.retain(|v| !v.is_empty());

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_variants() {
        let v = variants("mountain");
        assert!(v.contains(&"mountains".to_string()));
        assert!(v.contains(&"mountaines".to_string()));
    }

    #[test]
    fn test_y_to_ies() {
        let v = variants("city");
        assert!(v.contains(&"cities".to_string()));
    }

    #[test]
    fn test_ing_keyword_tests_base_forms() {
        let v = variants("walking");
        assert!(v.contains(&"walk".to_string()));
        assert!(v.contains(&"walked".to_string()));
        assert!(v.contains(&"walks".to_string()));
    }

    #[test]
    fn test_base_keyword_tests_verb_forms() {
        let v = variants("walk");
        assert!(v.contains(&"walking".to_string()));
        assert!(v.contains(&"walked".to_string()));
    }

    #[test]
    fn test_doubled_consonant_repeats_ing() {
        let v = variants("inn");
        let ing_count = v.iter().filter(|s| s.as_str() == "inning").count();
        assert_eq!(ing_count, 2);
    }

    #[test]
    fn test_multi_word_has_no_variants() {
        assert!(variants("street food").is_empty());
        assert!(variants("bed and breakfast").is_empty());
    }

    #[test]
    fn test_no_empty_candidates() {
        assert!(variants("ing").iter().all(|v| !v.is_empty()));
    }
}
