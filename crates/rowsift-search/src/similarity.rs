//! Similarity scoring between a keyword and a candidate value.
//!
//! All scores are integers in 0-100. [`sequence_ratio`] is the
//! Ratcliff/Obershelp sequence-matching ratio; [`composite_score`] layers
//! exact and substring checks over it and a word-overlap signal for scoring
//! a single pair. Everything here is pure and deterministic.

use std::collections::BTreeSet;

/// Flat score for substring containment, regardless of the length ratio
/// between the two strings. Ranked below exact but above any computed ratio.
const SUBSTRING_SCORE: u8 = 85;

/// Case-folds `s` unless the caller asked for case-sensitive comparison.
pub fn normalize(s: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        s.to_string()
    } else {
        s.to_lowercase()
    }
}

/// Ratcliff/Obershelp sequence-matching ratio, truncated to 0-100.
///
/// Matching recursively takes the longest common contiguous substring and
/// recurses into the remainders on each side; the ratio is twice the total
/// matched character count over the combined length. Truncation (not
/// rounding) keeps behavior exact at threshold boundaries.
///
/// Either string empty scores 0, including empty vs. empty: a missing or
/// empty candidate must never look like a perfect match.
pub fn sequence_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let total = a.len() + b.len();
    // The score must not depend on operand order. Block selection breaks
    // ties positionally, so compare in a canonical order.
    let (first, second) = if a <= b { (&a, &b) } else { (&b, &a) };
    let matched = matched_chars(first, second);
    ((200 * matched) / total) as u8
}

/// Total characters covered by recursive longest-common-block matching.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, len) = longest_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matched_chars(&a[..a_start], &b[..b_start])
        + matched_chars(&a[a_start + len..], &b[b_start + len..])
}

/// Longest common contiguous block as `(start_in_a, start_in_b, len)`.
/// Ties prefer the earliest start in `a`, then in `b`.
fn longest_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // One row of the common-suffix-length table at a time.
    let mut prev = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        let mut current = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                current[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = current;
    }
    best
}

/// Jaccard index over whitespace-split token sets, scaled to 0-100.
/// Zero when either side has no tokens.
pub fn token_overlap(a: &str, b: &str) -> u8 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0;
    }
    let intersection = tokens_a.intersection(&tokens_b).count();
    let union = tokens_a.union(&tokens_b).count();
    ((intersection * 100) / union) as u8
}

/// Best-effort score for a single keyword/value pair.
///
/// Exact equality scores 100 and substring containment (either direction)
/// scores a flat 85; otherwise the more generous of the sequence ratio and
/// the word-overlap ratio wins. Either character-level similarity or shared
/// words alone is taken as sufficient evidence of relatedness.
pub fn composite_score(keyword: &str, text: &str, case_sensitive: bool) -> u8 {
    let keyword = normalize(keyword, case_sensitive);
    let text = normalize(text, case_sensitive);
    if keyword.is_empty() || text.is_empty() {
        return 0;
    }
    if keyword == text {
        return 100;
    }
    if keyword.contains(text.as_str()) || text.contains(keyword.as_str()) {
        return SUBSTRING_SCORE;
    }
    sequence_ratio(&keyword, &text).max(token_overlap(&keyword, &text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_100() {
        assert_eq!(sequence_ratio("Apple Japan", "Apple Japan"), 100);
    }

    #[test]
    fn empty_operands_score_0() {
        assert_eq!(sequence_ratio("", ""), 0);
        assert_eq!(sequence_ratio("apple", ""), 0);
        assert_eq!(sequence_ratio("", "apple"), 0);
    }

    #[test]
    fn typo_scores_high() {
        // "aple jpan" vs "apple japan": 9 of 10 average characters matched.
        assert_eq!(sequence_ratio("aple jpan", "apple japan"), 90);
    }

    #[test]
    fn unrelated_strings_score_low() {
        assert!(sequence_ratio("aple jpan", "orange co") < 60);
    }

    #[test]
    fn ratio_is_symmetric() {
        let pairs = [
            ("apple", "aple"),
            ("Apple Japan", "apple sales"),
            ("abcabba", "cbabac"),
        ];
        for (a, b) in pairs {
            assert_eq!(sequence_ratio(a, b), sequence_ratio(b, a), "{a} / {b}");
        }
    }

    #[test]
    fn ratio_truncates_instead_of_rounding() {
        // One matched char out of 2+1; 2*1/3 = 66.66 truncates to 66.
        assert_eq!(sequence_ratio("ab", "a"), 66);
    }

    #[test]
    fn token_overlap_is_jaccard() {
        assert_eq!(token_overlap("apple japan", "japan apple"), 100);
        assert_eq!(token_overlap("apple japan", "apple sales"), 33);
        assert_eq!(token_overlap("apple", ""), 0);
    }

    #[test]
    fn composite_exact_beats_substring() {
        assert_eq!(composite_score("Apple Japan", "apple japan", false), 100);
        assert_eq!(composite_score("Apple Japan", "Apple Japan Inc.", false), 85);
        // Containment in the other direction pins the same score.
        assert_eq!(composite_score("Apple Japan Inc.", "Apple Japan", false), 85);
    }

    #[test]
    fn composite_short_keyword_in_long_value_still_scores_85() {
        let value = "a very long company name that keeps going and going";
        assert_eq!(composite_score("ng", value, false), 85);
    }

    #[test]
    fn composite_takes_the_more_generous_signal() {
        // Reordered words: no containment, full word overlap.
        assert_eq!(composite_score("japan apple", "apple japan", false), 100);
    }

    #[test]
    fn composite_respects_case_sensitivity() {
        assert_eq!(composite_score("APPLE", "apple", true), 0);
        assert_eq!(composite_score("APPLE", "apple", false), 100);
    }

    #[test]
    fn composite_empty_sides_score_0() {
        assert_eq!(composite_score("", "apple", false), 0);
        assert_eq!(composite_score("apple", "", false), 0);
    }
}
