//! Approximate string matching for typo-tolerant vocabulary lookup.
//!
//! The score is the normalized InDel similarity on a 0-100 scale:
//! `100 * (1 - indel_distance / (len(a) + len(b)))`, where the InDel
//! distance counts insertions and deletions only (a substitution costs 2).
//! Equivalently `200 * lcs / (len(a) + len(b))`.

/// Length of the longest common subsequence, in characters.
///
/// Two-row dynamic programming, O(m×n) time and O(min(m, n)) space.
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // keep the shorter string in the inner loop
    let (short, long) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    let mut prev = vec![0usize; short.len() + 1];
    let mut curr = vec![0usize; short.len() + 1];

    for lc in long {
        for (i, sc) in short.iter().enumerate() {
            curr[i + 1] = if lc == sc {
                prev[i] + 1
            } else {
                prev[i + 1].max(curr[i])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}


pub fn indel_distance(a: &str, b: &str) -> usize {
    a.chars().count() + b.chars().count() - 2 * lcs_length(a, b)
}


/// Similarity in `0.0..=100.0`. Identical strings (including two empty
/// strings) score 100.
pub fn ratio(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 100.0;
    }
    100.0 * (1.0 - indel_distance(a, b) as f64 / total as f64)
}


/// Best-scoring candidate for `token`, if its score reaches `threshold`.
///
/// Ties go to the first candidate reaching the maximum, so the result is
/// deterministic for a fixed candidate order.
pub fn fuzzy_match<'a, I>(token: &str, candidates: I, threshold: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, f64)> = None;
    for candidate in candidates {
        let score = ratio(token, candidate);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    best.filter(|(_, score)| *score >= threshold)
        .map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_FUZZY_THRESHOLD;

    #[test]
    fn test_lcs_length() {
        assert_eq!(lcs_length("", ""), 0);
        assert_eq!(lcs_length("abc", ""), 0);
        assert_eq!(lcs_length("applle", "apple"), 5);
        assert_eq!(lcs_length("kitten", "sitting"), 4);
    }

    #[test]
    fn test_indel_distance() {
        assert_eq!(indel_distance("cat", "hat"), 2);
        assert_eq!(indel_distance("cat", "cats"), 1);
        assert_eq!(indel_distance("hello", "hello"), 0);
    }

    #[test]
    fn test_ratio() {
        assert!((ratio("hello", "hello") - 100.0).abs() < 1e-9);
        assert!((ratio("", "") - 100.0).abs() < 1e-9);
        assert!(ratio("abc", "xyz").abs() < 1e-9);
        // 1 - 1/11
        assert!((ratio("applle", "apple") - 90.909).abs() < 0.01);
        assert!(ratio("applle", "purple") < 75.0);
    }

    #[test]
    fn test_self_score_is_maximal() {
        let candidates = ["shoe", "shoes", "shoelace", "hose"];
        for token in candidates {
            let self_score = ratio(token, token);
            for other in candidates {
                assert!(ratio(token, other) <= self_score);
            }
            assert_eq!(fuzzy_match(token, candidates, 0.0), Some(token));
        }
    }

    #[test]
    fn test_threshold() {
        let brands = ["apple", "samsung", "sony"];
        assert_eq!(fuzzy_match("applle", brands, DEFAULT_FUZZY_THRESHOLD), Some("apple"));
        assert_eq!(fuzzy_match("samsnug", brands, DEFAULT_FUZZY_THRESHOLD), Some("samsung"));
        assert_eq!(fuzzy_match("banana", brands, DEFAULT_FUZZY_THRESHOLD), None);
    }

    #[test]
    fn test_ties_go_to_first_candidate() {
        // "bat" scores the same against both
        assert_eq!(fuzzy_match("bat", ["cat", "hat"], 50.0), Some("cat"));
        assert_eq!(fuzzy_match("bat", ["hat", "cat"], 50.0), Some("hat"));
    }

    #[test]
    fn test_no_candidates() {
        assert_eq!(fuzzy_match("anything", std::iter::empty(), 0.0), None);
    }
}
