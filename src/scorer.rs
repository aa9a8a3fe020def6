/// Affinity-index scoring.
///
/// The index of a string is built from its letters alone: a running
/// weight starts at 0.5, each letter adds the current weight to an
/// accumulator and then bumps the weight by 1, and the accumulator is
/// finally multiplied by the number of letters seen. Non-letter
/// characters are skipped and leave the weight untouched.
///
/// Example: "abc" applies weights 0.5, 1.5, 2.5 -> sum 4.5, times
/// 3 letters -> 13.5. "a1b" applies 0.5, 1.5 -> 2.0, times 2 -> 4.0.
use regex::Regex;

/// How many word tokens of a comment take part in its score.
const COMMENT_TOKEN_LIMIT: usize = 5;

/// Compute the affinity index of a string.
///
/// A string with no letters scores 0.0; that is a valid result, not an
/// error. The result is deterministic and never negative.
pub fn affinity_index(text: &str) -> f64 {
    let mut weight = 0.5;
    let mut sum = 0.0;
    let mut letters = 0;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            sum += weight;
            weight += 1.0;
            letters += 1;
        }
    }

    sum * letters as f64
}

/// Compute the affinity index of a comment.
///
/// Only the first five word tokens take part; letters in later tokens
/// never enter the sum. Within the scanned tokens the rule is the same
/// weight-and-accumulate walk as `affinity_index`, with the weight
/// running continuously across token boundaries.
pub fn comment_index(comment: &str) -> f64 {
    // Word tokens: runs of letters, digits, apostrophes, hyphens.
    let token_regex = Regex::new(r"[\p{Alphabetic}\p{N}'-]+").unwrap();

    let mut weight = 0.5;
    let mut sum = 0.0;
    let mut letters = 0;

    for token in token_regex.find_iter(comment).take(COMMENT_TOKEN_LIMIT) {
        for ch in token.as_str().chars() {
            if ch.is_alphabetic() {
                sum += weight;
                weight += 1.0;
                letters += 1;
            }
        }
    }

    sum * letters as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(affinity_index("abc"), 13.5);
        assert_eq!(affinity_index("a1b"), 4.0);
        assert_eq!(affinity_index("привет"), 108.0);
        assert_eq!(affinity_index("hello"), 62.5);
    }

    #[test]
    fn test_no_letters_scores_zero() {
        assert_eq!(affinity_index(""), 0.0);
        assert_eq!(affinity_index("12345"), 0.0);
        assert_eq!(affinity_index("?! .,"), 0.0);
        assert_eq!(comment_index("12 34 56"), 0.0);
    }

    #[test]
    fn test_non_letters_do_not_advance_weight() {
        // Same letters, different punctuation: same score.
        assert_eq!(affinity_index("a-b-c"), affinity_index("abc"));
        assert_eq!(affinity_index("а б в"), affinity_index("абв"));
    }

    #[test]
    fn test_deterministic_and_non_negative() {
        let samples = ["", "abc", "привет, мир!", "don't-stop 99"];
        for s in samples {
            let first = affinity_index(s);
            assert_eq!(first, affinity_index(s));
            assert!(first >= 0.0);
        }
    }

    #[test]
    fn test_comment_scans_all_tokens_up_to_five() {
        // Three tokens, no digits: identical to scoring the plain string.
        assert_eq!(
            comment_index("just three tokens"),
            affinity_index("just three tokens")
        );
        assert_eq!(
            comment_index("one two three four five"),
            affinity_index("one two three four five")
        );
    }

    #[test]
    fn test_comment_ignores_tokens_past_the_fifth() {
        assert_eq!(
            comment_index("one two three four five six seven"),
            comment_index("one two three four five")
        );
    }

    #[test]
    fn test_comment_worked_example() {
        // Tokens: a, short, comment, here -> 17 letters,
        // weights 0.5..16.5 sum to 144.5, times 17 -> 2456.5.
        assert_eq!(comment_index("a short comment here"), 2456.5);
    }

    #[test]
    fn test_comment_tokens_may_contain_apostrophes_and_hyphens() {
        // "don't" and "re-use" are single tokens; the apostrophe,
        // hyphen and digit are skipped but only letters score.
        assert_eq!(comment_index("don't re-use 42"), affinity_index("dontreuse"));
    }
}
