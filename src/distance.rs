//! Edit distance between words.
//!
//! Similarity matching flags a word when it is within [`SIMILARITY_THRESHOLD`] edits of a filtered
//! word. The distance used is the classic Levenshtein distance, counted over `char`s.

use alloc::{vec, vec::Vec};

/// The maximum edit distance at which two words are considered similar.
pub const SIMILARITY_THRESHOLD: usize = 2;

/// Returns the Levenshtein distance between `a` and `b`.
///
/// This is the minimum number of single-character insertions, deletions, and substitutions
/// required to transform `a` into `b`.
///
/// # Example
/// ```
/// use profanity_filter::distance::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// ```
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();
    let width = b.len() + 1;

    // Row-major (a.len() + 1) x (b.len() + 1) table.
    let mut table = vec![0; (a.len() + 1) * width];
    for i in 0..=a.len() {
        table[i * width] = i;
    }
    for j in 0..=b.len() {
        table[j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i * width + j] = if a[i - 1] == b[j - 1] {
                table[(i - 1) * width + (j - 1)]
            } else {
                table[(i - 1) * width + j]
                    .min(table[i * width + (j - 1)])
                    .min(table[(i - 1) * width + (j - 1)])
                    + 1
            };
        }
    }

    table[a.len() * width + b.len()]
}

/// Returns whether `a` and `b` are within [`SIMILARITY_THRESHOLD`] edits of each other.
#[inline]
#[must_use]
pub fn is_similar(a: &str, b: &str) -> bool {
    levenshtein(a, b) <= SIMILARITY_THRESHOLD
}
