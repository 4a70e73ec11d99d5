//! Searching text for filtered words.
//!
//! Searching is done in two passes over the input. The first pass walks the input's words from
//! left to right, matching each one exactly against the filtered words and, when similarity
//! matching is enabled, approximately against every filtered word. The second pass searches the
//! whole input for filtered phrases (filtered words containing a space), since phrases span
//! several words and are not aligned to any single one.
//!
//! The passes are independent. A phrase whose words are also filtered individually is reported
//! both as a phrase and as separate words.

use crate::{
    distance,
    list::WordList,
    matches::{Location, Matches},
    tokenizer::{self, Token},
};
use tracing::trace;

/// Find every match of `list`'s filtered words within `input`.
pub(crate) fn find(list: &WordList, input: &str) -> Matches {
    let mut matches = Matches::new();

    for token in tokenizer::tokenize(input) {
        match_token(list, &token, &mut matches);
    }

    match_phrases(list, input, &mut matches);

    matches
}

fn match_token(list: &WordList, token: &Token, matches: &mut Matches) {
    let word = token.word();
    if list.is_allowed(word) {
        return;
    }

    let location = Location::new(token.position(), token.length());
    let canonical = word.to_lowercase();
    if list.is_bad(&canonical) {
        trace!(word = %canonical, position = location.position, length = location.length, "exact match");
        matches.insert(&canonical, location);
    } else if list.similarity() {
        // A word may be similar to several filtered words. Each is recorded.
        for bad_word in list.bad_words() {
            if distance::is_similar(&canonical, bad_word) {
                trace!(word = %bad_word, found = %word, position = location.position, length = location.length, "similar match");
                matches.insert(bad_word, location);
            }
        }
    }
}

fn match_phrases(list: &WordList, input: &str, matches: &mut Matches) {
    for phrase in list.phrases() {
        if let Some(position) = find_ignore_case(input, phrase) {
            let location = Location::new(position, phrase.chars().count());
            trace!(word = %phrase, position = location.position, length = location.length, "phrase match");
            matches.insert(phrase, location);
        }
    }
}

/// Returns whether `a` and `b` are equal when lowercased.
#[inline]
fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Returns the `char` offset of the first case-insensitive occurrence of `needle` in `haystack`.
///
/// Characters are compared one at a time so that the offset refers to `haystack` as given, even
/// where lowercasing would change its length.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }

    let mut suffix = haystack;
    let mut position = 0;
    loop {
        let mut candidate = suffix.chars();
        if needle.chars().all(|n| candidate.next().map_or(false, |h| eq_ignore_case(h, n))) {
            return Some(position);
        }

        let mut chars = suffix.chars();
        chars.next()?;
        suffix = chars.as_str();
        position += 1;
    }
}
