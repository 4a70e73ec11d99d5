//! The frozen configuration a [`ProfanityFilter`] matches against.
//!
//! [`ProfanityFilter`]: crate::ProfanityFilter

use alloc::{string::String, vec::Vec};
use bitflags::bitflags;
use hashbrown::HashSet;

bitflags! {
    /// Boolean matching options on a [`WordList`].
    pub struct Flags: u8 {
        /// Also match words within the similarity threshold of a filtered word.
        const SIMILARITY = 0b0000_0001;
    }
}

impl Default for Flags {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// An immutable set of filtered words and allowed words.
///
/// Filtered words are stored in their canonical (lowercase) form, in the order they were
/// configured, without duplicates. Allowed words are stored exactly as configured and are compared
/// against words in the input exactly, including case.
#[derive(Clone, Debug)]
pub struct WordList {
    bad_words: Vec<String>,
    bad_word_set: HashSet<String>,
    allow_words: HashSet<String>,
    flags: Flags,
}

impl WordList {
    /// Freeze a word list.
    ///
    /// `bad_words` are canonicalized to lowercase and de-duplicated, keeping the first occurrence.
    pub(crate) fn new<I, J>(bad_words: I, allow_words: J, flags: Flags) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        let mut canonical = Vec::new();
        let mut bad_word_set = HashSet::new();
        for word in bad_words {
            let word = word.to_lowercase();
            if bad_word_set.insert(word.clone()) {
                canonical.push(word);
            }
        }

        Self {
            bad_words: canonical,
            bad_word_set,
            allow_words: allow_words.into_iter().collect(),
            flags,
        }
    }

    /// The canonical filtered words, in configured order.
    #[inline]
    pub fn bad_words(&self) -> impl Iterator<Item = &str> {
        self.bad_words.iter().map(String::as_str)
    }

    /// The filtered words containing a space, which are matched as phrases.
    #[inline]
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.bad_words().filter(|word| word.contains(' '))
    }

    /// The allowed words.
    #[inline]
    pub fn allow_words(&self) -> impl Iterator<Item = &str> {
        self.allow_words.iter().map(String::as_str)
    }

    /// Returns whether `canonical` is a filtered word.
    ///
    /// `canonical` must already be lowercase.
    #[inline]
    #[must_use]
    pub fn is_bad(&self, canonical: &str) -> bool {
        self.bad_word_set.contains(canonical)
    }

    /// Returns whether `word` is allowed. The comparison is case-sensitive.
    #[inline]
    #[must_use]
    pub fn is_allowed(&self, word: &str) -> bool {
        self.allow_words.contains(word)
    }

    /// Returns whether similarity matching is enabled.
    #[inline]
    #[must_use]
    pub fn similarity(&self) -> bool {
        self.flags.contains(Flags::SIMILARITY)
    }

    /// The number of distinct filtered words.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bad_words.len()
    }

    /// Returns whether there are no filtered words.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bad_words.is_empty()
    }
}
