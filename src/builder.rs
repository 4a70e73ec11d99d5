//! Configuration of a [`ProfanityFilter`].
//!
//! [`ProfanityFilter`]: crate::ProfanityFilter

use crate::{
    censor::CensorMode,
    list::{Flags, WordList},
    words::DEFAULT_BAD_WORDS,
    ProfanityFilter,
};
use alloc::{
    borrow::ToOwned,
    string::{String, ToString},
    vec::Vec,
};
use thiserror::Error;
use tracing::debug;

/// An invalid configuration found while building a [`ProfanityFilter`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A filtered word is empty or contains only whitespace.
    #[error("bad word at index {index} is empty or only whitespace")]
    BlankBadWord {
        /// Index of the word within the combined list of filtered words.
        index: usize,
    },
    /// An allowed word is empty or contains only whitespace.
    #[error("allow word at index {index} is empty or only whitespace")]
    BlankAllowWord {
        /// Index of the word within the allowed words.
        index: usize,
    },
}

/// A builder for a [`ProfanityFilter`].
///
/// Calls may be made in any order. The last call to [`set_bad_words()`], [`allow_words()`], or
/// [`censor_mode()`] wins, while words passed to [`append_bad_words()`] accumulate and are always
/// added to the end of the active list of filtered words, whether that is the default list or one
/// given to `set_bad_words()`.
///
/// Without any calls, the built filter uses [`DEFAULT_BAD_WORDS`], allows no words, does not match
/// similar words, and censors with `'*'`.
///
/// # Example
/// ```
/// use profanity_filter::ProfanityFilterBuilder;
///
/// let filter = ProfanityFilterBuilder::new()
///     .set_bad_words(["fox", "dog"])
///     .allow_words(["dog"])
///     .use_similarity_detection()
///     .build()
///     .unwrap();
///
/// assert_eq!(filter.censor("the foox and the dog"), "the **** and the dog");
/// ```
///
/// [`set_bad_words()`]: ProfanityFilterBuilder::set_bad_words
/// [`allow_words()`]: ProfanityFilterBuilder::allow_words
/// [`censor_mode()`]: ProfanityFilterBuilder::censor_mode
/// [`append_bad_words()`]: ProfanityFilterBuilder::append_bad_words
#[derive(Clone, Debug, Default)]
pub struct ProfanityFilterBuilder {
    bad_words: Option<Vec<String>>,
    appended_bad_words: Vec<String>,
    allow_words: Vec<String>,
    flags: Flags,
    censor_mode: CensorMode,
}

impl ProfanityFilterBuilder {
    /// Create a new builder with the default configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default filtered words with `words`.
    #[inline]
    pub fn set_bad_words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.bad_words = Some(words.into_iter().map(|s| s.to_string()).collect());
        self
    }

    /// Add `words` to the filtered words.
    #[inline]
    pub fn append_bad_words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.appended_bad_words
            .extend(words.into_iter().map(|s| s.to_string()));
        self
    }

    /// Add a single `word` to the filtered words.
    #[inline]
    pub fn append_bad_word<S>(&mut self, word: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.appended_bad_words.push(word.to_string());
        self
    }

    /// Allow `words`, replacing any previously allowed words.
    ///
    /// An allowed word is never matched, even if it is also a filtered word. Allowed words are
    /// compared case-sensitively against words in the input.
    #[inline]
    pub fn allow_words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.allow_words = words.into_iter().map(|s| s.to_string()).collect();
        self
    }

    /// Allow a single `word`, in addition to the currently allowed words.
    ///
    /// A later call to [`allow_words()`](Self::allow_words) replaces words allowed here.
    #[inline]
    pub fn allow_word<S>(&mut self, word: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.allow_words.push(word.to_string());
        self
    }

    /// Also match words that are within two edits of a filtered word.
    #[inline]
    pub fn use_similarity_detection(&mut self) -> &mut Self {
        self.flags.insert(Flags::SIMILARITY);
        self
    }

    /// Set the strategy used by [`ProfanityFilter::censor()`].
    #[inline]
    pub fn censor_mode(&mut self, censor_mode: CensorMode) -> &mut Self {
        self.censor_mode = censor_mode;
        self
    }

    /// Build the [`ProfanityFilter`].
    ///
    /// # Errors
    /// Returns a [`BuildError`] if any filtered or allowed word is empty or only whitespace.
    pub fn build(&self) -> Result<ProfanityFilter, BuildError> {
        let base: Vec<String> = match &self.bad_words {
            Some(words) => words.clone(),
            None => DEFAULT_BAD_WORDS.iter().map(|&word| word.to_owned()).collect(),
        };
        let bad_words = base
            .into_iter()
            .chain(self.appended_bad_words.iter().cloned())
            .collect::<Vec<_>>();

        if let Some(index) = bad_words.iter().position(|word| word.trim().is_empty()) {
            return Err(BuildError::BlankBadWord { index });
        }
        if let Some(index) = self
            .allow_words
            .iter()
            .position(|word| word.trim().is_empty())
        {
            return Err(BuildError::BlankAllowWord { index });
        }

        let list = WordList::new(bad_words, self.allow_words.iter().cloned(), self.flags);
        debug!(
            bad_words = list.len(),
            allow_words = self.allow_words.len(),
            similarity = list.similarity(),
            "built profanity filter"
        );

        Ok(ProfanityFilter::from_parts(list, self.censor_mode))
    }
}
