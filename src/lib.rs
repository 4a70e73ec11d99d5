//! A profanity filter for finding and censoring words in text.
//!
//! A [`ProfanityFilter`] is configured once, using a [`ProfanityFilterBuilder`], and can then be
//! used to search any number of texts. Input is split into words, and each word is compared
//! case-insensitively against the filtered words. Filtered words containing a space are matched as
//! phrases anywhere in the input. Words can be exempted from matching by allowing them, and words
//! that are merely similar to a filtered word (within two edits) can optionally be matched as well.
//!
//! # Example
//! ```
//! use profanity_filter::ProfanityFilterBuilder;
//!
//! let filter = ProfanityFilterBuilder::new()
//!     .set_bad_words(["fox", "lazy dog"])
//!     .build()
//!     .unwrap();
//!
//! assert!(filter.contains_profanity("The quick brown FOX"));
//! assert_eq!(
//!     filter.censor("The quick brown fox jumps over the lazy dog"),
//!     "The quick brown *** jumps over the ********"
//! );
//! ```

extern crate alloc;

pub mod builder;
pub mod censor;
pub mod distance;
pub mod list;
pub mod matches;
pub mod tokenizer;

mod matcher;
mod words;

pub use builder::{BuildError, ProfanityFilterBuilder};
pub use censor::CensorMode;
pub use list::WordList;
pub use matches::{Location, Matches};
pub use words::DEFAULT_BAD_WORDS;

use alloc::string::String;

/// A filter for finding and censoring words in text.
///
/// A `ProfanityFilter` is immutable once built and may be shared freely between threads.
///
/// The filter created by [`ProfanityFilter::new()`] uses [`DEFAULT_BAD_WORDS`]. Use a
/// [`ProfanityFilterBuilder`] for any other configuration.
#[derive(Clone, Debug)]
pub struct ProfanityFilter {
    list: WordList,
    censor_mode: CensorMode,
}

impl ProfanityFilter {
    /// Create a filter using the default configuration.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::ProfanityFilter;
    ///
    /// let filter = ProfanityFilter::new();
    ///
    /// assert!(filter.contains_profanity("hello fuckers"));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(
            WordList::new(
                DEFAULT_BAD_WORDS.iter().copied().map(String::from),
                core::iter::empty(),
                list::Flags::empty(),
            ),
            CensorMode::default(),
        )
    }

    #[inline]
    pub(crate) fn from_parts(list: WordList, censor_mode: CensorMode) -> Self {
        Self { list, censor_mode }
    }

    /// The filter's frozen word list.
    #[inline]
    #[must_use]
    pub fn word_list(&self) -> &WordList {
        &self.list
    }

    /// The strategy used by [`censor()`](Self::censor).
    #[inline]
    #[must_use]
    pub fn censor_mode(&self) -> CensorMode {
        self.censor_mode
    }

    /// Find all matches within `input`.
    ///
    /// Returns the locations of every match, grouped by the canonical form of the matched word.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::{Location, ProfanityFilterBuilder};
    ///
    /// let filter = ProfanityFilterBuilder::new().set_bad_words(["foo"]).build().unwrap();
    ///
    /// let matches = filter.find("Foo bar foo");
    ///
    /// assert_eq!(
    ///     matches.get("foo"),
    ///     Some([Location::new(0, 3), Location::new(8, 3)].as_slice())
    /// );
    /// ```
    #[must_use]
    pub fn find(&self, input: &str) -> Matches {
        matcher::find(&self.list, input)
    }

    /// Find all matches within `input`.
    ///
    /// This is the same as [`find()`](Self::find).
    #[inline]
    #[must_use]
    pub fn find_profanities(&self, input: &str) -> Matches {
        self.find(input)
    }

    /// Check whether `input` contains any matches.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::ProfanityFilterBuilder;
    ///
    /// let filter = ProfanityFilterBuilder::new().set_bad_words(["foo"]).build().unwrap();
    ///
    /// assert!(filter.contains_profanity("this string contains foo"));
    /// assert!(!filter.contains_profanity("this string does not"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains_profanity(&self, input: &str) -> bool {
        !self.find(input).is_empty()
    }

    /// Check whether `input` contains any matches.
    ///
    /// This is the same as [`contains_profanity()`](Self::contains_profanity).
    #[inline]
    #[must_use]
    pub fn check(&self, input: &str) -> bool {
        self.contains_profanity(input)
    }

    /// Censor all matches within `input`.
    ///
    /// Returns a newly-allocated `String` with every matched character replaced according to the
    /// filter's [`CensorMode`]. The result has the same number of `char`s as `input`.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::ProfanityFilterBuilder;
    ///
    /// // The default censor mode is CensorMode::ReplaceAllWith('*').
    /// let filter = ProfanityFilterBuilder::new().set_bad_words(["foo"]).build().unwrap();
    ///
    /// assert_eq!(filter.censor("this string contains foo"), "this string contains ***");
    /// ```
    #[must_use]
    pub fn censor(&self, input: &str) -> String {
        self.censor_with(input, self.censor_mode.mask())
    }

    /// Censor all matches within `input`, replacing every matched character with `mask`.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::ProfanityFilterBuilder;
    ///
    /// let filter = ProfanityFilterBuilder::new().set_bad_words(["foo"]).build().unwrap();
    ///
    /// assert_eq!(filter.censor_with("foo", '#'), "###");
    /// ```
    #[must_use]
    pub fn censor_with(&self, input: &str, mask: char) -> String {
        censor::apply(input, &self.find(input), mask)
    }
}

impl Default for ProfanityFilter {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
