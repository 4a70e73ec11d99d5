//! Censoring of matched words.
//!
//! Censoring replaces every character of every [`Location`] in a set of [`Matches`] with a mask
//! character. The output always has the same number of `char`s as the input.
//!
//! [`Location`]: crate::Location
//!
//! # Example
//! ```
//! use profanity_filter::{CensorMode, ProfanityFilterBuilder};
//!
//! let filter = ProfanityFilterBuilder::new()
//!     .set_bad_words(["foo"])
//!     .censor_mode(CensorMode::ReplaceAllWith('#'))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(filter.censor("foo bar"), "### bar");
//! ```

use crate::matches::Matches;
use alloc::{string::String, vec::Vec};

/// The strategy used to censor matched words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CensorMode {
    /// Replace every matched character with the given character.
    ReplaceAllWith(char),
}

impl CensorMode {
    /// The character matched characters are replaced with.
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> char {
        match self {
            CensorMode::ReplaceAllWith(c) => *c,
        }
    }
}

impl Default for CensorMode {
    #[inline]
    fn default() -> Self {
        CensorMode::ReplaceAllWith('*')
    }
}

/// Replace every character covered by `matches` within `input` with `mask`.
///
/// Overlapping locations are masked once; the result is the same regardless of the order the
/// locations are applied in.
///
/// # Panics
/// Panics if a location extends past the end of `input`. Locations produced by searching `input`
/// are always in bounds.
#[must_use]
pub fn apply(input: &str, matches: &Matches, mask: char) -> String {
    if matches.is_empty() {
        return input.into();
    }

    let mut chars = input.chars().collect::<Vec<_>>();
    for location in matches.locations() {
        assert!(
            location.end() <= chars.len(),
            "match at {:?} is out of bounds of input with {} chars",
            location.range(),
            chars.len()
        );
        for c in &mut chars[location.range()] {
            *c = mask;
        }
    }
    chars.into_iter().collect()
}
