//! Results of searching text for filtered words.

use alloc::{borrow::ToOwned, string::String, vec, vec::Vec};
use core::ops::Range;
use hashbrown::{hash_map, HashMap};

/// The location of a match within the searched text.
///
/// Both fields are measured in `char`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// The offset of the first matched character.
    pub position: usize,
    /// The number of matched characters.
    pub length: usize,
}

impl Location {
    /// Creates a new location.
    #[inline]
    #[must_use]
    pub const fn new(position: usize, length: usize) -> Self {
        Self { position, length }
    }

    /// The offset one past the last matched character.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.position + self.length
    }

    /// The matched characters as a range of `char` offsets.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.position..self.end()
    }
}

/// All matches found within a text, grouped by filtered word.
///
/// Keys are the canonical (lowercase) form of the filtered word that was matched, not the text
/// that matched it, so `"FOO"` and `"Foo"` are both found under `"foo"`. Locations for each word
/// are kept in the order they were found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Matches {
    inner: HashMap<String, Vec<Location>>,
}

impl Matches {
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a location for `word`.
    pub(crate) fn insert(&mut self, word: &str, location: Location) {
        match self.inner.get_mut(word) {
            Some(locations) => locations.push(location),
            None => {
                self.inner.insert(word.to_owned(), vec![location]);
            }
        }
    }

    /// Returns whether no matches were found.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The number of distinct filtered words that were matched.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns whether `word` was matched.
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.inner.contains_key(word)
    }

    /// The locations at which `word` was matched, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&[Location]> {
        self.inner.get(word).map(Vec::as_slice)
    }

    /// Iterate over each matched word and its locations.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.inner.iter(),
        }
    }

    /// Iterate over the matched words.
    #[inline]
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Iterate over every location of every matched word.
    #[inline]
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.inner.values().flatten()
    }
}

/// Iterator over the entries of [`Matches`].
///
/// Created by [`Matches::iter()`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, Vec<Location>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [Location]);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(word, locations)| (word.as_str(), locations.as_slice()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Matches {
    type Item = (&'a str, &'a [Location]);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
