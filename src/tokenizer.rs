//! Splitting of input text into words.
//!
//! A word is a maximal run of word characters: letters (`\p{L}`), non-spacing marks (`\p{Mn}`),
//! decimal digits (`\p{Nd}`), and connector punctuation (`\p{Pc}`, such as `'_'`). Every other
//! character separates words. Each [`Token`] remembers where it was found in the input, measured
//! in `char`s so that positions can be used directly when censoring.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{Mn}\p{Nd}\p{Pc}]+").expect("word pattern is valid"));

/// A single word within the input, along with its location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    word: &'a str,
    position: usize,
    length: usize,
}

impl<'a> Token<'a> {
    /// The word, exactly as it appears in the input.
    #[inline]
    #[must_use]
    pub fn word(&self) -> &'a str {
        self.word
    }

    /// The `char` offset of the word's first character within the input.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The number of `char`s in the word.
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Iterator over the [`Token`]s of an input, from left to right.
///
/// Created by [`tokenize()`].
#[derive(Debug)]
pub struct Tokens<'a> {
    input: &'a str,
    words: regex::Matches<'static, 'a>,
    /// Byte offset just past the previous word.
    end: usize,
    /// `char` offset corresponding to `end`.
    position: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.words.next()?;

        let position = self.position + self.input[self.end..found.start()].chars().count();
        let length = found.as_str().chars().count();
        self.end = found.end();
        self.position = position + length;

        Some(Token {
            word: found.as_str(),
            position,
            length,
        })
    }
}

/// Split `input` into words.
///
/// Runs of non-word characters separate words and are never returned themselves, so no empty
/// tokens are produced.
///
/// # Example
/// ```
/// use profanity_filter::tokenizer::tokenize;
///
/// let words = tokenize("hello, world!").map(|token| token.word()).collect::<Vec<_>>();
///
/// assert_eq!(words, vec!["hello", "world"]);
/// ```
#[inline]
pub fn tokenize(input: &str) -> Tokens<'_> {
    Tokens {
        input,
        words: WORD.find_iter(input),
        end: 0,
        position: 0,
    }
}
