//! Letter folding and guess input validation
//!
//! Guesses and target characters are compared in folded form: lowercased,
//! canonically decomposed, with combining marks removed. `Ã`, `ã` and `a`
//! all fold to `a`; `Ç` folds to `c`.

use std::fmt;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Characters revealed before the first guess of every round
pub const SEPARATORS: [char; 4] = [' ', '-', '.', '/'];

/// Fold a character for comparison
///
/// Returns `None` when folding does not produce exactly one character
/// (for example a Hangul syllable, which decomposes into its jamo).
///
/// # Examples
/// ```
/// use hangword::core::fold;
///
/// assert_eq!(fold('Ã'), Some('a'));
/// assert_eq!(fold('ç'), Some('c'));
/// assert_eq!(fold('-'), Some('-'));
/// ```
#[must_use]
pub fn fold(c: char) -> Option<char> {
    let mut folded = c.to_lowercase().nfd().filter(|&m| !is_combining_mark(m));
    let first = folded.next()?;
    if folded.next().is_some() {
        None
    } else {
        Some(first)
    }
}

/// Check if a character is one of the auto-revealed separators
#[inline]
#[must_use]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// A validated, folded player guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(char);

/// Error type for rejected guess input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    Empty,
    TooLong(usize),
    NotAlphabetic(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No letter given"),
            Self::TooLong(len) => write!(f, "Expected a single letter, got {len} characters"),
            Self::NotAlphabetic(c) => write!(f, "'{c}' is not a letter"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Parse a single alphabetic character and fold it
    ///
    /// # Errors
    /// Returns `LetterError` if the input is empty, holds more than one
    /// character, or is not alphabetic.
    ///
    /// # Examples
    /// ```
    /// use hangword::core::Letter;
    ///
    /// assert_eq!(Letter::parse("É").unwrap().as_char(), 'e');
    /// assert!(Letter::parse("").is_err());
    /// assert!(Letter::parse("7").is_err());
    /// assert!(Letter::parse("ab").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let mut chars = input.chars();
        let Some(c) = chars.next() else {
            return Err(LetterError::Empty);
        };

        if chars.next().is_some() {
            return Err(LetterError::TooLong(input.chars().count()));
        }

        if !c.is_alphabetic() {
            return Err(LetterError::NotAlphabetic(c));
        }

        fold(c)
            .filter(|f| f.is_alphabetic())
            .map(Self)
            .ok_or(LetterError::NotAlphabetic(c))
    }

    /// Get the folded character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
