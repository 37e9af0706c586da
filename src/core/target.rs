//! Target word representation
//!
//! A `TargetWord` stores the word to guess with its category, plus the folded
//! form of each character for matching and reveal.

use super::Category;
use super::letter::{fold, is_separator};
use rustc_hash::FxHashSet;
use std::fmt;

/// The word a round is played on
///
/// Immutable once constructed. Every character either folds to a letter or
/// is one of the auto-revealed separators, so the word can always be fully
/// revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    category: Category,
    folded: Vec<char>,
    letters: FxHashSet<char>,
}

/// Error type for words that cannot be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    NoLetters,
    Unrevealable(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLetters => write!(f, "Word must contain at least one letter"),
            Self::Unrevealable(c) => {
                write!(f, "Character '{c}' can never be revealed by a letter guess")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl TargetWord {
    /// Create a new target word
    ///
    /// Surrounding whitespace is trimmed; case and accents are kept for display.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word has no letters
    /// - A character is neither a letter nor a separator (space, `-`, `.`, `/`)
    ///
    /// # Examples
    /// ```
    /// use hangword::core::{Category, FoodKind, TargetWord};
    ///
    /// let word = TargetWord::new("Açaí", Category::Food(FoodKind::Fruit)).unwrap();
    /// assert_eq!(word.text(), "Açaí");
    /// assert!(word.contains('c'));
    ///
    /// assert!(TargetWord::new("R2-D2", Category::Food(FoodKind::Dish)).is_err());
    /// ```
    pub fn new(text: impl Into<String>, category: Category) -> Result<Self, WordError> {
        let text = text.into().trim().to_string();

        let mut folded = Vec::with_capacity(text.len());
        let mut letters = FxHashSet::default();

        for c in text.chars() {
            if is_separator(c) {
                folded.push(c);
                continue;
            }

            let f = fold(c)
                .filter(|f| c.is_alphabetic() && f.is_alphabetic())
                .ok_or(WordError::Unrevealable(c))?;
            folded.push(f);
            letters.insert(f);
        }

        if letters.is_empty() {
            return Err(WordError::NoLetters);
        }

        Ok(Self {
            text,
            category,
            folded,
            letters,
        })
    }

    /// Get the word as written
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Top-level category label ("Food", "Place", "Date")
    #[inline]
    #[must_use]
    pub const fn category_label(&self) -> &'static str {
        self.category.label()
    }

    #[inline]
    #[must_use]
    pub const fn subcategory_label(&self) -> &'static str {
        self.category.subcategory_label()
    }

    #[inline]
    #[must_use]
    pub const fn hint(&self) -> &'static str {
        self.category.hint()
    }

    /// Number of characters, separators included
    #[inline]
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.folded.len()
    }

    /// Folded form of each character, in order
    #[inline]
    #[must_use]
    pub fn folded(&self) -> &[char] {
        &self.folded
    }

    /// Check if the word contains a folded letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Distinct folded letters in the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &FxHashSet<char> {
        &self.letters
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalendarKind, FoodKind, PlaceKind};

    const FRUIT: Category = Category::Food(FoodKind::Fruit);

    #[test]
    fn target_creation_valid() {
        let word = TargetWord::new("Banana", FRUIT).unwrap();
        assert_eq!(word.text(), "Banana");
        assert_eq!(word.char_count(), 6);
        assert_eq!(word.folded(), &['b', 'a', 'n', 'a', 'n', 'a']);
    }

    #[test]
    fn target_creation_trims() {
        let word = TargetWord::new("  Mango \n", FRUIT).unwrap();
        assert_eq!(word.text(), "Mango");
    }

    #[test]
    fn target_keeps_case_and_accents() {
        let word = TargetWord::new("São Paulo", Category::Place(PlaceKind::City)).unwrap();
        assert_eq!(word.text(), "São Paulo");
        assert_eq!(word.char_count(), 9);
        assert_eq!(word.folded()[1], 'a');
        assert_eq!(word.folded()[3], ' ');
    }

    #[test]
    fn target_contains_folded() {
        let word = TargetWord::new("Açaí", FRUIT).unwrap();
        assert!(word.contains('a'));
        assert!(word.contains('c'));
        assert!(word.contains('i'));
        assert!(!word.contains('ç'));
        assert!(!word.contains('z'));
    }

    #[test]
    fn target_letters_exclude_separators() {
        let word = TargetWord::new("Winston-Salem", Category::Place(PlaceKind::City)).unwrap();
        assert!(!word.letters().contains(&'-'));
        assert_eq!(word.letters().len(), 10); // w i n s t o a l e m
    }

    #[test]
    fn target_accepts_all_separators() {
        assert!(TargetWord::new("a b-c.d/e", FRUIT).is_ok());
    }

    #[test]
    fn target_rejects_unrevealable() {
        assert_eq!(
            TargetWord::new("Côte d'Ivoire", Category::Place(PlaceKind::Country)),
            Err(WordError::Unrevealable('\''))
        );
        assert_eq!(
            TargetWord::new("7 Up", Category::Food(FoodKind::Drink)),
            Err(WordError::Unrevealable('7'))
        );
        assert_eq!(TargetWord::new("Why?", FRUIT), Err(WordError::Unrevealable('?')));
    }

    #[test]
    fn target_rejects_no_letters() {
        assert_eq!(TargetWord::new("", FRUIT), Err(WordError::NoLetters));
        assert_eq!(TargetWord::new(" - ", FRUIT), Err(WordError::NoLetters));
    }

    #[test]
    fn target_labels_follow_category() {
        let word = TargetWord::new("May", Category::Calendar(CalendarKind::Month)).unwrap();
        assert_eq!(word.category_label(), "Date");
        assert_eq!(word.subcategory_label(), "Month");
        assert_eq!(word.hint(), "Maybe you like this month.");
    }

    #[test]
    fn target_display() {
        let word = TargetWord::new("Paella", Category::Food(FoodKind::Dish)).unwrap();
        assert_eq!(format!("{word}"), "Paella");
    }
}
