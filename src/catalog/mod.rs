//! Word catalog
//!
//! Target words grouped by subcategory. The built-in catalog is embedded at
//! build time; custom catalogs load from text files with the same format.

mod embedded;
pub mod loader;
mod selector;

pub use embedded::{EMBEDDED, EMBEDDED_COUNT};
pub use selector::select_target;

use crate::core::{Category, TargetWord, WordError};
use rustc_hash::FxHashMap;
use std::{fmt, io};

/// Words of one subcategory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogGroup {
    category: Category,
    words: Vec<TargetWord>,
}

impl CatalogGroup {
    #[inline]
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Words in this subcategory, never empty
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[TargetWord] {
        &self.words
    }
}

/// A non-empty set of target words grouped by subcategory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    groups: Vec<CatalogGroup>,
}

/// Error type for catalogs that cannot be built or loaded
#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    MissingSeparator { line: usize },
    UnknownSubcategory { line: usize, slug: String },
    InvalidWord { line: usize, word: String, source: WordError },
    InvalidBuiltin { word: String, source: WordError },
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read catalog: {err}"),
            Self::MissingSeparator { line } => {
                write!(f, "Line {line}: expected '<subcategory>: <word>'")
            }
            Self::UnknownSubcategory { line, slug } => {
                write!(f, "Line {line}: unknown subcategory '{slug}'")
            }
            Self::InvalidWord { line, word, source } => {
                write!(f, "Line {line}: invalid word '{word}': {source}")
            }
            Self::InvalidBuiltin { word, source } => {
                write!(f, "Built-in word '{word}' cannot be played: {source}")
            }
            Self::Empty => write!(f, "Catalog contains no words"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidWord { source, .. } | Self::InvalidBuiltin { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl Catalog {
    /// Build a catalog from target words
    ///
    /// Groups follow `Category::ALL` order; words keep their input order
    /// within a group.
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` if no words are given.
    pub fn new(words: impl IntoIterator<Item = TargetWord>) -> Result<Self, CatalogError> {
        let catalog = Self::group(words);
        if catalog.groups.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    /// The built-in catalog
    ///
    /// # Errors
    /// Returns `CatalogError::InvalidBuiltin` if an embedded word cannot be
    /// played.
    ///
    /// # Examples
    /// ```
    /// use hangword::catalog::Catalog;
    ///
    /// let catalog = Catalog::embedded().unwrap();
    /// assert_eq!(catalog.groups().len(), 10);
    /// ```
    pub fn embedded() -> Result<Self, CatalogError> {
        let words = EMBEDDED
            .iter()
            .map(|&(category, text)| {
                TargetWord::new(text, category).map_err(|source| CatalogError::InvalidBuiltin {
                    word: text.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    fn group(words: impl IntoIterator<Item = TargetWord>) -> Self {
        let mut by_category: FxHashMap<Category, Vec<TargetWord>> = FxHashMap::default();
        for word in words {
            by_category.entry(word.category()).or_default().push(word);
        }

        let groups = Category::ALL
            .into_iter()
            .filter_map(|category| {
                by_category
                    .remove(&category)
                    .map(|words| CatalogGroup { category, words })
            })
            .collect();

        Self { groups }
    }

    /// Subcategory groups, each holding at least one word
    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[CatalogGroup] {
        &self.groups
    }

    /// Iterate over every word
    pub fn words(&self) -> impl Iterator<Item = &TargetWord> {
        self.groups.iter().flat_map(|g| g.words.iter())
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.words.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Count of each folded letter across all words, once per word
    #[must_use]
    pub fn letter_frequencies(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for word in self.words() {
            for &letter in word.letters() {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Distinct folded letters used by the catalog, sorted
    #[must_use]
    pub fn alphabet(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.letter_frequencies().into_keys().collect();
        letters.sort_unstable();
        letters
    }
}
