//! Catalog loading utilities
//!
//! Parses catalog text: one `<subcategory>: <word>` entry per line, blank
//! lines and `#` comments ignored.

use super::{Catalog, CatalogError};
use crate::core::{Category, TargetWord};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a catalog from a file
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, a line is malformed,
/// a word cannot be played, or the file holds no words.
///
/// # Examples
/// ```no_run
/// use hangword::catalog::loader::load_from_file;
///
/// let catalog = load_from_file("data/catalog.txt").unwrap();
/// println!("Loaded {} words", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let catalog = parse_catalog(&content)?;

    debug!(path = %path.display(), words = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parse catalog text
///
/// # Errors
///
/// Returns `CatalogError` for the first malformed line or unplayable word,
/// or `CatalogError::Empty` if no entries are present.
///
/// # Examples
/// ```
/// use hangword::catalog::loader::parse_catalog;
///
/// let catalog = parse_catalog("# snacks\nfruit: Kiwi\nmonth: May\n").unwrap();
/// assert_eq!(catalog.len(), 2);
///
/// assert!(parse_catalog("planet: Mars").is_err());
/// ```
pub fn parse_catalog(content: &str) -> Result<Catalog, CatalogError> {
    let mut words = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (slug, text) = trimmed
            .split_once(':')
            .ok_or(CatalogError::MissingSeparator { line: line_number })?;

        let slug = slug.trim();
        let category =
            Category::from_slug(slug).ok_or_else(|| CatalogError::UnknownSubcategory {
                line: line_number,
                slug: slug.to_string(),
            })?;

        let text = text.trim();
        let word = TargetWord::new(text, category).map_err(|source| CatalogError::InvalidWord {
            line: line_number,
            word: text.to_string(),
            source,
        })?;

        words.push(word);
    }

    Catalog::new(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FoodKind, WordError};

    #[test]
    fn parse_skips_comments_and_blanks() {
        let catalog =
            parse_catalog("\n# header\n\n  fruit: Kiwi  \n   # indented comment\n").unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.groups()[0].category(), Category::Food(FoodKind::Fruit));
        assert_eq!(catalog.groups()[0].words()[0].text(), "Kiwi");
    }

    #[test]
    fn parse_keeps_multi_word_entries() {
        let catalog = parse_catalog("city: Rio de Janeiro\ncity:St. Louis").unwrap();
        let texts: Vec<&str> = catalog.words().map(TargetWord::text).collect();
        assert_eq!(texts, ["Rio de Janeiro", "St. Louis"]);
    }

    #[test]
    fn parse_missing_separator() {
        let err = parse_catalog("fruit: Kiwi\nMango").unwrap_err();
        assert!(matches!(err, CatalogError::MissingSeparator { line: 2 }));
    }

    #[test]
    fn parse_unknown_subcategory() {
        let err = parse_catalog("planet: Mars").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnknownSubcategory { line: 1, ref slug } if slug == "planet"
        ));
    }

    #[test]
    fn parse_unplayable_word() {
        let err = parse_catalog("# c\ncountry: Côte d'Ivoire").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidWord {
                line: 2,
                source: WordError::Unrevealable('\''),
                ..
            }
        ));
    }

    #[test]
    fn parse_empty_word() {
        let err = parse_catalog("fruit:   ").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidWord {
                source: WordError::NoLetters,
                ..
            }
        ));
    }

    #[test]
    fn parse_empty_catalog() {
        assert!(matches!(parse_catalog(""), Err(CatalogError::Empty)));
        assert!(matches!(parse_catalog("# only comments\n"), Err(CatalogError::Empty)));
    }

    #[test]
    fn load_missing_file() {
        let err = load_from_file("does/not/exist.txt").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn load_embedded_source_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.txt");
        let catalog = load_from_file(path).unwrap();
        assert_eq!(catalog, Catalog::embedded().unwrap());
    }
}
