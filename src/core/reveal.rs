//! Reveal rendering
//!
//! Derives the visible spelling of a target word from the guessed letters.

use super::TargetWord;
use super::letter::fold;
use rustc_hash::FxHashSet;

/// Marker shown for characters not yet revealed
pub const PLACEHOLDER: char = '?';

/// Render the target with unguessed characters replaced by `PLACEHOLDER`
///
/// The result has the same number of characters as the target. Revealed
/// positions keep the target's original case and accents. Guessed letters are
/// folded before comparison, so `'A'` and `'ã'` both reveal `"ã"`.
///
/// # Examples
/// ```
/// use hangword::core::{Category, FoodKind, TargetWord, reveal};
///
/// let target = TargetWord::new("banana", Category::Food(FoodKind::Fruit)).unwrap();
/// assert_eq!(reveal(&target, &['a']), "?a?a?a");
/// assert_eq!(reveal(&target, &['a', 'n', 'b']), "banana");
/// ```
#[must_use]
pub fn reveal(target: &TargetWord, guessed: &[char]) -> String {
    let guessed: FxHashSet<char> = guessed.iter().filter_map(|&c| fold(c)).collect();

    target
        .text()
        .chars()
        .zip(target.folded())
        .map(|(original, folded)| {
            if guessed.contains(folded) {
                original
            } else {
                PLACEHOLDER
            }
        })
        .collect()
}

/// Check if a rendered reveal has no hidden characters left
#[inline]
#[must_use]
pub fn is_fully_revealed(display: &str) -> bool {
    !display.contains(PLACEHOLDER)
}
