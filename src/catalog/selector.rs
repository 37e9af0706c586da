//! Random target selection

use super::Catalog;
use crate::core::TargetWord;
use rand::Rng;
use tracing::debug;

/// Pick a target word at random
///
/// A subcategory is drawn uniformly first, then a word uniformly within it,
/// so small subcategories are not drowned out by large ones. Pass a seeded
/// generator for reproducible picks.
///
/// # Examples
/// ```
/// use hangword::catalog::{Catalog, select_target};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let catalog = Catalog::embedded().unwrap();
/// let first = select_target(&catalog, &mut StdRng::seed_from_u64(7));
/// let again = select_target(&catalog, &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, again);
/// ```
pub fn select_target<R: Rng>(catalog: &Catalog, rng: &mut R) -> TargetWord {
    let groups = catalog.groups();
    let group = &groups[rng.random_range(0..groups.len())];

    let words = group.words();
    let target = words[rng.random_range(0..words.len())].clone();

    debug!(
        word = target.text(),
        category = %target.category(),
        "target selected"
    );
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalendarKind, Category, FoodKind};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashMap;

    #[test]
    fn selection_is_reproducible() {
        let catalog = Catalog::embedded().unwrap();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            assert_eq!(select_target(&catalog, &mut a), select_target(&catalog, &mut b));
        }
    }

    #[test]
    fn selection_comes_from_catalog() {
        let catalog = Catalog::embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            let target = select_target(&catalog, &mut rng);
            assert!(catalog.words().any(|w| *w == target));
        }
    }

    #[test]
    fn single_word_catalog() {
        let word = TargetWord::new("Kiwi", Category::Food(FoodKind::Fruit)).unwrap();
        let catalog = Catalog::new([word.clone()]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(select_target(&catalog, &mut rng), word);
    }

    #[test]
    fn subcategories_drawn_evenly() {
        // One month against many fruits: the month still gets about half the picks
        let month = Category::Calendar(CalendarKind::Month);
        let fruit = Category::Food(FoodKind::Fruit);
        let mut words = vec![TargetWord::new("May", month).unwrap()];
        for text in ["Kiwi", "Fig", "Lime", "Pear", "Plum", "Date", "Apple", "Mango"] {
            words.push(TargetWord::new(text, fruit).unwrap());
        }
        let catalog = Catalog::new(words).unwrap();

        let mut rng = StdRng::seed_from_u64(99);
        let mut counts: FxHashMap<Category, usize> = FxHashMap::default();
        for _ in 0..2000 {
            *counts.entry(select_target(&catalog, &mut rng).category()).or_insert(0) += 1;
        }

        let months = counts.get(&month).copied().unwrap_or(0);
        assert!((800..=1200).contains(&months), "month picked {months} times");
    }
}
