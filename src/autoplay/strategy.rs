//! Letter selection strategies
//!
//! Defines the Guesser trait and concrete implementations.

use crate::catalog::Catalog;
use crate::core::{PLACEHOLDER, RoundState, TargetWord, fold};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};

/// A strategy for choosing the next letter to submit
pub trait Guesser {
    /// Pick an unguessed letter for the round
    ///
    /// Returns `None` if every letter the guesser knows has been tried.
    fn select_letter<R: Rng>(&self, round: &RoundState, rng: &mut R) -> Option<char>;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of the guesser while keeping static dispatch.
pub enum GuesserType {
    /// Filters catalog words against the reveal (default, best performance)
    Candidate(CandidateGuesser),
    /// Fixed order by catalog letter frequency
    Frequency(FrequencyGuesser),
    /// Alphabet order
    Alphabetical(AlphabeticalGuesser),
    /// Random unguessed letter
    Random(RandomGuesser),
}

impl Guesser for GuesserType {
    fn select_letter<R: Rng>(&self, round: &RoundState, rng: &mut R) -> Option<char> {
        match self {
            Self::Candidate(g) => g.select_letter(round, rng),
            Self::Frequency(g) => g.select_letter(round, rng),
            Self::Alphabetical(g) => g.select_letter(round, rng),
            Self::Random(g) => g.select_letter(round, rng),
        }
    }
}

impl GuesserType {
    /// Create a guesser from its name
    ///
    /// Supported names: "candidate", "frequency", "alphabetical", "random".
    /// Defaults to candidate if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, catalog: &Catalog) -> Self {
        match name {
            "frequency" => Self::Frequency(FrequencyGuesser::from_catalog(catalog)),
            "alphabetical" | "abc" => {
                Self::Alphabetical(AlphabeticalGuesser::from_catalog(catalog))
            }
            "random" => Self::Random(RandomGuesser::from_catalog(catalog)),
            _ => Self::Candidate(CandidateGuesser::from_catalog(catalog)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Candidate(_) => "candidate",
            Self::Frequency(_) => "frequency",
            Self::Alphabetical(_) => "alphabetical",
            Self::Random(_) => "random",
        }
    }
}

/// First letter of `order` the round has not seen yet
fn first_unguessed(order: &[char], round: &RoundState) -> Option<char> {
    order.iter().copied().find(|&c| !round.has_guessed(c))
}

/// Letters sorted by how many catalog words contain them, most common first
fn frequency_order(catalog: &Catalog) -> Vec<char> {
    let mut letters: Vec<(char, usize)> = catalog.letter_frequencies().into_iter().collect();
    letters.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    letters.into_iter().map(|(c, _)| c).collect()
}

/// Candidate filtering strategy
///
/// Keeps the catalog words that agree with everything the player can see
/// (category, length, reveal, wrong letters) and guesses the unguessed letter
/// found in the most candidates. Falls back to catalog frequency when no
/// candidate remains.
pub struct CandidateGuesser {
    words: Vec<TargetWord>,
    fallback: Vec<char>,
}

impl CandidateGuesser {
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            words: catalog.words().cloned().collect(),
            fallback: frequency_order(catalog),
        }
    }

    /// Catalog words consistent with the visible state of the round
    #[must_use]
    pub fn candidates<'a>(&'a self, round: &RoundState) -> Vec<&'a TargetWord> {
        let target = round.target();
        let display: Vec<char> = round.display().chars().collect();
        let guessed: FxHashSet<char> = round.guessed_letters().into_iter().collect();

        self.words
            .iter()
            .filter(|word| {
                word.category_label() == target.category_label()
                    && word.char_count() == display.len()
                    && word.folded().iter().zip(&display).all(|(&folded, &shown)| {
                        if shown == PLACEHOLDER {
                            !guessed.contains(&folded)
                        } else {
                            fold(shown) == Some(folded)
                        }
                    })
            })
            .collect()
    }
}

impl Guesser for CandidateGuesser {
    fn select_letter<R: Rng>(&self, round: &RoundState, _rng: &mut R) -> Option<char> {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for word in self.candidates(round) {
            for &letter in word.letters() {
                if !round.has_guessed(letter) {
                    *counts.entry(letter).or_insert(0) += 1;
                }
            }
        }

        counts
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
            .map(|(c, _)| c)
            .or_else(|| first_unguessed(&self.fallback, round))
    }
}

/// Letter frequency strategy
///
/// Always guesses letters in order of how many catalog words contain them.
pub struct FrequencyGuesser {
    order: Vec<char>,
}

impl FrequencyGuesser {
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            order: frequency_order(catalog),
        }
    }
}

impl Guesser for FrequencyGuesser {
    fn select_letter<R: Rng>(&self, round: &RoundState, _rng: &mut R) -> Option<char> {
        first_unguessed(&self.order, round)
    }
}

/// Alphabetical strategy
///
/// Baseline that walks the catalog alphabet in order.
pub struct AlphabeticalGuesser {
    alphabet: Vec<char>,
}

impl AlphabeticalGuesser {
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            alphabet: catalog.alphabet(),
        }
    }
}

impl Guesser for AlphabeticalGuesser {
    fn select_letter<R: Rng>(&self, round: &RoundState, _rng: &mut R) -> Option<char> {
        first_unguessed(&self.alphabet, round)
    }
}

/// Random strategy
///
/// Picks uniformly among the unguessed letters of the catalog alphabet.
pub struct RandomGuesser {
    alphabet: Vec<char>,
}

impl RandomGuesser {
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            alphabet: catalog.alphabet(),
        }
    }
}

impl Guesser for RandomGuesser {
    fn select_letter<R: Rng>(&self, round: &RoundState, rng: &mut R) -> Option<char> {
        let open: Vec<char> = self
            .alphabet
            .iter()
            .copied()
            .filter(|&c| !round.has_guessed(c))
            .collect();
        open.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalendarKind, Category, FoodKind};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup_catalog() -> Catalog {
        let fruit = Category::Food(FoodKind::Fruit);
        let month = Category::Calendar(CalendarKind::Month);
        Catalog::new([
            TargetWord::new("Kiwi", fruit).unwrap(),
            TargetWord::new("Lime", fruit).unwrap(),
            TargetWord::new("Pear", fruit).unwrap(),
            TargetWord::new("June", month).unwrap(),
        ])
        .unwrap()
    }

    fn round(text: &str) -> RoundState {
        RoundState::new(TargetWord::new(text, Category::Food(FoodKind::Fruit)).unwrap(), 5)
    }

    #[test]
    fn from_name_selects_guesser() {
        let catalog = setup_catalog();
        assert_eq!(GuesserType::from_name("frequency", &catalog).name(), "frequency");
        assert_eq!(GuesserType::from_name("abc", &catalog).name(), "alphabetical");
        assert_eq!(GuesserType::from_name("random", &catalog).name(), "random");
        assert_eq!(GuesserType::from_name("unknown", &catalog).name(), "candidate");
    }

    #[test]
    fn alphabetical_walks_alphabet() {
        let catalog = setup_catalog();
        let guesser = AlphabeticalGuesser::from_catalog(&catalog);
        let mut rng = StdRng::seed_from_u64(0);
        let mut r = round("Kiwi");

        assert_eq!(guesser.select_letter(&r, &mut rng), Some('a'));
        r.submit("a");
        assert_eq!(guesser.select_letter(&r, &mut rng), Some('e'));
    }

    #[test]
    fn frequency_prefers_common_letters() {
        let catalog = setup_catalog();
        let guesser = FrequencyGuesser::from_catalog(&catalog);
        let mut rng = StdRng::seed_from_u64(0);

        // 'e' appears in Lime, Pear and June
        assert_eq!(guesser.select_letter(&round("Kiwi"), &mut rng), Some('e'));
    }

    #[test]
    fn candidates_filter_by_reveal() {
        let catalog = setup_catalog();
        let guesser = CandidateGuesser::from_catalog(&catalog);
        let mut r = round("Kiwi");

        // Same category and length: Kiwi, Lime, Pear (June is a date)
        assert_eq!(guesser.candidates(&r).len(), 3);

        r.submit("i");
        let texts: Vec<&str> = guesser.candidates(&r).iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["Kiwi"]);
    }

    #[test]
    fn candidates_exclude_wrong_letters() {
        let catalog = setup_catalog();
        let guesser = CandidateGuesser::from_catalog(&catalog);
        let mut r = round("Kiwi");

        r.submit("e");
        let texts: Vec<&str> = guesser.candidates(&r).iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["Kiwi"]);
    }

    #[test]
    fn candidate_guesser_solves_known_word() {
        let catalog = setup_catalog();
        let guesser = CandidateGuesser::from_catalog(&catalog);
        let mut rng = StdRng::seed_from_u64(0);
        let mut r = round("Pear");

        while !r.status().is_over() {
            let letter = guesser.select_letter(&r, &mut rng).unwrap();
            r.submit(&letter.to_string());
        }

        assert_eq!(r.display(), "Pear");
        assert!(r.error_count() <= 2);
    }

    #[test]
    fn candidate_guesser_falls_back_for_unknown_word() {
        let catalog = setup_catalog();
        let guesser = CandidateGuesser::from_catalog(&catalog);
        let mut rng = StdRng::seed_from_u64(0);

        let r = round("Plum");
        assert!(guesser.candidates(&r).iter().all(|w| w.text() != "Plum"));
        assert!(guesser.select_letter(&r, &mut rng).is_some());
    }

    #[test]
    fn random_picks_unguessed_letter() {
        let catalog = setup_catalog();
        let guesser = RandomGuesser::from_catalog(&catalog);
        let mut rng = StdRng::seed_from_u64(8);
        let mut r = round("Kiwi");

        for _ in 0..3 {
            let letter = guesser.select_letter(&r, &mut rng).unwrap();
            assert!(!r.has_guessed(letter));
            assert!(catalog.alphabet().contains(&letter));
            r.submit(&letter.to_string());
        }
    }

    #[test]
    fn exhausted_alphabet_returns_none() {
        let fruit = Category::Food(FoodKind::Fruit);
        let catalog = Catalog::new([TargetWord::new("ab", fruit).unwrap()]).unwrap();
        let guesser = AlphabeticalGuesser::from_catalog(&catalog);
        let mut rng = StdRng::seed_from_u64(0);

        let mut r = RoundState::new(TargetWord::new("ba", fruit).unwrap(), 5);
        r.submit("a");
        r.submit("b");
        assert_eq!(guesser.select_letter(&r, &mut rng), None);
    }
}
