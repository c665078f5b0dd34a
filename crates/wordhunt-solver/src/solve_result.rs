use std::{cmp::Ordering, collections::HashSet};

use wordhunt_core::{total_score, word_score};

/// The authoritative word list for one board.
///
/// Words are distinct, lowercase, at least three letters long, and ordered
/// longest first with ties broken alphabetically. The total score is the sum
/// of [`word_score`] over all words.
///
/// # Examples
///
/// ```
/// use wordhunt_core::Board;
/// use wordhunt_solver::{Dictionary, WordSolver};
///
/// let dictionary = Dictionary::from_words(["cat", "dog", "care"]);
/// let board: Board = "care tdog xxxx xxxx".parse()?;
/// let result = WordSolver::new(&dictionary).solve(&board);
///
/// assert_eq!(result.words(), ["care", "cat", "dog"]);
/// assert_eq!(result.total_score(), 600);
/// assert!(result.contains("DOG"));
/// # Ok::<(), wordhunt_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolveResult {
    words: Vec<String>,
    total_score: u64,
}

impl SolveResult {
    pub(crate) fn from_word_set(found: HashSet<String>) -> Self {
        let mut words: Vec<String> = found.into_iter().collect();
        words.sort_unstable_by(|a, b| compare_words(a, b));
        let total_score = total_score(&words);
        Self { words, total_score }
    }

    /// Returns the words, longest first, then alphabetical.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Consumes the result, returning the ordered word list.
    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Returns the sum of the scores of all words.
    #[must_use]
    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no word was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` if `word` is in the list, ignoring ASCII case.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_ascii_lowercase();
        self.words
            .binary_search_by(|probe| compare_words(probe, &word))
            .is_ok()
    }

    /// Iterates over `(word, points)` pairs in list order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, u32)> + '_ {
        self.words
            .iter()
            .map(|word| (word.as_str(), word_score(word.len())))
    }
}

/// Longest first, then lexicographic.
fn compare_words(a: &str, b: &str) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}
