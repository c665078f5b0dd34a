use std::collections::HashSet;

use wordhunt_core::{MIN_WORD_LEN, word_score};
use wordhunt_solver::SolveResult;

/// Normalizes a player's word list.
///
/// Each word is lowercased and stripped of everything but ASCII letters.
/// Results shorter than three letters are dropped, as are repeats; the first
/// occurrence of each word keeps its position.
///
/// # Examples
///
/// ```
/// use wordhunt_game::normalize_submission;
///
/// let words = normalize_submission(["Cat", " cat ", "do-g", "at", "CAT!"]);
/// assert_eq!(words, ["cat", "dog"]);
/// ```
#[must_use]
pub fn normalize_submission<I>(words: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    words
        .into_iter()
        .map(|word| {
            word.as_ref()
                .chars()
                .filter(char::is_ascii_alphabetic)
                .map(|ch| ch.to_ascii_lowercase())
                .collect::<String>()
        })
        .filter(|word| word.len() >= MIN_WORD_LEN && seen.insert(word.clone()))
        .collect()
}

/// A player's word list scored against a board's authoritative solution.
///
/// Only words present in the solution earn points, and each distinct word is
/// counted once no matter how often it was submitted.
///
/// # Examples
///
/// ```
/// use wordhunt_core::Board;
/// use wordhunt_game::ScoredSubmission;
/// use wordhunt_solver::{Dictionary, solve};
///
/// let dictionary = Dictionary::from_words(["cat", "dog", "care"]);
/// let board: Board = "care tdog xxxx xxxx".parse()?;
/// let solution = solve(&board, &dictionary);
///
/// let scored = ScoredSubmission::evaluate(&solution, ["CARE", "cat", "cat", "tac", "ox"]);
/// assert_eq!(scored.accepted(), ["care", "cat"]);
/// assert_eq!(scored.rejected(), ["tac"]);
/// assert_eq!(scored.score(), 500);
/// # Ok::<(), wordhunt_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoredSubmission {
    accepted: Vec<String>,
    rejected: Vec<String>,
    score: u64,
}

impl ScoredSubmission {
    /// Normalizes `words` and scores them against `solution`.
    #[must_use]
    pub fn evaluate<I>(solution: &SolveResult, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let (accepted, rejected): (Vec<String>, Vec<String>) = normalize_submission(words)
            .into_iter()
            .partition(|word| solution.contains(word));
        let score = accepted
            .iter()
            .map(|word| u64::from(word_score(word.len())))
            .sum();
        Self {
            accepted,
            rejected,
            score,
        }
    }

    /// Returns the credited words in submission order.
    #[must_use]
    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    /// Returns the normalized words that are not in the solution.
    #[must_use]
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    /// Returns the total points for the accepted words.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }
}
