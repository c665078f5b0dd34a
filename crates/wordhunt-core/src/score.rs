//! Word scoring.
//!
//! The score table is shared by the solver, which totals the authoritative
//! word list, and by anything that scores player submissions. Both sides must
//! use [`word_score`] or their totals will disagree.

/// Minimum number of letters a word needs to count.
pub const MIN_WORD_LEN: usize = 3;

/// Returns the points awarded for a word of `len` letters.
///
/// | letters | points |
/// |---|---|
/// | 0-2 | 0 |
/// | 3 | 100 |
/// | 4 | 400 |
/// | 5 | 800 |
/// | 6 | 1400 |
/// | 7 | 1800 |
/// | 8+ | 2200 + 400 per letter beyond 8 |
///
/// Saturates at `u32::MAX` for lengths no board can produce.
///
/// # Examples
///
/// ```
/// use wordhunt_core::word_score;
///
/// assert_eq!(word_score(2), 0);
/// assert_eq!(word_score(3), 100);
/// assert_eq!(word_score(8), 2200);
/// assert_eq!(word_score(9), 2600);
/// ```
#[must_use]
pub fn word_score(len: usize) -> u32 {
    match len {
        0..MIN_WORD_LEN => 0,
        3 => 100,
        4 => 400,
        5 => 800,
        6 => 1400,
        7 => 1800,
        _ => {
            let extra = u32::try_from(len - 8).unwrap_or(u32::MAX);
            extra.saturating_mul(400).saturating_add(2200)
        }
    }
}

/// Sums [`word_score`] over the lengths of `words`.
///
/// Callers are responsible for deduplicating `words` first.
#[must_use]
pub fn total_score<I>(words: I) -> u64
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| u64::from(word_score(word.as_ref().len())))
        .sum()
}
