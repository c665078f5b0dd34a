use std::sync::LazyLock;

use rand::{
    SeedableRng as _,
    distr::{Distribution as _, weighted::WeightedIndex},
};
use rand_pcg::Pcg32;
use wordhunt_core::{Board, Letter};

use crate::BoardSeed;

/// Relative weight of each letter `a`-`z`, approximating English text frequency.
///
/// This is a text-frequency table, not a dice distribution. Changing any value
/// changes the board produced for every seed.
pub const LETTER_WEIGHTS: [f64; 26] = [
    8.17, 1.49, 2.78, 4.25, 12.70, 2.23, 2.02, 6.09, 6.97, 0.15, 0.77, 4.03, 2.41, 6.75, 7.51,
    1.93, 0.10, 5.99, 6.33, 9.06, 2.76, 0.98, 2.36, 0.15, 1.97, 0.07,
];

static LETTER_DISTRIBUTION: LazyLock<WeightedIndex<f64>> = LazyLock::new(|| {
    WeightedIndex::new(LETTER_WEIGHTS).expect("letter weights are positive and finite")
});

/// Generates the board for `seed`.
///
/// Each of the 16 cells is an independent draw from [`LETTER_WEIGHTS`], taken
/// from a PCG stream seeded by `seed`. The same seed always produces the same
/// board.
///
/// # Examples
///
/// ```
/// use wordhunt_generator::{BoardSeed, generate_board};
///
/// let board = generate_board(BoardSeed::new(42));
/// assert_eq!(board, generate_board(BoardSeed::new(42)));
/// assert_eq!(board.to_string().len(), 16);
/// ```
#[must_use]
pub fn generate_board(seed: BoardSeed) -> Board {
    let mut rng = Pcg32::seed_from_u64(u64::from(seed.value()));
    let letters = std::array::from_fn(|_| {
        #[expect(clippy::cast_possible_truncation)]
        let index = LETTER_DISTRIBUTION.sample(&mut rng) as u8;
        Letter::from_index(index)
    });
    Board::from_letters(letters)
}
