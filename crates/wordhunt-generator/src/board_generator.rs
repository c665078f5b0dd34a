use rand::{
    SeedableRng as _,
    distr::{Distribution as _, StandardUniform},
};
use rand_pcg::Pcg32;
use wordhunt_core::Board;
use wordhunt_solver::{Dictionary, SolveResult, WordSolver};

use crate::{BoardSeed, generate_board};

/// Default number of boards tried before a threshold search gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Score a board must exceed before a hosted game is opened on it.
pub const OPEN_GAME_MIN_SCORE: u64 = 300_000;

/// A board together with the seed that produced it and its solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// Seed that reproduces `board` through [`generate_board`].
    pub seed: BoardSeed,
    /// The generated board.
    pub board: Board,
    /// Every word on the board and the total score.
    pub solution: SolveResult,
}

/// Errors returned by [`BoardGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// No candidate board scored above the requested minimum.
    #[display(
        "no board scored above {min_score} in {attempts} attempts (best was {best_score})"
    )]
    ThresholdNotReached {
        /// The requested minimum score.
        min_score: u64,
        /// Number of boards tried.
        attempts: usize,
        /// Highest score among the tried boards.
        best_score: u64,
    },
}

/// Generates boards and solves them, optionally requiring a minimum score.
///
/// Without a minimum score the first board is accepted. With one, candidate
/// boards are generated and solved until one scores strictly above the
/// minimum. Candidate seeds come from a PRNG seeded by the starting seed, so
/// [`generate_from`](Self::generate_from) is reproducible.
///
/// # Examples
///
/// ```
/// use wordhunt_generator::{BoardGenerator, BoardSeed};
/// use wordhunt_solver::Dictionary;
///
/// let dictionary = Dictionary::from_words(["tea", "eat", "ate", "sea", "set", "tee"]);
/// let generator = BoardGenerator::new(&dictionary)
///     .with_min_score(100)
///     .with_max_attempts(10_000);
///
/// let generated = generator.generate_from(BoardSeed::new(7))?;
/// assert!(generated.solution.total_score() > 100);
/// assert_eq!(generated, generator.generate_from(BoardSeed::new(7))?);
/// # Ok::<(), wordhunt_generator::GeneratorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BoardGenerator<'a> {
    solver: WordSolver<'a>,
    min_score: Option<u64>,
    max_attempts: usize,
}

impl<'a> BoardGenerator<'a> {
    /// Creates a generator that solves boards against `dictionary`.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            solver: WordSolver::new(dictionary),
            min_score: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Only accept boards whose total score is strictly greater than `min_score`.
    #[must_use]
    pub fn with_min_score(mut self, min_score: u64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    /// Sets how many boards are tried before giving up (at least one).
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Returns the configured minimum score, if any.
    #[must_use]
    pub fn min_score(&self) -> Option<u64> {
        self.min_score
    }

    /// Generates and solves the board for `seed`, ignoring the minimum score.
    #[must_use]
    pub fn generate_with_seed(&self, seed: BoardSeed) -> GeneratedBoard {
        let board = generate_board(seed);
        let solution = self.solver.solve(&board);
        GeneratedBoard {
            seed,
            board,
            solution,
        }
    }

    /// Searches for an acceptable board starting from `seed`.
    ///
    /// The first candidate is the board for `seed` itself; later candidates
    /// use seeds drawn from a PRNG seeded by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ThresholdNotReached`] if no candidate within
    /// the attempt budget scores above the minimum.
    pub fn generate_from(&self, seed: BoardSeed) -> Result<GeneratedBoard, GeneratorError> {
        let Some(min_score) = self.min_score else {
            return Ok(self.generate_with_seed(seed));
        };

        let mut seeds = Pcg32::seed_from_u64(u64::from(seed.value()));
        let mut candidate = seed;
        let mut best_score = 0;
        for attempt in 1..=self.max_attempts {
            let generated = self.generate_with_seed(candidate);
            let score = generated.solution.total_score();
            if score > min_score {
                log::debug!(
                    "accepted board {} (seed {candidate}) scoring {score} after {attempt} attempts",
                    generated.board
                );
                return Ok(generated);
            }
            log::trace!("rejected seed {candidate} scoring {score}");
            best_score = best_score.max(score);
            candidate = BoardSeed::new(StandardUniform.sample(&mut seeds));
        }

        Err(GeneratorError::ThresholdNotReached {
            min_score,
            attempts: self.max_attempts,
            best_score,
        })
    }

    /// Searches for an acceptable board starting from a random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ThresholdNotReached`] if no candidate within
    /// the attempt budget scores above the minimum.
    pub fn generate(&self) -> Result<GeneratedBoard, GeneratorError> {
        self.generate_from(BoardSeed::random())
    }
}
