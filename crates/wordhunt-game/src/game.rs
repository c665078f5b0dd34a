use wordhunt_core::Board;
use wordhunt_generator::{BoardSeed, GeneratedBoard};
use wordhunt_solver::{SolveResult, WordSolver};

use crate::{GameError, ScoredSubmission};

/// One of the two players in a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum Player {
    /// The player who opened the game.
    #[display("player 1")]
    One,
    /// The player who joined the game.
    #[display("player 2")]
    Two,
}

impl Player {
    /// Both players, in seat order.
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    /// The player scored strictly more points.
    Winner(Player),
    /// Both players scored the same.
    Tie,
}

/// A two-player round on one board.
///
/// The game owns the board's authoritative solution, computed once when the
/// game is created. Each player submits one word list, which is scored
/// against that solution with [`ScoredSubmission::evaluate`].
///
/// # Example
///
/// ```
/// use wordhunt_core::Board;
/// use wordhunt_game::{Game, Outcome, Player};
/// use wordhunt_solver::{Dictionary, WordSolver};
///
/// let dictionary = Dictionary::from_words(["cat", "dog", "care", "act"]);
/// let board: Board = "care tdog xxxx xxxx".parse()?;
/// let mut game = Game::from_board(board, &WordSolver::new(&dictionary));
///
/// game.submit(Player::One, ["care", "cat"])?;
/// assert!(!game.is_finished());
/// game.submit(Player::Two, ["dog", "act", "tac"])?;
///
/// assert_eq!(game.outcome(), Some(Outcome::Winner(Player::One)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    seed: Option<BoardSeed>,
    board: Board,
    solution: SolveResult,
    submissions: [Option<ScoredSubmission>; 2],
}

impl Game {
    /// Creates a game from a generated board and its solution.
    #[must_use]
    pub fn new(generated: GeneratedBoard) -> Self {
        let GeneratedBoard {
            seed,
            board,
            solution,
        } = generated;
        Self {
            seed: Some(seed),
            board,
            solution,
            submissions: [None, None],
        }
    }

    /// Creates a game on a board supplied by the caller, solving it with `solver`.
    #[must_use]
    pub fn from_board(board: Board, solver: &WordSolver<'_>) -> Self {
        Self {
            seed: None,
            board,
            solution: solver.solve(&board),
            submissions: [None, None],
        }
    }

    /// Returns the seed the board was generated from, if known.
    #[must_use]
    pub fn seed(&self) -> Option<BoardSeed> {
        self.seed
    }

    /// Returns the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the authoritative word list and maximum score.
    #[must_use]
    pub fn solution(&self) -> &SolveResult {
        &self.solution
    }

    /// Scores `words` against this game's solution without recording them.
    #[must_use]
    pub fn score_words<I>(&self, words: I) -> ScoredSubmission
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        ScoredSubmission::evaluate(&self.solution, words)
    }

    /// Records `player`'s final word list and returns its score.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadySubmitted`] if `player` has submitted before;
    /// the earlier submission is kept.
    pub fn submit<I>(&mut self, player: Player, words: I) -> Result<&ScoredSubmission, GameError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if self.has_submitted(player) {
            return Err(GameError::AlreadySubmitted { player });
        }
        let scored = self.score_words(words);
        log::debug!(
            "{player} submitted {} words ({} accepted) for {} points",
            scored.accepted().len() + scored.rejected().len(),
            scored.accepted().len(),
            scored.score()
        );
        let slot = &mut self.submissions[player.index()];
        Ok(&*slot.insert(scored))
    }

    /// Returns `player`'s scored submission, if any.
    #[must_use]
    pub fn submission(&self, player: Player) -> Option<&ScoredSubmission> {
        self.submissions[player.index()].as_ref()
    }

    /// Returns `true` if `player` has submitted.
    #[must_use]
    pub fn has_submitted(&self, player: Player) -> bool {
        self.submissions[player.index()].is_some()
    }

    /// Returns `true` once both players have submitted.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        Player::ALL.into_iter().all(|player| self.has_submitted(player))
    }

    /// Returns the outcome once both players have submitted.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        let [Some(one), Some(two)] = &self.submissions else {
            return None;
        };
        Some(match one.score().cmp(&two.score()) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::One),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Two),
            std::cmp::Ordering::Equal => Outcome::Tie,
        })
    }
}

#[cfg(test)]
mod tests {
    use wordhunt_generator::BoardGenerator;
    use wordhunt_solver::Dictionary;

    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["cat", "dog", "care", "act", "god"])
    }

    fn game(dictionary: &Dictionary) -> Game {
        let board: Board = "care tdog xxxx xxxx".parse().unwrap();
        Game::from_board(board, &WordSolver::new(dictionary))
    }

    #[test]
    fn test_new_from_generated_board() {
        let dictionary = dictionary();
        let generated = BoardGenerator::new(&dictionary).generate_with_seed(BoardSeed::new(5));
        let game = Game::new(generated.clone());
        assert_eq!(game.seed(), Some(BoardSeed::new(5)));
        assert_eq!(game.board(), &generated.board);
        assert_eq!(game.solution(), &generated.solution);
        assert!(!game.is_finished());
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_from_board_solves() {
        let dictionary = dictionary();
        let game = game(&dictionary);
        assert_eq!(game.seed(), None);
        assert_eq!(game.solution().words(), ["care", "act", "cat", "dog", "god"]);
        assert_eq!(game.solution().total_score(), 800);
    }

    #[test]
    fn test_submit_once_per_player() {
        let dictionary = dictionary();
        let mut game = game(&dictionary);

        let scored = game.submit(Player::One, ["cat", "CAT", "dog"]).unwrap();
        assert_eq!(scored.score(), 200);
        assert!(game.has_submitted(Player::One));
        assert!(!game.has_submitted(Player::Two));

        assert_eq!(
            game.submit(Player::One, ["care"]),
            Err(GameError::AlreadySubmitted {
                player: Player::One
            })
        );
        // the first submission stands
        assert_eq!(game.submission(Player::One).unwrap().score(), 200);
        assert_eq!(
            GameError::AlreadySubmitted {
                player: Player::One
            }
            .to_string(),
            "player 1 has already submitted"
        );
    }

    #[test]
    fn test_outcomes() {
        let dictionary = dictionary();

        let mut game = game(&dictionary);
        game.submit(Player::One, ["cat"]).unwrap();
        game.submit(Player::Two, ["care"]).unwrap();
        assert!(game.is_finished());
        assert_eq!(game.outcome(), Some(Outcome::Winner(Player::Two)));

        let mut game = self::game(&dictionary);
        game.submit(Player::Two, ["dog", "xyz"]).unwrap();
        assert_eq!(game.outcome(), None);
        game.submit(Player::One, ["god"]).unwrap();
        let outcome = game.outcome().unwrap();
        assert!(outcome.is_tie());
    }

    #[test]
    fn test_score_words_does_not_record() {
        let dictionary = dictionary();
        let game = game(&dictionary);
        let scored = game.score_words(["care", "act"]);
        assert_eq!(scored.score(), 500);
        assert!(!game.has_submitted(Player::One));
        assert!(!game.has_submitted(Player::Two));
    }

    #[test]
    fn test_player_helpers() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert!(Player::One.is_one());
        assert_eq!(Player::Two.to_string(), "player 2");
    }
}
