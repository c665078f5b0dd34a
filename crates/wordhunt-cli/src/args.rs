use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use wordhunt_core::Board;
use wordhunt_generator::{BoardSeed, DEFAULT_MAX_ATTEMPTS, OPEN_GAME_MIN_SCORE};

/// Command-line arguments of the `wordhunt` binary.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// `wordhunt` subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate boards, optionally requiring a minimum score.
    Generate(GenerateArgs),
    /// List every word on a board with its points.
    Solve(SolveArgs),
    /// Print the points awarded for each word.
    Score(ScoreArgs),
    /// Score a player's word list against a board.
    Check(CheckArgs),
}

/// Arguments of `wordhunt generate`.
#[derive(Debug, ClapArgs)]
pub struct GenerateArgs {
    /// Seed of the first board; later boards use the following seeds.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<BoardSeed>,

    /// Word list used to solve and score the generated boards.
    #[arg(long, value_name = "PATH")]
    pub dict: Option<PathBuf>,

    /// Only accept boards scoring strictly above this value.
    #[arg(long, value_name = "SCORE", requires = "dict")]
    pub min_score: Option<u64>,

    /// Use the minimum score required to open a hosted game.
    #[arg(long, requires = "dict", conflicts_with = "min_score")]
    pub open_game: bool,

    /// Boards tried per requested board before giving up.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Number of boards to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    pub count: usize,
}

impl GenerateArgs {
    /// Returns the effective minimum score, if any.
    #[must_use]
    pub fn threshold(&self) -> Option<u64> {
        self.min_score
            .or_else(|| self.open_game.then_some(OPEN_GAME_MIN_SCORE))
    }

    /// Returns the seed for the `index`-th board, or `None` to draw one at random.
    #[must_use]
    pub fn seed_for(&self, index: usize) -> Option<BoardSeed> {
        self.seed.map(|seed| {
            #[expect(clippy::cast_possible_truncation)]
            let offset = index as u32;
            BoardSeed::new(seed.value().wrapping_add(offset))
        })
    }
}

/// Arguments of `wordhunt solve`.
#[derive(Debug, ClapArgs)]
pub struct SolveArgs {
    /// Word list to solve against.
    #[arg(long, value_name = "PATH")]
    pub dict: PathBuf,

    /// Also print the cells each word is traced through.
    #[arg(long)]
    pub paths: bool,

    /// Board as one 16-letter string, 4 rows, or 16 letters.
    #[arg(value_name = "BOARD", required = true, num_args = 1..)]
    pub board: Vec<String>,
}

/// Arguments of `wordhunt score`.
#[derive(Debug, ClapArgs)]
pub struct ScoreArgs {
    /// Words to score; only ASCII letters count toward the length.
    #[arg(value_name = "WORD", required = true, num_args = 1..)]
    pub words: Vec<String>,
}

/// Arguments of `wordhunt check`.
#[derive(Debug, ClapArgs)]
pub struct CheckArgs {
    /// Word list to solve against.
    #[arg(long, value_name = "PATH")]
    pub dict: PathBuf,

    /// Board as a 16-letter string; separators are ignored.
    #[arg(long, value_name = "BOARD")]
    pub board: Board,

    /// Submitted words.
    #[arg(value_name = "WORD", num_args = 0..)]
    pub words: Vec<String>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let args = Args::try_parse_from(["wordhunt", "generate"]).unwrap();
        let Command::Generate(args) = args.command else {
            panic!("expected generate");
        };
        assert_eq!(args.seed, None);
        assert_eq!(args.threshold(), None);
        assert_eq!(args.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(args.count, 1);
        assert_eq!(args.seed_for(3), None);
    }

    #[test]
    fn test_generate_seeds_are_consecutive() {
        let args = Args::try_parse_from(["wordhunt", "generate", "--seed", "4294967295"]).unwrap();
        let Command::Generate(args) = args.command else {
            panic!("expected generate");
        };
        assert_eq!(args.seed_for(0), Some(BoardSeed::new(u32::MAX)));
        assert_eq!(args.seed_for(1), Some(BoardSeed::new(0)));
    }

    #[test]
    fn test_generate_threshold_requires_dict() {
        assert!(Args::try_parse_from(["wordhunt", "generate", "--min-score", "10"]).is_err());
        assert!(Args::try_parse_from(["wordhunt", "generate", "--open-game"]).is_err());

        let args =
            Args::try_parse_from(["wordhunt", "generate", "--dict", "words.txt", "--open-game"])
                .unwrap();
        let Command::Generate(args) = args.command else {
            panic!("expected generate");
        };
        assert_eq!(args.threshold(), Some(OPEN_GAME_MIN_SCORE));
    }

    #[test]
    fn test_generate_rejects_bad_seed() {
        assert!(Args::try_parse_from(["wordhunt", "generate", "--seed", "-1"]).is_err());
        assert!(Args::try_parse_from(["wordhunt", "generate", "--seed", "abc"]).is_err());
    }

    #[test]
    fn test_solve_board_parts() {
        let args = Args::try_parse_from([
            "wordhunt", "solve", "--dict", "words.txt", "care", "tdog", "xxxx", "xxxx",
        ])
        .unwrap();
        let Command::Solve(args) = args.command else {
            panic!("expected solve");
        };
        assert_eq!(args.board, ["care", "tdog", "xxxx", "xxxx"]);
        assert!(!args.paths);

        assert!(Args::try_parse_from(["wordhunt", "solve", "--dict", "words.txt"]).is_err());
    }

    #[test]
    fn test_check_parses_board() {
        let args = Args::try_parse_from([
            "wordhunt",
            "check",
            "--dict",
            "words.txt",
            "--board",
            "care/tdog/xxxx/xxxx",
            "cat",
            "dog",
        ])
        .unwrap();
        let Command::Check(args) = args.command else {
            panic!("expected check");
        };
        assert_eq!(args.board.to_string(), "caretdogxxxxxxxx");
        assert_eq!(args.words, ["cat", "dog"]);

        assert!(
            Args::try_parse_from(["wordhunt", "check", "--dict", "w", "--board", "abc"]).is_err()
        );
    }
}
