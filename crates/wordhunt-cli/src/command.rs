use std::io::Write;

use rayon::prelude::*;
use wordhunt_core::{Board, find_path, word_score};
use wordhunt_game::Game;
use wordhunt_generator::{BoardGenerator, BoardSeed, GeneratedBoard, GeneratorError, generate_board};
use wordhunt_solver::{Dictionary, WordSolver};

use crate::{Args, CheckArgs, CliError, Command, GenerateArgs, ScoreArgs, SolveArgs};

/// Runs the parsed command, writing its report to `out`.
///
/// # Errors
///
/// Returns an error if a word list cannot be loaded, the board arguments are
/// malformed, no board reaches the requested score, or `out` fails.
pub fn run<W>(args: &Args, out: &mut W) -> Result<(), CliError>
where
    W: Write,
{
    log::debug!("running {:?}", args.command);
    match &args.command {
        Command::Generate(args) => match &args.dict {
            Some(path) => {
                let dictionary = Dictionary::load(path)?;
                write_generated(out, &generate_solved(&dictionary, args)?)
            }
            None => write_unsolved(out, args),
        },
        Command::Solve(args) => {
            let dictionary = Dictionary::load(&args.dict)?;
            solve(&dictionary, args, out)
        }
        Command::Score(args) => score(args, out),
        Command::Check(args) => {
            let dictionary = Dictionary::load(&args.dict)?;
            check(&dictionary, args, out)
        }
    }
}

fn generate_solved(
    dictionary: &Dictionary,
    args: &GenerateArgs,
) -> Result<Vec<GeneratedBoard>, GeneratorError> {
    let mut generator = BoardGenerator::new(dictionary).with_max_attempts(args.max_attempts);
    if let Some(min_score) = args.threshold() {
        generator = generator.with_min_score(min_score);
    }
    (0..args.count)
        .into_par_iter()
        .map(|index| match args.seed_for(index) {
            Some(seed) => generator.generate_from(seed),
            None => generator.generate(),
        })
        .collect()
}

fn write_generated<W>(out: &mut W, boards: &[GeneratedBoard]) -> Result<(), CliError>
where
    W: Write,
{
    for generated in boards {
        writeln!(out, "seed {}", generated.seed)?;
        writeln!(out, "{:#}", generated.board)?;
        writeln!(
            out,
            "score {} ({} words)",
            generated.solution.total_score(),
            generated.solution.len()
        )?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_unsolved<W>(out: &mut W, args: &GenerateArgs) -> Result<(), CliError>
where
    W: Write,
{
    for index in 0..args.count {
        let seed = args.seed_for(index).unwrap_or_else(BoardSeed::random);
        writeln!(out, "seed {seed}")?;
        writeln!(out, "{:#}", generate_board(seed))?;
        writeln!(out)?;
    }
    Ok(())
}

fn solve<W>(dictionary: &Dictionary, args: &SolveArgs, out: &mut W) -> Result<(), CliError>
where
    W: Write,
{
    let board = Board::parse_parts(&args.board)?;
    let result = WordSolver::new(dictionary).solve(&board);

    writeln!(out, "{board:#}")?;
    writeln!(out)?;
    for (word, points) in result.iter() {
        write!(out, "{points:>5} {word}")?;
        if args.paths
            && let Some(path) = find_path(&board, word)
        {
            for cell in path {
                write!(out, " {cell}")?;
            }
        }
        writeln!(out)?;
    }
    writeln!(
        out,
        "total {} ({} words)",
        result.total_score(),
        result.len()
    )?;
    Ok(())
}

fn score<W>(args: &ScoreArgs, out: &mut W) -> Result<(), CliError>
where
    W: Write,
{
    for word in &args.words {
        let len = word.bytes().filter(u8::is_ascii_alphabetic).count();
        writeln!(out, "{:>5} {word}", word_score(len))?;
    }
    Ok(())
}

fn check<W>(dictionary: &Dictionary, args: &CheckArgs, out: &mut W) -> Result<(), CliError>
where
    W: Write,
{
    let game = Game::from_board(args.board, &WordSolver::new(dictionary));
    let scored = game.score_words(&args.words);

    writeln!(out, "accepted:")?;
    for word in scored.accepted() {
        writeln!(out, "{:>5} {word}", word_score(word.len()))?;
    }
    writeln!(out, "rejected:")?;
    for word in scored.rejected() {
        writeln!(out, "      {word}")?;
    }
    writeln!(
        out,
        "score {} of {}",
        scored.score(),
        game.solution().total_score()
    )?;
    Ok(())
}
