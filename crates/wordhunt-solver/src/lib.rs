//! Dictionary and exhaustive board solver for wordhunt.
//!
//! A [`Dictionary`] is loaded once from a word list and then shared read-only.
//! A [`WordSolver`] borrows it and finds every word that can be traced on a
//! [`Board`](wordhunt_core::Board), producing a [`SolveResult`] that is the
//! authoritative word list and score for that board.
//!
//! # Examples
//!
//! ```
//! use wordhunt_core::Board;
//! use wordhunt_solver::{Dictionary, WordSolver};
//!
//! let dictionary = Dictionary::from_reader("rat tar art star rats arts\n".as_bytes())?;
//! let board: Board = "star xxxx xxxx xxxx".parse()?;
//!
//! let result = WordSolver::new(&dictionary).solve(&board);
//! assert_eq!(result.words(), ["rats", "star", "rat", "tar"]);
//! assert_eq!(result.total_score(), 1000);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{dictionary::*, error::*, solve_result::*, word_solver::*};

mod dictionary;
mod error;
mod solve_result;
mod trie;
mod word_solver;

#[cfg(test)]
mod testing;
