//! Core data structures for the wordhunt engine.
//!
//! This crate defines the board model shared by solving, generation and game
//! scoring:
//!
//! - [`Letter`]: a lowercase letter `a`-`z`
//! - [`Cell`]: a board position 0-15 in row-major order
//! - [`CellSet`]: a 16-bit set of cells, used as the search's visited mask
//! - [`NeighborTable`]: the king-move adjacency relation between cells
//! - [`Board`]: sixteen letters, parsed from any of the accepted shapes
//! - [`word_score`]: the points table every scorer must agree on
//!
//! # Examples
//!
//! ```
//! use wordhunt_core::{Board, Cell, word_score};
//!
//! let board: Board = "abcd efgh ijkl mnop".parse()?;
//! let start = Cell::from_xy(0, 0);
//!
//! let reachable: String = start
//!     .neighbors()
//!     .iter()
//!     .map(|cell| board.letter(cell).as_char())
//!     .collect();
//! assert_eq!(reachable, "bef");
//! assert_eq!(word_score(4), 400);
//! # Ok::<(), wordhunt_core::BoardError>(())
//! ```

pub mod board;
pub mod cell;
pub mod cell_set;
pub mod letter;
pub mod path;
pub mod score;

pub use self::{
    board::{Board, BoardError},
    cell::{Cell, NeighborTable},
    cell_set::{CellSet, CellSetIter},
    letter::Letter,
    path::{find_path, is_valid_path},
    score::{MIN_WORD_LEN, total_score, word_score},
};
