//! Seeded board generation for wordhunt.
//!
//! [`generate_board`] turns a [`BoardSeed`] into a board by drawing each cell
//! from an English letter-frequency distribution. [`BoardGenerator`] pairs
//! generation with solving, and can keep drawing boards until one scores
//! above a threshold.
//!
//! # Examples
//!
//! ```
//! use wordhunt_generator::{BoardGenerator, BoardSeed};
//! use wordhunt_solver::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["tea", "eat", "ate", "ten", "net"]);
//! let generator = BoardGenerator::new(&dictionary);
//!
//! let generated = generator.generate_with_seed(BoardSeed::new(2024));
//! println!("{:#}", generated.board);
//! for (word, points) in generated.solution.iter() {
//!     println!("{word}: {points}");
//! }
//! ```

pub use self::{board_generator::*, letters::*, seed::*};

mod board_generator;
mod letters;
mod seed;
