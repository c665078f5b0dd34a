//! Command-line front end for wordhunt.
//!
//! The `wordhunt` binary parses [`Args`] and hands them to [`run`], which
//! generates, solves and scores boards using the engine crates.

pub use self::{args::*, command::*, error::*};

mod args;
mod command;
mod error;
