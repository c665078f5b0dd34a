//! Two-player word hunt rounds.
//!
//! A [`Game`] holds one board and its authoritative solution. Each [`Player`]
//! submits a single word list; submissions are normalized with
//! [`normalize_submission`] and scored with [`ScoredSubmission`], and the
//! higher score wins.

pub use self::{error::*, game::*, submission::*};

mod error;
mod game;
mod submission;
