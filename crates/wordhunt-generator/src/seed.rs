use std::{
    fmt::{self, Display},
    num::ParseIntError,
    str::FromStr,
};

/// Seed that fully determines a generated board.
///
/// Displayed and parsed as a decimal `u32`.
///
/// # Examples
///
/// ```
/// use wordhunt_generator::BoardSeed;
///
/// let seed: BoardSeed = "42".parse()?;
/// assert_eq!(seed, BoardSeed::new(42));
/// assert_eq!(seed.to_string(), "42");
/// # Ok::<(), std::num::ParseIntError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardSeed(u32);

impl BoardSeed {
    /// Wraps a raw seed value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Draws a seed from the operating system's entropy source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for BoardSeed {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<BoardSeed> for u32 {
    fn from(seed: BoardSeed) -> Self {
        seed.0
    }
}

impl Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for BoardSeed {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
