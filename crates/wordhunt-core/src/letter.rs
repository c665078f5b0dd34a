//! Board letter representation.

use std::fmt::{self, Display};

/// A lowercase board letter in the range `a`-`z`.
///
/// Internally stored as its alphabet index (0 for `a`, 25 for `z`), which is
/// also the child slot used by the dictionary trie.
///
/// # Examples
///
/// ```
/// use wordhunt_core::Letter;
///
/// let letter = Letter::from_char('Q').unwrap();
/// assert_eq!(letter.as_char(), 'q');
/// assert_eq!(letter.index(), 16);
///
/// assert!(Letter::from_char('3').is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Number of distinct letters.
    pub const COUNT: usize = 26;

    /// Creates a letter from its alphabet index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-25.
    ///
    /// ```should_panic
    /// use wordhunt_core::Letter;
    ///
    /// let _ = Letter::from_index(26);
    /// ```
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 26, "letter index must be in 0-25");
        Self(index)
    }

    /// Converts an ASCII letter of either case, returning `None` for anything else.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        u8::try_from(ch).ok().and_then(Self::from_ascii)
    }

    /// Converts an ASCII letter byte of either case, returning `None` for anything else.
    #[must_use]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_lowercase() - b'a'))
        } else {
            None
        }
    }

    /// Returns the alphabet index (0-25).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the lowercase ASCII byte.
    #[must_use]
    pub const fn as_ascii(self) -> u8 {
        b'a' + self.0
    }

    /// Returns the lowercase character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.as_ascii() as char
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}
