use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use wordhunt_core::{Letter, MIN_WORD_LEN};

use crate::{
    DictionaryError,
    trie::{NodeId, Trie},
};

/// The set of playable words, indexed as a prefix tree.
///
/// A dictionary is built once from a word list and is read-only afterwards.
/// It has no interior mutability, so a single instance can be shared by
/// reference across any number of threads solving boards concurrently.
///
/// Tokens in the word list are normalized as follows:
///
/// - a token containing anything other than ASCII letters is skipped,
/// - letters are lowercased,
/// - tokens shorter than three letters are skipped,
/// - duplicates are stored once.
///
/// # Examples
///
/// ```
/// use wordhunt_solver::Dictionary;
///
/// let dictionary = Dictionary::from_words(["Cat", "cat", "it", "don't", "dog"]);
/// assert_eq!(dictionary.len(), 2);
/// assert!(dictionary.contains("CAT"));
/// assert!(!dictionary.contains("it"));
/// ```
#[derive(Debug, Clone)]
pub struct Dictionary {
    trie: Trie,
    len: usize,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            trie: Trie::new(),
            len: 0,
        }
    }

    /// Loads a whitespace-separated word list from a file.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if the file cannot be opened or read.
    pub fn load<P>(path: P) -> Result<Self, DictionaryError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dictionary = Self::from_reader(BufReader::new(file))?;
        log::info!(
            "loaded {} words ({} trie nodes) from {}",
            dictionary.len,
            dictionary.trie.node_count(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Loads a whitespace-separated word list from a reader.
    ///
    /// The input is processed as raw bytes, so tokens that are not valid
    /// UTF-8 are skipped like any other non-alphabetic token.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if reading fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordhunt_solver::Dictionary;
    ///
    /// let source = "apple banana\n\tCHERRY  x1y ab\n";
    /// let dictionary = Dictionary::from_reader(source.as_bytes())?;
    /// assert_eq!(dictionary.len(), 3);
    /// assert!(dictionary.contains("cherry"));
    /// # Ok::<(), wordhunt_solver::DictionaryError>(())
    /// ```
    pub fn from_reader<R>(reader: R) -> Result<Self, DictionaryError>
    where
        R: BufRead,
    {
        let mut dictionary = Self::new();
        let mut skipped = 0;
        for line in reader.split(b'\n') {
            let line = line?;
            for token in line
                .split(is_separator)
                .filter(|token| !token.is_empty())
            {
                if !dictionary.insert_token(token) {
                    skipped += 1;
                }
            }
        }
        log::debug!("skipped {skipped} unusable or duplicate tokens");
        Ok(dictionary)
    }

    /// Builds a dictionary from in-memory words.
    ///
    /// Words are normalized the same way as tokens read from a word list.
    #[must_use]
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            dictionary.insert_token(word.as_ref().as_bytes());
        }
        dictionary
    }

    /// Normalizes and inserts one token, returning `true` if a new word was stored.
    fn insert_token(&mut self, token: &[u8]) -> bool {
        let Some(letters) = normalize(token) else {
            log::trace!("skipping token {:?}", String::from_utf8_lossy(token));
            return false;
        };
        let inserted = self.trie.insert(&letters);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns the number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the dictionary holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `word` is in the dictionary, ignoring ASCII case.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        normalize(word.as_bytes())
            .and_then(|letters| self.trie.find(&letters))
            .is_some_and(|node| self.trie.is_terminal(node))
    }

    #[inline]
    pub(crate) fn child(&self, node: NodeId, letter: Letter) -> Option<NodeId> {
        self.trie.child(node, letter)
    }

    #[inline]
    pub(crate) fn is_terminal(&self, node: NodeId) -> bool {
        self.trie.is_terminal(node)
    }
}

impl<S> FromIterator<S> for Dictionary
where
    S: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_words(iter)
    }
}

/// ASCII whitespace, including the vertical tab `is_ascii_whitespace` leaves out.
fn is_separator(byte: &u8) -> bool {
    byte.is_ascii_whitespace() || *byte == b'\x0b'
}

fn normalize(token: &[u8]) -> Option<Vec<Letter>> {
    if token.len() < MIN_WORD_LEN {
        return None;
    }
    token.iter().map(|&byte| Letter::from_ascii(byte)).collect()
}
