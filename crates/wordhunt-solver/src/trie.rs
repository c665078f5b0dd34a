//! Arena-backed prefix tree.

use std::num::NonZeroU32;

use wordhunt_core::Letter;

/// Index of a node in a [`Trie`].
///
/// The root is never anyone's child, so child links use a non-zero index and
/// `Option<NodeId>` stays four bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(Option<NonZeroU32>);

impl NodeId {
    pub(crate) const ROOT: Self = Self(None);

    fn index(self) -> usize {
        self.0.map_or(0, |n| n.get() as usize)
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: [Option<NonZeroU32>; Letter::COUNT],
    terminal: bool,
}

/// A prefix tree over lowercase letters.
///
/// Nodes live in a single vector and refer to each other by index. The trie
/// only grows while the dictionary is being built.
#[derive(Debug, Clone)]
pub(crate) struct Trie {
    nodes: Vec<Node>,
}

impl Trie {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Inserts `word`, returning `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if the trie would grow past `u32::MAX` nodes. Every node is one
    /// letter of some stored word, so that needs a word list of several
    /// gigabytes.
    pub(crate) fn insert(&mut self, word: &[Letter]) -> bool {
        let mut node = 0;
        for letter in word {
            let slot = usize::from(letter.index());
            node = match self.nodes[node].children[slot] {
                Some(child) => child.get() as usize,
                None => {
                    let child = u32::try_from(self.nodes.len())
                        .ok()
                        .and_then(NonZeroU32::new)
                        .expect("trie node count exceeds u32::MAX");
                    self.nodes[node].children[slot] = Some(child);
                    self.nodes.push(Node::default());
                    child.get() as usize
                }
            };
        }
        !std::mem::replace(&mut self.nodes[node].terminal, true)
    }

    /// Follows the edge labeled `letter` from `node`.
    #[inline]
    pub(crate) fn child(&self, node: NodeId, letter: Letter) -> Option<NodeId> {
        self.nodes[node.index()].children[usize::from(letter.index())].map(|n| NodeId(Some(n)))
    }

    /// Returns `true` if a word ends at `node`.
    #[inline]
    pub(crate) fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.index()].terminal
    }

    /// Walks `word` from the root, returning the node it ends on.
    pub(crate) fn find(&self, word: &[Letter]) -> Option<NodeId> {
        word.iter()
            .try_fold(NodeId::ROOT, |node, &letter| self.child(node, letter))
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(word: &str) -> Vec<Letter> {
        word.chars().map(|ch| Letter::from_char(ch).unwrap()).collect()
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut trie = Trie::new();
        assert!(trie.insert(&letters("cat")));
        let nodes = trie.node_count();
        assert!(!trie.insert(&letters("cat")));
        assert_eq!(trie.node_count(), nodes);
    }

    #[test]
    fn test_shared_prefixes() {
        let mut trie = Trie::new();
        trie.insert(&letters("car"));
        trie.insert(&letters("care"));
        trie.insert(&letters("cat"));
        // root + c, a, r, e, t
        assert_eq!(trie.node_count(), 6);

        let ca = trie.find(&letters("ca")).unwrap();
        assert!(!trie.is_terminal(ca));
        assert!(trie.is_terminal(trie.find(&letters("car")).unwrap()));
        assert!(trie.is_terminal(trie.find(&letters("care")).unwrap()));
        assert!(trie.find(&letters("cab")).is_none());
    }

    #[test]
    fn test_child_from_root() {
        let mut trie = Trie::new();
        trie.insert(&letters("dog"));
        let d = Letter::from_char('d').unwrap();
        let x = Letter::from_char('x').unwrap();
        assert!(trie.child(NodeId::ROOT, d).is_some());
        assert!(trie.child(NodeId::ROOT, x).is_none());
        assert!(!trie.is_terminal(NodeId::ROOT));
    }
}
