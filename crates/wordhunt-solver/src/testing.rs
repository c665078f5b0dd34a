//! Test utilities for the solver.
//!
//! [`brute_force_words`] is a reference search that shares no code with the
//! trie or the neighbor table: it enumerates simple paths from cell
//! coordinates and checks them against a plain word list, pruning with a set
//! of prefixes built from that list.

use std::collections::HashSet;

use wordhunt_core::{Board, Cell, CellSet};

use crate::Dictionary;

/// A small word list over common letters, so random boards contain some of it.
pub(crate) const SMALL_WORDS: &[&str] = &[
    "ace", "aces", "act", "aid", "aide", "ail", "aim", "air", "ale", "alert", "alter", "and",
    "ant", "ante", "ape", "apt", "arc", "are", "art", "ate", "cap", "cape", "car", "care",
    "cart", "cast", "cat", "ceil", "cold", "cone", "cost", "dare", "date", "deal", "dean",
    "dial", "die", "diet", "dig", "dim", "dine", "dog", "dot", "ear", "east", "eat", "edit",
    "era", "gap", "gate", "gear", "get", "gild", "gin", "god", "grin", "ice", "idea", "idle",
    "inert", "ion", "iron", "lad", "lag", "lane", "last", "late", "lead", "lean", "lid", "line",
    "lion", "lip", "list", "lit", "load", "lot", "mad", "main", "male", "map", "mat", "meal",
    "mean", "mine", "mint", "mole", "nap", "near", "neat", "net", "nil", "nod", "not", "note",
    "oar", "oat", "oil", "one", "opt", "ore", "pad", "pail", "pain", "pal", "pan", "pane",
    "pare", "part", "past", "pat", "pea", "pear", "peat", "pen", "pet", "pie", "pin", "pine",
    "pit", "plan", "plea", "pod", "poet", "pot", "rag", "rain", "ram", "ran", "rap", "rat",
    "rate", "read", "real", "rein", "rent", "rest", "rid", "rip", "road", "rod", "rot", "sag",
    "sail", "salt", "sane", "sap", "sat", "sea", "seal", "seat", "sent", "set", "sip", "sit",
    "slap", "slat", "sled", "slid", "slip", "slit", "snap", "snip", "soap", "sod", "son",
    "spa", "span", "spat", "spin", "spit", "spot", "stag", "star", "stare", "step", "tag",
    "tale", "tame", "tan", "tap", "tape", "tar", "tea", "tear", "ten", "tie", "tin", "tip",
    "toe", "ton", "top", "trap", "trip", "tsar", "apple", "palest", "plaster", "stapler",
    "relating", "integral", "triangle",
];

pub(crate) fn small_dictionary() -> Dictionary {
    Dictionary::from_words(SMALL_WORDS)
}

/// Returns every word in `words` (three letters or longer) traceable on `board`.
pub(crate) fn brute_force_words(board: &Board, words: &[&str]) -> HashSet<String> {
    let words: HashSet<&str> = words.iter().copied().filter(|w| w.len() >= 3).collect();
    let prefixes: HashSet<&str> = words
        .iter()
        .flat_map(|&w| (1..=w.len()).map(move |n| &w[..n]))
        .collect();

    let mut found = HashSet::new();
    let mut path = String::new();
    for start in Cell::ALL {
        walk(board, start, CellSet::EMPTY, &words, &prefixes, &mut path, &mut found);
    }
    found
}

fn walk(
    board: &Board,
    cell: Cell,
    visited: CellSet,
    words: &HashSet<&str>,
    prefixes: &HashSet<&str>,
    path: &mut String,
    found: &mut HashSet<String>,
) {
    path.push(board.letter(cell).as_char());
    if prefixes.contains(path.as_str()) {
        if words.contains(path.as_str()) {
            found.insert(path.clone());
        }
        let visited = visited.with(cell);
        for next in Cell::ALL {
            let king_move = next.x().abs_diff(cell.x()) <= 1 && next.y().abs_diff(cell.y()) <= 1;
            if king_move && !visited.contains(next) {
                walk(board, next, visited, words, prefixes, path, found);
            }
        }
    }
    path.pop();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brute_force_finds_known_words() {
        let board: Board = "care tdog xxxx xxxx".parse().unwrap();
        let found = brute_force_words(&board, &["cat", "dog", "care", "act", "god", "ox"]);
        let mut found: Vec<_> = found.into_iter().collect();
        found.sort();
        assert_eq!(found, vec!["act", "care", "cat", "dog", "god"]);
    }
}
