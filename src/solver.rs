//! Depth-first word search over a letter grid.
//!
//! The board and the trie are walked in lockstep: a path is only extended
//! into a neighbor when the trie has an edge for that neighbor's letter, so
//! the search never explores letter sequences that cannot lead to a word.
//!
//! Key points:
//! - A `visited` scratch buffer marked on entry and unmarked on return, so
//!   sibling branches and later starting cells may reuse the cell; the
//!   sequential search shares one buffer, the parallel search gives each
//!   starting cell its own
//! - Minimum word length is checked when a terminal node is reached, never
//!   at build time, so short words still act as prefixes of longer ones
//! - The trie and board are never mutated during a search

use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::grid::Board;
use crate::trie::TrieNode;

/// Minimum word length per the rules of Boggle.
pub const MIN_WORD_LENGTH: usize = 3;

/// Tunable solver parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Words shorter than this (in characters) are not reported.
    pub min_word_length: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_word_length: MIN_WORD_LENGTH,
        }
    }
}

/// A reusable solver holding the trie for one dictionary.
#[derive(Debug)]
pub struct Solver {
    root: TrieNode,
    config: SolverConfig,
}

/// Read-only inputs shared by every step of one traversal.
struct SearchContext<'a> {
    board: &'a Board,
    min_word_length: usize,
}

impl Solver {
    /// Builds a solver using the default configuration.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(words, SolverConfig::default())
    }

    /// Builds a solver with an explicit configuration.
    pub fn with_config<I, S>(words: I, config: SolverConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let root = TrieNode::build(words);
        debug!(
            "built trie with {} words across {} nodes",
            root.word_count(),
            root.node_count()
        );
        Self { root, config }
    }

    /// Finds every dictionary word that can be traced on the board.
    ///
    /// `letters` is read row-major. Fails with `InvalidInput` if the
    /// dimensions are not positive or do not match the letter count.
    pub fn solve_board(&self, width: i64, height: i64, letters: &str) -> Result<FxHashSet<String>> {
        let board = Board::new(width, height, letters)?;
        Ok(self.solve(&board))
    }

    /// Same as [`Solver::solve_board`], with starting cells spread over the
    /// rayon thread pool.
    pub fn solve_board_parallel(
        &self,
        width: i64,
        height: i64,
        letters: &str,
    ) -> Result<FxHashSet<String>> {
        let board = Board::new(width, height, letters)?;
        Ok(self.solve_parallel(&board))
    }

    /// Searches an already validated board.
    pub fn solve(&self, board: &Board) -> FxHashSet<String> {
        let context = self.context(board);
        let mut words = FxHashSet::default();
        let mut visited = vec![false; board.len()];

        for start in 0..board.len() {
            if let Some(node) = self.root.child(board.letter(start)) {
                search(&context, node, start, &mut visited, &mut words);
            }
        }

        debug!(
            "found {} words on {}x{} board",
            words.len(),
            board.width(),
            board.height()
        );
        words
    }

    /// Searches an already validated board, one rayon task per starting cell.
    ///
    /// Each task owns its visited buffer and result set; sets are merged at
    /// the end.
    pub fn solve_parallel(&self, board: &Board) -> FxHashSet<String> {
        let context = self.context(board);

        let words = (0..board.len())
            .into_par_iter()
            .filter_map(|start| self.root.child(board.letter(start)).map(|node| (start, node)))
            .map(|(start, node)| {
                let mut words = FxHashSet::default();
                let mut visited = vec![false; board.len()];
                search(&context, node, start, &mut visited, &mut words);
                words
            })
            .reduce(|| FxHashSet::default(), |mut merged, partial| {
                merged.extend(partial);
                merged
            });

        debug!(
            "found {} words on {}x{} board (parallel)",
            words.len(),
            board.width(),
            board.height()
        );
        words
    }

    fn context<'a>(&self, board: &'a Board) -> SearchContext<'a> {
        SearchContext {
            board,
            min_word_length: self.config.min_word_length,
        }
    }
}

/// Explores every simple path that extends through `cell_index`.
///
/// `node` is the trie node reached after consuming this cell's letter.
fn search(
    context: &SearchContext<'_>,
    node: &TrieNode,
    cell_index: usize,
    visited: &mut [bool],
    words: &mut FxHashSet<String>,
) {
    visited[cell_index] = true;

    if let Some(word) = node.completed_word() {
        if word.chars().count() >= context.min_word_length && !words.contains(word) {
            words.insert(word.to_owned());
        }
    }

    for neighbor in context.board.neighbors(cell_index) {
        if visited[neighbor] {
            continue;
        }
        if let Some(next) = node.child(context.board.letter(neighbor)) {
            search(context, next, neighbor, visited, words);
        }
    }

    visited[cell_index] = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoggleError;
    use crate::grid::{are_adjacent, idx_to_coord};

    fn sorted(words: FxHashSet<String>) -> Vec<String> {
        let mut words: Vec<String> = words.into_iter().collect();
        words.sort();
        words
    }

    /// Returns true if `word` can be spelled by a simple path of adjacent cells.
    fn is_traceable(board: &Board, word: &str) -> bool {
        fn extend(board: &Board, letters: &[char], path: &mut Vec<usize>) -> bool {
            if path.len() == letters.len() {
                return true;
            }
            let last = idx_to_coord(board.width(), path[path.len() - 1]);
            for cell in 0..board.len() {
                if path.contains(&cell)
                    || board.letter(cell) != letters[path.len()]
                    || !are_adjacent(last, idx_to_coord(board.width(), cell))
                {
                    continue;
                }
                path.push(cell);
                if extend(board, letters, path) {
                    return true;
                }
                path.pop();
            }
            false
        }

        let letters: Vec<char> = word.chars().collect();
        (0..board.len()).any(|start| {
            board.letter(start) == letters[0] && extend(board, &letters, &mut vec![start])
        })
    }

    const DICTIONARY: &[&str] = &[
        "CAT", "CATS", "AT", "CA", "ACT", "SAT", "TAX", "TAXI", "AXIS", "SIX", "STAX", "XXX",
        "CATCAT", "TACT", "ZEBRA",
    ];

    #[test]
    fn test_cats_scenario() {
        let solver = Solver::new(["CAT", "CATS", "AT", "CA"]);
        let words = solver.solve_board(3, 3, "CATSXXXXX").unwrap();
        // C A T
        // S X X
        // X X X
        // AT and CA are too short, and S at (0,1) does not touch T at (2,0)
        assert_eq!(sorted(words), vec!["CAT"]);
    }

    #[test]
    fn test_cats_scenario_with_adjacent_s() {
        let solver = Solver::new(["CAT", "CATS", "AT", "CA"]);
        // C A T
        // X X S
        // X X X
        let words = solver.solve_board(3, 3, "CATXXSXXX").unwrap();
        assert_eq!(sorted(words), vec!["CAT", "CATS"]);
    }

    #[test]
    fn test_two_letter_word_is_never_reported() {
        let solver = Solver::new(["AB"]);
        assert!(solver.solve_board(2, 2, "ABAB").unwrap().is_empty());
        assert!(solver.solve_board(3, 1, "ABX").unwrap().is_empty());
    }

    #[test]
    fn test_empty_dictionary_finds_nothing() {
        let solver = Solver::new(Vec::<String>::new());
        assert!(solver.solve_board(4, 4, "ABCDEFGHIJKLMNOP").unwrap().is_empty());
    }

    #[test]
    fn test_dimension_mismatch_is_invalid_input() {
        let solver = Solver::new(DICTIONARY);
        let err = solver.solve_board(2, 2, "abc").unwrap_err();
        assert!(matches!(err, BoggleError::InvalidInput { .. }));
        assert!(solver.solve_board(0, 3, "").is_err());
        assert!(solver.solve_board_parallel(-2, -2, "ABCD").is_err());
    }

    #[test]
    fn test_cell_cannot_be_reused() {
        // the only 'T' would have to be used twice
        let solver = Solver::new(["TAT", "CAT"]);
        let words = solver.solve_board(2, 2, "TACX").unwrap();
        assert_eq!(sorted(words), vec!["CAT"]);
    }

    #[test]
    fn test_letters_reused_from_distinct_cells() {
        let solver = Solver::new(["TAT"]);
        let words = solver.solve_board(3, 1, "TAT").unwrap();
        assert_eq!(sorted(words), vec!["TAT"]);
    }

    #[test]
    fn test_word_reachable_by_many_paths_appears_once() {
        let solver = Solver::new(["AAA"]);
        let words = solver.solve_board(3, 3, "AAAAAAAAA").unwrap();
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn test_rectangular_board() {
        // T A X I
        // S C A T
        let solver = Solver::new(DICTIONARY);
        let words = solver.solve_board(4, 2, "TAXISCAT").unwrap();
        assert_eq!(
            sorted(words),
            vec!["ACT", "CAT", "CATS", "SAT", "STAX", "TACT", "TAX", "TAXI"]
        );
    }

    #[test]
    fn test_results_are_traceable_dictionary_words() {
        let solver = Solver::new(DICTIONARY);
        let board = Board::new(4, 4, "TAXICATSXSIXZEBR").unwrap();
        let words = solver.solve(&board);

        assert!(!words.is_empty());
        for word in &words {
            assert!(word.chars().count() >= MIN_WORD_LENGTH, "{word} is too short");
            assert!(DICTIONARY.contains(&word.as_str()), "{word} not in dictionary");
            assert!(is_traceable(&board, word), "{word} cannot be traced");
        }
        // every traceable dictionary word was found
        for word in DICTIONARY {
            if word.len() >= MIN_WORD_LENGTH && is_traceable(&board, word) {
                assert!(words.contains(*word), "{word} was missed");
            }
        }
    }

    #[test]
    fn test_repeat_solves_are_equal() {
        let solver = Solver::new(DICTIONARY);
        let first = solver.solve_board(3, 3, "TAXSCATIS").unwrap();
        let second = solver.solve_board(3, 3, "TAXSCATIS").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let solver = Solver::new(DICTIONARY);
        for (width, height, letters) in [
            (3, 3, "TAXSCATIS"),
            (4, 2, "TAXISCAT"),
            (4, 4, "TAXICATSXSIXZEBR"),
        ] {
            let sequential = solver.solve_board(width, height, letters).unwrap();
            let parallel = solver.solve_board_parallel(width, height, letters).unwrap();
            assert_eq!(sequential, parallel, "mismatch on {letters}");
        }
    }

    #[test]
    fn test_custom_min_word_length() {
        let config = SolverConfig { min_word_length: 2 };
        let solver = Solver::with_config(["AT", "CA", "CAT"], config);
        let words = solver.solve_board(3, 1, "CAT").unwrap();
        assert_eq!(sorted(words), vec!["AT", "CA", "CAT"]);
    }
}
