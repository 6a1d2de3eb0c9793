//! Boggle Solver Library
//!
//! Finds every dictionary word that can be traced on a letter grid as a path
//! of adjacent, non-repeating cells. The dictionary is compiled once into a
//! prefix tree; each board is then searched depth-first, pruning any path the
//! tree says cannot lead to a word.

pub mod dictionary;
pub mod error;
pub mod grid;
pub mod solver;
pub mod trie;

pub use error::{BoggleError, Result};
pub use solver::{Solver, SolverConfig, MIN_WORD_LENGTH};
