//! Prefix tree over the dictionary.
//!
//! Each edge is labeled by a single character. A node that ends at least one
//! dictionary entry carries that entry as its completed word, so the searcher
//! can report a word the moment it reaches the node without rebuilding it from
//! the path.

use rustc_hash::FxHashMap;

/// A node in the prefix tree.
///
/// Children are owned exclusively by their parent; the tree has no back
/// references.
#[derive(Debug, Default)]
pub struct TrieNode {
    edges: FxHashMap<char, TrieNode>,
    completed_word: Option<String>,
}

impl TrieNode {
    /// Builds a trie from a word list, returning its root.
    ///
    /// Words sharing a prefix share the nodes for that prefix. Empty strings
    /// are ignored since the root never completes a word.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = Self::default();
        for word in words {
            root.insert(word.as_ref());
        }
        root
    }

    /// Inserts a single word below this node.
    ///
    /// The final node is marked complete even if it already existed as an
    /// interior node of a longer word.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node = self;
        for letter in word.chars() {
            node = node.edges.entry(letter).or_default();
        }
        node.completed_word = Some(word.to_owned());
    }

    /// Follows the edge labeled `letter`, if there is one.
    #[inline]
    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        self.edges.get(&letter)
    }

    /// The dictionary word ending at this node, if any.
    #[inline]
    pub fn completed_word(&self) -> Option<&str> {
        self.completed_word.as_deref()
    }

    /// Returns true if no edges leave this node.
    #[cfg(test)]
    fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }

    /// Counts the nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.edges.values().map(TrieNode::node_count).sum::<usize>()
    }

    /// Counts the completed words in this subtree.
    pub fn word_count(&self) -> usize {
        let own = usize::from(self.completed_word.is_some());
        own + self.edges.values().map(TrieNode::word_count).sum::<usize>()
    }
}
