//! Byte trie over comment leader patterns.
//!
//! Leaders are short ASCII tokens (`//`, `#`, `--`), so edges are keyed by raw
//! byte rather than by character. Matching walks from a byte offset and succeeds
//! at the first terminal node reached; if two patterns share a prefix the
//! shorter one wins. Empty patterns are not supported.

use smallvec::SmallVec;

#[derive(Debug, Clone)]
struct Edge {
    byte: u8,
    next: usize,
}

#[derive(Debug, Clone)]
struct Node {
    terminal: bool,
    edges: SmallVec<[Edge; 2]>,
}

impl Node {
    fn new() -> Self {
        Self {
            terminal: false,
            edges: SmallVec::new(),
        }
    }

    fn child(&self, byte: u8) -> Option<usize> {
        self.edges.iter().find(|e| e.byte == byte).map(|e| e.next)
    }
}

#[derive(Debug, Clone)]
pub struct ByteTrie {
    nodes: Vec<Node>,
}

impl ByteTrie {
    pub fn build<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut trie = ByteTrie {
            nodes: vec![Node::new()],
        };
        for pattern in patterns {
            debug_assert!(!pattern.as_ref().is_empty(), "empty comment leader");
            let mut cur = 0usize;
            for &byte in pattern.as_ref().as_bytes() {
                cur = match trie.nodes[cur].child(byte) {
                    Some(next) => next,
                    None => {
                        let new_idx = trie.nodes.len();
                        trie.nodes.push(Node::new());
                        trie.nodes[cur].edges.push(Edge {
                            byte,
                            next: new_idx,
                        });
                        new_idx
                    }
                };
            }
            trie.nodes[cur].terminal = true;
        }
        trie
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[0].edges.is_empty()
    }

    /// Byte offset just past the pattern matching at `offset`, or `None`.
    pub fn match_from(&self, text: &str, offset: usize) -> Option<usize> {
        let bytes = text.as_bytes();
        let mut node = 0usize;
        let mut pos = offset;
        loop {
            if self.nodes[node].terminal {
                return Some(pos);
            }
            let byte = *bytes.get(pos)?;
            node = self.nodes[node].child(byte)?;
            pos += 1;
        }
    }
}
