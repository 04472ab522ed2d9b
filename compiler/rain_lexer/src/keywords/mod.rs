//! Reserved-word lookup.
//!
//! Keywords live in a byte trie built once from a table and never mutated
//! afterwards. The scanner owns its trie; nothing here is global.

use rain_ir::TokenKind;
use rustc_hash::FxHashMap;

/// The reserved words and the kinds they lex to.
pub const RESERVED: &[(&str, TokenKind)] = &[
    ("if", TokenKind::KEYWORD_IF),
    ("else", TokenKind::KEYWORD_ELSE),
    ("while", TokenKind::KEYWORD_WHILE),
    ("for", TokenKind::KEYWORD_FOR),
    ("do", TokenKind::KEYWORD_DO),
    ("break", TokenKind::KEYWORD_BREAK),
    ("continue", TokenKind::KEYWORD_CONTINUE),
    ("return", TokenKind::KEYWORD_RETURN),
    ("let", TokenKind::KEYWORD_LET),
    ("const", TokenKind::KEYWORD_CONST),
    ("fn", TokenKind::KEYWORD_FN),
    ("struct", TokenKind::KEYWORD_STRUCT),
    ("true", TokenKind::KEYWORD_TRUE),
    ("false", TokenKind::KEYWORD_FALSE),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct NodeId(u32);

impl NodeId {
    const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, Default)]
struct TrieNode {
    kind: Option<TokenKind>,
    children: FxHashMap<u8, NodeId>,
}

/// Prefix tree from identifier spellings to keyword kinds.
///
/// Nodes live in one arena `Vec` and refer to each other by index.
#[derive(Clone, Debug)]
pub struct KeywordTrie {
    nodes: Vec<TrieNode>,
    len: usize,
}

impl KeywordTrie {
    /// Build a trie from `(spelling, kind)` pairs. A later duplicate
    /// spelling replaces an earlier one.
    pub fn new(table: &[(&str, TokenKind)]) -> Self {
        let mut trie = KeywordTrie {
            nodes: vec![TrieNode::default()],
            len: 0,
        };
        for &(spelling, kind) in table {
            trie.insert(spelling, kind);
        }
        trie
    }

    /// The trie for [`RESERVED`].
    pub fn reserved() -> Self {
        Self::new(RESERVED)
    }

    fn insert(&mut self, spelling: &str, kind: TokenKind) {
        let mut node = NodeId::ROOT;
        for &byte in spelling.as_bytes() {
            node = match self.nodes[node.index()].children.get(&byte) {
                Some(&child) => child,
                None => {
                    let child = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
                    self.nodes.push(TrieNode::default());
                    self.nodes[node.index()].children.insert(byte, child);
                    child
                }
            };
        }
        if self.nodes[node.index()].kind.replace(kind).is_none() {
            self.len += 1;
        }
    }

    /// The keyword kind for `text`, or `None` for an ordinary identifier.
    pub fn lookup(&self, text: &str) -> Option<TokenKind> {
        let mut node = NodeId::ROOT;
        for byte in text.bytes() {
            node = *self.nodes[node.index()].children.get(&byte)?;
        }
        self.nodes[node.index()].kind
    }

    /// Number of distinct spellings.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for KeywordTrie {
    fn default() -> Self {
        Self::reserved()
    }
}
