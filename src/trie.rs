use std::collections::BTreeMap;

/// Maximum number of recommendations returned per query.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Index of a node in the trie's arena. The root is always index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(u32);

const ROOT: NodeId = NodeId(0);

/// A single trie vertex. A node is terminal iff `word` is set, in which case
/// `word` is the full inserted string whose character path ends here.
#[derive(Debug, Default)]
struct Node {
    word: Option<String>,
    // BTreeMap keeps children ordered by ascending code point, which is the
    // tie-break order for all "first/lowest" choices below.
    children: BTreeMap<char, NodeId>,
}

impl Node {
    fn is_terminal(&self) -> bool {
        self.word.is_some()
    }
}

/// How far the vocabulary agrees with a query. Every variant carries the
/// branch node: the deepest node reached, which anchors recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMatch {
    /// The query is a stored word; the branch node is its terminal node.
    Exact(NodeId),
    /// Every query character matched but no stored word ends at the final
    /// node; the branch node is that final node.
    Partial(NodeId),
    /// The walk stopped before the end of the query; the branch node is the
    /// deepest node matched so far (the root if the first character missed).
    Absent(NodeId),
}

/// Combined result of an exact-match search plus recommendations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub found: bool,
    pub recommendations: Vec<String>,
}

/// In-memory trie over a fixed vocabulary. Built once at startup, read-only
/// afterwards. Nodes live in an arena and refer to children by index, so the
/// tree is a single allocation-friendly structure with no per-node ownership
/// juggling.
pub struct Trie {
    nodes: Vec<Node>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    /// Insert a word, creating intermediate nodes as needed and marking the
    /// final node terminal. Idempotent; re-inserting an identical word or a
    /// prefix of a longer word never disturbs existing children. The empty
    /// string is a no-op.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut cur = ROOT;
        for ch in word.chars() {
            cur = match self.node(cur).children.get(&ch).copied() {
                Some(next) => next,
                None => {
                    let next = NodeId(self.nodes.len() as u32);
                    self.nodes.push(Node::default());
                    self.nodes[cur.0 as usize].children.insert(ch, next);
                    next
                }
            };
        }

        self.nodes[cur.0 as usize].word = Some(word.to_string());
    }

    /// Walk the query against the tree and classify the match. Returns None
    /// for the empty query, which has no branch node.
    pub fn lookup(&self, query: &str) -> Option<QueryMatch> {
        let mut cur = ROOT;
        let mut chars = query.chars().peekable();

        while let Some(ch) = chars.next() {
            let Some(&next) = self.node(cur).children.get(&ch) else {
                return Some(QueryMatch::Absent(cur));
            };

            if chars.peek().is_none() {
                return Some(if self.node(next).is_terminal() {
                    QueryMatch::Exact(next)
                } else {
                    QueryMatch::Partial(next)
                });
            }

            cur = next;
        }

        None
    }

    /// Produce up to MAX_RECOMMENDATIONS words extending beneath the branch
    /// node. Candidates are the branch node's first children in ascending
    /// code-point order; each resolves by descending through the lowest
    /// child at every level until a terminal node is reached. Result order
    /// follows the candidate order, not the resolved words' own ordering.
    pub fn recommend(&self, branch: NodeId) -> Vec<String> {
        let mut out = Vec::with_capacity(MAX_RECOMMENDATIONS);

        for &child in self.node(branch).children.values().take(MAX_RECOMMENDATIONS) {
            let mut cur = child;
            loop {
                let node = self.node(cur);
                if let Some(word) = &node.word {
                    out.push(word.clone());
                    break;
                }
                // A childless non-terminal cannot occur in a built tree;
                // bail rather than spin if it somehow does.
                match node.children.values().next() {
                    Some(&next) => cur = next,
                    None => break,
                }
            }
        }

        out
    }

    /// The combined operation consumed by the serving layer: exact-match
    /// flag plus recommendations anchored at the branch node.
    pub fn search(&self, query: &str) -> SearchResult {
        match self.lookup(query) {
            Some(QueryMatch::Exact(n)) => SearchResult {
                found: true,
                recommendations: self.recommend(n),
            },
            Some(QueryMatch::Partial(n)) | Some(QueryMatch::Absent(n)) => SearchResult {
                found: false,
                recommendations: self.recommend(n),
            },
            None => SearchResult::default(),
        }
    }
}
