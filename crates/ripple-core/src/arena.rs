// Structurally shared edit sequences stored in an index-addressed arena.
//
// The sequence engine keeps one sequence per table cell. Extending a cell's
// sequence by one operation must not copy it, so each sequence is a node
// pointing at its predecessor. Nodes live in a flat Vec and point at each
// other by index; no reference counting, no recursion when reading them back.

use std::fmt;

use crate::error::{Error, Result};
use crate::operation::EditOperation;
use crate::sequence::{EditSequence, UniformKind, UniformSequence};

/// Where a chain of nodes bottoms out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    /// Insert the first `n` chars of the arena's insert base.
    Insertions(usize),
    /// Delete the first `n` chars of the arena's delete base.
    Deletions(usize),
    /// A node in the arena.
    Node(usize),
}

#[derive(Debug, Clone, Copy)]
struct Node {
    op: EditOperation,
    prev: Link,
}

/// Handle to a sequence stored in a [`SequenceArena`]. Cheap to copy; the
/// length is cached so comparing candidates never walks the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeqRef {
    link: Link,
    len: usize,
}

impl SeqRef {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Arena of shared sequence nodes.
///
/// Every chain starts from a uniform base: inserting a prefix of the target
/// string or deleting a prefix of the source string. Both strings are kept
/// here so those bases need no nodes of their own.
#[derive(Debug, Clone, Default)]
pub struct SequenceArena {
    deleted: Vec<char>,
    inserted: Vec<char>,
    nodes: Vec<Node>,
}

impl SequenceArena {
    /// `deleted` supplies the chars for deletion bases, `inserted` for
    /// insertion bases (the source and target strings respectively).
    pub fn new(deleted: &[char], inserted: &[char]) -> Self {
        Self {
            deleted: deleted.to_vec(),
            inserted: inserted.to_vec(),
            nodes: Vec::new(),
        }
    }

    /// Insert `inserted[..n]` into an empty string.
    pub fn insertions(&self, n: usize) -> SeqRef {
        debug_assert!(n <= self.inserted.len());
        SeqRef { link: Link::Insertions(n), len: n }
    }

    /// Delete `deleted[..n]` from the front of the string.
    pub fn deletions(&self, n: usize) -> SeqRef {
        debug_assert!(n <= self.deleted.len());
        SeqRef { link: Link::Deletions(n), len: n }
    }

    /// `prev` followed by `op`, in O(1). `prev` stays valid and unchanged.
    pub fn extend(&mut self, prev: SeqRef, op: EditOperation) -> SeqRef {
        self.nodes.push(Node { op, prev: prev.link });
        SeqRef {
            link: Link::Node(self.nodes.len() - 1),
            len: prev.len + 1,
        }
    }

    /// Reserve room for `additional` more nodes, reporting allocation failure
    /// instead of aborting.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.nodes
            .try_reserve(additional)
            .map_err(|source| Error::CapacityExceeded {
                cells: self.nodes.len(),
                source,
            })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn base(&self, link: Link) -> UniformSequence {
        match link {
            Link::Insertions(n) => UniformSequence::new(UniformKind::Insert, &self.inserted[..n]),
            Link::Deletions(n) => UniformSequence::new(UniformKind::Delete, &self.deleted[..n]),
            Link::Node(_) => unreachable!("base() called on a node link"),
        }
    }

    /// Walk back from `seq` to its base, returning the nodes' operations in
    /// reverse order and the base link.
    fn chain(&self, seq: SeqRef) -> (Vec<EditOperation>, Link) {
        let mut chain = Vec::with_capacity(seq.len);
        let mut link = seq.link;
        while let Link::Node(idx) = link {
            let node = &self.nodes[idx];
            chain.push(node.op);
            link = node.prev;
        }
        (chain, link)
    }

    /// Materialize `seq` in replay order.
    pub fn operations(&self, seq: SeqRef) -> Vec<EditOperation> {
        let (chain, base) = self.chain(seq);
        let mut ops = self.base(base).operations();
        ops.reserve_exact(chain.len());
        ops.extend(chain.into_iter().rev());
        ops
    }

    /// Copy `seq` out of this arena into a standalone sequence that keeps
    /// only its own nodes.
    pub fn detach(&self, seq: SeqRef) -> EditSequence {
        if !matches!(seq.link, Link::Node(_)) {
            return EditSequence::Uniform(self.base(seq.link));
        }
        let (chain, base) = self.chain(seq);
        let mut linked = LinkedSequence::from_uniform(self.base(base));
        for op in chain.into_iter().rev() {
            linked.push(op);
        }
        EditSequence::Linked(linked)
    }
}

// ──────────────────────────────────────────────
// LinkedSequence
// ──────────────────────────────────────────────

/// An owned linked sequence: a uniform base followed by a chain of nodes.
/// [`LinkedSequence::push`] is O(1).
#[derive(Debug, Clone)]
pub struct LinkedSequence {
    arena: SequenceArena,
    head: SeqRef,
}

impl LinkedSequence {
    pub fn new() -> Self {
        let arena = SequenceArena::default();
        let head = arena.insertions(0);
        Self { arena, head }
    }

    pub fn from_uniform(base: UniformSequence) -> Self {
        let (arena, head) = match base.kind() {
            UniformKind::Insert => {
                let arena = SequenceArena::new(&[], base.chars());
                let head = arena.insertions(base.len());
                (arena, head)
            }
            UniformKind::Delete => {
                let arena = SequenceArena::new(base.chars(), &[]);
                let head = arena.deletions(base.len());
                (arena, head)
            }
        };
        Self { arena, head }
    }

    pub fn push(&mut self, op: EditOperation) {
        self.head = self.arena.extend(self.head, op);
    }

    pub fn len(&self) -> usize {
        self.head.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_empty()
    }

    pub fn operations(&self) -> Vec<EditOperation> {
        self.arena.operations(self.head)
    }
}

impl Default for LinkedSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LinkedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", EditSequence::Array(self.operations()))
    }
}
