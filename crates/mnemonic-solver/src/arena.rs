//! Index-addressed storage for assignment chains.
//!
//! Every binding tried by the search becomes a node that points back at its
//! parent binding. Sibling branches point at the same parent, so the chains
//! share their common prefix. Nodes live in a single vector and refer to each
//! other by index; index 0 is the sentinel root.
//!
//! Because the search is depth-first, the arena behaves like a stack: a branch
//! pushes its node, recurses, and truncates the arena back when it unwinds.

/// Item marker stored in the sentinel root.
pub const ROOT_ITEM: usize = usize::MAX;

/// Identifier marker stored in the sentinel root.
pub const NO_IDENTIFIER: char = '\0';

/// Index of a node inside an [`AssignmentArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The sentinel root.
    pub const ROOT: Self = Self(0);

    /// Returns the position of the node in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns `true` for the sentinel root.
    #[must_use]
    pub const fn is_root(self) -> bool {
        self.index() == 0
    }
}

/// One item bound to one identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentNode {
    item: usize,
    identifier: char,
    parent: NodeId,
}

impl AssignmentNode {
    /// Returns the index of the bound item in the search's item order.
    ///
    /// The sentinel root reports [`ROOT_ITEM`].
    #[must_use]
    pub const fn item(&self) -> usize {
        self.item
    }

    /// Returns the bound identifier.
    ///
    /// The sentinel root reports [`NO_IDENTIFIER`].
    #[must_use]
    pub const fn identifier(&self) -> char {
        self.identifier
    }

    /// Returns the predecessor binding.
    ///
    /// The sentinel root is its own parent.
    #[must_use]
    pub const fn parent(&self) -> NodeId {
        self.parent
    }
}

/// Arena of assignment nodes with a sentinel root at index 0.
///
/// # Examples
///
/// ```
/// use mnemonic_solver::{AssignmentArena, NodeId};
///
/// let mut arena = AssignmentArena::new();
/// let first = arena.push(NodeId::ROOT, 0, 'c');
/// let left = arena.push(first, 1, 'd');
/// assert_eq!(arena.path(left), vec![(0, 'c'), (1, 'd')]);
///
/// // Unwind the left branch and try a sibling sharing the same parent.
/// arena.truncate(left);
/// let right = arena.push(first, 1, 'o');
/// assert_eq!(arena.path(right), vec![(0, 'c'), (1, 'o')]);
/// ```
#[derive(Debug, Clone)]
pub struct AssignmentArena {
    nodes: Vec<AssignmentNode>,
}

impl Default for AssignmentArena {
    fn default() -> Self {
        Self::new()
    }
}

impl AssignmentArena {
    /// Creates an arena holding only the sentinel root.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an arena with room for `capacity` nodes, root included.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(AssignmentNode {
            item: ROOT_ITEM,
            identifier: NO_IDENTIFIER,
            parent: NodeId::ROOT,
        });
        Self { nodes }
    }

    /// Binds `item` to `identifier` as a child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a live node of this arena.
    pub fn push(&mut self, parent: NodeId, item: usize, identifier: char) -> NodeId {
        assert!(
            parent.index() < self.nodes.len(),
            "parent node {} is not live",
            parent.index()
        );
        let id = NodeId(self.nodes.len());
        self.nodes.push(AssignmentNode {
            item,
            identifier,
            parent,
        });
        id
    }

    /// Discards `node` and every node created after it.
    ///
    /// The sentinel root is never discarded.
    pub fn truncate(&mut self, node: NodeId) {
        self.nodes.truncate(node.index().max(1));
    }

    /// Returns the node at `id`.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&AssignmentNode> {
        self.nodes.get(id.index())
    }

    /// Returns the number of live nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if only the sentinel root is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Reconstructs the chain ending at `node` as `(item, identifier)` pairs.
    ///
    /// Parent links are followed back to the sentinel root, which is excluded,
    /// and the result is returned in binding order.
    #[must_use]
    pub fn path(&self, node: NodeId) -> Vec<(usize, char)> {
        let mut path = Vec::new();
        let mut current = node;
        while !current.is_root() {
            let n = &self.nodes[current.index()];
            path.push((n.item, n.identifier));
            current = n.parent;
        }
        path.reverse();
        path
    }
}
