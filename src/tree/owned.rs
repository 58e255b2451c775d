use tracing::{debug, trace};

use super::node::Node;
use super::value_trait::NodeValue;

/// A tree that exclusively owns a hierarchy of [`Node`]s.
///
/// The tree is either empty or holds a single root. Its hierarchy is released
/// all at once, either by [`destroy`](Tree::destroy) or when the tree is
/// dropped. In both cases every node is released exactly once, each node's
/// children before the node itself.
///
/// # Examples
///
/// ```
/// use morsetree::tree::{Node, Symbol, Tree};
///
/// let root = Node::with_children('\0', Some(Node::new('E')), Some(Node::new('T')));
/// let mut tree = Tree::from_root(root);
///
/// let decoded = tree.root().and_then(|n| n.get(Symbol::Dash)).map(|n| *n.value());
/// assert_eq!(decoded, Some('T'));
///
/// assert_eq!(tree.destroy(), 3);
/// assert!(tree.root().is_none());
/// ```
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree<V: NodeValue = char> {
    root: Option<Box<Node<V>>>,
}

impl<V: NodeValue> Tree<V> {
    /// Creates a tree with no root.
    pub fn new() -> Self {
        Tree { root: None }
    }

    /// Creates a tree that takes ownership of the hierarchy rooted at `root`.
    pub fn from_root(root: Node<V>) -> Self {
        Self::from_boxed_root(Box::new(root))
    }

    /// Like [`from_root`](Tree::from_root), but adopts an already boxed node
    /// without moving it, so its address stays the same.
    pub fn from_boxed_root(root: Box<Node<V>>) -> Self {
        trace!(nodes = root.node_count(), "tree adopted root");
        Tree { root: Some(root) }
    }

    /// Returns a reference to the root node, or None if the tree is empty.
    ///
    /// The returned reference has the same API as [`Node`]. Use
    /// [`get()`](Node::get), [`value()`](Node::value),
    /// [`children()`](Node::children), etc. to traverse the tree.
    #[inline]
    pub fn root(&self) -> Option<&Node<V>> {
        self.root.as_deref()
    }

    /// True if the tree holds no root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes owned by the tree.
    pub fn node_count(&self) -> usize {
        self.root().map_or(0, Node::node_count)
    }

    /// Returns the number of nodes on the longest root-to-leaf path, or 0 if empty.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Releases every node in the tree and leaves it empty.
    ///
    /// Children are released before their parent, dot subtree before dash
    /// subtree. Returns the number of nodes released. Calling this on an empty
    /// tree, including one that was already destroyed, releases nothing and
    /// returns 0.
    pub fn destroy(&mut self) -> usize {
        let Some(root) = self.root.take() else {
            trace!("destroy on empty tree");
            return 0;
        };
        let released = root.node_count();
        drop(root);
        debug!(released, "tree destroyed");
        released
    }

    /// Detaches the root and returns it, leaving the tree empty.
    pub fn into_root(mut self) -> Option<Node<V>> {
        self.root.take().map(|root| *root)
    }
}

impl<V: NodeValue> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: NodeValue> From<Node<V>> for Tree<V> {
    fn from(root: Node<V>) -> Self {
        Self::from_root(root)
    }
}

impl<V: NodeValue> std::fmt::Debug for Tree<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("node_count", &self.node_count())
            .field("height", &self.height())
            .finish()
    }
}
