use super::symbol::Symbol;
use super::value_trait::NodeValue;

/// A position in the Morse decoding hierarchy.
///
/// Each node exclusively owns its dot and dash subtrees, so a hierarchy built
/// from nodes is always a strict tree: no node has two parents and no cycles
/// can be formed.
///
/// Fields are dropped in declaration order, which releases the dot subtree,
/// then the dash subtree, then this node's own value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<V: NodeValue = char> {
    dot: Option<Box<Node<V>>>,
    dash: Option<Box<Node<V>>>,
    value: V,
}

impl<V: NodeValue> Node<V> {
    /// Creates a leaf node carrying `value`.
    pub fn new(value: V) -> Self {
        Node {
            dot: None,
            dash: None,
            value,
        }
    }

    /// Creates a node with the given children already linked.
    pub fn with_children(value: V, dot: Option<Node<V>>, dash: Option<Node<V>>) -> Self {
        Node {
            dot: dot.map(Box::new),
            dash: dash.map(Box::new),
            value,
        }
    }

    /// Returns the payload of this node.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Replaces the payload of this node, returning the old one.
    pub fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Returns the subtree reached by a dot, if any.
    #[inline]
    pub fn dot(&self) -> Option<&Node<V>> {
        self.dot.as_deref()
    }

    /// Returns the subtree reached by a dash, if any.
    #[inline]
    pub fn dash(&self) -> Option<&Node<V>> {
        self.dash.as_deref()
    }

    /// Returns the node that the symbol's branch leads to, or None if no such branch exists.
    #[inline]
    pub fn get(&self, symbol: Symbol) -> Option<&Node<V>> {
        match symbol {
            Symbol::Dot => self.dot(),
            Symbol::Dash => self.dash(),
        }
    }

    /// Returns true if following `path` from this node never hits a missing branch.
    ///
    /// An empty path always exists.
    #[inline]
    pub fn has_path<I: IntoIterator<Item = Symbol>>(&self, path: I) -> bool {
        path.into_iter()
            .try_fold(self, |node, symbol| node.get(symbol))
            .is_some()
    }

    /// Links `child` under the symbol's branch.
    ///
    /// Returns the subtree previously linked there. It is handed back intact
    /// rather than released, so the caller decides its fate.
    pub fn set_child(&mut self, symbol: Symbol, child: Node<V>) -> Option<Node<V>> {
        self.slot_mut(symbol).replace(Box::new(child)).map(|old| *old)
    }

    /// Returns the subtree under the symbol's branch, first linking one made by
    /// `make` if the branch is absent.
    pub fn child_or_insert_with<F>(&mut self, symbol: Symbol, make: F) -> &mut Node<V>
    where
        F: FnOnce() -> Node<V>,
    {
        self.slot_mut(symbol).get_or_insert_with(|| Box::new(make()))
    }

    /// Unlinks and returns the subtree under the symbol's branch.
    pub fn take_child(&mut self, symbol: Symbol) -> Option<Node<V>> {
        self.slot_mut(symbol).take().map(|old| *old)
    }

    /// Returns a mutable reference to the subtree under the symbol's branch.
    pub fn get_mut(&mut self, symbol: Symbol) -> Option<&mut Node<V>> {
        self.slot_mut(symbol).as_deref_mut()
    }

    fn slot_mut(&mut self, symbol: Symbol) -> &mut Option<Box<Node<V>>> {
        match symbol {
            Symbol::Dot => &mut self.dot,
            Symbol::Dash => &mut self.dash,
        }
    }

    /// Returns an iterator over the present children, dot before dash.
    #[inline]
    pub fn children(&self) -> ChildIter<'_, V> {
        ChildIter {
            node: self,
            index: 0,
        }
    }

    /// Returns the number of children (0, 1 or 2).
    #[inline]
    pub fn child_count(&self) -> usize {
        usize::from(self.dot.is_some()) + usize::from(self.dash.is_some())
    }

    /// True if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }

    /// Returns the number of nodes in the subtree rooted here, including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .map(|(_, child)| child.node_count())
            .sum::<usize>()
    }

    /// Returns the number of nodes on the longest path from here down to a leaf.
    pub fn height(&self) -> usize {
        1 + self
            .children()
            .map(|(_, child)| child.height())
            .max()
            .unwrap_or(0)
    }
}

/// An iterator over the children of a [`Node`].
#[derive(Clone)]
pub struct ChildIter<'t, V: NodeValue> {
    node: &'t Node<V>,
    index: usize,
}

impl<'t, V: NodeValue> Iterator for ChildIter<'t, V> {
    type Item = (Symbol, &'t Node<V>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&symbol) = Symbol::ALL.get(self.index) {
            self.index += 1;
            if let Some(child) = self.node.get(symbol) {
                return Some((symbol, child));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = Symbol::ALL
            .iter()
            .skip(self.index)
            .filter(|&&symbol| self.node.get(symbol).is_some())
            .count();
        (remaining, Some(remaining))
    }
}

impl<V: NodeValue> ExactSizeIterator for ChildIter<'_, V> {}

#[cfg(test)]
mod test {
    use super::*;

    fn etian() -> Node {
        Node::with_children(
            '\0',
            Some(Node::with_children('E', Some(Node::new('I')), Some(Node::new('A')))),
            Some(Node::with_children('T', Some(Node::new('N')), Some(Node::new('M')))),
        )
    }

    #[test]
    fn no_children() {
        let n = Node::new('E');
        assert_eq!(n.children().next(), None);
        assert_eq!(n.child_count(), 0);
        assert!(n.is_leaf());
        assert_eq!(n.dot(), None);
        assert_eq!(n.dash(), None);
    }

    #[test]
    fn dash_only_child() {
        let mut n = Node::new('E');
        n.set_child(Symbol::Dash, Node::new('A'));
        let mut children = n.children();
        assert_eq!(children.len(), 1);
        assert_eq!(children.next(), Some((Symbol::Dash, &Node::new('A'))));
        assert_eq!(children.next(), None);
        assert_eq!(n.child_count(), 1);
        assert!(!n.is_leaf());
    }

    #[test]
    fn two_children_in_branch_order() {
        let n = Node::with_children('E', Some(Node::new('I')), Some(Node::new('A')));
        let mut children = n.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children.next(), Some((Symbol::Dot, &Node::new('I'))));
        assert_eq!(children.len(), 1);
        assert_eq!(children.next(), Some((Symbol::Dash, &Node::new('A'))));
        assert_eq!(children.next(), None);
        assert_eq!(children.len(), 0);
    }

    #[test]
    fn get_follows_branches() {
        let root = etian();
        let n = root.get(Symbol::Dash).unwrap().get(Symbol::Dot).unwrap();
        assert_eq!(*n.value(), 'N');
        assert_eq!(n.get(Symbol::Dot), None);
    }

    #[test]
    fn path_existence() {
        let root = etian();
        assert!(root.has_path(std::iter::empty()));
        assert!(root.has_path([Symbol::Dot, Symbol::Dash]));
        assert!(!root.has_path([Symbol::Dot, Symbol::Dash, Symbol::Dot]));
    }

    #[test]
    fn set_child_returns_displaced_subtree() {
        let mut root = etian();
        let old = root.set_child(Symbol::Dot, Node::new('X')).unwrap();
        assert_eq!(*old.value(), 'E');
        assert_eq!(old.node_count(), 3);
        assert_eq!(*root.dot().unwrap().value(), 'X');
        assert_eq!(root.node_count(), 5);
    }

    #[test]
    fn take_child_unlinks() {
        let mut root = etian();
        let t = root.take_child(Symbol::Dash).unwrap();
        assert_eq!(*t.value(), 'T');
        assert_eq!(root.dash(), None);
        assert_eq!(root.take_child(Symbol::Dash), None);
    }

    #[test]
    fn get_mut_links_grandchild() {
        let mut root = etian();
        root.get_mut(Symbol::Dot)
            .unwrap()
            .get_mut(Symbol::Dot)
            .unwrap()
            .set_child(Symbol::Dot, Node::new('S'));
        assert!(root.has_path([Symbol::Dot; 3]));
        assert_eq!(root.height(), 4);
    }

    #[test]
    fn child_or_insert_with_reuses_existing() {
        let mut root = etian();
        let e = root.child_or_insert_with(Symbol::Dot, || Node::new('X'));
        assert_eq!(*e.value(), 'E');
        let r = e
            .child_or_insert_with(Symbol::Dash, || Node::new('X'))
            .child_or_insert_with(Symbol::Dot, || Node::new('R'));
        assert_eq!(r.set_value('r'), 'R');
        assert_eq!(root.node_count(), 8);
        let r = root.dot().and_then(|n| n.dash()).and_then(|n| n.dot()).unwrap();
        assert_eq!(*r.value(), 'r');
    }

    #[test]
    fn size_and_height() {
        let root = etian();
        assert_eq!(root.node_count(), 7);
        assert_eq!(root.height(), 3);
        assert_eq!(Node::new('E').height(), 1);
    }
}
