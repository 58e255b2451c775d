//! # morsetree
//!
//! An owning binary tree for [Morse code](https://en.wikipedia.org/wiki/Morse_code) lookups.
//!
//! Every node carries a payload (a `char` by default) and up to two children: the
//! subtree reached by a dot and the subtree reached by a dash. Decoding a code means
//! starting at the root and following one branch per symbol.
//!
//! The crate provides the container only. Building the alphabet and translating
//! text are left to the caller, who assembles [`Node`](tree::Node)s and hands the
//! finished hierarchy to a [`Tree`](tree::Tree).
//!
//! ## Features
//!
//! - **Strict ownership**: children are held in boxes, so a hierarchy is always a
//!   tree. There is no way to share a node or close a cycle.
//! - **Post-order teardown**: [`Tree::destroy`](tree::Tree::destroy) and `Drop`
//!   release each node's children before the node itself, exactly once.
//! - **Generic payload**: any [`NodeValue`](tree::NodeValue) can be stored.
//! - **serde** (optional): `Serialize`/`Deserialize` for nodes, trees and symbols.
//!
//! ## Quick Start
//!
//! ```
//! use morsetree::tree::{Node, Symbol, Tree};
//!
//! let mut e = Node::new('E');
//! e.set_child(Symbol::Dot, Node::new('I'));
//! e.set_child(Symbol::Dash, Node::new('A'));
//! let root = Node::with_children('\0', Some(e), Some(Node::new('T')));
//!
//! let tree = Tree::from_root(root);
//! let root = tree.root().unwrap();
//!
//! let decode = |code: &str| {
//!     Symbol::parse_code(code)
//!         .ok()?
//!         .into_iter()
//!         .try_fold(root, |n, s| n.get(s))
//!         .map(|n| *n.value())
//! };
//! assert_eq!(decode(".-"), Some('A'));
//! assert_eq!(decode("--"), None);
//! ```

#![warn(missing_docs)]

/// Core tree data structure: nodes, symbols and the owning container.
pub mod tree;
