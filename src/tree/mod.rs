/// Node type and child iteration.
pub mod node;
/// Owning tree container.
pub mod owned;
/// Dot and dash branch selectors.
pub mod symbol;
/// Trait for types that can serve as node payloads.
pub mod value_trait;

pub use node::{ChildIter, Node};
pub use owned::Tree;
pub use symbol::{Code, Symbol, SymbolError};
pub use value_trait::NodeValue;

#[cfg(all(test, feature = "serde"))]
mod test {
    use super::*;

    #[test]
    fn tree_survives_json() {
        let tree = Tree::from_root(Node::with_children(
            '\0',
            Some(Node::new('E')),
            Some(Node::with_children('T', None, Some(Node::new('M')))),
        ));
        let json = serde_json::to_string(&tree).unwrap();
        let back: Tree = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
        assert!(back.root().unwrap().has_path([Symbol::Dash, Symbol::Dash]));
    }

    #[test]
    fn symbol_serializes_by_name() {
        assert_eq!(serde_json::to_string(&Symbol::Dash).unwrap(), "\"Dash\"");
    }
}
