//! Example: building a Morse alphabet and translating text with it.
//!
//! This shows how the collaborators of the tree fit around it. An alphabet
//! builder assembles the hierarchy, a `Translator` reads it through
//! `Tree::root`, and the tree is destroyed when the translator is done.
//!
//! Run with: RUST_LOG=debug cargo run --example morse

use morsetree::tree::{Node, Symbol, SymbolError, Tree};
use tracing_subscriber::EnvFilter;

/// Payload of positions that do not terminate a valid code.
const GAP: char = '\0';

const ALPHABET: [(char, &str); 36] = [
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."), ('E', "."), ('F', "..-."),
    ('G', "--."), ('H', "...."), ('I', ".."), ('J', ".---"), ('K', "-.-"), ('L', ".-.."),
    ('M', "--"), ('N', "-."), ('O', "---"), ('P', ".--."), ('Q', "--.-"), ('R', ".-."),
    ('S', "..."), ('T', "-"), ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"),
    ('Y', "-.--"), ('Z', "--.."), ('0', "-----"), ('1', ".----"), ('2', "..---"),
    ('3', "...--"), ('4', "....-"), ('5', "....."), ('6', "-...."), ('7', "--..."),
    ('8', "---.."), ('9', "----."),
];

/// Builds the alphabet hierarchy, creating gap nodes along each code as needed.
fn build_alphabet() -> Result<Tree, SymbolError> {
    let mut root = Node::new(GAP);
    for (letter, code) in ALPHABET {
        let node = Symbol::parse_code(code)?
            .into_iter()
            .fold(&mut root, |node, symbol| {
                node.child_or_insert_with(symbol, || Node::new(GAP))
            });
        node.set_value(letter);
    }
    Ok(Tree::from_root(root))
}

/// A convenient wrapper around the alphabet tree for translating text.
struct Translator {
    tree: Tree,
}

impl Translator {
    fn new(tree: Tree) -> Self {
        Translator { tree }
    }

    /// Decodes one code, or returns None if it names no letter.
    fn decode_letter(&self, code: &str) -> Option<char> {
        let root = self.tree.root()?;
        Symbol::parse_code(code)
            .ok()?
            .into_iter()
            .try_fold(root, |node, symbol| node.get(symbol))
            .map(|node| *node.value())
            .filter(|&ch| ch != GAP)
    }

    /// Decodes space separated codes, with `/` between words.
    fn decode(&self, morse: &str) -> String {
        morse
            .split(" / ")
            .map(|word| {
                word.split_whitespace()
                    .map(|code| self.decode_letter(code).unwrap_or('?'))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Encodes one letter by searching the tree for its path.
    fn encode_letter(&self, letter: char) -> Option<String> {
        fn search(node: &Node, letter: char, path: &mut String) -> bool {
            if *node.value() == letter {
                return true;
            }
            for (symbol, child) in node.children() {
                path.push(symbol.as_char());
                if search(child, letter, path) {
                    return true;
                }
                path.pop();
            }
            false
        }

        let mut path = String::new();
        let root = self.tree.root()?;
        (letter != GAP && search(root, letter.to_ascii_uppercase(), &mut path)).then_some(path)
    }

    fn encode(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| {
                word.chars()
                    .filter_map(|ch| self.encode_letter(ch))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(" / ")
    }

    /// Releases the alphabet.
    fn finish(mut self) -> usize {
        self.tree.destroy()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tree = build_alphabet()?;
    println!("Alphabet tree: {tree:?}");
    let translator = Translator::new(tree);

    println!("\nEncoding:");
    for text in ["SOS", "Hello World", "Rust 2021"] {
        println!("  {text}: {}", translator.encode(text));
    }

    println!("\nDecoding:");
    for morse in ["... --- ...", ".... . .-.. .-.. --- / .-- --- .-. .-.. -..", "..--"] {
        println!("  {morse}: {}", translator.decode(morse));
    }

    println!("\nReleased {} nodes", translator.finish());
    Ok(())
}
