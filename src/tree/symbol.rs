use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;
use thiserror::Error;

/// One of the two Morse code elements, selecting a branch of a [`Node`](super::Node).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    /// Short element, the left branch.
    Dot,
    /// Long element, the right branch.
    Dash,
}

/// A parsed Morse code. No letter in the standard alphabet is longer than six
/// elements, so codes stay on the stack.
pub type Code = SmallVec<[Symbol; 8]>;

/// Errors that can occur when parsing Morse symbols from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymbolError {
    /// A character other than a dot or dash was encountered.
    #[error("invalid Morse symbol '{ch}' at position {position}")]
    InvalidSymbol {
        /// The offending character.
        ch: char,
        /// Character index within the input.
        position: usize,
    },

    /// The input contained no symbols at all.
    #[error("Morse code must contain at least one symbol")]
    Empty,
}

impl Symbol {
    /// Both symbols, in branch order.
    pub const ALL: [Symbol; 2] = [Symbol::Dot, Symbol::Dash];

    /// Returns the canonical character for this symbol, `'.'` or `'-'`.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        }
    }

    /// Parses a whole code such as `".-"` into its symbols.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Empty`] for an empty string and
    /// [`SymbolError::InvalidSymbol`] for the first character that is neither a
    /// dot nor a dash.
    ///
    /// # Examples
    ///
    /// ```
    /// use morsetree::tree::Symbol;
    ///
    /// let code = Symbol::parse_code(".-").unwrap();
    /// assert_eq!(code.as_slice(), &[Symbol::Dot, Symbol::Dash]);
    /// ```
    pub fn parse_code(code: &str) -> Result<Code, SymbolError> {
        let symbols = code
            .chars()
            .enumerate()
            .map(|(position, ch)| Self::from_char(ch, position))
            .collect::<Result<Code, _>>()?;
        if symbols.is_empty() {
            return Err(SymbolError::Empty);
        }
        Ok(symbols)
    }

    fn from_char(ch: char, position: usize) -> Result<Self, SymbolError> {
        match ch {
            '.' | '·' => Ok(Symbol::Dot),
            '-' | '_' => Ok(Symbol::Dash),
            _ => Err(SymbolError::InvalidSymbol { ch, position }),
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = SymbolError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch, 0)
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    /// Parses exactly one symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(SymbolError::Empty)?;
        let symbol = Self::from_char(first, 0)?;
        match chars.next() {
            Some(extra) => Err(SymbolError::InvalidSymbol {
                ch: extra,
                position: 1,
            }),
            None => Ok(symbol),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case('.', Symbol::Dot ; "ascii dot")]
    #[test_case('·', Symbol::Dot ; "middle dot")]
    #[test_case('-', Symbol::Dash ; "ascii dash")]
    #[test_case('_', Symbol::Dash ; "underscore")]
    fn symbol_from_char(ch: char, expected: Symbol) {
        assert_eq!(Symbol::try_from(ch), Ok(expected));
    }

    #[test_case('x' ; "letter")]
    #[test_case(' ' ; "space")]
    #[test_case('/' ; "word separator")]
    fn invalid_symbol_char(ch: char) {
        assert_eq!(
            Symbol::try_from(ch),
            Err(SymbolError::InvalidSymbol { ch, position: 0 })
        );
    }

    #[test]
    fn parse_code_reports_position() {
        assert_eq!(
            Symbol::parse_code("..x-"),
            Err(SymbolError::InvalidSymbol {
                ch: 'x',
                position: 2
            })
        );
    }

    #[test]
    fn parse_empty_code() {
        assert_eq!(Symbol::parse_code(""), Err(SymbolError::Empty));
        assert_eq!("".parse::<Symbol>(), Err(SymbolError::Empty));
    }

    #[test]
    fn parse_prosign_code() {
        let code = Symbol::parse_code("...---...").unwrap();
        assert_eq!(code.len(), 9);
        assert_eq!(code[3], Symbol::Dash);
    }

    #[test]
    fn from_str_rejects_trailing_symbols() {
        assert_eq!("-".parse::<Symbol>(), Ok(Symbol::Dash));
        assert_eq!(
            "-.".parse::<Symbol>(),
            Err(SymbolError::InvalidSymbol {
                ch: '.',
                position: 1
            })
        );
    }

    #[test]
    fn display_round_trips_through_char() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::try_from(symbol.as_char()), Ok(symbol));
            assert_eq!(symbol.to_string(), symbol.as_char().to_string());
        }
    }
}
