//! Digit bases.
//!
//! A [`DigitBase`] maps each symbol of an alphabet to a digit value and
//! back. The i-th symbol of the alphabet has value i, so a base built from
//! `"0123456789"` is the usual decimal base, and one built from
//! `"abcdefghij"` is decimal written with letters.

use hashbrown::HashMap;

use crate::digit::{Digit, Symbol};
use crate::error::{NumberError, Result};

/// Symbols reserved for arithmetic operators.
pub const OPERATOR_SYMBOLS: [char; 5] = ['+', '-', '*', '/', '%'];

/// A bijection between symbols and the digit values `0..base_size()`.
///
/// Both directions are indexed, so lookups are O(1) amortized.
#[derive(Clone, Debug)]
pub struct DigitBase<V = u8, S = char> {
    /// Symbols in value order.
    symbols: Vec<S>,
    /// Reverse table: symbol to value.
    values: HashMap<S, V>,
}

impl<V: Digit, S: Symbol> Default for DigitBase<V, S> {
    fn default() -> Self {
        Self {
            symbols: Vec::new(),
            values: HashMap::new(),
        }
    }
}

impl<V: Digit, S: Symbol> DigitBase<V, S> {
    /// Creates a base from symbols listed in value order.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::DuplicateSymbol`] if a symbol repeats or is an
    /// operator, and [`NumberError::UnsupportedBase`] if `V` cannot hold
    /// every value.
    pub fn new(symbols: impl IntoIterator<Item = S>) -> Result<Self> {
        let symbols = symbols.into_iter();
        let mut base = Self {
            symbols: Vec::with_capacity(symbols.size_hint().0),
            values: HashMap::with_capacity(symbols.size_hint().0),
        };
        for symbol in symbols {
            base.add_digit(symbol)?;
        }
        Ok(base)
    }

    /// Returns the number of symbols, which is the numeric base.
    #[must_use]
    pub fn base_size(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if `symbol` has a digit value.
    #[must_use]
    pub fn is_digit(&self, symbol: S) -> bool {
        self.values.contains_key(&symbol)
    }

    /// Returns true if `symbol` is reserved for an operator.
    #[must_use]
    pub fn is_operator(symbol: S) -> bool {
        OPERATOR_SYMBOLS.contains(&symbol.to_char())
    }

    /// Returns the value of `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::UnknownSymbol`] if the symbol is not a digit.
    pub fn value_of(&self, symbol: S) -> Result<V> {
        self.values
            .get(&symbol)
            .copied()
            .ok_or(NumberError::UnknownSymbol(symbol.to_char()))
    }

    /// Returns the symbol of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::UnknownValue`] if `value >= base_size()`.
    pub fn symbol_of(&self, value: V) -> Result<S> {
        usize::try_from(value.to_wide())
            .ok()
            .and_then(|index| self.symbols.get(index))
            .copied()
            .ok_or(NumberError::UnknownValue {
                value: value.to_wide(),
                base: self.base_size(),
            })
    }

    /// Maps `symbol` to the smallest unused value and returns that value.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::DuplicateSymbol`] if the symbol is already a
    /// digit or is reserved, and [`NumberError::UnsupportedBase`] if the
    /// base would outgrow `V`.
    pub fn add_digit(&mut self, symbol: S) -> Result<V> {
        if Self::is_operator(symbol) || self.is_digit(symbol) {
            return Err(NumberError::DuplicateSymbol(symbol.to_char()));
        }
        let next = self.symbols.len() as u64;
        if next >= V::MAX_BASE {
            return Err(NumberError::UnsupportedBase(next + 1));
        }

        let value = V::from_wide(next);
        self.symbols.push(symbol);
        self.values.insert(symbol, value);
        Ok(value)
    }

    /// Returns the symbols in value order.
    pub fn symbols(&self) -> impl Iterator<Item = S> + '_ {
        self.symbols.iter().copied()
    }
}

impl<V: Digit> DigitBase<V, char> {
    /// Creates a base from the characters of `alphabet`, in value order.
    ///
    /// # Errors
    ///
    /// Same as [`DigitBase::new`].
    pub fn from_symbols(alphabet: &str) -> Result<Self> {
        Self::new(alphabet.chars())
    }

    /// The decimal base `0123456789`.
    #[must_use]
    pub fn decimal() -> Self {
        Self::preset("0123456789")
    }

    /// The hexadecimal base with lowercase letters.
    #[must_use]
    pub fn hexadecimal() -> Self {
        Self::preset("0123456789abcdef")
    }

    fn preset(alphabet: &str) -> Self {
        let symbols: Vec<char> = alphabet.chars().collect();
        let values = symbols
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, V::from_wide(i as u64)))
            .collect();
        Self { symbols, values }
    }
}
