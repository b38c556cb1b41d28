//! Symbol tables mapping characters to residues and back.
//!
//! An [`Alphabet`] is an immutable value constructed once and passed into cipher
//! operations; the modulus of the cipher is always the size of the alphabet, so
//! the two travel together as one configuration unit.

use crate::errors::HillCipherError;
use crate::ring::Ring;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static! {
    /// The 26-symbol alphabet: 'A'..='Z' mapped to 0..=25.
    static ref LETTERS: Alphabet = Alphabet::from_symbols_unchecked(('A'..='Z').collect());

    /// The 29-symbol alphabet: 'A'..='Z' mapped to 0..=25, then
    /// space -> 26, '?' -> 27, '!' -> 28.
    static ref LETTERS_PUNCT: Alphabet = {
        let mut symbols: Vec<char> = ('A'..='Z').collect();
        symbols.extend([' ', '?', '!']);
        Alphabet::from_symbols_unchecked(symbols)
    };
}

/// A bijective mapping between symbols and residues in `[0, n)`, where `n` is
/// the number of symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    symbols: Vec<char>,
    values: HashMap<char, i64>,
}

impl Alphabet {
    /// The letters-only alphabet (modulus 26).
    pub fn letters() -> Self {
        LETTERS.clone()
    }

    /// The letters + space/`?`/`!` alphabet (modulus 29).
    pub fn with_punctuation() -> Self {
        LETTERS_PUNCT.clone()
    }

    /// Returns the preset alphabet for a modulus, if one is defined.
    ///
    /// Only 26 and 29 have presets; any other modulus requires a custom symbol
    /// table via [`Alphabet::from_symbols`].
    ///
    /// # Errors
    ///
    /// Returns [`HillCipherError::InvalidModulus`] for moduli without a preset.
    pub fn for_modulus(modulus: u64) -> Result<Self, HillCipherError> {
        match modulus {
            26 => Ok(Self::letters()),
            29 => Ok(Self::with_punctuation()),
            other => Err(HillCipherError::InvalidModulus(format!(
                "No preset alphabet for modulus {}; supply one with Alphabet::from_symbols",
                other
            ))),
        }
    }

    /// Builds a custom alphabet from an ordered sequence of symbols.
    ///
    /// The position of each symbol in the sequence is its residue, and the
    /// resulting modulus is the number of symbols.
    ///
    /// # Errors
    ///
    /// Returns [`HillCipherError::InvalidAlphabet`] if the sequence contains a
    /// duplicate symbol or fewer than 2 symbols.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::Alphabet;
    /// let digits = Alphabet::from_symbols('0'..='9').unwrap();
    /// assert_eq!(digits.modulus(), 10);
    /// assert_eq!(digits.value_of('7').unwrap(), 7);
    /// ```
    pub fn from_symbols(
        symbols: impl IntoIterator<Item = char>,
    ) -> Result<Self, HillCipherError> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.len() < 2 {
            return Err(HillCipherError::InvalidAlphabet(format!(
                "An alphabet needs at least 2 symbols, got {}",
                symbols.len()
            )));
        }

        let mut values = HashMap::with_capacity(symbols.len());
        for (index, &symbol) in symbols.iter().enumerate() {
            if values.insert(symbol, index as i64).is_some() {
                return Err(HillCipherError::InvalidAlphabet(format!(
                    "Duplicate symbol '{}' in alphabet",
                    symbol
                )));
            }
        }

        Ok(Alphabet { symbols, values })
    }

    /// Presets are built from known-distinct symbol lists, so validation is
    /// skipped.
    fn from_symbols_unchecked(symbols: Vec<char>) -> Self {
        let values = symbols
            .iter()
            .enumerate()
            .map(|(index, &symbol)| (symbol, index as i64))
            .collect();

        Alphabet { symbols, values }
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The modulus of the residue ring this alphabet encodes into.
    pub fn modulus(&self) -> u64 {
        self.symbols.len() as u64
    }

    /// The ring Z_n matching this alphabet.
    pub fn ring(&self) -> Result<Ring, HillCipherError> {
        Ring::try_with(self.modulus())
    }

    /// Returns the residue for a symbol.
    ///
    /// # Errors
    ///
    /// Returns [`HillCipherError::UnknownSymbol`] if the symbol is not part of
    /// this alphabet.
    pub fn value_of(&self, symbol: char) -> Result<i64, HillCipherError> {
        self.values
            .get(&symbol)
            .copied()
            .ok_or(HillCipherError::UnknownSymbol(symbol))
    }

    /// Returns the symbol for a value, normalizing the value into `[0, n)`
    /// first so that negative intermediates from matrix arithmetic map
    /// correctly.
    ///
    /// # Errors
    ///
    /// Returns [`HillCipherError::InternalError`] if the normalized value has
    /// no symbol. This cannot happen for a well-formed alphabet, since
    /// normalization lands in `[0, n)` and every residue in that range has a
    /// symbol.
    pub fn symbol_of(&self, value: i64) -> Result<char, HillCipherError> {
        let n = self.symbols.len() as i64;
        let normalized = value.rem_euclid(n);

        self.symbols
            .get(normalized as usize)
            .copied()
            .ok_or_else(|| {
                HillCipherError::InternalError(format!(
                    "No symbol for normalized value {} (modulus {})",
                    normalized, n
                ))
            })
    }
}
