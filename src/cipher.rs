//! Hill cipher orchestration: block-by-block encryption and decryption of
//! messages over a configured alphabet.
//!
//! Stateless; every call is a pure function of (message, key, alphabet), so a
//! single [`HillCipher`] can be shared freely across threads.

use crate::alphabet::Alphabet;
use crate::errors::HillCipherError;
use crate::key::KeyMatrix;
use crate::ring::Ring;

/// Symbols per block. The cipher multiplies one 2x1 residue vector per block.
pub const BLOCK_SIZE: usize = 2;

/// A Hill cipher over a fixed alphabet.
#[derive(Debug, Clone)]
pub struct HillCipher {
    alphabet: Alphabet,
    ring: Ring,
}

impl HillCipher {
    /// Builds a cipher over the given alphabet. The modulus of all arithmetic
    /// is the size of the alphabet.
    pub fn new(alphabet: Alphabet) -> Result<Self, HillCipherError> {
        let ring = alphabet.ring()?;
        Ok(HillCipher { alphabet, ring })
    }

    /// Builds a cipher over the preset alphabet for a modulus (26 or 29).
    ///
    /// # Errors
    ///
    /// Returns [`HillCipherError::InvalidModulus`] for moduli without a preset
    /// alphabet.
    pub fn for_modulus(modulus: u64) -> Result<Self, HillCipherError> {
        Self::new(Alphabet::for_modulus(modulus)?)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Encrypts a message block-by-block with the given key.
    ///
    /// The output has the same length as the input.
    ///
    /// # Errors
    ///
    /// - [`HillCipherError::OddLength`] if the message length is not a multiple
    ///   of [`BLOCK_SIZE`]; no padding or truncation is applied.
    /// - [`HillCipherError::UnknownSymbol`] if any character is not in the
    ///   alphabet. Validation happens before any block is transformed, so a
    ///   failed call never yields partial output.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::{HillCipher, KeyMatrix};
    /// let cipher = HillCipher::for_modulus(26).unwrap();
    /// let key = KeyMatrix::new([[6, 11], [25, 15]]);
    /// let ciphertext = cipher.encrypt("TRYTOBREAKTHISCODE", &key).unwrap();
    /// assert_eq!(ciphertext, "PCPBRBQRGUJIMCKAKF");
    /// ```
    pub fn encrypt(&self, message: &str, key: &KeyMatrix) -> Result<String, HillCipherError> {
        self.transform(message, key)
    }

    /// Decrypts a ciphertext block-by-block with the given key.
    ///
    /// The key's modular inverse is computed once per call, before the
    /// ciphertext is read, so an unusable key surfaces as [`NoInverse`] no
    /// matter what the input looks like.
    ///
    /// When a message was produced by layering ciphers with different
    /// alphabets, the caller must decrypt in exact reverse order of
    /// encryption, with the matching alphabet and key at each layer.
    ///
    /// # Errors
    ///
    /// - [`NoInverse`] if `gcd(det(key), n) != 1` — the key cannot decrypt
    ///   under this alphabet, regardless of the message.
    /// - The same [`OddLength`] and [`UnknownSymbol`] conditions as
    ///   [`HillCipher::encrypt`].
    ///
    /// [`NoInverse`]: HillCipherError::NoInverse
    /// [`OddLength`]: HillCipherError::OddLength
    /// [`UnknownSymbol`]: HillCipherError::UnknownSymbol
    pub fn decrypt(&self, ciphertext: &str, key: &KeyMatrix) -> Result<String, HillCipherError> {
        let key_inv = key.inverse(&self.ring)?;
        self.transform(ciphertext, &key_inv)
    }

    /// Shared per-block procedure: map symbols to residues, multiply, reduce
    /// after the full product, map back.
    fn transform(&self, input: &str, matrix: &KeyMatrix) -> Result<String, HillCipherError> {
        let values = self.values_of(input)?;
        // Reduce the key once so block arithmetic only ever sees residues,
        // whatever the caller's raw entries look like.
        let matrix = matrix.normalized(&self.ring);

        let mut output = String::with_capacity(input.len());
        for pair in values.chunks_exact(BLOCK_SIZE) {
            let [w1, w2] = matrix.mul_vector([pair[0], pair[1]]);
            output.push(self.alphabet.symbol_of(self.ring.normalize(w1))?);
            output.push(self.alphabet.symbol_of(self.ring.normalize(w2))?);
        }

        Ok(output)
    }

    /// Validates the whole input up front: even length, every symbol known.
    fn values_of(&self, input: &str) -> Result<Vec<i64>, HillCipherError> {
        let length = input.chars().count();
        if length % BLOCK_SIZE != 0 {
            return Err(HillCipherError::OddLength(length));
        }

        input
            .chars()
            .map(|c| self.alphabet.value_of(c))
            .collect()
    }
}

/// Encrypts a message under the preset alphabet for `modulus` (26 or 29).
///
/// Thin wrapper over [`HillCipher::encrypt`] for callers configured by modulus
/// alone.
pub fn encrypt(
    message: &str,
    key: &KeyMatrix,
    modulus: u64,
) -> Result<String, HillCipherError> {
    HillCipher::for_modulus(modulus)?.encrypt(message, key)
}

/// Decrypts a ciphertext under the preset alphabet for `modulus` (26 or 29).
///
/// Thin wrapper over [`HillCipher::decrypt`].
pub fn decrypt(
    ciphertext: &str,
    key: &KeyMatrix,
    modulus: u64,
) -> Result<String, HillCipherError> {
    HillCipher::for_modulus(modulus)?.decrypt(ciphertext, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key26() -> KeyMatrix {
        KeyMatrix::new([[6, 11], [25, 15]])
    }

    #[test]
    fn test_encrypt_decrypt_round_trip() -> Result<(), HillCipherError> {
        let cipher = HillCipher::for_modulus(26)?;
        let ciphertext = cipher.encrypt("HELLO", &key26());
        assert!(ciphertext.is_err()); // odd length

        let ciphertext = cipher.encrypt("HELLOX", &key26())?;
        assert_eq!(cipher.decrypt(&ciphertext, &key26())?, "HELLOX");
        Ok(())
    }

    #[test]
    fn test_empty_message() -> Result<(), HillCipherError> {
        let cipher = HillCipher::for_modulus(26)?;
        assert_eq!(cipher.encrypt("", &key26())?, "");
        Ok(())
    }

    #[test]
    fn test_odd_length_rejected_before_mapping() {
        let cipher = HillCipher::for_modulus(26).unwrap();
        // The unknown '#' sits after an odd-length check, so OddLength wins.
        assert!(matches!(
            cipher.encrypt("AB#", &key26()),
            Err(HillCipherError::OddLength(3))
        ));
    }

    #[test]
    fn test_unknown_symbol_produces_no_output() {
        let cipher = HillCipher::for_modulus(26).unwrap();
        assert!(matches!(
            cipher.encrypt("ab", &key26()),
            Err(HillCipherError::UnknownSymbol('a'))
        ));
    }

    #[test]
    fn test_huge_key_entries_do_not_overflow() -> Result<(), HillCipherError> {
        let cipher = HillCipher::for_modulus(26)?;
        let huge = i64::MAX / 2 + 13;
        let key = KeyMatrix::new([[huge, huge], [0, 1]]);
        let reduced = key.normalized(cipher.ring());
        assert_eq!(cipher.encrypt("BB", &key)?, cipher.encrypt("BB", &reduced)?);
        Ok(())
    }

    #[test]
    fn test_identity_key_is_a_no_op() -> Result<(), HillCipherError> {
        let cipher = HillCipher::for_modulus(29)?;
        let message = "HELLO WORLD!";
        assert_eq!(cipher.encrypt(message, &KeyMatrix::identity())?, message);
        Ok(())
    }

    #[test]
    fn test_free_functions_match_methods() -> Result<(), HillCipherError> {
        let cipher = HillCipher::for_modulus(26)?;
        let message = "TRYTOBREAKTHISCODE";
        assert_eq!(
            encrypt(message, &key26(), 26)?,
            cipher.encrypt(message, &key26())?
        );
        assert!(encrypt(message, &key26(), 27).is_err());
        Ok(())
    }
}
