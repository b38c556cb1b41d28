//! # hill-cipher
//!
//! A classical Hill cipher on 2-symbol blocks over a finite alphabet: the
//! alphabet is a ring of residues mod N, keys are 2x2 integer matrices, and
//! decryption applies the key's modular inverse (determinant, adjugate,
//! extended-Euclidean scalar inverse) so that it is the exact algebraic
//! inverse of encryption.
//!
//! The Hill cipher is historical and vulnerable to known-plaintext attacks;
//! nothing here claims cryptographic security.

pub mod alphabet;
pub mod cipher;
pub mod errors;
pub mod key;
pub mod ring;

pub use alphabet::Alphabet;
pub use cipher::{BLOCK_SIZE, HillCipher, decrypt, encrypt};
pub use errors::HillCipherError;
pub use key::KeyMatrix;
pub use ring::Ring;
