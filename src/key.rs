//! 2x2 integer key matrices and their modular inversion.
//!
//! All arithmetic is exact integer arithmetic; entries are only reduced into
//! `[0, n)` where the contract says so. The modular inverse follows the
//! algebraic identity `M^-1 = det(M)^-1 * adj(M) (mod n)`, which holds for any
//! 2x2 matrix whose determinant is invertible in the ring.

use crate::errors::HillCipherError;
use crate::ring::Ring;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Attempts at sampling an invertible key before giving up.
const MAX_SAMPLE_ATTEMPTS: usize = 100;

/// A 2x2 integer matrix used as a cipher key.
///
/// Immutable once constructed; every operation returns a new matrix.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct KeyMatrix {
    entries: [[i64; 2]; 2],
}

impl KeyMatrix {
    /// Wraps a row-major 2x2 entry array as a key.
    pub fn new(entries: [[i64; 2]; 2]) -> Self {
        KeyMatrix { entries }
    }

    /// The 2x2 identity matrix.
    pub fn identity() -> Self {
        KeyMatrix::new([[1, 0], [0, 1]])
    }

    /// Row-major copy of the entries.
    pub fn entries(&self) -> [[i64; 2]; 2] {
        self.entries
    }

    /// Matrix-vector product `M * [v1, v2]^t`.
    ///
    /// Entries are **not** reduced; the cipher normalizes after the full
    /// product, matching block semantics. Products are accumulated in `i128`
    /// so the multiply-add cannot overflow; the result is exact whenever it
    /// fits in `i64`, which always holds once the entries and the vector are
    /// residues in `[0, n)`.
    pub fn mul_vector(&self, v: [i64; 2]) -> [i64; 2] {
        let m = &self.entries;
        let (v0, v1) = (v[0] as i128, v[1] as i128);
        [
            (m[0][0] as i128 * v0 + m[0][1] as i128 * v1) as i64,
            (m[1][0] as i128 * v0 + m[1][1] as i128 * v1) as i64,
        ]
    }

    /// The determinant `ad - bc`, unreduced.
    ///
    /// Computed in `i128` for the same reason as [`KeyMatrix::mul_vector`]:
    /// exact for any matrix of residues, and for any matrix whose true
    /// determinant fits in `i64`.
    pub fn determinant(&self) -> i64 {
        let m = &self.entries;
        (m[0][0] as i128 * m[1][1] as i128 - m[0][1] as i128 * m[1][0] as i128) as i64
    }

    /// The adjugate `[[d, -b], [-c, a]]` with every entry reduced into
    /// `[0, n)`.
    pub fn adjugate(&self, ring: &Ring) -> KeyMatrix {
        let m = &self.entries;
        KeyMatrix::new([
            [ring.normalize(m[1][1]), ring.neg(m[0][1])],
            [ring.neg(m[1][0]), ring.normalize(m[0][0])],
        ])
    }

    /// Entrywise multiplication by a scalar, unreduced.
    pub fn scalar_mul(&self, k: i64) -> KeyMatrix {
        self.map_entries(|e| e * k)
    }

    /// Entrywise reduction into `[0, n)`.
    ///
    /// A key and its reduction are congruent, so they encrypt identically;
    /// the cipher reduces every key once before the block loop so that block
    /// arithmetic only ever sees residues.
    pub fn normalized(&self, ring: &Ring) -> KeyMatrix {
        self.map_entries(|e| ring.normalize(e))
    }

    /// Computes the modular inverse of this key: `det^-1 * adj(M)`, with every
    /// entry reduced into `[0, n)` after the full scalar product.
    ///
    /// # Errors
    ///
    /// Returns [`HillCipherError::NoInverse`] when `gcd(det, n) != 1` — the key
    /// is unusable for decryption under this ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::{KeyMatrix, Ring};
    /// let ring = Ring::try_with(26).unwrap();
    /// let key = KeyMatrix::new([[6, 11], [25, 15]]);
    /// let inverse = key.inverse(&ring).unwrap();
    /// assert_eq!(inverse.entries(), [[21, 21], [17, 24]]);
    /// ```
    pub fn inverse(&self, ring: &Ring) -> Result<KeyMatrix, HillCipherError> {
        // Reduce first: the determinant of the reduced key is congruent to the
        // raw one and cannot overflow.
        let key = self.normalized(ring);
        let det_inv = ring.inv(ring.normalize(key.determinant()))?;
        let scaled = key.adjugate(ring).scalar_mul(det_inv);

        Ok(scaled.normalized(ring))
    }

    /// Samples a key with entries uniform in `[0, n)` until it is invertible in
    /// the ring.
    ///
    /// # Errors
    ///
    /// Returns [`HillCipherError::InternalError`] if no invertible matrix is
    /// found within the attempt bound. For the moduli this crate ships
    /// alphabets for, a large fraction of random matrices is invertible, so
    /// hitting the bound in practice means the ring itself is degenerate.
    pub fn random_invertible<R: Rng + ?Sized>(
        ring: &Ring,
        rng: &mut R,
    ) -> Result<KeyMatrix, HillCipherError> {
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let mut entries = [[0i64; 2]; 2];
            for row in entries.iter_mut() {
                for entry in row.iter_mut() {
                    *entry = (rng.random::<u64>() % ring.modulus()) as i64;
                }
            }

            let candidate = KeyMatrix::new(entries);
            if candidate.inverse(ring).is_ok() {
                return Ok(candidate);
            }
        }

        Err(HillCipherError::InternalError(format!(
            "Failed to sample an invertible key mod {} after {} attempts",
            ring.modulus(),
            MAX_SAMPLE_ATTEMPTS
        )))
    }

    /// Serializes the key to JSON.
    pub fn to_json(&self) -> Result<String, HillCipherError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserializes a key from JSON.
    pub fn from_json(json: &str) -> Result<KeyMatrix, HillCipherError> {
        Ok(serde_json::from_str(json)?)
    }

    fn map_entries(&self, f: impl Fn(i64) -> i64) -> KeyMatrix {
        KeyMatrix::new(self.entries.map(|row| row.map(&f)))
    }
}
