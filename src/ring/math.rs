//! Scalar modular arithmetic over the ring Z_n.

use crate::errors::HillCipherError;

use super::extended_gcd;

use serde::{Deserialize, Serialize};

/// Represents a finite ring Z_n using modular arithmetic.
///
/// Every value the cipher works with is a residue in `[0, n)`; this type owns
/// the normalization and inversion rules those residues obey.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, HillCipherError> {
        if modulus <= 1 {
            return Err(HillCipherError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.modulus(), 26);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value into the range `[0, modulus - 1]`.
    ///
    /// Correct for negative values, which come up routinely in the adjugate and
    /// in determinants.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.normalize(27), 1);
    /// assert_eq!(ring.normalize(-3), 23);
    /// assert_eq!(ring.normalize(-185), 23);
    /// assert_eq!(ring.normalize(26), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        value.rem_euclid(self.modulus as i64)
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.add(20, 10), 4);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        self.normalize(self.normalize(a).wrapping_add(self.normalize(b)))
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.sub(3, 5), 24);
    /// assert_eq!(ring.sub(5, 3), 2);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        self.normalize(self.normalize(a).wrapping_sub(self.normalize(b)))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally so the product cannot overflow before the modulo
    /// operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.mul(9, 3), 1);
    /// assert_eq!(ring.mul(-2, 6), 14);
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let product = self.normalize(a) as i128 * self.normalize(b) as i128;

        self.normalize((product % self.modulus as i128) as i64)
    }

    /// Computes the additive inverse `-a mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.neg(11), 15);
    /// assert_eq!(ring.neg(0), 0);
    /// assert_eq!(ring.add(11, ring.neg(11)), 0);
    /// ```
    pub fn neg(&self, a: i64) -> i64 {
        self.normalize(self.normalize(a).wrapping_neg())
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`. `a` is reduced
    /// into `[0, modulus)` before running the Extended Euclidean Algorithm, and
    /// the result is returned normalized.
    ///
    /// # Errors
    ///
    /// Returns [`HillCipherError::NoInverse`] if `gcd(a, modulus) != 1`,
    /// including the case `a == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.inv(9).unwrap(), 3); // 9 * 3 = 27 = 1 mod 26
    /// assert_eq!(ring.inv(23).unwrap(), 17);
    /// assert!(ring.inv(13).is_err()); // gcd(13, 26) = 13
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, HillCipherError> {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return Err(HillCipherError::NoInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let (g, x, _) = extended_gcd(a_norm, self.modulus as i64);
        if g != 1 {
            return Err(HillCipherError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(self.normalize(x))
    }
}
