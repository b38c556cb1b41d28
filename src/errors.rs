#[derive(thiserror::Error, Debug)]
pub enum HillCipherError {
    /// Input contains a character that is not part of the configured alphabet.
    #[error("UnknownSymbol: character '{0}' is not in the alphabet")]
    UnknownSymbol(char),
    /// Message length is not a multiple of the block size (2).
    #[error("OddLength: message length {0} is not a multiple of the block size 2")]
    OddLength(usize),
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, n) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus (n <= 1), or asking for a
    /// preset alphabet under a modulus that has none.
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Error when building an alphabet from an invalid symbol set.
    #[error("InvalidAlphabet: {0}")]
    InvalidAlphabet(String),
    #[error("InternalError: {0}")]
    InternalError(String),

    #[error("Key serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}
