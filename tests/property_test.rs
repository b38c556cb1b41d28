use hill_cipher::{Alphabet, HillCipher, KeyMatrix, Ring};

use quickcheck::{TestResult, quickcheck};

/// Maps arbitrary bytes onto in-alphabet symbols and truncates to an even
/// length, so every generated message satisfies the cipher's preconditions.
fn message_from(data: &[u8], alphabet: &Alphabet) -> String {
    let even_len = data.len() - data.len() % 2;
    data[..even_len]
        .iter()
        .map(|&byte| {
            alphabet
                .symbol_of(byte as i64)
                .expect("every normalized residue has a symbol")
        })
        .collect()
}

fn mul_mod(a: &KeyMatrix, b: &KeyMatrix, ring: &Ring) -> [[i64; 2]; 2] {
    let (a, b) = (a.entries(), b.entries());
    let mut c = [[0i64; 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            let mut sum = 0;
            for (k, b_row) in b.iter().enumerate() {
                sum = ring.add(sum, ring.mul(a[i][k], b_row[j]));
            }
            c[i][j] = sum;
        }
    }
    c
}

quickcheck! {
    fn prop_round_trip_mod26(data: Vec<u8>, a: i8, b: i8, c: i8, d: i8) -> TestResult {
        round_trip_under(26, &data, [a, b, c, d])
    }

    fn prop_round_trip_mod29(data: Vec<u8>, a: i8, b: i8, c: i8, d: i8) -> TestResult {
        round_trip_under(29, &data, [a, b, c, d])
    }

    fn prop_alphabet_bijection(value: i64) -> bool {
        let alphabet = Alphabet::with_punctuation();
        let symbol = alphabet.symbol_of(value).unwrap();
        alphabet.value_of(symbol).unwrap() == value.rem_euclid(29)
    }

    fn prop_scalar_inverse(a: i64, modulus: u8) -> TestResult {
        let modulus = modulus as u64;
        if modulus <= 1 {
            return TestResult::discard();
        }
        let ring = Ring::try_with(modulus).unwrap();
        match ring.inv(a) {
            Ok(a_inv) => TestResult::from_bool(ring.mul(a, a_inv) == 1),
            Err(_) => TestResult::discard(),
        }
    }

    fn prop_matrix_inverse(a: i8, b: i8, c: i8, d: i8) -> TestResult {
        let ring = Ring::try_with(26).unwrap();
        let key = KeyMatrix::new([[a as i64, b as i64], [c as i64, d as i64]]);
        let inverse = match key.inverse(&ring) {
            Ok(inverse) => inverse,
            Err(_) => return TestResult::discard(),
        };
        TestResult::from_bool(
            mul_mod(&key, &inverse, &ring) == KeyMatrix::identity().entries()
                && mul_mod(&inverse, &key, &ring) == KeyMatrix::identity().entries(),
        )
    }
}

fn round_trip_under(modulus: u64, data: &[u8], entries: [i8; 4]) -> TestResult {
    let cipher = HillCipher::for_modulus(modulus).unwrap();
    let key = KeyMatrix::new([
        [entries[0] as i64, entries[1] as i64],
        [entries[2] as i64, entries[3] as i64],
    ]);
    if key.inverse(cipher.ring()).is_err() {
        return TestResult::discard();
    }

    let message = message_from(data, cipher.alphabet());
    let ciphertext = cipher.encrypt(&message, &key).unwrap();
    if ciphertext.len() != message.len() {
        return TestResult::failed();
    }

    TestResult::from_bool(cipher.decrypt(&ciphertext, &key).unwrap() == message)
}
