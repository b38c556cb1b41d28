use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hill_cipher::{HillCipher, KeyMatrix};

fn bench_happy_flow(c: &mut Criterion) {
    // one-time setup
    let cipher26 = HillCipher::for_modulus(26).expect("build mod-26 cipher");
    let cipher29 = HillCipher::for_modulus(29).expect("build mod-29 cipher");
    let key26 = KeyMatrix::new([[6, 11], [25, 15]]);
    let key29 = KeyMatrix::new([[28, 7], [19, 18]]);

    // the same message every iteration
    let message = "TRYTOBREAKTHISCODE".repeat(32);

    c.bench_function("encrypt_mod26", |b| {
        b.iter(|| {
            let ciphertext = cipher26.encrypt(&message, &key26).expect("encrypt");
            black_box(ciphertext);
        })
    });

    c.bench_function("round_trip_mod26", |b| {
        b.iter(|| {
            let ciphertext = cipher26.encrypt(&message, &key26).expect("encrypt");
            let plaintext = cipher26.decrypt(&ciphertext, &key26).expect("decrypt");
            black_box(plaintext);
        })
    });

    c.bench_function("round_trip_mod29", |b| {
        b.iter(|| {
            let ciphertext = cipher29.encrypt(&message, &key29).expect("encrypt");
            let plaintext = cipher29.decrypt(&ciphertext, &key29).expect("decrypt");
            black_box(plaintext);
        })
    });
}

criterion_group!(benches, bench_happy_flow);
criterion_main!(benches);
