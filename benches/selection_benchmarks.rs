use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tls_sigschemes::{
    ids::*, Possession, PrivateKey, ProtocolVersion, RustCryptoProvider, SchemeRegistry,
    SchemeSelector,
};

fn setup_registry() -> SchemeRegistry {
    SchemeRegistry::with_provider(Arc::new(RustCryptoProvider::new()))
}

fn benchmark_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    group.bench_function("initialize", |b| {
        b.iter(|| black_box(setup_registry()));
    });

    let registry = setup_registry();
    group.bench_function("lookup_by_id", |b| {
        b.iter(|| black_box(registry.lookup_by_id(black_box(RSA_MD5))));
    });

    group.bench_function("scheme_by_name", |b| {
        b.iter(|| black_box(registry.scheme_by_name(black_box("ECDSA_SECP521R1_SHA512"))));
    });

    group.finish();
}

fn benchmark_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");
    let registry = setup_registry();
    let selector = SchemeSelector::new(&registry);

    group.bench_function("supported_schemes", |b| {
        b.iter(|| {
            black_box(selector.supported_schemes(&[ProtocolVersion::Tls13, ProtocolVersion::Tls12]))
        });
    });

    // Peer offers of growing length, half of them unknown
    for size in [4usize, 16, 64].iter() {
        let offered: Vec<u16> = (0..*size)
            .map(|i| if i % 2 == 0 { ECDSA_SECP256R1_SHA256 } else { 0x0700 + i as u16 })
            .collect();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("peer_schemes", size), &offered, |b, offered| {
            b.iter(|| black_box(selector.peer_schemes(ProtocolVersion::Tls13, offered)));
        });
    }

    group.finish();
}

fn benchmark_signing_preference(c: &mut Criterion) {
    let mut group = c.benchmark_group("signing_preference");
    let registry = setup_registry();
    let selector = SchemeSelector::new(&registry);
    let candidates = selector.supported_schemes(&[ProtocolVersion::Tls13]);

    let keys = [
        ("ed25519", PrivateKey::generate_ed25519()),
        ("p256", PrivateKey::generate_p256()),
        ("p384", PrivateKey::generate_p384()),
    ];

    for (name, key) in keys {
        let possession = Possession::new(key);
        group.bench_with_input(BenchmarkId::new("select", name), &possession, |b, possession| {
            b.iter(|| {
                black_box(selector.signer_of_preferable_scheme(
                    &candidates,
                    possession,
                    ProtocolVersion::Tls13,
                ))
            });
        });

        group.bench_with_input(
            BenchmarkId::new("select_and_sign", name),
            &possession,
            |b, possession| {
                b.iter(|| {
                    let (_, mut signer) = selector
                        .signer_of_preferable_scheme(
                            &candidates,
                            possession,
                            ProtocolVersion::Tls13,
                        )
                        .unwrap();
                    signer.update(&[0x42u8; 256]);
                    black_box(signer.sign().unwrap());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_registry, benchmark_filtering, benchmark_signing_preference
);
criterion_main!(benches);
