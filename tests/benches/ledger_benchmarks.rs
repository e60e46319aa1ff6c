//! # TaxLedger Benchmarks
//!
//! | Path | Measured |
//! |------|----------|
//! | tl-01 | Ed25519 verification of a delivery payload |
//! | tl-06 | DeliverTx of a signed taxed transfer |
//! | tl-06 | Commit of a block of transfers |
//! | tl-06 | Query of a committed balance |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shared_types::Amount;
use std::time::Duration;
use tl_01_signature_verification::{Ed25519Verifier, SignatureVerificationApi, SigningIdentity};
use tl_04_transaction_processing::DeliveryData;
use tl_06_application::ConsensusApplication;
use tl_tests::fixtures::{coins, TestNode, TAX_REFERENCE};

fn bench_signature_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("tl-01-signature-verification");
    group.measurement_time(Duration::from_secs(5));

    let signer = SigningIdentity::generate();
    let payload = DeliveryData::add(signer.identity(), coins("1")).signing_bytes();
    let signature = signer.sign(&payload);
    let identity = signer.identity();
    let verifier = Ed25519Verifier;

    group.bench_function("verify_delivery_payload", |b| {
        b.iter(|| {
            black_box(verifier.verify(
                black_box(identity.as_bytes()),
                black_box(&signature),
                black_box(&payload),
            ))
        })
    });
    group.finish();
}

fn bench_deliver_and_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("tl-06-application");
    group.measurement_time(Duration::from_secs(10));

    for block_size in [10usize, 100, 500] {
        group.throughput(Throughput::Elements(block_size as u64));
        group.bench_with_input(
            BenchmarkId::new("deliver_block_then_commit", block_size),
            &block_size,
            |b, &size| {
                let node = TestNode::in_memory();
                node.mint("1000000000");
                node.commit();
                let inflator = &node.keys.inflator;
                let recipients: Vec<_> = (0..size)
                    .map(|_| SigningIdentity::generate().identity())
                    .collect();
                let txs: Vec<Vec<u8>> = recipients
                    .iter()
                    .map(|to| {
                        let data = DeliveryData::send(
                            inflator.identity(),
                            *to,
                            TAX_REFERENCE,
                            Amount::from_minor(1_000),
                        );
                        node.tx(data, inflator)
                    })
                    .collect();

                b.iter(|| {
                    for tx in &txs {
                        black_box(node.app.deliver_tx(tx));
                    }
                    black_box(node.app.commit().ok())
                })
            },
        );
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("tl-06-query");
    let node = TestNode::in_memory();
    node.mint("42");
    node.commit();
    let target = node.keys.inflator.identity();

    group.bench_function("watcher_query", |b| {
        b.iter(|| black_box(node.query_as_watcher(black_box(target))))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_signature_verification,
    bench_deliver_and_commit,
    bench_query
);
criterion_main!(benches);
