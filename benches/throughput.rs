// CLASSIFICATION: COMMUNITY
// Filename: throughput.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-09-04

use criterion::{criterion_group, criterion_main, Criterion};

use cohdev::{DeviceConfig, DeviceRegistry, WritePolicy};

fn bench_replace_roundtrip(c: &mut Criterion) {
    let mut registry = DeviceRegistry::new();
    let device = registry
        .register(DeviceConfig::default())
        .expect("registration");
    let payload = vec![0x5au8; 512];

    c.bench_function("replace_write_then_read", |b| {
        b.iter(|| {
            let mut session = device.open().expect("open");
            session.write_buf(&payload).expect("write");
            let back = session.read_buf(1024).expect("read");
            assert_eq!(back.len(), 512);
        });
    });
}

fn bench_append_until_full(c: &mut Criterion) {
    c.bench_function("append_until_full", |b| {
        b.iter(|| {
            let mut registry = DeviceRegistry::new();
            let device = registry
                .register(DeviceConfig {
                    greeting: Vec::new(),
                    policy: WritePolicy::Append,
                    ..DeviceConfig::default()
                })
                .expect("registration");
            let mut session = device.open().expect("open");
            while session.write_buf(&[0x17u8; 64]).expect("write") > 0 {}
        });
    });
}

criterion_group!(benches, bench_replace_roundtrip, bench_append_until_full);
criterion_main!(benches);
