// CLASSIFICATION: COMMUNITY
// Filename: concurrency.rs v0.3
// Author: Lukas Bower
// Date Modified: 2027-09-04

//! Mutual-exclusion tests: concurrent sessions racing on the one
//! shared buffer store must never interleave inside a single write.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use cohdev::{DeviceConfig, DeviceRegistry, WritePolicy};
use serial_test::serial;

const WRITERS: usize = 8;
const CHUNK: usize = 10;

fn append_device(capacity: usize) -> (DeviceRegistry, Arc<cohdev::Device>) {
    let mut registry = DeviceRegistry::new();
    let device = registry
        .register(DeviceConfig {
            capacity,
            greeting: Vec::new(),
            policy: WritePolicy::Append,
            ..DeviceConfig::default()
        })
        .expect("registration");
    (registry, device)
}

#[test]
#[serial]
fn concurrent_append_writers_do_not_corrupt() {
    let (_registry, device) = append_device(1024);

    let handles: Vec<_> = (0..WRITERS)
        .map(|w| {
            let device = Arc::clone(&device);
            thread::spawn(move || {
                let mut session = device.open().expect("open");
                let chunk = [b'a' + w as u8; CHUNK];
                assert_eq!(session.write_buf(&chunk).expect("write"), CHUNK);
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread");
    }

    assert_eq!(device.valid_len().unwrap(), WRITERS * CHUNK);

    // every chunk must be intact and contiguous: ten identical bytes,
    // one chunk per writer, no writer seen twice
    let mut reader = device.open().unwrap();
    let all = reader.read_buf(1024).unwrap();
    assert_eq!(all.len(), WRITERS * CHUNK);

    let mut seen = HashSet::new();
    for chunk in all.chunks(CHUNK) {
        let tag = chunk[0];
        assert!(chunk.iter().all(|&b| b == tag), "interleaved chunk: {chunk:?}");
        assert!(seen.insert(tag), "writer {tag} appeared twice");
    }
    assert_eq!(seen.len(), WRITERS);
}

#[test]
#[serial]
fn concurrent_appends_saturate_at_capacity() {
    let capacity = 64;
    let (_registry, device) = append_device(capacity);

    let handles: Vec<_> = (0..WRITERS)
        .map(|w| {
            let device = Arc::clone(&device);
            thread::spawn(move || {
                let mut session = device.open().expect("open");
                let chunk = [b'a' + w as u8; CHUNK];
                // may be truncated or dropped near capacity
                session.write_buf(&chunk).expect("write")
            })
        })
        .collect();
    let written: usize = handles
        .into_iter()
        .map(|h| h.join().expect("writer thread"))
        .sum();

    assert_eq!(written, capacity.min(WRITERS * CHUNK));
    assert_eq!(device.valid_len().unwrap(), capacity);
}

#[test]
#[serial]
fn readers_race_writers_without_tearing() {
    let (_registry, device) = append_device(1024);

    let writer = {
        let device = Arc::clone(&device);
        thread::spawn(move || {
            let mut session = device.open().expect("open");
            for _ in 0..20 {
                session.write_buf(&[b'z'; CHUNK]).expect("write");
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let device = Arc::clone(&device);
            thread::spawn(move || {
                let mut session = device.open().expect("open");
                loop {
                    let data = session.read_buf(CHUNK).expect("read");
                    if data.is_empty() {
                        break;
                    }
                    // writes are whole chunks of one byte value, and
                    // reads stage under the same lock
                    assert!(data.iter().all(|&b| b == b'z'));
                }
            })
        })
        .collect();

    writer.join().expect("writer thread");
    for reader in readers {
        reader.join().expect("reader thread");
    }
    assert_eq!(device.valid_len().unwrap(), 200);
}
