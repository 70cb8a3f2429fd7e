#![no_main]

use std::fs;
use std::path::Path;

use agentmeta::{decode_feedback_file, FeedbackContext};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;

fuzz_target!(|data: &[u8]| {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let ctx = FeedbackContext {
            feedback_id: "fuzz".into(),
            tx_hash: "0x00".into(),
            tag1_on_chain: String::new(),
            tag2_on_chain: String::new(),
            timestamp: BigInt::from(0),
        };
        let file = decode_feedback_file("cid", &ctx, data);
        assert_eq!(file.id(), "0x00:cid");
    }));

    if result.is_err() {
        record_panic("feedback_decode", data);
    }
});

fn record_panic(target: &str, data: &[u8]) {
    let hash = fnv1a64(data);
    let dir = Path::new("fuzz").join("artifacts").join(target);
    if let Err(err) = fs::create_dir_all(&dir) {
        eprintln!("fuzz panic capture failed: target={} err={}", target, err);
        return;
    }
    let path = dir.join(format!("panic_{:016x}.json", hash));
    if let Err(err) = fs::write(&path, data) {
        eprintln!(
            "fuzz panic capture failed: target={} path={} err={}",
            target,
            path.display(),
            err
        );
        return;
    }
    eprintln!(
        "fuzz panic captured: target={} path={} len={}",
        target,
        path.display(),
        data.len()
    );
}

fn fnv1a64(data: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;
    let mut hash = FNV_OFFSET;
    for byte in data {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
