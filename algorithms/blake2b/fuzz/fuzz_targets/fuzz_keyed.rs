#![no_main]

use blake2b::{hash_keyed, hash_with_len, verify_mac};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // First byte picks the key length, second the digest length
    let (Some(&k), Some(&n)) = (data.first(), data.get(1)) else {
        return;
    };
    let rest = &data[2..];
    let key_len = usize::from(k) % 65;
    let hash_len = 1 + usize::from(n) % 64;
    if rest.len() < key_len {
        return;
    }
    let (key, msg) = rest.split_at(key_len);

    // =============================================================================
    // 1. KEYED HASHING (MAC)
    // =============================================================================

    let Ok(mac) = hash_keyed(msg, key, hash_len) else {
        panic!("valid parameters rejected");
    };
    assert_eq!(mac.len(), hash_len);

    // Positive case: Correct key must verify
    assert!(
        verify_mac(msg, key, mac.as_bytes()),
        "MAC verification failed with correct key"
    );

    // Negative case: Wrong key must fail
    if !key.is_empty() {
        let mut wrong_key = key.to_vec();
        wrong_key[0] ^= 0xFF;
        assert!(
            !verify_mac(msg, &wrong_key, mac.as_bytes()),
            "MAC verification succeeded with wrong key"
        );
    }

    // =============================================================================
    // 2. LENGTH BINDING
    // =============================================================================

    if hash_len < 64 {
        if let Ok(longer) = hash_with_len(msg, hash_len + 1) {
            if let Ok(shorter) = hash_with_len(msg, hash_len) {
                assert_ne!(
                    shorter.as_bytes(),
                    &longer.as_bytes()[..hash_len],
                    "digest length not bound into state"
                );
            }
        }
    }
});
