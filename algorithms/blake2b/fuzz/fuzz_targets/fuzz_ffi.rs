#![no_main]

use libfuzzer_sys::fuzz_target;

extern "C" {
    fn blake2b_hash(
        output_ptr: *mut u8,
        input_ptr: *const u8,
        input_len: usize,
        key_ptr: *const u8,
        key_len: usize,
        hash_len: usize,
    ) -> i32;
}

fuzz_target!(|data: &[u8]| {
    let Some((&n, msg)) = data.split_first() else {
        return;
    };
    let hash_len = usize::from(n);
    let mut out = [0u8; 255];

    // SAFETY: `out` has 255 writable bytes; the call rejects hash_len > 64 before writing.
    let rc = unsafe {
        blake2b_hash(
            out.as_mut_ptr(),
            msg.as_ptr(),
            msg.len(),
            std::ptr::null(),
            0,
            hash_len,
        )
    };

    if hash_len == 0 || hash_len > 64 {
        assert_eq!(rc, -3, "out-of-range digest length accepted");
        assert!(out.iter().all(|&b| b == 0));
    } else {
        assert_eq!(rc, 0);
        let Ok(expected) = blake2b::hash_with_len(msg, hash_len) else {
            panic!("safe API rejected valid length");
        };
        assert_eq!(expected.as_bytes(), &out[..hash_len]);
    }
});
