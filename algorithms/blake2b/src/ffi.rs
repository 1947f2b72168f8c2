//! C-API Bindings
//!
//! Exposes BLAKE2b to C/C++ via FFI with pointer checks and panic boundaries.

#![allow(unsafe_code)]

use crate::kernels::constants::{MAX_DIGEST_SIZE, MAX_KEY_SIZE};
use crate::oneshot;
use crate::types::Blake2bError;

use std::slice;

// =============================================================================
// STATUS CODES
// =============================================================================

/// Success.
pub const BLAKE2B_OK: i32 = 0;
/// A required pointer was null.
pub const BLAKE2B_ERR_NULL_POINTER: i32 = -1;
/// Key longer than 64 bytes.
pub const BLAKE2B_ERR_KEY_LENGTH: i32 = -2;
/// Digest length outside `1..=64`.
pub const BLAKE2B_ERR_DIGEST_LENGTH: i32 = -3;
/// Message buffer allocation failed.
pub const BLAKE2B_ERR_ALLOCATION: i32 = -4;
/// Panic caught at the FFI boundary.
pub const BLAKE2B_ERR_PANIC: i32 = -5;

const fn status(err: Blake2bError) -> i32 {
    match err {
        Blake2bError::InvalidKeyLength(_) => BLAKE2B_ERR_KEY_LENGTH,
        Blake2bError::InvalidDigestLength(_) => BLAKE2B_ERR_DIGEST_LENGTH,
        Blake2bError::Allocation => BLAKE2B_ERR_ALLOCATION,
    }
}

/// Borrow `len` bytes at `ptr`; a null pointer is only accepted for `len == 0`.
unsafe fn borrow<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if len == 0 {
        Some(&[])
    } else if ptr.is_null() {
        None
    } else {
        Some(slice::from_raw_parts(ptr, len))
    }
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Compute a keyed or unkeyed BLAKE2b digest of `hash_len` bytes.
///
/// # Safety
/// - `output_ptr` must be valid for `hash_len` writable bytes
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `key_ptr` must be valid for `key_len` bytes (may be null if `key_len == 0`)
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Key longer than 64 bytes
/// - `-3`: `hash_len` outside `1..=64`
/// - `-4`: Allocation failure
/// - `-5`: Panic
#[no_mangle]
pub unsafe extern "C" fn blake2b_hash(
    output_ptr: *mut u8,
    input_ptr: *const u8,
    input_len: usize,
    key_ptr: *const u8, // NULL for unkeyed
    key_len: usize,
    hash_len: usize,
) -> i32 {
    if output_ptr.is_null() {
        return BLAKE2B_ERR_NULL_POINTER;
    }
    if hash_len == 0 || hash_len > MAX_DIGEST_SIZE {
        return BLAKE2B_ERR_DIGEST_LENGTH;
    }
    if key_len > MAX_KEY_SIZE {
        return BLAKE2B_ERR_KEY_LENGTH;
    }
    let (Some(input), Some(key)) = (borrow(input_ptr, input_len), borrow(key_ptr, key_len)) else {
        return BLAKE2B_ERR_NULL_POINTER;
    };

    let result = std::panic::catch_unwind(|| {
        let output = slice::from_raw_parts_mut(output_ptr, hash_len);
        oneshot::hash_into(output, input, key)
    });

    match result {
        Ok(Ok(())) => BLAKE2B_OK,
        Ok(Err(e)) => status(e),
        Err(_) => BLAKE2B_ERR_PANIC,
    }
}

/// Verify a keyed or unkeyed digest in constant time.
///
/// The digest length is `expected_len`.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `key_ptr` must be valid for `key_len` bytes (may be null if `key_len == 0`)
/// - `expected_ptr` must be valid for `expected_len` bytes
///
/// # Returns
/// - `1`: Match
/// - `0`: No match
/// - `-1`: Null pointer
/// - `-2`: Key longer than 64 bytes
/// - `-3`: `expected_len` outside `1..=64`
/// - `-5`: Panic
#[no_mangle]
pub unsafe extern "C" fn blake2b_verify(
    input_ptr: *const u8,
    input_len: usize,
    key_ptr: *const u8,
    key_len: usize,
    expected_ptr: *const u8,
    expected_len: usize,
) -> i32 {
    if expected_ptr.is_null() {
        return BLAKE2B_ERR_NULL_POINTER;
    }
    if expected_len == 0 || expected_len > MAX_DIGEST_SIZE {
        return BLAKE2B_ERR_DIGEST_LENGTH;
    }
    if key_len > MAX_KEY_SIZE {
        return BLAKE2B_ERR_KEY_LENGTH;
    }
    let (Some(input), Some(key)) = (borrow(input_ptr, input_len), borrow(key_ptr, key_len)) else {
        return BLAKE2B_ERR_NULL_POINTER;
    };

    let result = std::panic::catch_unwind(|| {
        let expected = slice::from_raw_parts(expected_ptr, expected_len);
        oneshot::verify_mac(input, key, expected)
    });

    match result {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(_) => BLAKE2B_ERR_PANIC,
    }
}
