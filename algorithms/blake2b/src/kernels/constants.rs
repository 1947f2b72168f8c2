//! BLAKE2b Kernel Constants
//!
//! The IV is the SHA-512 IV: the first 64 bits of the fractional parts of the
//! square roots of the first eight primes.
//!
//! ```text
//! IV[i] = floor(frac(sqrt(p_i)) * 2^64),  p = 2, 3, 5, 7, 11, 13, 17, 19
//! ```

use static_assertions::const_assert_eq;

// =============================================================================
// ROUNDS
// =============================================================================

/// Rounds of the compression function.
pub const ROUNDS: usize = 12;

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Size of one message block (in bytes).
pub const BLOCK_SIZE: usize = 128;

/// Size of one state / message word (in bytes).
pub const WORD_SIZE: usize = 8;

/// Message words per block.
pub const BLOCK_WORDS: usize = BLOCK_SIZE / WORD_SIZE;

/// Words in the chaining state `h`.
pub const STATE_WORDS: usize = 8;

/// Largest digest the state can emit (in bytes).
pub const MAX_DIGEST_SIZE: usize = 64;

/// Largest key accepted (in bytes).
pub const MAX_KEY_SIZE: usize = 64;

/// Fanout = 1, depth = 1: the sequential-mode bytes of the parameter block.
pub const PARAM_BLOCK: u64 = 0x0101_0000;

/// Finalization flag XORed into `v[14]` for the last block.
pub const LAST_BLOCK_FLAG: u64 = u64::MAX;

const_assert_eq!(BLOCK_SIZE, 128);
const_assert_eq!(BLOCK_WORDS, 16);
const_assert_eq!(MAX_DIGEST_SIZE, STATE_WORDS * WORD_SIZE);
const_assert_eq!(MAX_KEY_SIZE, MAX_DIGEST_SIZE);

// =============================================================================
// INITIALIZATION VECTOR
// =============================================================================

/// Initialization vector: frac(sqrt(p)) for the first eight primes.
pub const IV: [u64; STATE_WORDS] = [
    0x6A09_E667_F3BC_C908, // sqrt(2)
    0xBB67_AE85_84CA_A73B, // sqrt(3)
    0x3C6E_F372_FE94_F82B, // sqrt(5)
    0xA54F_F53A_5F1D_36F1, // sqrt(7)
    0x510E_527F_ADE6_82D1, // sqrt(11)
    0x9B05_688C_2B3E_6C1F, // sqrt(13)
    0x1F83_D9AB_FB41_BD6B, // sqrt(17)
    0x5BE0_CD19_137E_2179, // sqrt(19)
];

// =============================================================================
// MESSAGE SCHEDULE
// =============================================================================

/// Message word permutations. Round `r` uses row `r % 10`, so rounds 10 and
/// 11 reuse rows 0 and 1.
#[rustfmt::skip]
pub const SIGMA: [[u8; BLOCK_WORDS]; 10] = [
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15],
    [14, 10,  4,  8,  9, 15, 13,  6,  1, 12,  0,  2, 11,  7,  5,  3],
    [11,  8, 12,  0,  5,  2, 15, 13, 10, 14,  3,  6,  7,  1,  9,  4],
    [ 7,  9,  3,  1, 13, 12, 11, 14,  2,  6,  5, 10,  4,  0, 15,  8],
    [ 9,  0,  5,  7,  2,  4, 10, 15, 14,  1, 11, 12,  6,  8,  3, 13],
    [ 2, 12,  6, 10,  0, 11,  8,  3,  4, 13,  7,  5, 15, 14,  1,  9],
    [12,  5,  1, 15, 14, 13,  4, 10,  0,  7,  6,  3,  9,  2,  8, 11],
    [13, 11,  7, 14, 12,  1,  3,  9,  5,  0, 15,  4,  8,  6,  2, 10],
    [ 6, 15, 14,  9, 11,  3,  0,  8, 12,  2, 13,  7,  1,  4, 10,  5],
    [10,  2,  8,  4,  7,  6,  1,  5, 15, 11,  9, 14,  3, 12, 13,  0],
];

/// G-function lanes: four columns followed by four diagonals.
pub const LANES: [[usize; 4]; 8] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [1, 6, 11, 12],
    [2, 7, 8, 13],
    [3, 4, 9, 14],
];
