use blake2b::{hash_into, hash_keyed, Blake2bError, Params};
use bolero::check;

#[test]
fn fuzz_parameter_validation() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>, u8)>()
        .for_each(|(data, key, len)| {
            let hash_len = usize::from(*len);

            // =============================================================================
            // VALIDATION
            // =============================================================================

            let params = Params::new(key, hash_len);
            match (key.len() > 64, hash_len == 0 || hash_len > 64) {
                (true, _) => assert_eq!(
                    params.unwrap_err(),
                    Blake2bError::InvalidKeyLength(key.len())
                ),
                (false, true) => assert_eq!(
                    params.unwrap_err(),
                    Blake2bError::InvalidDigestLength(hash_len)
                ),
                (false, false) => assert!(params.is_ok()),
            }

            // =============================================================================
            // OUTPUT CONTRACT
            // =============================================================================

            let mut out = vec![0xC3u8; hash_len];
            match hash_into(&mut out, data, key) {
                Ok(()) => {
                    let digest = hash_keyed(data, key, hash_len).unwrap();
                    assert_eq!(digest.as_bytes(), &out[..]);
                }
                Err(_) => assert!(out.iter().all(|&b| b == 0xC3), "output written on error"),
            }
        });
}
