use blake2b::{hash_many, hash_with_params, Params};
use bolero::check;

#[test]
fn fuzz_batch_consistency() {
    check!()
        .with_type::<(Vec<Vec<u8>>, u8)>()
        .for_each(|(inputs, len)| {
            // =============================================================================
            // PARALLEL EXECUTION (RAYON)
            // =============================================================================

            let Ok(params) = Params::unkeyed(1 + usize::from(*len) % 64) else {
                return;
            };
            let batch = hash_many(inputs, &params).unwrap();

            // =============================================================================
            // SEQUENTIAL REFERENCE
            // =============================================================================

            assert_eq!(batch.len(), inputs.len());
            for (input, digest) in inputs.iter().zip(&batch) {
                let expected = hash_with_params(input, &params).unwrap();
                assert_eq!(*digest, expected, "Batch hash mismatch (Rayon vs Sequential)");
            }
        });
}
