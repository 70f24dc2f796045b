#![no_main]

use libfuzzer_sys::fuzz_target;

use fibbench_core::{Algorithm, OpCounter, SequenceGenerator, SLOW_RECURSIVE_LEN};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // One byte of length, capped where naive recursion stays fast
    let len = usize::from(data[0]) % (SLOW_RECURSIVE_LEN / 2);

    let mut results = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let mut ops = OpCounter::new();
        let series = algorithm.generate(len, &mut ops);
        results.push((algorithm, series, ops.read()));
    }

    let (_, reference, _) = &results[0];
    for (algorithm, series, _) in &results[1..] {
        assert_eq!(series, reference, "{algorithm} disagrees at len={len}");
    }

    let linear = len.saturating_sub(2) as u64;
    for (algorithm, _, ops) in &results {
        match algorithm {
            Algorithm::Iterative | Algorithm::Memoized => {
                assert_eq!(*ops, linear, "{algorithm} op count at len={len}");
            }
            Algorithm::Recursive => assert!(*ops >= linear),
        }
    }
});
