#![no_main]

use libfuzzer_sys::fuzz_target;

use fibbench_core::{Algorithm, OpCounter, SequenceGenerator, FIB_TABLE, MAX_FIB_U64};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Two bytes of length; values past F(93) wrap but must not panic
    let len = usize::from(u16::from_le_bytes([data[0], data[1]]));

    let mut ops = OpCounter::new();
    let Some(series) = Algorithm::Memoized.generate(len, &mut ops) else {
        assert_eq!(len, 0);
        return;
    };

    assert_eq!(series.len(), len);
    assert_eq!(ops.read(), len.saturating_sub(2) as u64);
    for (i, value) in series.iter().take(MAX_FIB_U64).enumerate() {
        assert_eq!(*value, FIB_TABLE[i + 1], "F({}) mismatch", i + 1);
    }
});
