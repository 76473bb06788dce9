#![no_main]

use libfuzzer_sys::fuzz_target;
use xrpl_keypairs::decode_seed;

fuzz_target!(|data: &[u8]| {
    // Try parsing arbitrary bytes as a UTF-8 string, then as a family seed.
    // decode_seed must never panic — it should always return Ok or Err.
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = decode_seed(s);

        // Also try with the 's' prefix prepended to exercise deeper decoding paths
        let prefixed = format!("s{}", s);
        let _ = decode_seed(&prefixed);
    }
});
