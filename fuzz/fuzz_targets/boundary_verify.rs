#![no_main]

use libfuzzer_sys::fuzz_target;
use xrpl_keypairs::derive_and_verify;

fuzz_target!(|data: &[u8]| {
    // Split arbitrary bytes into (seed, message, signature) text inputs.
    // derive_and_verify must never panic on any of them.
    if let Ok(s) = std::str::from_utf8(data) {
        let mut parts = s.splitn(3, ',');
        let seed = parts.next().unwrap_or("");
        let message = parts.next().unwrap_or("");
        let signature = parts.next().unwrap_or("");
        let _ = derive_and_verify(seed, message, signature);
    }
});
