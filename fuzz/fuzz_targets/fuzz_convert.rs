#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe, conversion and decode must never panic
    let _ = zengray::ImageHeader::from_bytes(data);
    let _ = zengray::convert_bytes(data, enough::Unstoppable);
    let _ = zengray::decode(data, enough::Unstoppable);
});
