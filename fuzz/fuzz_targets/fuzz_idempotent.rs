#![no_main]
use libfuzzer_sys::fuzz_target;
use zengray::*;

fuzz_target!(|data: &[u8]| {
    // Anything that converts must convert to itself a second time
    let Ok(first) = convert_bytes(data, enough::Unstoppable) else {
        return;
    };
    let Ok(second) = convert_bytes(&first, enough::Unstoppable) else {
        panic!("converted output failed to convert");
    };
    assert_eq!(first, second, "second pass changed the output");

    // Decoding the output agrees with decoding then averaging the input
    let original = decode(data, enough::Unstoppable).expect("input converted but failed to decode");
    let gray = decode(&first, enough::Unstoppable).expect("output failed to decode");
    let expected = original.to_gray();
    for (px, g) in gray.pixels().iter().zip(expected) {
        assert_eq!((px.r, px.g, px.b), (g, g, g));
    }
});
