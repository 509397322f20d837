#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_convert";
    fs::create_dir_all(dir).unwrap();

    // P3 2x1 from the format documentation
    let basic = b"P3\n# comment\n2 1\n255\n10 20 30 40 50 60\n";
    fs::write(format!("{dir}/basic_2x1.ppm"), basic).unwrap();

    // Inline comments after header fields and pixels
    let inline = b"P3\n2 # width\n2 # height\n255 # max\n0 0 0 # black\n255 255 255\n1 2 3#x\n4 5 6\n";
    fs::write(format!("{dir}/inline_comments.ppm"), inline).unwrap();

    // CRLF, tabs, vertical tab and form feed separators
    let ragged = b"P3\r\n\t1\x0b1\r\n255\x0c200 100 0\r\n";
    fs::write(format!("{dir}/ragged_1x1.ppm"), ragged).unwrap();

    // Already grayscale
    let gray = b"P3\n3 1\n255\n7 7 7 128 128 128 255 255 255\n";
    fs::write(format!("{dir}/gray_3x1.ppm"), gray).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p3.bin"), b"P3").unwrap();
    fs::write(format!("{dir}/p6.bin"), b"P6\n1 1\n255\n\xff\x00\x00").unwrap();
    fs::write(format!("{dir}/maxval_65535.bin"), b"P3\n1 1\n65535\n0 0 0\n").unwrap();
    fs::write(format!("{dir}/huge_width.bin"), b"P3\n4294967296 1\n255\n").unwrap();
    fs::write(format!("{dir}/short_pixels.bin"), b"P3\n2 1\n255\n1 2 3 4").unwrap();
    fs::write(format!("{dir}/channel_256.bin"), b"P3\n1 1\n255\n0 256 0\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
