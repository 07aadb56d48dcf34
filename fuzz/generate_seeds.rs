#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp_1bit(width: i32, height: i32, rows_bottom_up: &[[u8; 4]]) -> Vec<u8> {
    let mut bmp = vec![0u8; 62];
    bmp[0] = b'B'; bmp[1] = b'M';
    let size = 62 + rows_bottom_up.len() * 4;
    bmp[2..6].copy_from_slice(&(size as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&62u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&1u16.to_le_bytes()); // bpp
    bmp[58..61].copy_from_slice(&[0xff, 0xff, 0xff]); // palette[1] = white
    for row in rows_bottom_up {
        bmp.extend_from_slice(row);
    }
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/mono_1x1.bmp"), bmp_1bit(1, 1, &[[0x80, 0, 0, 0]])).unwrap();
    fs::write(format!("{dir}/mono_8x8.bmp"), bmp_1bit(8, 8, &[[0xff; 4]; 8])).unwrap();
    fs::write(format!("{dir}/mono_9x1.bmp"), bmp_1bit(9, 1, &[[0xff; 4]])).unwrap();
    fs::write(format!("{dir}/mono_3x10.bmp"), bmp_1bit(3, 10, &[[0xa0, 0, 0, 0]; 10])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut short_rows = bmp_1bit(8, 8, &[[0xff; 4]; 8]);
    short_rows.truncate(70);
    fs::write(format!("{dir}/short_rows.bmp"), short_rows).unwrap();
    let mut top_down = bmp_1bit(8, 2, &[[0xff; 4]; 2]);
    top_down[22..26].copy_from_slice(&(-2i32).to_le_bytes());
    fs::write(format!("{dir}/top_down.bmp"), top_down).unwrap();

    println!("Generated seed corpus in {dir}/");
}
