#![no_main]
use libfuzzer_sys::fuzz_target;
use zenmono::*;

fuzz_target!(|data: &[u8]| {
    // Any decodable file must re-encode to the same pixels, and both
    // layouts must describe the same bitmap.
    let Ok(bitmap) = DecodeRequest::new(data).decode_bitmap(enough::Unstoppable) else {
        return;
    };

    let reencoded = encode_mono_bmp(&bitmap).expect("decoded bitmap must encode");
    let Ok(bitmap2) = DecodeRequest::new(&reencoded).decode_bitmap(enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };
    assert_eq!(bitmap, bitmap2, "roundtrip pixel mismatch");

    let v = decode(data, Orientation::Vertical, enough::Unstoppable).expect("vertical");
    let h = decode(data, Orientation::Horizontal, enough::Unstoppable).expect("horizontal");
    assert_eq!(v.to_bitmap().ok(), h.to_bitmap().ok(), "layouts disagree");
});
