#![no_main]
use libfuzzer_sys::fuzz_target;
use zenmono::{ArrayName, CArray, Orientation};

fuzz_target!(|data: &[u8]| {
    // Header probing and both layouts must never panic
    let _ = zenmono::read_headers(data);

    let name = ArrayName::default();
    for orientation in [Orientation::Vertical, Orientation::Horizontal] {
        if let Ok(out) = zenmono::decode(data, orientation, enough::Unstoppable) {
            let _ = CArray::new(&name, &out).to_string();
        }
    }
});
