#![no_main]

use libfuzzer_sys::fuzz_target;
use ribbonview::RibbonDocument;

fuzz_target!(|data: &[u8]| {
    // Exercises archive detection and ZIP extraction as well as XML loading
    let _ = RibbonDocument::from_bytes(data);
});
