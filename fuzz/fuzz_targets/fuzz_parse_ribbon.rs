#![no_main]

use libfuzzer_sys::fuzz_target;
use ribbonview::{Report, ResolverConfig, TextRenderer};

fuzz_target!(|data: &[u8]| {
    // Parsing, resolution and rendering must never panic, whatever the input
    if let Ok(xml) = std::str::from_utf8(data) {
        for config in [ResolverConfig::strict(), ResolverConfig::lenient()] {
            if let Ok(report) = Report::from_xml(xml, "fuzz", config) {
                let _ = TextRenderer::new().render_to_string(&report);
            }
        }
    }
});
