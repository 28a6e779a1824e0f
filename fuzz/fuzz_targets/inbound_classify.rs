//! Fuzz target for Inbound::classify
//!
//! Feeds arbitrary text to the frame classifier.
//!
//! # Invariants
//!
//! - Never panics
//! - Anything that is not a JSON object comes back as `Raw`, verbatim

#![no_main]

use libfuzzer_sys::fuzz_target;
use rooterm_proto::Inbound;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    match Inbound::classify(&text) {
        Inbound::Raw(raw) => assert_eq!(raw, text),
        Inbound::Chat(_) | Inbound::Suggestion(_) => {
            assert!(text.trim_start().starts_with('{'), "non-object classified: {text:?}");
        },
    }
});
