#![no_main]

use libfuzzer_sys::fuzz_target;
use nav_digest::core::{CoercionPolicy, RawReply, normalize_response};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Decode → fault check → normalize must not panic at any step.
        if let Ok(body) = nav_digest::xml::decode_reply(s) {
            if nav_digest::xml::check_fault(&body).is_ok() {
                let _ = normalize_response(
                    RawReply {
                        body,
                        request_xml: String::new(),
                    },
                    CoercionPolicy::Lenient,
                );
            }
        }
    }
});
