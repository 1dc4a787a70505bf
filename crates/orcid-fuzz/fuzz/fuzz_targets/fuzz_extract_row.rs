#![no_main]

use libfuzzer_sys::fuzz_target;
use orcid_readme::extract::extract_row;
use orcid_readme::formatters::format_row;

fuzz_target!(|data: &[u8]| {
    // Treat any JSON document as a work detail; extraction and rendering
    // must never panic.
    if let Ok(detail) = serde_json::from_slice::<serde_json::Value>(data) {
        let row = extract_row(&detail, &serde_json::Value::Null);
        let line = format_row(&row);
        assert_eq!(line.matches('\n').count(), 1);
    }
});
