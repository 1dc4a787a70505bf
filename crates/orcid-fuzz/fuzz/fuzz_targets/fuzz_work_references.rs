#![no_main]

use libfuzzer_sys::fuzz_target;
use orcid_readme::extract::work_references;

fuzz_target!(|data: &[u8]| {
    if let Ok(record) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = work_references(&record).count();
    }
});
