#![no_main]

use libfuzzer_sys::fuzz_target;
use orcid_readme::models::OrcidId;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(id) = input.parse::<OrcidId>() {
            // A parsed iD always re-parses to itself
            assert_eq!(id.as_str().parse::<OrcidId>().as_ref(), Ok(&id));
        }
    }
});
