//! Fuzzing library for orcid-readme.
//!
//! This crate provides fuzzing targets for the JSON extraction and
//! markdown rendering paths, which see arbitrary user-edited ORCID data.
//!
//! # Usage
//!
//! ```bash
//! cd crates/orcid-fuzz
//! cargo +nightly fuzz run fuzz_extract_row -- -max_total_time=60
//! ```

pub use orcid_readme::{extract, formatters};
