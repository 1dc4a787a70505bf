//! Configuration for the ORCID publication report.

use std::path::PathBuf;
use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the ORCID public API.
    pub const BASE_URL: &str = "https://pub.orcid.org/v3.0";

    /// Public profile URL prefix.
    pub const PROFILE_URL: &str = "https://orcid.org";

    /// DOI resolver prefix.
    pub const DOI_RESOLVER: &str = "https://doi.org";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Delay between per-work requests (200ms).
    pub const REQUEST_DELAY: Duration = Duration::from_millis(200);

    /// Default output file.
    pub const OUTPUT_PATH: &str = "README.md";

    /// User agent sent with every request.
    pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
}

/// Ordering of rows in the rendered table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowOrder {
    /// Order in which works appear in the record.
    #[default]
    Record,
    /// Newest first by publication year.
    YearDescending,
}

/// Report configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the ORCID API (for testing with mock servers).
    pub api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Pause between per-work detail requests.
    pub request_delay: Duration,

    /// Where the markdown document is written.
    pub output_path: PathBuf,

    /// Row ordering.
    pub row_order: RowOrder,
}

impl Config {
    /// Create a configuration with default API settings and the given output path.
    #[must_use]
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self { output_path: output_path.into(), ..Self::default() }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            request_delay: Duration::ZERO, // No delay in tests
            output_path: PathBuf::from(api::OUTPUT_PATH),
            row_order: RowOrder::Record,
        }
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the delay between per-work requests.
    #[must_use]
    pub const fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Override the output path.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Override the row ordering.
    #[must_use]
    pub const fn with_row_order(mut self, order: RowOrder) -> Self {
        self.row_order = order;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            request_delay: api::REQUEST_DELAY,
            output_path: PathBuf::from(api::OUTPUT_PATH),
            row_order: RowOrder::Record,
        }
    }
}
