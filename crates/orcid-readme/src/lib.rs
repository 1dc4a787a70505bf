//! ORCID publication table generator
//!
//! Fetches a researcher's public ORCID record, fetches the detail document of
//! every listed work, and renders the result as a markdown table.
//!
//! # Features
//!
//! - **Defensive extraction**: missing or null fields degrade to placeholders
//! - **Failure isolation**: a work that cannot be fetched is skipped, not fatal
//! - **Throttled**: fixed pause between per-work requests
//!
//! # Example
//!
//! ```no_run
//! use orcid_readme::{config::Config, models::OrcidId, report, OrcidClient};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::new("README.md");
//!     let client = OrcidClient::new(&config)?;
//!     let orcid: OrcidId = "0000-0001-9812-1078".parse()?;
//!
//!     report::generate(&client, &orcid, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod formatters;
pub mod models;
pub mod report;

pub use client::OrcidClient;
pub use config::Config;
pub use error::{ClientError, IdentifierError, ReportError};
