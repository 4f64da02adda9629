//! Report store clients for the run report viewer.
//!
//! This crate provides a [`ReportStore`] trait for fetching run reports by
//! run identifier, decoupling report rendering from where reports live.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`ReportStore`] trait with a single `fetch_report()` method
//! - [`HttpReportStore`] for the report API (`GET /api/reports/{run_id}`)
//! - [`FixtureReportStore`] serving a local JSON file in mock mode
//! - [`MemoryReportStore`] for testing (behind `mock` feature flag)
//!
//! Use [`open_store`] to pick the implementation from the `[api]` config section.
//!
//! # Example
//!
//! ```ignore
//! use dtr_config::Config;
//! use dtr_store::open_store;
//!
//! let config = Config::load(None, None)?;
//! let store = open_store(&config.api);
//! let report = store.fetch_report("65f0a1b2c3d4e5f6a7b8c9d0")?;
//! ```

mod error;
mod fixture;
mod http;
#[cfg(feature = "mock")]
mod mock;
mod report;

use dtr_config::{ApiConfig, ApiMode};
use tracing::info;

pub use error::StoreError;
pub use fixture::FixtureReportStore;
pub use http::HttpReportStore;
#[cfg(feature = "mock")]
pub use mock::MemoryReportStore;
pub use report::{Report, ReportStore};

/// Create the report store selected by `config.mode`.
#[must_use]
pub fn open_store(config: &ApiConfig) -> Box<dyn ReportStore> {
    match config.mode {
        ApiMode::Real => {
            info!("Reading reports from {}", config.base_url);
            Box::new(HttpReportStore::from_config(config))
        }
        ApiMode::Mock => {
            info!(
                "Reading reports from fixture {}",
                config.mock_report_path.display()
            );
            Box::new(FixtureReportStore::new(&config.mock_report_path))
        }
    }
}
