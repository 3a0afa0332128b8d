//! Data shapes and view logic for the Flavi workforce dashboard.
//!
//! Everything in here is independent of the browser so it can be exercised by
//! native tests; the `frontend` crate only binds these values to Yew components.

pub mod analysis;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod evaluation;
pub mod fetch;
pub mod filter;
pub mod format;
pub mod thresholds;
pub mod workers;

pub use client::WorkforceApi;
pub use config::{ApiConfig, Endpoint, Method};
pub use error::ApiError;
pub use fetch::FetchState;
