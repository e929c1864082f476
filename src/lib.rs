//! Client for the covid-193 pandemic statistics provider.
//!
//! [`CovidClient`] issues one GET per call against either the `/history` or
//! the `/statistics` endpoint and hands the JSON body to the [`mapper`], which
//! turns it into a [`WorldwideSnapshot`] or a sorted list of
//! [`CountryCaseCount`]s. Failures come back as a [`RequestError`].

pub mod config;
pub mod constants;
mod covid;
pub mod error;
pub mod logging;
pub mod mapper;
pub mod models;
pub mod transport;

pub use config::{ApiKey, ProviderConfig};
pub use error::{ConfigError, MappingError, RequestError, RequestOutcome};
pub use models::{CountryCaseCount, WorldwideSnapshot};
pub use transport::CovidClient;
