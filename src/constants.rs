use std::time::Duration;

use hyper::Uri;
use once_cell::sync::Lazy;

pub const PROVIDER_HOST: &str = "covid-193.p.rapidapi.com";

pub(crate) const HOST_HEADER: &str = "x-rapidapi-host";
pub(crate) const KEY_HEADER: &str = "x-rapidapi-key";

pub(crate) const HISTORY_PATH: &str = "/history";
pub(crate) const STATISTICS_PATH: &str = "/statistics";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) const API_KEY_ENV: &str = "RAPIDAPI_KEY";
pub(crate) const BASE_URL_ENV: &str = "CORONALOG_BASE_URL";
pub(crate) const TIMEOUT_ENV: &str = "CORONALOG_TIMEOUT_SECS";

pub static DEFAULT_BASE_URL: Lazy<Uri> = Lazy::new(|| Uri::from_static("https://covid-193.p.rapidapi.com/"));
