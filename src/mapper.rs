//! Conversion from provider JSON to the domain models.
//!
//! Both conversions are all-or-nothing: a missing key, a wrong type or a
//! malformed row anywhere in the part we read rejects the whole payload.
//! Fields we do not read are ignored.

use serde::Deserialize;
use serde_json::Value;

use crate::covid::{Envelope, HistoryRow, RawRow, StatisticsRow};
use crate::error::MappingError;
use crate::models::{CountryCaseCount, WorldwideSnapshot};

/// Maps a `/history` payload, or `None` if it fails validation.
pub fn map_worldwide(json: &Value) -> Option<WorldwideSnapshot> {
    log_rejection("history", decode_worldwide(json))
}

/// Maps a `/statistics` payload, or `None` if any row fails validation.
pub fn map_cases_by_country(json: &Value) -> Option<Vec<CountryCaseCount>> {
    log_rejection("statistics", decode_cases_by_country(json))
}

/// Like [`map_worldwide`] but reports why the payload was rejected.
///
/// Every element of `response` must be an object; only the first one is read.
pub fn decode_worldwide(json: &Value) -> Result<WorldwideSnapshot, MappingError> {
    let envelope = Envelope::<RawRow>::deserialize(json)?;
    let first = envelope
        .response
        .into_iter()
        .next()
        .ok_or(MappingError::EmptyResponse)?;
    let row = HistoryRow::deserialize(Value::Object(first))?;

    Ok(WorldwideSnapshot {
        total_cases: row.cases.total,
        active: row.cases.active,
        recovered: row.cases.recovered,
        critical: row.cases.critical,
        new_deaths: strip_sign(&row.deaths.new)?,
        total_deaths: row.deaths.total,
    })
}

/// Like [`map_cases_by_country`] but reports why the payload was rejected.
///
/// The result is sorted by case count, largest first. Equal counts keep
/// their source order.
pub fn decode_cases_by_country(json: &Value) -> Result<Vec<CountryCaseCount>, MappingError> {
    let envelope = Envelope::<StatisticsRow>::deserialize(json)?;

    let mut counts = Vec::with_capacity(envelope.response.len());
    for (index, row) in envelope.response.into_iter().enumerate() {
        if row.country.is_empty() {
            return Err(MappingError::EmptyCountry { index });
        }
        counts.push(CountryCaseCount {
            country_name: row.country,
            cases_for_country: row.cases.total,
        });
    }

    counts.sort_by(|a, b| b.cases_for_country.cmp(&a.cases_for_country));
    Ok(counts)
}

/// `deaths.new` arrives as e.g. `"+42"`. The first character is dropped, not
/// applied, so `"-5"` reads as 5.
fn strip_sign(raw: &str) -> Result<i64, MappingError> {
    let mut chars = raw.chars();
    if chars.next().is_none() {
        return Err(MappingError::NewDeaths(raw.to_string()));
    }
    chars
        .as_str()
        .parse()
        .map_err(|_| MappingError::NewDeaths(raw.to_string()))
}

fn log_rejection<T>(endpoint: &'static str, decoded: Result<T, MappingError>) -> Option<T> {
    match decoded {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(endpoint, error = %err, "payload rejected");
            None
        }
    }
}
