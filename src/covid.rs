use serde_derive::Deserialize;
use serde_json::{Map, Value};

/// Every provider payload wraps its rows in `response`.
#[derive(Deserialize)]
pub(crate) struct Envelope<T> {
    pub(crate) response: Vec<T>,
}

/// Rows are only required to be objects until someone reads them.
pub(crate) type RawRow = Map<String, Value>;

#[derive(Deserialize)]
pub(crate) struct HistoryRow {
    pub(crate) cases: HistoryCases,
    pub(crate) deaths: HistoryDeaths,
}

#[derive(Deserialize)]
pub(crate) struct HistoryCases {
    pub(crate) total: u64,
    pub(crate) recovered: u64,
    pub(crate) active: u64,
    pub(crate) critical: u64,
}

#[derive(Deserialize)]
pub(crate) struct HistoryDeaths {
    pub(crate) total: u64,
    pub(crate) new: String,
}

#[derive(Deserialize)]
pub(crate) struct StatisticsRow {
    pub(crate) country: String,
    pub(crate) cases: StatisticsCases,
}

#[derive(Deserialize)]
pub(crate) struct StatisticsCases {
    pub(crate) total: u64,
}
