use serde_derive::Serialize;

/// One day's global rollup. Only the mapper builds these.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorldwideSnapshot {
    pub(crate) total_cases: u64,
    pub(crate) active: u64,
    pub(crate) recovered: u64,
    pub(crate) critical: u64,
    pub(crate) new_deaths: i64,
    pub(crate) total_deaths: u64,
}

impl WorldwideSnapshot {
    pub fn total_cases(&self) -> u64 {
        self.total_cases
    }

    pub fn active(&self) -> u64 {
        self.active
    }

    pub fn recovered(&self) -> u64 {
        self.recovered
    }

    pub fn critical(&self) -> u64 {
        self.critical
    }

    pub fn new_deaths(&self) -> i64 {
        self.new_deaths
    }

    pub fn total_deaths(&self) -> u64 {
        self.total_deaths
    }
}

/// Cumulative case total for one country.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CountryCaseCount {
    pub(crate) country_name: String,
    pub(crate) cases_for_country: u64,
}

impl CountryCaseCount {
    pub fn country_name(&self) -> &str {
        &self.country_name
    }

    pub fn cases_for_country(&self) -> u64 {
        self.cases_for_country
    }
}
