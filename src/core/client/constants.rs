//! Centralized constants for default endpoints and UA.

/// Identifying UA; the BLS data servers reject some anonymous default agents.
pub(crate) const USER_AGENT: &str = concat!("qcew-rs/", env!("CARGO_PKG_VERSION"));

/// QCEW open data API base (`{year}/{qtr}/{slice}/{code}.csv` is appended).
pub(crate) const DEFAULT_BASE_API: &str = "http://data.bls.gov/cew/data/api/";

/// Base for the published code title files (`{kind}/{kind}_titles.csv` is appended).
pub(crate) const DEFAULT_BASE_TITLES: &str = "https://data.bls.gov/cew/doc/titles/";

/// First year served by the open data API.
pub(crate) const EARLIEST_YEAR: u32 = 2012;
