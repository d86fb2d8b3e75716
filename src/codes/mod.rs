//! Reference code tables for the three slice dimensions.
//!
//! The tables only back advisory validation of slice codes; they are never
//! consulted to build URLs.

mod fetch;

pub(crate) use fetch::fetch_titles;

use crate::core::QcewError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

const BUNDLED_INDUSTRY: &str = include_str!("data/industry_titles.csv");
const BUNDLED_AREA: &str = include_str!("data/area_titles.csv");
const BUNDLED_SIZE: &str = include_str!("data/size_titles.csv");

/// The dimension a slice request is disaggregated along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SliceKind {
    /// NAICS industry codes (`5112`, `31-33`, ...).
    Industry,
    /// FIPS area codes (`26000`, `US000`, `C1982`, ...).
    Area,
    /// Establishment size classes `0`..=`9`.
    Size,
}

impl SliceKind {
    /// All slice kinds, in URL-path order of the published documentation.
    pub const ALL: [SliceKind; 3] = [SliceKind::Industry, SliceKind::Area, SliceKind::Size];

    /// Path segment used by the API.
    pub fn as_str(self) -> &'static str {
        match self {
            SliceKind::Industry => "industry",
            SliceKind::Area => "area",
            SliceKind::Size => "size",
        }
    }
}

impl fmt::Display for SliceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SliceKind {
    type Err = QcewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "industry" => Ok(SliceKind::Industry),
            "area" => Ok(SliceKind::Area),
            "size" => Ok(SliceKind::Size),
            other => Err(QcewError::Data(format!("unknown slice `{other}`"))),
        }
    }
}

/// Code → title lookup for one slice dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodeTable {
    entries: BTreeMap<String, String>,
}

impl CodeTable {
    /// Parse a title file: a header row, then `code,title` records.
    ///
    /// Only the first two columns are read; records with an empty code are skipped.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, QcewError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = BTreeMap::new();
        for record in rdr.records() {
            let record = record?;
            let code = record.get(0).unwrap_or_default();
            if code.is_empty() {
                continue;
            }
            let title = record.get(1).unwrap_or_default();
            entries.insert(code.to_string(), title.to_string());
        }
        Ok(Self { entries })
    }

    /// Whether `code` is a known code.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Title for `code`, if known.
    pub fn title(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(code, title)` pairs ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<C: Into<String>, T: Into<String>> FromIterator<(C, T)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (C, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(c, t)| (c.into(), t.into())).collect(),
        }
    }
}

/// The three lookup tables consulted when validating slice codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceCodes {
    pub industry: CodeTable,
    pub area: CodeTable,
    pub size: CodeTable,
}

impl ReferenceCodes {
    pub fn new(industry: CodeTable, area: CodeTable, size: CodeTable) -> Self {
        Self {
            industry,
            area,
            size,
        }
    }

    /// Tables compiled into the crate, parsed on first use and shared afterwards.
    pub fn bundled() -> Result<Arc<ReferenceCodes>, QcewError> {
        static BUNDLED: OnceLock<Arc<ReferenceCodes>> = OnceLock::new();

        if let Some(codes) = BUNDLED.get() {
            return Ok(Arc::clone(codes));
        }
        let parsed = Arc::new(Self::new(
            CodeTable::from_csv_reader(BUNDLED_INDUSTRY.as_bytes())?,
            CodeTable::from_csv_reader(BUNDLED_AREA.as_bytes())?,
            CodeTable::from_csv_reader(BUNDLED_SIZE.as_bytes())?,
        ));
        Ok(Arc::clone(BUNDLED.get_or_init(|| parsed)))
    }

    pub fn table(&self, kind: SliceKind) -> &CodeTable {
        match kind {
            SliceKind::Industry => &self.industry,
            SliceKind::Area => &self.area,
            SliceKind::Size => &self.size,
        }
    }
}
