use crate::codes::{ReferenceCodes, SliceKind};
use crate::core::{QcewError, net};
use crate::core::client::constants::EARLIEST_YEAR;
use serde::Serialize;
use std::fmt;
use url::Url;

/// A scalar request parameter given as either a number or text.
///
/// Stored in trimmed textual form, which is exactly what lands in the URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ParamValue(String);

impl ParamValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-empty and made only of ASCII digits.
    pub fn is_numeric(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit())
    }

    fn as_u32(&self) -> Option<u32> {
        if self.is_numeric() { self.0.parse().ok() } else { None }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self(s.trim().to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

macro_rules! param_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for ParamValue {
            fn from(n: $t) -> Self {
                Self(n.to_string())
            }
        })*
    };
}

param_from_int!(u8, u16, u32, u64, usize, i16, i32, i64);

/// How request parameter problems are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Log each problem, attach it to the response and still download.
    #[default]
    Advisory,
    /// Reject the request with [`QcewError::InvalidInput`] before any network traffic.
    Strict,
}

/// A likely problem with the request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// The slice is not one of `industry`, `area`, `size`.
    UnknownSlice { slice: String },
    NonNumericYear { year: String },
    /// The open data API starts in 2012.
    YearBeforeCoverage { year: u32 },
    NonNumericQuarter { quarter: String },
    QuarterOutOfRange { quarter: u32 },
    /// A numeric code absent from the reference table of its slice.
    UnknownCode { slice: SliceKind, code: String },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::UnknownSlice { slice } => {
                write!(f, "slice `{slice}` is not one of industry, area, size")
            }
            Advisory::NonNumericYear { year } => write!(f, "year `{year}` is not numeric"),
            Advisory::YearBeforeCoverage { year } => {
                write!(f, "year {year} is before the first published year {EARLIEST_YEAR}")
            }
            Advisory::NonNumericQuarter { quarter } => {
                write!(f, "quarter `{quarter}` is not numeric")
            }
            Advisory::QuarterOutOfRange { quarter } => {
                write!(f, "quarter {quarter} is outside 1..=4")
            }
            Advisory::UnknownCode { slice, code } => {
                write!(f, "code `{code}` is not a known {slice} code")
            }
        }
    }
}

/// Pre-flight checks. Returns the recognised slice kind and every problem found.
pub(crate) fn check(
    year: &ParamValue,
    quarter: &ParamValue,
    slice: &str,
    code: &ParamValue,
    codes: &ReferenceCodes,
) -> (Option<SliceKind>, Vec<Advisory>) {
    let mut advisories = Vec::new();

    match year.as_u32() {
        Some(y) if y < EARLIEST_YEAR => advisories.push(Advisory::YearBeforeCoverage { year: y }),
        Some(_) => {}
        None => advisories.push(Advisory::NonNumericYear {
            year: year.to_string(),
        }),
    }

    match quarter.as_u32() {
        Some(q) if !(1..=4).contains(&q) => {
            advisories.push(Advisory::QuarterOutOfRange { quarter: q })
        }
        Some(_) => {}
        None => advisories.push(Advisory::NonNumericQuarter {
            quarter: quarter.to_string(),
        }),
    }

    let kind = slice.parse::<SliceKind>().ok();
    match kind {
        // non-numeric codes (`31-33`, `US000`, `C1982`) are not looked up
        Some(kind) if code.is_numeric() && !codes.table(kind).contains(code.as_str()) => {
            advisories.push(Advisory::UnknownCode {
                slice: kind,
                code: code.to_string(),
            });
        }
        Some(_) => {}
        None => advisories.push(Advisory::UnknownSlice {
            slice: slice.to_string(),
        }),
    }

    (kind, advisories)
}

/// `{base}/{year}/{quarter}/{slice}/{code}.csv`
///
/// Each value becomes exactly one path segment under `base`.
pub(crate) fn build_url(
    base: &Url,
    year: &ParamValue,
    quarter: &ParamValue,
    slice: &str,
    code: &ParamValue,
) -> Result<Url, QcewError> {
    let file = format!("{code}.csv");
    net::append_segments(base, &[year.as_str(), quarter.as_str(), slice, &file])
}
