use serde::{Deserialize, Serialize};

/// Typed view of the columns shared by QCEW slice files.
///
/// Use with [`Table::deserialize`](super::Table::deserialize). Columns the file
/// lacks come back as `None`; columns not listed here are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct QuarterlyRecord {
    /// FIPS area code, e.g. `26000` or `US000`.
    pub area_fips: Option<String>,
    /// Ownership code (`0` total covered, `1`..`3` government, `5` private).
    pub own_code: Option<String>,
    /// NAICS or supersector code.
    pub industry_code: Option<String>,
    /// Aggregation level code.
    pub agglvl_code: Option<String>,
    /// Establishment size class.
    pub size_code: Option<String>,
    pub year: Option<u32>,
    pub qtr: Option<String>,
    /// `N` when the cell is suppressed for confidentiality.
    pub disclosure_code: Option<String>,
    pub qtrly_estabs: Option<u64>,
    pub month1_emplvl: Option<u64>,
    pub month2_emplvl: Option<u64>,
    pub month3_emplvl: Option<u64>,
    pub total_qtrly_wages: Option<u64>,
    pub taxable_qtrly_wages: Option<u64>,
    pub qtrly_contributions: Option<u64>,
    pub avg_wkly_wage: Option<u64>,
}

impl QuarterlyRecord {
    /// True when the published figures are withheld.
    pub fn is_suppressed(&self) -> bool {
        self.disclosure_code.as_deref() == Some("N")
    }
}
