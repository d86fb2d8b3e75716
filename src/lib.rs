//! qcew-rs: client for the BLS Quarterly Census of Employment and Wages open data API.
//!
//! One request fetches one quarterly slice (by industry, area or establishment
//! size) as a CSV file and returns it as a [`Table`]:
//!
//! ```no_run
//! # async fn run() -> Result<(), qcew_rs::QcewError> {
//! let client = qcew_rs::QcewClient::default();
//! let resp = client.slice(2016, 1, "industry", 5112).fetch().await?;
//! for advisory in &resp.advisories {
//!     eprintln!("warning: {advisory}");
//! }
//! let table = resp.into_table()?;
//! println!("{} rows, columns {:?}", table.len(), table.headers());
//! # Ok(())
//! # }
//! ```

pub mod codes;
pub mod core;
pub(crate) mod internal {
    #[cfg(feature = "test-mode")]
    pub(crate) mod fixtures;
}
pub mod slice;
pub mod table;

pub use codes::{CodeTable, ReferenceCodes, SliceKind};
pub use crate::core::{QcewClient, QcewClientBuilder, QcewError};
pub use slice::{
    Advisory, ParamValue, SliceBuilder, SliceResponse, TransferError, TransferOutcome,
    ValidationMode, fetch_slice,
};
#[cfg(feature = "dataframe")]
pub use table::ToDataFrame;
pub use table::{QuarterlyRecord, Row, Table};
