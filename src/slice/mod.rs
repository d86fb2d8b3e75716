//! Slice downloads: `{year}/{quarter}/{slice}/{code}.csv` fetched and parsed into a [`Table`].
//!
//! A fetch runs in two phases. The transfer records its outcome instead of
//! failing, then the parse step always runs on whatever was spooled, so a
//! caller gets a [`SliceResponse`] even when the network or the parameters
//! were bad. Strict validation and [`SliceResponse::into_table`] turn those
//! soft outcomes into errors when that is preferred.

mod model;
mod params;
mod transfer;

pub use model::SliceResponse;
pub use params::{Advisory, ParamValue, ValidationMode};
pub use transfer::{TransferError, TransferOutcome};

use crate::codes::ReferenceCodes;
use crate::core::{QcewClient, QcewError};
use url::Url;

/// A builder for one slice download.
pub struct SliceBuilder<'a> {
    client: &'a QcewClient,
    year: ParamValue,
    quarter: ParamValue,
    slice: String,
    code: ParamValue,
    codes: Option<&'a ReferenceCodes>,
    validation: ValidationMode,
}

impl<'a> SliceBuilder<'a> {
    /// Creates a new `SliceBuilder`. The slice name is lowercased.
    pub fn new(
        client: &'a QcewClient,
        year: impl Into<ParamValue>,
        quarter: impl Into<ParamValue>,
        slice: impl Into<String>,
        code: impl Into<ParamValue>,
    ) -> Self {
        Self {
            client,
            year: year.into(),
            quarter: quarter.into(),
            slice: slice.into().trim().to_lowercase(),
            code: code.into(),
            codes: None,
            validation: client.validation(),
        }
    }

    /// Validate against these tables instead of the client's.
    pub fn codes(mut self, codes: &'a ReferenceCodes) -> Self {
        self.codes = Some(codes);
        self
    }

    /// Overrides the client's validation mode for this call.
    pub fn validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }

    /// The URL this request will download, built without any validation.
    pub fn url(&self) -> Result<Url, QcewError> {
        params::build_url(
            self.client.base_api(),
            &self.year,
            &self.quarter,
            &self.slice,
            &self.code,
        )
    }

    /// Pre-flight advisories for the current parameters.
    pub fn advisories(&self) -> Vec<Advisory> {
        self.check().1
    }

    fn check(&self) -> (Option<crate::codes::SliceKind>, Vec<Advisory>) {
        let codes = self.codes.unwrap_or_else(|| self.client.reference_codes());
        params::check(&self.year, &self.quarter, &self.slice, &self.code, codes)
    }

    /// Download and parse the slice.
    ///
    /// Returns `Err` only for strict-mode rejections, unbuildable URLs, local
    /// spool I/O and CSV decoding failures. Transfer problems are reported in
    /// [`SliceResponse::transfer`].
    #[tracing::instrument(
        skip(self),
        err,
        fields(year = %self.year, quarter = %self.quarter, slice = %self.slice, code = %self.code)
    )]
    pub async fn fetch(self) -> Result<SliceResponse, QcewError> {
        let (kind, advisories) = self.check();
        tracing::debug!(advisories = advisories.len(), "pre-flight validation done");
        for advisory in &advisories {
            tracing::warn!(%advisory, "request parameter advisory");
        }
        if self.validation == ValidationMode::Strict && !advisories.is_empty() {
            return Err(QcewError::InvalidInput(advisories));
        }

        let url = self.url()?;
        tracing::info!(%url, "attempting transfer");

        let fixture_key = format!("{}/{}/{}/{}", self.year, self.quarter, self.slice, self.code);
        let (transfer, spool) = transfer::download(self.client, &url, &fixture_key).await?;
        match &transfer {
            TransferOutcome::Completed { bytes, .. } => {
                tracing::debug!(bytes, "transfer completed");
            }
            TransferOutcome::Warning { message, .. } => {
                tracing::warn!(%url, reason = %message, "transfer warning");
            }
            TransferOutcome::Failed(error) => {
                tracing::warn!(%url, %error, "transfer failed");
            }
        }

        let table = transfer::parse_spool(spool.as_ref())?;
        tracing::info!(%url, rows = table.len(), "processed URL");

        Ok(SliceResponse {
            url: url.to_string(),
            slice: kind,
            code: self.code.to_string(),
            table,
            advisories,
            transfer,
        })
    }
}

/// One-call download of a slice with the client's defaults.
pub async fn fetch_slice(
    client: &QcewClient,
    year: impl Into<ParamValue>,
    quarter: impl Into<ParamValue>,
    slice: impl Into<String>,
    code: impl Into<ParamValue>,
) -> Result<SliceResponse, QcewError> {
    SliceBuilder::new(client, year, quarter, slice, code)
        .fetch()
        .await
}
