//! Public client surface + builder.
//! Endpoint defaults live in `constants`.

pub(crate) mod constants;

use crate::codes::{CodeTable, ReferenceCodes, SliceKind};
use crate::core::QcewError;
use crate::slice::{ParamValue, SliceBuilder, ValidationMode};
use constants::{DEFAULT_BASE_API, DEFAULT_BASE_TITLES, USER_AGENT};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Handle to the QCEW open data service.
///
/// Cheap to clone; clones share the HTTP connection pool and reference tables.
#[derive(Debug, Clone)]
pub struct QcewClient {
    http: Client,
    base_api: Url,
    base_titles: Url,
    codes: Arc<ReferenceCodes>,
    validation: ValidationMode,
}

impl Default for QcewClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl QcewClient {
    /// Create a new builder.
    pub fn builder() -> QcewClientBuilder {
        QcewClientBuilder::default()
    }

    /// Start a slice request for `year`/`quarter` along `slice` (`industry`, `area` or `size`).
    pub fn slice(
        &self,
        year: impl Into<ParamValue>,
        quarter: impl Into<ParamValue>,
        slice: impl Into<String>,
        code: impl Into<ParamValue>,
    ) -> SliceBuilder<'_> {
        SliceBuilder::new(self, year, quarter, slice, code)
    }

    /// Download the published code titles for `kind` and parse them into a [`CodeTable`].
    pub async fn fetch_titles(&self, kind: SliceKind) -> Result<CodeTable, QcewError> {
        crate::codes::fetch_titles(self, kind).await
    }

    /// Reference tables used for advisory validation.
    pub fn reference_codes(&self) -> &ReferenceCodes {
        &self.codes
    }

    /// Validation mode applied to requests that do not override it.
    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_api(&self) -> &Url {
        &self.base_api
    }
    pub(crate) fn base_titles(&self) -> &Url {
        &self.base_titles
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct QcewClientBuilder {
    user_agent: Option<String>,
    base_api: Option<Url>,
    base_titles: Option<Url>,
    codes: Option<Arc<ReferenceCodes>>,
    validation: Option<ValidationMode>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl QcewClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the data API base (e.g., `http://data.bls.gov/cew/data/api/`).
    /// Request segments are appended to its path; the trailing slash is optional.
    pub fn base_api(mut self, url: Url) -> Self {
        self.base_api = Some(url);
        self
    }

    /// Override the title files base (e.g., `https://data.bls.gov/cew/doc/titles/`).
    /// The trailing slash is optional.
    pub fn base_titles(mut self, url: Url) -> Self {
        self.base_titles = Some(url);
        self
    }

    /// Replace the bundled reference tables.
    pub fn reference_codes(mut self, codes: impl Into<Arc<ReferenceCodes>>) -> Self {
        self.codes = Some(codes.into());
        self
    }

    /// Default validation mode for requests made through this client.
    pub fn validation(mut self, mode: ValidationMode) -> Self {
        self.validation = Some(mode);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<QcewClient, QcewError> {
        let base_api = match self.base_api {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_API)?,
        };
        let base_titles = match self.base_titles {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_TITLES)?,
        };
        let codes = match self.codes {
            Some(c) => c,
            None => ReferenceCodes::bundled()?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(QcewClient {
            http,
            base_api,
            base_titles,
            codes,
            validation: self.validation.unwrap_or_default(),
        })
    }
}
