use crate::core::QcewError;
#[cfg(feature = "test-mode")]
use std::env;
use url::Url;

/// Read the response body as text.
/// In `test-mode`, if `QCEW_RECORD=1`, the body is saved as a fixture.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    maybe_record(_endpoint, _key, text.as_bytes());

    Ok(text)
}

/// Read the response body as raw bytes, recording it like [`get_text`].
pub(crate) async fn get_bytes(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
) -> Result<Vec<u8>, reqwest::Error> {
    let body = resp.bytes().await?.to_vec();

    #[cfg(feature = "test-mode")]
    maybe_record(_endpoint, _key, &body);

    Ok(body)
}

#[cfg(feature = "test-mode")]
fn maybe_record(endpoint: &str, key: &str, body: &[u8]) {
    if env::var("QCEW_RECORD").ok().as_deref() == Some("1")
        && let Err(e) = crate::internal::fixtures::record_fixture(endpoint, key, "csv", body)
    {
        tracing::warn!(endpoint, key, error = %e, "QCEW_RECORD: failed to write fixture");
    }
}

/// Append `segments` to the path of `base`, each percent-encoded as a single segment.
///
/// A trailing slash on `base` is optional. `.` and `..` are rejected because
/// they cannot be carried as literal segments.
pub(crate) fn append_segments(base: &Url, segments: &[&str]) -> Result<Url, QcewError> {
    if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
        return Err(QcewError::Data(format!(
            "`{dot}` cannot be used as a URL path segment"
        )));
    }

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| QcewError::Data(format!("base URL `{base}` cannot carry a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
