use crate::core::{QcewClient, QcewError, net};
use crate::table::Table;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use std::fmt;
use std::io::{BufReader, Write};
use tempfile::NamedTempFile;
use url::Url;

/// What happened on the wire for one slice download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TransferOutcome {
    /// 2xx with a CSV-looking body.
    Completed { status: u16, bytes: u64 },
    /// 2xx, but the body is empty or is an HTML page. The body is still parsed.
    Warning {
        status: u16,
        bytes: u64,
        message: String,
    },
    /// No usable body was received.
    Failed(TransferError),
}

/// Why a transfer produced no body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum TransferError {
    /// DNS, connect, timeout or body read failure.
    Transport { message: String },
    /// Non-2xx response; 404 is how the service reports an unknown slice.
    Status { status: u16 },
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::Transport { message } => f.write_str(message),
            TransferError::Status { status } => write!(f, "server answered with status {status}"),
        }
    }
}

/// Phase one: issue the GET and spool a 2xx body to a temp file.
///
/// Network problems are captured in the outcome; only local I/O errors are returned as `Err`.
pub(crate) async fn download(
    client: &QcewClient,
    url: &Url,
    fixture_key: &str,
) -> Result<(TransferOutcome, Option<NamedTempFile>), QcewError> {
    let resp = match client.http().get(url.clone()).send().await {
        Ok(resp) => resp,
        Err(e) => {
            let failed = TransferError::Transport {
                message: e.to_string(),
            };
            return Ok((TransferOutcome::Failed(failed), None));
        }
    };

    let status = resp.status();
    if !status.is_success() {
        let failed = TransferError::Status {
            status: status.as_u16(),
        };
        return Ok((TransferOutcome::Failed(failed), None));
    }

    let is_html = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("text/html"));

    let body = match net::get_bytes(resp, "slice", fixture_key).await {
        Ok(body) => body,
        Err(e) => {
            let failed = TransferError::Transport {
                message: e.to_string(),
            };
            return Ok((TransferOutcome::Failed(failed), None));
        }
    };

    let mut spool = tempfile::Builder::new()
        .prefix("qcew-")
        .suffix(".csv")
        .tempfile()?;
    spool.write_all(&body)?;
    spool.flush()?;
    tracing::debug!(path = %spool.path().display(), bytes = body.len(), "spooled response body");

    let status = status.as_u16();
    let bytes = body.len() as u64;
    let outcome = if body.is_empty() {
        TransferOutcome::Warning {
            status,
            bytes,
            message: "empty response body".into(),
        }
    } else if is_html {
        TransferOutcome::Warning {
            status,
            bytes,
            message: "server returned HTML instead of CSV".into(),
        }
    } else {
        TransferOutcome::Completed { status, bytes }
    };

    Ok((outcome, Some(spool)))
}

/// Phase two: parse whatever was spooled. Absent or empty spools give an empty table.
pub(crate) fn parse_spool(spool: Option<&NamedTempFile>) -> Result<Table, QcewError> {
    let Some(spool) = spool else {
        return Ok(Table::default());
    };
    if spool.as_file().metadata()?.len() == 0 {
        return Ok(Table::default());
    }
    Table::from_csv_reader(BufReader::new(spool.reopen()?))
}
