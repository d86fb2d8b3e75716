use crate::codes::{CodeTable, SliceKind};
use crate::core::{QcewClient, QcewError, net};

#[tracing::instrument(skip(client), err, fields(kind = %kind))]
pub(crate) async fn fetch_titles(client: &QcewClient, kind: SliceKind) -> Result<CodeTable, QcewError> {
    let name = kind.as_str();
    let file = format!("{name}_titles.csv");
    let url = net::append_segments(client.base_titles(), &[name, &file])?;

    tracing::debug!(%url, "fetching code titles");
    let resp = client.http().get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(QcewError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = net::get_text(resp, "titles", name).await?;
    let table = CodeTable::from_csv_reader(body.as_bytes())?;
    tracing::debug!(entries = table.len(), "parsed code titles");
    Ok(table)
}
