//! Fetch one QCEW slice and print a summary.
//!
//! cargo run --example fetch_slice --features tracing-subscriber -- 2016 1 industry 5112

use qcew_rs::{QcewClient, TransferOutcome};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("qcew_rs=info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let year = args.next().unwrap_or_else(|| "2016".into());
    let quarter = args.next().unwrap_or_else(|| "1".into());
    let slice = args.next().unwrap_or_else(|| "industry".into());
    let code = args.next().unwrap_or_else(|| "5112".into());

    let client = QcewClient::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let resp = client.slice(year, quarter, slice, code).fetch().await?;

    println!("--- {} ---", resp.url);
    for advisory in &resp.advisories {
        println!("advisory: {advisory}");
    }
    match &resp.transfer {
        TransferOutcome::Completed { bytes, .. } => println!("downloaded {bytes} bytes"),
        TransferOutcome::Warning { message, .. } => println!("transfer warning: {message}"),
        TransferOutcome::Failed(e) => println!("transfer failed: {e}"),
    }

    let table = &resp.table;
    println!("{} rows x {} columns", table.len(), table.headers().len());
    if let Some(title) = resp
        .slice
        .and_then(|kind| client.reference_codes().table(kind).title(&resp.code))
    {
        println!("code {}: {title}", resp.code);
    }
    for row in table.rows().iter().take(5) {
        println!(
            "{:>8} own={} wage={}",
            row.get("area_fips").unwrap_or("-"),
            row.get("own_code").unwrap_or("-"),
            row.get("avg_wkly_wage").unwrap_or("-"),
        );
    }
    Ok(())
}
