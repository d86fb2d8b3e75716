use qcew_rs::QcewClient;

#[tokio::test]
#[ignore]
async fn live_industry_slice_smoke_and_or_record() {
    if !crate::common::live_or_record_enabled() {
        return;
    }

    let client = QcewClient::builder().build().unwrap();

    // This will record `tests/fixtures/slice_2016_1_industry_5112.csv` when QCEW_RECORD=1
    // and the `test-mode` feature is on.
    let resp = client.slice(2016, 1, "industry", 5112).fetch().await.unwrap();

    if !crate::common::is_recording() {
        assert!(resp.advisories.is_empty());
        let table = resp.into_table().unwrap();
        assert!(!table.is_empty(), "expected rows for NAICS 5112 in 2016 Q1");
        assert!(table.headers().iter().any(|h| h == "area_fips"));
    }
}
