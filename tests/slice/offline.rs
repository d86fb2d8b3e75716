use qcew_rs::{QuarterlyRecord, SliceKind, TransferOutcome};

use crate::common::{client_for, fixture, mock_slice_csv, setup_server};

#[tokio::test]
async fn offline_industry_slice_uses_recorded_fixture() {
    let server = setup_server();
    let mock = mock_slice_csv(
        &server,
        "2016/1/industry/5112.csv",
        fixture("slice_2016_1_industry_5112.csv"),
    );
    let client = client_for(&server);

    let resp = client.slice(2016, 1, "industry", 5112).fetch().await.unwrap();
    mock.assert();

    assert!(resp.url.ends_with("/cew/data/api/2016/1/industry/5112.csv"));
    assert_eq!(resp.slice, Some(SliceKind::Industry));
    assert!(resp.advisories.is_empty(), "{:?}", resp.advisories);
    assert!(resp.is_complete());
    assert!(matches!(resp.transfer, TransferOutcome::Completed { status: 200, .. }));

    let table = resp.into_table().unwrap();
    assert_eq!(table.len(), 5);
    assert_eq!(table.headers()[0], "area_fips");
    assert_eq!(table.headers().len(), 16);

    // the Michigan row is unquoted and padded with spaces
    let mi = &table.rows()[3];
    assert_eq!(mi.get("area_fips"), Some("26000"));
    assert_eq!(mi.get("disclosure_code"), Some(""));
    assert_eq!(mi.get("avg_wkly_wage"), Some("2153"));
}

#[tokio::test]
async fn offline_mixed_case_slice_hits_same_path() {
    let server = setup_server();
    let mock = mock_slice_csv(
        &server,
        "2016/1/industry/5112.csv",
        fixture("slice_2016_1_industry_5112.csv"),
    );
    let client = client_for(&server);

    let upper = client.slice("2016", "1", "INDUSTRY", "5112").fetch().await.unwrap();
    let lower = client.slice(2016, 1, "industry", 5112).fetch().await.unwrap();

    mock.assert_calls(2);
    assert_eq!(upper, lower);
}

#[tokio::test]
async fn offline_rows_decode_into_quarterly_records() {
    let server = setup_server();
    let _mock = mock_slice_csv(
        &server,
        "2016/1/industry/5112.csv",
        fixture("slice_2016_1_industry_5112.csv"),
    );
    let client = client_for(&server);

    let table = qcew_rs::fetch_slice(&client, 2016, 1, "industry", 5112)
        .await
        .unwrap()
        .into_table()
        .unwrap();
    let records: Vec<QuarterlyRecord> = table.deserialize().unwrap();

    assert_eq!(records.len(), 5);
    let us = &records[0];
    assert_eq!(us.area_fips.as_deref(), Some("US000"));
    assert_eq!(us.year, Some(2016));
    assert_eq!(us.month1_emplvl, Some(383_117));
    assert_eq!(us.avg_wkly_wage, Some(3481));
    assert_eq!(records.iter().filter(|r| r.is_suppressed()).count(), 1);
}

#[tokio::test]
async fn offline_ragged_rows_are_tolerated() {
    let server = setup_server();
    let body = "area_fips,own_code,industry_code,avg_wkly_wage\n\"26000\",\"5\",\"10\",\"1012\"\n\"26125\",\"5\"\n".to_string();
    let _mock = mock_slice_csv(&server, "2019/2/area/26000.csv", body);
    let client = client_for(&server);

    let resp = client.slice(2019, 2, "area", "26000").fetch().await.unwrap();
    assert!(resp.is_complete());
    assert_eq!(resp.table.len(), 2);
    assert_eq!(resp.table.rows()[1].get("own_code"), Some("5"));
    assert_eq!(resp.table.rows()[1].get("avg_wkly_wage"), None);
}

#[tokio::test]
async fn offline_response_serializes_to_json() {
    let server = setup_server();
    let _mock = mock_slice_csv(
        &server,
        "2020/3/size/1.csv",
        "area_fips,size_code\nUS000,1\n".to_string(),
    );
    let client = client_for(&server);

    let resp = client.slice(2020, 3, "size", 1).fetch().await.unwrap();
    let json = serde_json::to_value(&resp).unwrap();

    assert_eq!(json["slice"], "size");
    assert_eq!(json["transfer"]["outcome"], "completed");
    assert_eq!(json["table"]["headers"][1], "size_code");
    assert_eq!(json["table"]["rows"][0]["area_fips"], "US000");
}

#[tokio::test]
async fn offline_base_without_trailing_slash_keeps_api_path() {
    let server = setup_server();
    let mock = mock_slice_csv(&server, "2017/2/size/3.csv", "size_code\n3\n".to_string());
    let client = qcew_rs::QcewClient::builder()
        .base_api(url::Url::parse(&format!("{}/cew/data/api", server.base_url())).unwrap())
        .build()
        .unwrap();

    let resp = client.slice(2017, 2, "size", 3).fetch().await.unwrap();
    mock.assert();
    assert!(resp.is_complete());
    assert_eq!(resp.table.len(), 1);
}
