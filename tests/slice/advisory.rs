use qcew_rs::{Advisory, QcewError, SliceKind, TransferError, TransferOutcome, ValidationMode};

use crate::common::{client_for, mock_slice_csv, mock_slice_status, setup_server};

#[tokio::test]
async fn unknown_area_code_still_downloads() {
    let server = setup_server();
    let mock = mock_slice_status(&server, "2016/1/area/99999999.csv", 404);
    let client = client_for(&server);

    let resp = client.slice(2016, 1, "area", 99999999).fetch().await.unwrap();
    mock.assert();

    assert_eq!(
        resp.advisories,
        vec![Advisory::UnknownCode {
            slice: SliceKind::Area,
            code: "99999999".into()
        }]
    );
    assert_eq!(
        resp.transfer,
        TransferOutcome::Failed(TransferError::Status { status: 404 })
    );
    assert!(resp.table.is_empty());

    match resp.into_table().unwrap_err() {
        QcewError::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/2016/1/area/99999999.csv"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn code_from_wrong_table_still_downloads() {
    let server = setup_server();
    let mock = mock_slice_csv(&server, "2016/1/size/5112.csv", "area_fips\n".to_string());
    let client = client_for(&server);

    let resp = client.slice(2016, 1, "size", 5112).fetch().await.unwrap();
    mock.assert();

    assert!(matches!(
        resp.advisories.as_slice(),
        [Advisory::UnknownCode { slice: SliceKind::Size, .. }]
    ));
    assert!(resp.has_advisories());
    assert!(resp.table.is_empty());
}

#[tokio::test]
async fn unknown_slice_proceeds_with_lowercased_name() {
    let server = setup_server();
    let mock = mock_slice_status(&server, "2016/1/county/26125.csv", 404);
    let client = client_for(&server);

    let resp = client.slice(2016, 1, "County", 26125).fetch().await.unwrap();
    mock.assert();

    assert_eq!(resp.slice, None);
    assert_eq!(
        resp.advisories,
        vec![Advisory::UnknownSlice {
            slice: "county".into()
        }]
    );
}

#[tokio::test]
async fn strict_mode_rejects_before_network() {
    let server = setup_server();
    let client = client_for(&server);

    let err = client
        .slice("20x6", 1, "industry", 5112)
        .validation(ValidationMode::Strict)
        .fetch()
        .await
        .unwrap_err();

    match err {
        QcewError::InvalidInput(advisories) => {
            assert_eq!(
                advisories,
                vec![Advisory::NonNumericYear {
                    year: "20x6".into()
                }]
            );
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn strict_client_passes_clean_requests() {
    let server = setup_server();
    let mock = mock_slice_csv(&server, "2018/4/area/US000.csv", "area_fips\nUS000\n".to_string());
    let client = qcew_rs::QcewClient::builder()
        .base_api(url::Url::parse(&format!("{}/cew/data/api/", server.base_url())).unwrap())
        .validation(ValidationMode::Strict)
        .build()
        .unwrap();

    let resp = client.slice(2018, 4, "area", "US000").fetch().await.unwrap();
    mock.assert();
    assert_eq!(resp.table.len(), 1);
}

#[tokio::test]
async fn custom_reference_codes_drive_validation() {
    let server = setup_server();
    let _mock = mock_slice_csv(&server, "2016/1/size/42.csv", "size_code\n42\n".to_string());
    let client = client_for(&server);
    let codes = qcew_rs::ReferenceCodes::new(
        qcew_rs::CodeTable::default(),
        qcew_rs::CodeTable::default(),
        [("42", "Custom class")].into_iter().collect(),
    );

    let builder = client.slice(2016, 1, "size", 42).codes(&codes);
    assert!(builder.advisories().is_empty());
    let resp = builder.fetch().await.unwrap();
    assert!(resp.advisories.is_empty());

    let default_resp = client.slice(2016, 1, "size", 42).fetch().await.unwrap();
    assert_eq!(default_resp.advisories.len(), 1);
}

#[tokio::test]
async fn url_like_year_stays_on_the_configured_host() {
    let server = setup_server();
    let client = client_for(&server);

    let resp = client
        .slice("http://evil.example", 1, "industry", 5112)
        .fetch()
        .await
        .unwrap();

    assert_eq!(
        resp.advisories,
        vec![Advisory::NonNumericYear {
            year: "http://evil.example".into()
        }]
    );
    let url = url::Url::parse(&resp.url).unwrap();
    assert_eq!(url.host_str(), Some(server.host().as_str()));
    assert_eq!(url.port(), Some(server.port()));
    assert!(url.path().starts_with("/cew/data/api/"), "{url}");
    assert!(url.path().ends_with("/1/industry/5112.csv"), "{url}");
    // the mock server answers unknown paths with 404
    assert_eq!(
        resp.transfer,
        TransferOutcome::Failed(TransferError::Status { status: 404 })
    );
}
