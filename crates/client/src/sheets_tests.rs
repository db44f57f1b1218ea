#[cfg(test)]
mod tests {
    use crate::SheetsClient;
    use clarify_core::ClarifyError;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SHEET_ID: &str = "1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms";
    const API_KEY: &str = "sk-0123456789abcdef0123456789";

    async fn setup_mock_server() -> MockServer {
        MockServer::start().await
    }

    #[test]
    fn test_sheet_id_constant_shape() {
        // Guard: the fixture id must itself be the canonical 44 chars.
        assert_eq!(SHEET_ID.len(), 44);
    }

    #[tokio::test]
    async fn test_short_sheet_id_rejected_without_network() {
        let server = setup_mock_server().await;
        let client = SheetsClient::new(&server.uri())
            .unwrap()
            .with_probe_hosts(&server.uri(), &server.uri());

        Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

        let err = client.sheets_query("too-short-id", "sum of col A?", API_KEY).await.unwrap_err();
        assert!(matches!(err, ClarifyError::Validation(_)));

        let err = client.check_public_access("too-short-id").await.unwrap_err();
        assert!(matches!(err, ClarifyError::Validation(_)));
    }

    #[tokio::test]
    async fn test_bad_api_key_rejected_without_network() {
        let server = setup_mock_server().await;
        let client = SheetsClient::new(&server.uri()).unwrap();

        Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

        let err = client.sheets_query(SHEET_ID, "sum of col A?", "not-a-key").await.unwrap_err();
        assert!(matches!(err, ClarifyError::Validation(_)));
    }

    #[tokio::test]
    async fn test_flat_answer_shape() {
        let server = setup_mock_server().await;
        let client = SheetsClient::new(&server.uri()).unwrap();

        Mock::given(method("POST"))
            .and(path("/sheets_query/"))
            .and(body_json(serde_json::json!({
                "sheet_id": SHEET_ID,
                "query": "sum of col A?",
                "api_key": API_KEY
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "1234"})),
            )
            .mount(&server)
            .await;

        let answer = client.sheets_query(SHEET_ID, "sum of col A?", API_KEY).await.unwrap();
        assert_eq!(answer, "1234");
    }

    #[tokio::test]
    async fn test_nested_answer_shape_normalizes() {
        let server = setup_mock_server().await;
        let client = SheetsClient::new(&server.uri()).unwrap();

        Mock::given(method("POST"))
            .and(path("/sheets_query/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "response": {"response": "1234"}
            })))
            .mount(&server)
            .await;

        let answer = client.sheets_query(SHEET_ID, "sum of col A?", API_KEY).await.unwrap();
        assert_eq!(answer, "1234");
    }

    #[tokio::test]
    async fn test_public_probe_ok_on_200() {
        let server = setup_mock_server().await;
        let client = SheetsClient::new(&server.uri())
            .unwrap()
            .with_probe_hosts(&server.uri(), &server.uri());

        Mock::given(method("GET"))
            .and(path(format!("/feeds/worksheets/{SHEET_ID}/public/basic")))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"feed\": {}}"))
            .expect(1)
            .mount(&server)
            .await;

        client.check_public_access(SHEET_ID).await.unwrap();
    }

    #[tokio::test]
    async fn test_public_probe_maps_non_200_to_access_error() {
        let server = setup_mock_server().await;
        let client = SheetsClient::new(&server.uri())
            .unwrap()
            .with_probe_hosts(&server.uri(), &server.uri());

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client.check_public_access(SHEET_ID).await.unwrap_err();
        match err {
            ClarifyError::Access(msg) => assert!(msg.contains("public")),
            other => panic!("expected Access error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_api_probe_sends_bearer_credential() {
        let server = setup_mock_server().await;
        let client = SheetsClient::new(&server.uri())
            .unwrap()
            .with_probe_hosts(&server.uri(), &server.uri());

        Mock::given(method("GET"))
            .and(path(format!("/v4/spreadsheets/{SHEET_ID}")))
            .and(header("Authorization", format!("Bearer {API_KEY}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        client.check_api_access(SHEET_ID, API_KEY).await.unwrap();
    }

    #[tokio::test]
    async fn test_query_failure_surfaces_detail() {
        let server = setup_mock_server().await;
        let client = SheetsClient::new(&server.uri()).unwrap();

        Mock::given(method("POST"))
            .and(path("/sheets_query/"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "detail": "sheet engine exploded"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = client.sheets_query(SHEET_ID, "sum of col A?", API_KEY).await.unwrap_err();
        match err {
            ClarifyError::Query { detail } => assert_eq!(detail, "sheet engine exploded"),
            other => panic!("expected Query error, got {other:?}"),
        }
    }
}
