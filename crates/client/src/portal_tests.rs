#[cfg(test)]
mod tests {
    use crate::PortalClient;
    use clarify_core::ClarifyError;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup_mock_server() -> MockServer {
        MockServer::start().await
    }

    #[tokio::test]
    async fn test_check_session_decodes_flag() {
        let server = setup_mock_server().await;
        let client = PortalClient::new(&server.uri()).unwrap();

        Mock::given(method("GET"))
            .and(path("/api/check-session"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"authenticated": false})),
            )
            .mount(&server)
            .await;

        assert!(!client.check_session().await.unwrap());
    }

    #[tokio::test]
    async fn test_login_retains_cookie_for_process() {
        let server = setup_mock_server().await;
        let client = PortalClient::new(&server.uri()).unwrap();

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(body_json(serde_json::json!({"password": "hunter2"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "session=abc123; Path=/")
                    .set_body_string("{}"),
            )
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/process"))
            .and(header("cookie", "session=abc123"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"response": "processed"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        client.login("hunter2").await.unwrap();
        let answer = client.process("what is X?").await.unwrap();
        assert_eq!(answer, "processed");
    }

    #[tokio::test]
    async fn test_process_without_session_maps_401_to_not_ready() {
        let server = setup_mock_server().await;
        let client = PortalClient::new(&server.uri()).unwrap();

        Mock::given(method("POST"))
            .and(path("/api/process"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let err = client.process("what is X?").await.unwrap_err();
        assert!(matches!(err, ClarifyError::NotReady));
    }

    #[tokio::test]
    async fn test_bad_password_surfaces_detail() {
        let server = setup_mock_server().await;
        let client = PortalClient::new(&server.uri()).unwrap();

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "detail": "wrong password"
            })))
            .mount(&server)
            .await;

        let err = client.login("wrong").await.unwrap_err();
        match err {
            ClarifyError::Setup { detail } => assert_eq!(detail, "wrong password"),
            other => panic!("expected Setup error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_logout_posts_to_logout_endpoint() {
        let server = setup_mock_server().await;
        let client = PortalClient::new(&server.uri()).unwrap();

        Mock::given(method("POST"))
            .and(path("/api/logout"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        client.logout().await.unwrap();
    }
}
