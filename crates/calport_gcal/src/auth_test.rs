#[cfg(test)]
mod tests {
    use crate::auth::TokenExchanger;
    use crate::error::ImportError;
    use calport_config::GoogleConfig;
    use chrono::{Duration, Utc};
    use reqwest::Client;
    use std::sync::Arc;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn exchanger(server: &MockServer) -> TokenExchanger {
        let mut config = GoogleConfig::new("client-1", "secret-1", "postmessage");
        config.token_url = format!("{}/token", server.uri());
        TokenExchanger::new(Client::new(), Arc::new(config))
    }

    #[tokio::test]
    async fn test_exchange_posts_authorization_code_grant() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("code=abc"))
            .and(body_string_contains("client_id=client-1"))
            .and(body_string_contains("client_secret=secret-1"))
            .and(body_string_contains("redirect_uri=postmessage"))
            .and(body_string_contains("grant_type=authorization_code"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "tok123",
                "refresh_token": "ref456",
                "expires_in": 3599,
                "token_type": "Bearer"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let before = Utc::now();
        let credential = exchanger(&server).exchange("abc").await.unwrap();

        assert_eq!(credential.access_token, "tok123");
        assert_eq!(credential.refresh_token.as_deref(), Some("ref456"));
        let expires_at = credential.expires_at.unwrap();
        assert!(expires_at >= before + Duration::seconds(3599));
        assert!(expires_at <= Utc::now() + Duration::seconds(3599));
    }

    #[tokio::test]
    async fn test_exchange_without_optional_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "access_token": "tok123" })),
            )
            .mount(&server)
            .await;

        let credential = exchanger(&server).exchange("abc").await.unwrap();
        assert_eq!(credential.access_token, "tok123");
        assert!(credential.refresh_token.is_none());
        assert!(credential.expires_at.is_none());
    }

    #[tokio::test]
    async fn test_blank_code_makes_no_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let exchanger = exchanger(&server);
        for code in ["", "   "] {
            let err = exchanger.exchange(code).await.unwrap_err();
            assert!(matches!(err, ImportError::InvalidInput(_)));
        }
    }

    #[tokio::test]
    async fn test_invalid_grant_keeps_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error":"invalid_grant"}"#))
            .mount(&server)
            .await;

        match exchanger(&server).exchange("spent").await {
            Err(ImportError::UpstreamAuth { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, r#"{"error":"invalid_grant"}"#);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_without_access_token_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"token_type":"Bearer"}"#),
            )
            .mount(&server)
            .await;

        match exchanger(&server).exchange("abc").await {
            Err(ImportError::UpstreamAuth { status, body }) => {
                assert_eq!(status, 200);
                assert_eq!(body, r#"{"token_type":"Bearer"}"#);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_exchange_raw_returns_provider_json() {
        let server = MockServer::start().await;
        let token = serde_json::json!({
            "access_token": "tok123",
            "id_token": "eyJ...",
            "scope": "https://www.googleapis.com/auth/calendar.readonly"
        });
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let raw = exchanger(&server).exchange_raw("abc").await.unwrap();
        assert_eq!(raw, token);
    }

    #[tokio::test]
    async fn test_unreachable_token_endpoint_is_unknown() {
        let mut config = GoogleConfig::new("client-1", "secret-1", "postmessage");
        // Port 9 (discard) is not expected to accept connections in CI.
        config.token_url = "http://127.0.0.1:9/token".to_string();
        let exchanger = TokenExchanger::new(Client::new(), Arc::new(config));

        let err = exchanger.exchange("abc").await.unwrap_err();
        assert!(matches!(err, ImportError::Unknown(_)));
    }
}
