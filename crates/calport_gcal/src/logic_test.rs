#[cfg(test)]
mod tests {
    use crate::error::ImportError;
    use crate::logic::{
        require_auth_code, window_days, CalendarImporter, EventWindow, ImportRequest,
        ImportResult, DEFAULT_WINDOW_DAYS,
    };
    use calport_config::GoogleConfig;
    use chrono::{Duration, TimeZone, Utc};
    use reqwest::Client;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn importer(server: &MockServer) -> CalendarImporter {
        let mut config = GoogleConfig::new("client-1", "secret-1", "postmessage");
        config.token_url = format!("{}/token", server.uri());
        config.api_base_url = format!("{}/calendar/v3", server.uri());
        CalendarImporter::with_client(Client::new(), Arc::new(config))
    }

    // --- Input validation ---

    #[test]
    fn test_window_days_defaults_to_seven() {
        assert_eq!(DEFAULT_WINDOW_DAYS, 7);
        assert_eq!(window_days(None).unwrap(), 7);
        assert_eq!(window_days(Some(0)).unwrap(), 0);
        assert_eq!(window_days(Some(30)).unwrap(), 30);
    }

    #[test]
    fn test_window_days_rejects_negative_and_huge() {
        assert!(matches!(
            window_days(Some(-1)),
            Err(ImportError::InvalidInput(_))
        ));
        assert!(matches!(
            window_days(Some(i64::MAX)),
            Err(ImportError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_require_auth_code() {
        assert_eq!(require_auth_code(Some("abc")).unwrap(), "abc");
        for code in [None, Some(""), Some("  \t")] {
            match require_auth_code(code) {
                Err(ImportError::InvalidInput(msg)) => {
                    assert_eq!(msg, "serverAuthCode is required.")
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    // --- Event window ---

    #[test]
    fn test_window_formats_rfc3339_utc_millis() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();
        let window = EventWindow::starting_at(start, 7).unwrap();
        assert_eq!(window.time_min(), "2025-03-01T12:30:00.000Z");
        assert_eq!(window.time_max(), "2025-03-08T12:30:00.000Z");
    }

    #[test]
    fn test_zero_day_window_is_empty() {
        let window = EventWindow::starting_now(0).unwrap();
        assert_eq!(window.start, window.end);
    }

    #[test]
    fn test_window_overflow_is_invalid_input() {
        assert!(matches!(
            EventWindow::starting_now(u32::MAX),
            Err(ImportError::InvalidInput(_))
        ));
    }

    // --- Wire formats ---

    #[test]
    fn test_import_request_accepts_partial_body() {
        let request: ImportRequest = serde_json::from_value(json!({ "serverAuthCode": "abc" })).unwrap();
        assert_eq!(request.server_auth_code.as_deref(), Some("abc"));
        assert!(request.calendar_name.is_none());
        assert!(request.days.is_none());

        let request: ImportRequest = serde_json::from_value(json!({
            "serverAuthCode": "abc",
            "calendarName": "Work",
            "days": 14
        }))
        .unwrap();
        assert_eq!(request.calendar_name.as_deref(), Some("Work"));
        assert_eq!(request.days, Some(14));
    }

    #[test]
    fn test_import_request_debug_hides_code() {
        let request = ImportRequest::new("4/secret-code");
        assert!(!format!("{:?}", request).contains("secret-code"));
    }

    #[test]
    fn test_import_result_wire_names() {
        let result = ImportResult {
            calendar_name: "primary".to_string(),
            calendar_id: "primary".to_string(),
            window_days: 7,
            events: json!({ "items": [] }),
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "calendarName": "primary",
                "calendarId": "primary",
                "days": 7,
                "events": { "items": [] }
            })
        );
    }

    // --- Orchestration ---

    #[tokio::test]
    async fn test_missing_code_makes_no_calls() {
        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let importer = importer(&server);
        let err = importer
            .import_calendar(ImportRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::InvalidInput(_)));

        let err = importer
            .import_calendar(ImportRequest::new("   "))
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_negative_days_makes_no_calls() {
        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = importer(&server)
            .import_calendar(ImportRequest::new("abc").with_days(-3))
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_missing_calendar_name_defaults_to_primary() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "tok123" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/calendar/v3/users/me/calendarList"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/calendar/v3/calendars/primary/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let result = importer(&server)
            .import_calendar(ImportRequest::new("abc"))
            .await
            .unwrap();
        assert_eq!(result.calendar_name, "primary");
        assert_eq!(result.calendar_id, "primary");
        assert_eq!(result.window_days, 7);
    }

    #[tokio::test]
    async fn test_failed_exchange_stops_the_import() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error":"invalid_grant"}"#))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = importer(&server)
            .import_calendar(ImportRequest::new("abc").with_calendar_name("Work"))
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::UpstreamAuth { status: 400, .. }));
    }

    #[tokio::test]
    async fn test_blank_calendar_name_is_echoed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "tok123" })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/calendar/v3/calendars/primary/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .mount(&server)
            .await;

        let result = importer(&server)
            .import_calendar(ImportRequest::new("abc").with_calendar_name(""))
            .await
            .unwrap();
        assert_eq!(result.calendar_name, "");
        assert_eq!(result.calendar_id, "primary");
    }

    #[test]
    fn test_window_length_matches_days() {
        let start = Utc::now();
        let window = EventWindow::starting_at(start, 7).unwrap();
        assert_eq!(window.end - window.start, Duration::days(7));
    }
}
