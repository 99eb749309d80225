mod common;

#[cfg(test)]
mod requester {

    use bytes::Bytes;

    use http_helper::{RequestHeaders, get, post};

    use wiremock::matchers::{body_bytes, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::common::init_tracing;

    #[tokio::test]
    async fn should_get_through_the_shared_requester() {
        init_tracing();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/1"))
            .and(header("Authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\":1}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = get(
            &format!("{}/users/1", mock_server.uri()),
            vec![RequestHeaders::from([("Authorization", "Bearer secret")])],
        )
        .await;

        assert!(response.is_success());
        assert_eq!(response.status, "200 OK");
        assert_eq!(response.body, Bytes::from("{\"id\":1}"));
    }

    #[tokio::test]
    async fn should_post_json_by_default() {
        init_tracing();
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .and(header("Content-Type", "application/json;charset=UTF-8"))
            .and(body_bytes(b"{\"name\":\"ada\"}".to_vec()))
            .respond_with(ResponseTemplate::new(201).set_body_string("{\"id\":2}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = post(
            &format!("{}/users", mock_server.uri()),
            "{\"name\":\"ada\"}",
            Vec::new(),
        )
        .await;

        assert_eq!(response.error, None);
        assert_eq!(response.status_code, 201);
        assert_eq!(response.body, Bytes::from("{\"id\":2}"));
    }

    #[tokio::test]
    async fn should_post_with_the_caller_headers_only() {
        init_tracing();
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/upload"))
            .and(header("Content-Type", "text/csv"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = post(
            &format!("{}/upload", mock_server.uri()),
            b"a,b\n1,2\n".to_vec(),
            vec![RequestHeaders::from([("Content-Type", "text/csv")])],
        )
        .await;

        assert_eq!(response.status, "202 Accepted");
    }

    #[tokio::test]
    async fn should_capture_an_invalid_url() {
        init_tracing();

        let response = get("://missing-scheme", Vec::new()).await;

        assert!(response.error.is_some());
        assert_eq!(response.status_code, 0);
    }
}
