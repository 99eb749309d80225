use std::sync::{Arc, LazyLock};

use bytes::Bytes;
use tracing::debug;

use crate::http_client::{
    http_client::HttpClient,
    request::{Request, RequestHeaders, RequestMethod},
    reqwest_http_client::ReqwestHttpClient,
    response::Response,
};

pub const DEFAULT_POST_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

static SHARED_REQUESTER: LazyLock<Requester> = LazyLock::new(Requester::default);

/// GET/POST shorthands over any `HttpClient`.
#[derive(Clone)]
pub struct Requester {
    client: Arc<dyn HttpClient>,
}

impl Requester {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get(&self, url: &str, headers: Vec<RequestHeaders>) -> Response {
        self.client
            .execute(Request {
                method: RequestMethod::Get,
                url: url.to_string(),
                body: Bytes::new(),
                headers,
            })
            .await
    }

    /// Sends `data` as a POST body. Without any header map the request is
    /// sent as `Content-Type: application/json;charset=UTF-8`; once headers
    /// are given, nothing is added to them.
    pub async fn post(
        &self,
        url: &str,
        data: impl Into<Bytes>,
        mut headers: Vec<RequestHeaders>,
    ) -> Response {
        if headers.is_empty() {
            debug!("No headers given for POST {}, defaulting the content type", url);
            headers.push(RequestHeaders::from([(
                "Content-Type",
                DEFAULT_POST_CONTENT_TYPE,
            )]));
        }

        self.client
            .execute(Request {
                method: RequestMethod::Post,
                url: url.to_string(),
                body: data.into(),
                headers,
            })
            .await
    }
}

impl Default for Requester {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestHttpClient::default()))
    }
}

/// Sends a GET through the process-wide shared requester.
pub async fn get(url: &str, headers: Vec<RequestHeaders>) -> Response {
    SHARED_REQUESTER.get(url, headers).await
}

/// Sends a POST through the process-wide shared requester.
pub async fn post(url: &str, data: impl Into<Bytes>, headers: Vec<RequestHeaders>) -> Response {
    SHARED_REQUESTER.post(url, data, headers).await
}
