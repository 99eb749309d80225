use std::time::{Duration, Instant};

use async_trait::async_trait;
use http::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, info, warn};

use crate::{
    http_client::{
        error::{Error, HttpClientErrorChecker},
        http_client::HttpClient,
        request::{Request, RequestHeaders, RequestMethod},
        response::{Response, status_line},
    },
    timeout::get_timeout,
};

#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build(&self, request: Request) -> Result<reqwest::RequestBuilder, Error> {
        let url = reqwest::Url::parse(&request.url)
            .map_err(|e| Error::InvalidRequest(format!("{}: {}", request.url, e)))?;
        let headers = merge_headers(&request.headers)?;

        let mut builder = self
            .client
            .request(request.method.into(), url)
            .headers(headers);

        if request.method == RequestMethod::Post || !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let timeout = get_timeout();
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }

        Ok(builder)
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: Request) -> Response {
        debug!("Sending {} {}", request.method, request.url);

        let url = request.url.clone();
        let builder = match self.build(request) {
            Ok(builder) => builder,
            Err(error) => {
                warn!("Could not build request for {}: {}", url, error);
                return Response::failed(error, Duration::ZERO);
            }
        };

        let started = Instant::now();
        let sent = builder.send().await;
        let total_time = started.elapsed();

        let reqwest_response = match sent {
            Ok(reqwest_response) => reqwest_response,
            Err(e) => {
                let error = Error::from(e);
                warn!("Request to {} failed after {:?}: {}", url, total_time, error);
                return Response::failed(error, total_time);
            }
        };

        let status = reqwest_response.status();
        let mut response = Response {
            status: status_line(status),
            status_code: status.as_u16(),
            total_time,
            ..Default::default()
        };

        match reqwest_response.bytes().await {
            Ok(body) => response.body = body,
            Err(e) => {
                let error = Error::from(e);
                warn!("Reading the body from {} failed: {}", url, error);
                response.error = Some(error);
            }
        }

        info!("{} answered {} in {:?}", url, response.status, total_time);
        response
    }
}

impl HttpClientErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_connect(&self) -> bool {
        self.is_connect()
    }

    fn is_request(&self) -> bool {
        self.is_request()
    }

    fn is_body(&self) -> bool {
        self.is_body() || self.is_decode()
    }

    fn error_string(&self) -> String {
        self.to_string()
    }
}

/// Folds header maps into one `HeaderMap`, later maps replacing earlier
/// values for the same name.
pub fn merge_headers(headers: &[RequestHeaders]) -> Result<HeaderMap, Error> {
    let mut header_map = HeaderMap::new();
    for map in headers {
        for (k, v) in map.iter() {
            let name = HeaderName::from_bytes(k.as_bytes())
                .map_err(|e| Error::InvalidRequest(format!("header name {:?}: {}", k, e)))?;
            let value = HeaderValue::from_str(v)
                .map_err(|e| Error::InvalidRequest(format!("header {} value: {}", k, e)))?;
            header_map.insert(name, value);
        }
    }
    Ok(header_map)
}
