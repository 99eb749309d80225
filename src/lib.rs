//! GET and POST shorthands over reqwest that never fail with `Err`.
//!
//! Every call yields a [`Response`] carrying the status line, status code,
//! body, elapsed time and any captured error. All requests share one
//! process-wide timeout, see [`set_timeout`].

pub mod http_client;
pub mod requester;
pub mod timeout;

pub use http_client::{
    error::Error,
    http_client::HttpClient,
    request::{Request, RequestHeaders, RequestMethod},
    reqwest_http_client::ReqwestHttpClient,
    response::Response,
};
pub use requester::{Requester, get, post};
pub use timeout::{get_timeout, set_timeout};
