use std::{
    collections::HashMap,
    fmt::{self, Display},
    ops::{Deref, DerefMut},
};

use bytes::Bytes;
use http::Method;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestHeaders(pub HashMap<String, String>);

impl Deref for RequestHeaders {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for RequestHeaders {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for RequestHeaders {
    fn from(arr: [(K, V); N]) -> Self {
        let map = arr
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        RequestHeaders(map)
    }
}

impl From<HashMap<String, String>> for RequestHeaders {
    fn from(map: HashMap<String, String>) -> Self {
        RequestHeaders(map)
    }
}

/// One HTTP call to be made.
///
/// `headers` is applied map by map, in order. A later map overrides any
/// header an earlier one set under the same (case-insensitive) name.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: RequestMethod,
    pub url: String,
    pub body: Bytes,
    pub headers: Vec<RequestHeaders>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
}

impl Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
        };
        write!(f, "{}", s)
    }
}

impl From<RequestMethod> for Method {
    fn from(value: RequestMethod) -> Self {
        match value {
            RequestMethod::Get => Method::GET,
            RequestMethod::Post => Method::POST,
        }
    }
}
