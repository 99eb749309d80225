#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Failed to read body: {0}")]
    Body(String),
}

#[cfg_attr(test, mockall::automock)]
pub trait HttpClientErrorChecker {
    fn is_timeout(&self) -> bool;
    fn is_connect(&self) -> bool;
    fn is_request(&self) -> bool;
    fn is_body(&self) -> bool;
    fn error_string(&self) -> String;
}

impl<T: HttpClientErrorChecker> From<T> for Error {
    fn from(err: T) -> Self {
        if err.is_timeout() {
            Error::Timeout(err.error_string())
        } else if err.is_connect() || err.is_request() {
            Error::Network(err.error_string())
        } else if err.is_body() {
            Error::Body(err.error_string())
        } else {
            Error::InvalidRequest(err.error_string())
        }
    }
}
