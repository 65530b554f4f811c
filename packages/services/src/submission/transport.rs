use futures::future::BoxFuture;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub message: String,
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        TransportError {
            message: e.to_string(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

/// Delivers a serialized form to the intake endpoint
#[cfg_attr(test, mockall::automock)]
pub trait FormTransport: Send + Sync {
    /// POSTs `body` as JSON to `url` and resolves to the response status code
    fn post_json(&self, url: String, body: Value) -> BoxFuture<'static, Result<u16, TransportError>>;
}

#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(HttpTransport { client })
    }
}

impl FormTransport for HttpTransport {
    fn post_json(&self, url: String, body: Value) -> BoxFuture<'static, Result<u16, TransportError>> {
        let client = self.client.clone();

        Box::pin(async move {
            let response = client
                .post(url)
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .json(&body)
                .send()
                .await?;

            Ok(response.status().as_u16())
        })
    }
}
