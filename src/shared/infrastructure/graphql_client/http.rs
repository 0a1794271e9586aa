use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::shared::infrastructure::graphql_client::{
    GraphqlRequest, GraphqlResponse, GraphqlTransport, TransportError,
};

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct HttpTransportOptions {
    pub timeout: Duration,
    /// Development APIs run behind self-signed certificates.
    pub accept_invalid_certs: bool,
}

impl Default for HttpTransportOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            accept_invalid_certs: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(
        endpoint: impl Into<String>,
        options: HttpTransportOptions,
    ) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .danger_accept_invalid_certs(options.accept_invalid_certs)
            .build()
            .map_err(|error| TransportError::Request(error.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for HttpTransport {
    async fn send(
        &self,
        request: GraphqlRequest,
        bearer: Option<&str>,
    ) -> Result<GraphqlResponse, TransportError> {
        let mut builder = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&request);
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|error| TransportError::Request(error.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| TransportError::Read(error.to_string()))?;

        let parsed = serde_json::from_str::<GraphqlResponse>(&body);
        if !status.is_success() {
            // GraphQL servers may answer errors with a 4xx and a regular error document.
            return match parsed {
                Ok(parsed) if !parsed.errors.is_empty() => Ok(parsed),
                _ => Err(TransportError::Http {
                    status: status.as_u16(),
                    body,
                }),
            };
        }
        parsed.map_err(|error| TransportError::Decode(error.to_string()))
    }
}
