//! JSON-over-HTTP client for the resolution service.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use libquality_core::error::{Error, ProtocolError, TransportError};
use libquality_core::ApiUrl;

use crate::endpoints::ApiErrorResponse;

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl ApiClient {
    /// Create a new client for the given API base URL.
    pub fn new(api: ApiUrl) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("libquality/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(map_reqwest)?;

        Ok(Self { client, api })
    }

    /// Returns the API base URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// POST a JSON body and decode a JSON response.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest)?;

        self.handle_response(response).await
    }

    /// Decode a success body, or turn the status into a protocol error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "API response");

        if !status.is_success() {
            return Err(Error::Protocol(self.parse_error_response(response).await));
        }

        let bytes = response.bytes().await.map_err(map_reqwest)?;
        serde_json::from_slice(&bytes).map_err(|e| {
            Error::Protocol(ProtocolError::new(
                status.as_u16(),
                Some(format!("unexpected response body: {}", e)),
            ))
        })
    }

    /// Parse an error response, keeping whatever message the service sent.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        match response.json::<ApiErrorResponse>().await {
            Ok(body) => ProtocolError::new(status, body.message.or(body.error)),
            Err(_) => ProtocolError::new(status, None),
        }
    }
}

fn map_reqwest(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}
