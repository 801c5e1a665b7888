mod types;

use anyhow::{anyhow, Context, Result};
use reqwest::header::HeaderMap;
use reqwest::{Client as AsyncClient, StatusCode};
use thiserror::Error;

use self::types::{Base, ErrorResponse};
use crate::config::VERSION;

/// A non-success answer from the cluster. Transport failures stay plain
/// `reqwest` errors, everything the server actually answered gets a status
/// callers can classify.
#[derive(Debug, Error)]
#[error("{message} (HTTP {status})")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn is_forbidden(&self) -> bool {
        self.status == StatusCode::FORBIDDEN
    }

    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }
}

/// Returns the `ApiError` inside an `anyhow::Error`, if there is one.
pub fn api_error(error: &anyhow::Error) -> Option<&ApiError> {
    error.downcast_ref::<ApiError>()
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: AsyncClient,
    pub base_url: Option<String>,
    pub ua: String,
}

impl HttpClient {
    pub fn new(token: Option<String>, base_url: Option<String>) -> Self {
        let mut headers = HeaderMap::new();

        headers.insert("accept", "application/json".parse().unwrap());

        if let Some(token) = token {
            headers.insert("authorization", token.parse().unwrap());
        }

        let ua = format!(
            "stratus_cli/{VERSION} on {}",
            sys_info::os_type().unwrap_or_else(|_| "unknown".to_string())
        );

        Self {
            client: AsyncClient::builder()
                .user_agent(ua.clone())
                .default_headers(headers)
                .build()
                .unwrap(),
            base_url,
            ua,
        }
    }

    pub async fn request<T>(&self, method: &str, path: &str) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let base_url = self
            .base_url
            .as_ref()
            .context("No cluster endpoint configured")?;

        log::debug!("request: {method} {path}");

        let request = self
            .client
            .request(method.parse().unwrap(), format!("{base_url}{path}"))
            .build()?;

        let response = self.client.execute(request).await?;

        self.handle_response(response).await
    }

    pub async fn handle_response<T>(&self, response: reqwest::Response) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();

        if matches!(status, StatusCode::CREATED | StatusCode::NO_CONTENT) {
            return Ok(None);
        }

        if !status.is_success() {
            return Err(self.handle_error(response, status).await);
        }

        response
            .json::<Base<T>>()
            .await
            .map(|base| Some(base.data))
            .map_err(|e| anyhow!(e))
    }

    async fn handle_error(&self, response: reqwest::Response, status: StatusCode) -> anyhow::Error {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error.message,

            Err(err) => {
                log::debug!("error deserialize message: {err:#?}");

                "Unexpected response from the cluster".to_string()
            }
        };

        ApiError { status, message }.into()
    }
}
