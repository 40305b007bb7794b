//! Typed REST client for the platform API.
//!
//! Every request goes through the same pipeline: attach the bearer token,
//! send with the configured timeout, map non-2xx statuses onto [`ApiError`]
//! using the API's error envelope, and deserialize 2xx bodies into typed
//! models. A 2xx body that does not match its schema is a server error.

use std::sync::RwLock;
use std::time::Duration;

use log::debug;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::constants::ERR_CLIENT_BUILD_FAILED;
use crate::errors::{ApiError, ErrorEnvelope};

pub struct ApiClient {
    http: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(format!("{}: {}", ERR_CLIENT_BUILD_FAILED, e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    /// Install the bearer token attached to every subsequent request.
    pub fn set_token(&self, token: &str) {
        *self.token.write().expect("token lock poisoned") = Some(token.to_string());
    }

    /// Drop the bearer token (sign-out).
    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);

        match self.token.read().expect("token lock poisoned").as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GET a resource with query parameters.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        debug!("GET {} {:?}", path, query);
        let response = self.request(Method::GET, path).query(query).send().await?;
        Self::parse(response).await
    }

    /// POST a JSON body and parse the response.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!("POST {}", path);
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::parse(response).await
    }

    /// POST without a body, for action endpoints like approve/reject.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        debug!("POST {}", path);
        let response = self.request(Method::POST, path).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// PATCH a JSON body and parse the response.
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!("PATCH {}", path);
        let response = self.request(Method::PATCH, path).json(body).send().await?;
        Self::parse(response).await
    }

    /// DELETE with a JSON body, as the testcase-removal endpoint expects.
    pub async fn delete_with_body<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        debug!("DELETE {}", path);
        let response = self.request(Method::DELETE, path).json(body).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Reject non-2xx responses, mapping the error envelope when present.
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let fallback = status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string();
        let envelope = response.json::<ErrorEnvelope>().await.ok();
        Err(ApiError::from_status(status.as_u16(), envelope, &fallback))
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check_status(response).await?;
        let status: StatusCode = response.status();

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::malformed(status.as_u16(), e))
    }
}
