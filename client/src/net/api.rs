//! REST client for the remote storefront API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the persisted
//! bearer token attached to every request.
//! Server-side (SSR): every call resolves to `ApiError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses become `ApiError::Status` carrying the server's
//! `error`/`message` text when present. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, Credentials, LoginResponse, RegisterResponse, Sweet, SweetDraft, SweetId};

/// Remote API root used when no build-time override is given.
pub const DEFAULT_API_BASE_URL: &str = "https://sweet-shop-management-system-exg4.onrender.com/api";

/// API root for this build: `SWEETSHOP_API_URL` at compile time, else the default.
pub fn configured_base_url() -> &'static str {
    option_env!("SWEETSHOP_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// HTTP verbs used by the storefront API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Method and path (relative to the API root) of one remote operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub path: String,
}

impl Route {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into() }
    }

    pub fn login() -> Self {
        Self::new(Method::Post, "/auth/login")
    }

    pub fn register() -> Self {
        Self::new(Method::Post, "/auth/register")
    }

    pub fn list_sweets() -> Self {
        Self::new(Method::Get, "/sweets")
    }

    pub fn search_sweets(term: &str) -> Self {
        let query: String = url::form_urlencoded::byte_serialize(term.as_bytes()).collect();
        Self::new(Method::Get, format!("/sweets/search?q={query}"))
    }

    pub fn create_sweet() -> Self {
        Self::new(Method::Post, "/sweets")
    }

    pub fn update_sweet(id: &SweetId) -> Self {
        Self::new(Method::Put, format!("/sweets/{id}"))
    }

    pub fn delete_sweet(id: &SweetId) -> Self {
        Self::new(Method::Delete, format!("/sweets/{id}"))
    }

    pub fn purchase_sweet(id: &SweetId) -> Self {
        Self::new(Method::Post, format!("/sweets/{id}/purchase"))
    }

    pub fn restock_sweet(id: &SweetId, amount: u32) -> Self {
        Self::new(Method::Post, format!("/sweets/{id}/restock?amount={amount}"))
    }
}

/// `Authorization` header value for a stored token, if any.
pub fn authorization_header(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {t}"))
}

/// Join the API root and a route path without doubling slashes.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Authentication endpoints, abstracted so the session store can be driven
/// by something other than the network.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
    async fn register(&self, credentials: &Credentials) -> Result<RegisterResponse, ApiError>;
}

/// Thin HTTP wrapper over the storefront API. Cheap to copy into closures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: &'static str,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(configured_base_url())
    }
}

impl ApiClient {
    pub fn new(base_url: &'static str) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &'static str {
        self.base_url
    }

    pub fn url(&self, route: &Route) -> String {
        join_url(self.base_url, &route.path)
    }

    /// Fetch every item (`GET /sweets`).
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the body is not an item array.
    pub async fn list_sweets(&self) -> Result<Vec<Sweet>, ApiError> {
        self.fetch_json(&Route::list_sweets(), None).await
    }

    /// Server-side search (`GET /sweets/search?q=`).
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the body is not an item array.
    pub async fn search_sweets(&self, term: &str) -> Result<Vec<Sweet>, ApiError> {
        self.fetch_json(&Route::search_sweets(term), None).await
    }

    /// Create an item. The echoed object is ignored; callers re-fetch.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn create_sweet(&self, draft: &SweetDraft) -> Result<(), ApiError> {
        self.execute(&Route::create_sweet(), Some(encode(draft)?)).await
    }

    /// Replace an item's fields.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn update_sweet(&self, id: &SweetId, draft: &SweetDraft) -> Result<(), ApiError> {
        self.execute(&Route::update_sweet(id), Some(encode(draft)?)).await
    }

    /// Delete an item.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn delete_sweet(&self, id: &SweetId) -> Result<(), ApiError> {
        self.execute(&Route::delete_sweet(id), None).await
    }

    /// Buy one unit of an item.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails (e.g. out of stock).
    pub async fn purchase_sweet(&self, id: &SweetId) -> Result<(), ApiError> {
        self.execute(&Route::purchase_sweet(id), None).await
    }

    /// Add `amount` units of stock to an item.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn restock_sweet(&self, id: &SweetId, amount: u32) -> Result<(), ApiError> {
        self.execute(&Route::restock_sweet(id, amount), None).await
    }

    async fn execute(&self, route: &Route, body: Option<serde_json::Value>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.send(route, body).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (route, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        route: &Route,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.send(route, body).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (route, body);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send(
        &self,
        route: &Route,
        body: Option<serde_json::Value>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::Request;

        use crate::util::storage::{LocalStorage, SessionStorage, TOKEN_KEY};

        let url = self.url(route);
        let builder = match route.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Content-Type", "application/json");

        let token = LocalStorage.get(TOKEN_KEY);
        let builder = match authorization_header(token.as_deref()) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        };

        let sent = match body {
            Some(payload) => {
                builder
                    .json(&payload)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            log::warn!("{:?} {} failed with status {status}", route.method, route.path);
            return Err(ApiError::Status {
                status,
                message: super::types::parse_error_message(&text),
            });
        }
        Ok(resp)
    }
}

impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.fetch_json(&Route::login(), Some(encode(credentials)?)).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<RegisterResponse, ApiError> {
        // The register body is informational; an empty or non-JSON 2xx still counts.
        match self.fetch_json(&Route::register(), Some(encode(credentials)?)).await {
            Err(ApiError::Decode(_)) => Ok(RegisterResponse::default()),
            other => other,
        }
    }
}

fn encode<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
