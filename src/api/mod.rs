// API client for the dashboard backend
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::config;
use crate::types::{DashboardStats, StatsEnvelope, UserQuery, UsersResponse};

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(config::api_base_url())
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let envelope: StatsEnvelope = self.get("/dashboard/stats", &[]).await?;
        Ok(envelope.data)
    }

    pub async fn list_users(&self, query: &UserQuery) -> Result<UsersResponse, ApiError> {
        self.get("/dashboard/users", &query.to_query_pairs()).await
    }

    async fn get<T>(&self, path: &str, params: &[(&str, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = Request::get(&url);
        if !params.is_empty() {
            request = request.query(params.iter().map(|(k, v)| (*k, v.as_str())));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

/// The single failure taxonomy of the console: a request failed. The
/// variants only feed log lines, never user-visible UI.
#[derive(Debug, Clone)]
pub enum ApiError {
    Network(String),
    Http(u16),
    Deserialization(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Http(status) => write!(f, "HTTP error: {}", status),
            ApiError::Deserialization(e) => write!(f, "Deserialization error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

/// Generation counter for in-flight list requests.
///
/// Each issued request takes the next sequence number; a completion is
/// applied only if its number is still the latest. An older, slower
/// response can therefore never overwrite the result of a newer request.
#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.latest == seq
    }
}
