use anyhow::Context;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::api::models::{
    ApiErrorBody, ApiMessage, FavoriteRequest, FavoriteStatus, FeedbackReceipt, FeedbackRequest,
    VisitCount,
};
use crate::config::AppConfig;
use crate::error::{ErrorKind, GrindError};
use crate::problems::problem::ProblemId;

/// HTTP client for the catalog backend
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    user_id: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, GrindError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .tcp_keepalive(Duration::from_secs(30))
            .pool_max_idle_per_host(4)
            .build()?;
        Ok(ApiClient {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            user_id: config.user_id.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetch the raw catalog. Any transport failure or non-success status is
    /// a `Network` error; a body that is not a JSON array is `InvalidFormat`.
    pub async fn fetch_catalog(&self) -> Result<Value, GrindError> {
        let url = self.url("problems");
        tracing::info!(url = %url, "Fetching catalog");

        let response = self.http.get(&url).send().await.map_err(|e| {
            GrindError::new(ErrorKind::Network, format!("Failed to fetch problems: {}", e))
                .with_context(format!("url: {}", url))
                .with_origin("reqwest")
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GrindError::new(ErrorKind::Network, "Failed to fetch problems")
                .with_context(format!("url: {}, status: {}", url, status)));
        }

        let payload: Value = response.json().await.map_err(|e| {
            GrindError::new(ErrorKind::InvalidFormat, "Invalid data format received from API")
                .with_context(e.to_string())
                .with_origin("reqwest")
        })?;

        if !payload.is_array() {
            return Err(GrindError::new(
                ErrorKind::InvalidFormat,
                "Invalid data format received from API",
            )
            .with_context(format!("url: {}", url)));
        }
        Ok(payload)
    }

    pub async fn submit_feedback(&self, message: &str) -> Result<FeedbackReceipt, GrindError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(GrindError::new(ErrorKind::Api, "Feedback message is required"));
        }
        let request = self
            .http
            .post(self.url("feedback/submit"))
            .json(&FeedbackRequest { message });
        Ok(self.send_json(request, "feedback").await?)
    }

    /// Bump and read the server's visit counter
    pub async fn record_visit(&self) -> Result<VisitCount, GrindError> {
        let request = self.http.get(self.url("visits"));
        Ok(self.send_json(request, "visits").await?)
    }

    pub async fn favorites(&self) -> Result<Vec<ProblemId>, GrindError> {
        let request = self.http.get(self.url(&format!("favorites/{}", self.user_id)));
        Ok(self.send_json(request, "favorites").await?)
    }

    pub async fn add_favorite(&self, problem_id: ProblemId) -> Result<ApiMessage, GrindError> {
        let request = self.http.post(self.url("favorites")).json(&FavoriteRequest {
            problem_id,
            user_id: &self.user_id,
        });
        Ok(self.send_json(request, "add favorite").await?)
    }

    pub async fn remove_favorite(&self, problem_id: ProblemId) -> Result<ApiMessage, GrindError> {
        let request = self
            .http
            .delete(self.url(&format!("favorites/{}/{}", problem_id, self.user_id)));
        Ok(self.send_json(request, "remove favorite").await?)
    }

    pub async fn is_favorite(&self, problem_id: ProblemId) -> Result<bool, GrindError> {
        let request = self
            .http
            .get(self.url(&format!("favorites/check/{}/{}", problem_id, self.user_id)));
        let status: FavoriteStatus = self.send_json(request, "favorite status").await?;
        Ok(status.is_favorited)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> anyhow::Result<T> {
        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to reach backend for {}", what))?;
        let response = ensure_success(response, what).await?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to decode {} response", what))
    }
}

/// Turn a failure status into an `Api` error carrying the server's message
async fn ensure_success(response: Response, what: &str) -> anyhow::Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };
    tracing::warn!(status = %status, endpoint = what, message = %message, "Backend rejected request");
    Err(GrindError::new(ErrorKind::Api, message)
        .with_context(format!("{} returned {}", what, status))
        .into())
}
