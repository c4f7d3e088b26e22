use crate::models::Community;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the community backend
#[derive(Debug, Error)]
pub enum CommunityApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid service key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Membership action forwarded to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipAction {
    Join,
    Leave,
}

impl MembershipAction {
    fn path_segment(&self) -> &'static str {
        match self {
            MembershipAction::Join => "join",
            MembershipAction::Leave => "leave",
        }
    }
}

/// Client for the main backend's community endpoints
///
/// Handles:
/// - Fetching the community listing
/// - Joining and leaving communities
pub struct CommunityApiClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl CommunityApiClient {
    /// Create a new client
    pub fn new(base_url: String, api_key: String, timeout_secs: u64) -> Result<Self, CommunityApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Fetch every community from the listing endpoint
    ///
    /// Accepts a bare array or `{"communities": [...]}`. Records that don't
    /// deserialize are skipped.
    pub async fn list_communities(&self) -> Result<Vec<Community>, CommunityApiError> {
        let url = self.url("/api/communities");

        tracing::debug!("Fetching communities from: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, "community listing"));
        }

        let json: Value = response.json().await?;

        let records = match &json {
            Value::Array(items) => items,
            Value::Object(obj) => obj
                .get("communities")
                .and_then(|c| c.as_array())
                .ok_or_else(|| CommunityApiError::InvalidResponse("Missing communities array".into()))?,
            _ => {
                return Err(CommunityApiError::InvalidResponse(
                    "Expected an array or object".into(),
                ))
            }
        };

        let communities: Vec<Community> = records
            .iter()
            .filter_map(|record| match serde_json::from_value(record.clone()) {
                Ok(community) => Some(community),
                Err(e) => {
                    tracing::warn!("Skipping malformed community record: {}", e);
                    None
                }
            })
            .collect();

        tracing::debug!("Fetched {} communities ({} records)", communities.len(), records.len());

        Ok(communities)
    }

    /// Join a community on behalf of a user
    pub async fn join_community(&self, community_id: i64, user_id: &str) -> Result<(), CommunityApiError> {
        self.update_membership(community_id, user_id, MembershipAction::Join).await
    }

    /// Leave a community on behalf of a user
    pub async fn leave_community(&self, community_id: i64, user_id: &str) -> Result<(), CommunityApiError> {
        self.update_membership(community_id, user_id, MembershipAction::Leave).await
    }

    async fn update_membership(
        &self,
        community_id: i64,
        user_id: &str,
        action: MembershipAction,
    ) -> Result<(), CommunityApiError> {
        let id = community_id.to_string();
        let url = self.url(&format!(
            "/api/communities/{}/{}",
            urlencoding::encode(&id),
            action.path_segment()
        ));

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({ "userId": user_id }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!(
                "Failed to {} community {} for {}: {} - {}",
                action.path_segment(),
                community_id,
                user_id,
                status,
                body
            );
            return Err(status_error(status, &format!("community {}", community_id)));
        }

        tracing::debug!("User {} {:?} community {}", user_id, action, community_id);

        Ok(())
    }
}

fn status_error(status: StatusCode, what: &str) -> CommunityApiError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CommunityApiError::Unauthorized,
        StatusCode::NOT_FOUND => CommunityApiError::NotFound(what.to_string()),
        _ => CommunityApiError::ApiError(format!("{} returned {}", what, status)),
    }
}
