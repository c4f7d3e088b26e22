use serde::{Deserialize, Serialize};
use crate::models::domain::ScoredCommunity;

/// Response for the suggestions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestCommunitiesResponse {
    pub suggestions: Vec<ScoredCommunity>,
    #[serde(rename = "matchedCount")]
    pub matched_count: usize,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    /// No suggestions at all; the client should offer to create a community
    #[serde(rename = "emptyState")]
    pub empty_state: bool,
    #[serde(rename = "requestId")]
    pub request_id: String,
}

/// Category vocabulary response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Join/leave response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipResponse {
    pub success: bool,
    #[serde(rename = "communityId")]
    pub community_id: i64,
}
