use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Category, Community};

/// Request for onboarding suggestions
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SuggestCommunitiesRequest {
    #[validate(length(max = 50))]
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Candidate list supplied by the caller; the backend listing is used when absent
    #[serde(default)]
    pub communities: Option<Vec<Community>>,
}

/// Request to join or leave a community
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MembershipRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
}
