//! Connection Match - community suggestion service for The Connection
//!
//! This library ranks starter communities for a new user's onboarding
//! category selection and serves the ranking over HTTP.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, SuggestionResult, calculate_relevance_score, excluded_by_gender};
pub use crate::models::{Category, Community, RankingLimits, ScoredCommunity, SuggestCommunitiesRequest, SuggestCommunitiesResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let community = Community::new(1, "Bible Basics", 10);
        let selection = [Category::BibleStudy].into_iter().collect();
        assert!(calculate_relevance_score(&community, &selection) > 0);
    }
}
