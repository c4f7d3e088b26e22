// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AttributeValue, Category, Community, FilterField, RankingLimits, ScoredCommunity, SuggestionSource};
pub use requests::{MembershipRequest, SuggestCommunitiesRequest};
pub use responses::{CategoriesResponse, ErrorResponse, HealthResponse, MembershipResponse, SuggestCommunitiesResponse};
