// Service exports
pub mod cache;
pub mod community_api;

pub use cache::{CacheManager, CacheKey, CacheError};
pub use community_api::{CommunityApiClient, CommunityApiError, MembershipAction};
