// Core algorithm exports
pub mod categories;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use categories::{filters_for, keywords_for, FieldFilter};
pub use filters::{attribute_matches, excluded_by_gender, loosely_matches};
pub use matcher::{Matcher, SuggestionResult};
pub use scoring::calculate_relevance_score;
