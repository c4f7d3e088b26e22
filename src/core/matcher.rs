use crate::models::{Category, Community, RankingLimits, ScoredCommunity, SuggestionSource};
use crate::core::{filters::excluded_by_gender, scoring::calculate_relevance_score};
use std::collections::{BTreeSet, HashSet};

/// Result of ranking a community list
#[derive(Debug)]
pub struct SuggestionResult {
    pub suggestions: Vec<ScoredCommunity>,
    /// Suggestions that scored above zero
    pub matched_count: usize,
    /// Distinct communities considered
    pub total_candidates: usize,
}

impl SuggestionResult {
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// Ranks starter communities for an onboarding category selection
///
/// # Pipeline Stages
/// 1. Identity dedup
/// 2. Gender-conflict exclusion
/// 3. Relevance scoring and ranking
/// 4. Popularity backfill
#[derive(Debug, Clone)]
pub struct Matcher {
    limits: RankingLimits,
}

impl Matcher {
    pub fn new(limits: RankingLimits) -> Self {
        Self { limits }
    }

    pub fn with_default_limits() -> Self {
        Self {
            limits: RankingLimits::default(),
        }
    }

    pub fn limits(&self) -> RankingLimits {
        self.limits
    }

    /// Rank communities for a category selection
    ///
    /// # Arguments
    /// * `communities` - Every community available to join
    /// * `categories` - The user's selected categories (duplicates ignored)
    ///
    /// # Returns
    /// SuggestionResult with at most `max_results` suggestions, each community at most once
    pub fn rank_communities(
        &self,
        communities: &[Community],
        categories: &[Category],
    ) -> SuggestionResult {
        let selection: BTreeSet<Category> = categories.iter().copied().collect();

        // Stage 1: first occurrence of each id wins
        let mut seen_ids = HashSet::new();
        let unique: Vec<&Community> = communities
            .iter()
            .filter(|c| seen_ids.insert(c.id))
            .collect();
        let total_candidates = unique.len();

        if selection.is_empty() {
            let suggestions = by_member_count(unique)
                .into_iter()
                .take(self.limits.max_results)
                .map(|c| ScoredCommunity::from_community(c, 0, SuggestionSource::Popular))
                .collect();

            return SuggestionResult {
                suggestions,
                matched_count: 0,
                total_candidates,
            };
        }

        // Stage 2: gender-conflict exclusion
        let eligible: Vec<&Community> = unique
            .into_iter()
            .filter(|c| !excluded_by_gender(c, &selection))
            .collect();

        // Stage 3: score and rank
        let mut scored: Vec<(&Community, u32)> = eligible
            .iter()
            .map(|&c| (c, calculate_relevance_score(c, &selection)))
            .collect();

        scored.sort_by(|(a, a_score), (b, b_score)| {
            b_score
                .cmp(a_score)
                .then_with(|| b.member_count.cmp(&a.member_count))
        });

        let mut suggestions: Vec<ScoredCommunity> = scored
            .iter()
            .filter(|(_, score)| *score > 0)
            .take(self.limits.max_matched)
            .map(|&(c, score)| ScoredCommunity::from_community(c, score, SuggestionSource::Matched))
            .collect();

        let matched_count = suggestions.len();

        // Stage 4: popularity backfill
        if matched_count < self.limits.min_matched {
            let matched_ids: HashSet<i64> = suggestions.iter().map(|s| s.id).collect();
            let backfill = by_member_count(eligible)
                .into_iter()
                .filter(|c| !matched_ids.contains(&c.id))
                .take(self.limits.max_matched.saturating_sub(matched_count))
                .map(|c| ScoredCommunity::from_community(c, 0, SuggestionSource::Popular));

            suggestions.extend(backfill);

            tracing::debug!(
                "Backfilled {} popular communities after {} matches",
                suggestions.len() - matched_count,
                matched_count
            );
        }

        suggestions.truncate(self.limits.max_results);

        SuggestionResult {
            suggestions,
            matched_count,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_limits()
    }
}

/// Stable sort by descending member count
fn by_member_count(mut communities: Vec<&Community>) -> Vec<&Community> {
    communities.sort_by(|a, b| b.member_count.cmp(&a.member_count));
    communities
}
