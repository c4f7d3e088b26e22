use crate::models::{Category, Community};
use crate::core::{
    categories::{filters_for, keywords_for},
    filters::attribute_matches,
};
use std::collections::BTreeSet;

/// Points for a structured field match
pub const STRUCTURED_MATCH_POINTS: u32 = 20;
/// Points for a keyword found in name or description
pub const KEYWORD_MATCH_POINTS: u32 = 10;
/// Extra points when the keyword is in the name
pub const NAME_MATCH_BONUS: u32 = 5;

/// Calculate the relevance score of a community for a category selection
///
/// Scoring formula, summed over every selected category:
/// score = (
///     20 * structured filters satisfied +   # field value matches
///     10 * keywords found +                  # in "name description"
///      5 * keywords found in the name        # name bonus
/// )
///
/// Both paths count independently, so a category can score on each.
pub fn calculate_relevance_score(community: &Community, categories: &BTreeSet<Category>) -> u32 {
    let name = community.name.to_lowercase();
    let haystack = format!("{} {}", name, community.description().to_lowercase());

    categories
        .iter()
        .map(|&category| {
            structured_score(community, category) + keyword_score(&name, &haystack, category)
        })
        .sum()
}

/// Points from the category's structured field filters
#[inline]
fn structured_score(community: &Community, category: Category) -> u32 {
    filters_for(category)
        .iter()
        .filter(|f| {
            community
                .attribute(f.field)
                .is_some_and(|attribute| attribute_matches(attribute, f.values))
        })
        .count() as u32
        * STRUCTURED_MATCH_POINTS
}

/// Points from the category's keyword fallbacks
#[inline]
fn keyword_score(name: &str, haystack: &str, category: Category) -> u32 {
    keywords_for(category)
        .iter()
        .filter(|keyword| haystack.contains(*keyword))
        .map(|keyword| {
            if name.contains(keyword) {
                KEYWORD_MATCH_POINTS + NAME_MATCH_BONUS
            } else {
                KEYWORD_MATCH_POINTS
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttributeValue;

    fn selection(categories: &[Category]) -> BTreeSet<Category> {
        categories.iter().copied().collect()
    }

    #[test]
    fn test_empty_selection_scores_zero() {
        let mut community = Community::new(1, "Bible Study Fellowship", 100);
        community.ministry_types = Some(AttributeValue::from(vec!["Bible Study"]));

        assert_eq!(calculate_relevance_score(&community, &BTreeSet::new()), 0);
    }

    #[test]
    fn test_structured_match_scores_twenty() {
        let mut community = Community::new(1, "Tuesday Night Group", 10);
        community.ministry_types = Some(AttributeValue::from(vec!["Bible Study"]));

        let score = calculate_relevance_score(&community, &selection(&[Category::BibleStudy]));
        assert_eq!(score, STRUCTURED_MATCH_POINTS);
    }

    #[test]
    fn test_keyword_in_description_only() {
        let mut community = Community::new(1, "Tuesday Night Group", 10);
        community.description = Some("We read the Bible together".to_string());

        let score = calculate_relevance_score(&community, &selection(&[Category::BibleStudy]));
        assert_eq!(score, KEYWORD_MATCH_POINTS);
    }

    #[test]
    fn test_keyword_in_name_gets_bonus() {
        let community = Community::new(1, "Downtown Bible Circle", 10);

        let score = calculate_relevance_score(&community, &selection(&[Category::BibleStudy]));
        assert_eq!(score, KEYWORD_MATCH_POINTS + NAME_MATCH_BONUS);
    }

    #[test]
    fn test_structured_and_keyword_paths_add_up() {
        let mut community = Community::new(1, "Trail Runners", 10);
        community.activities = Some(AttributeValue::from("Sports"));
        community.description = Some("Fitness and fellowship every Saturday".to_string());

        let score = calculate_relevance_score(&community, &selection(&[Category::FitnessSports]));
        assert_eq!(score, STRUCTURED_MATCH_POINTS + KEYWORD_MATCH_POINTS);
    }

    #[test]
    fn test_multiple_filters_for_one_category() {
        let mut community = Community::new(1, "Saturday Group", 10);
        community.life_stages = Some(AttributeValue::from(vec!["Parents of Teens"]));
        community.ministry_types = Some(AttributeValue::from(vec!["Family Ministry"]));

        let score = calculate_relevance_score(&community, &selection(&[Category::Parents]));
        assert_eq!(score, 2 * STRUCTURED_MATCH_POINTS);
    }

    #[test]
    fn test_adding_categories_never_lowers_score() {
        let mut community = Community::new(1, "Online Prayer Warriors", 10);
        community.meeting_type = Some(AttributeValue::from("Online"));

        let one = calculate_relevance_score(&community, &selection(&[Category::Prayer]));
        let two = calculate_relevance_score(&community, &selection(&[Category::Prayer, Category::Online]));
        let three = calculate_relevance_score(
            &community,
            &selection(&[Category::Prayer, Category::Online, Category::Seniors]),
        );

        assert!(one > 0);
        assert!(two >= one);
        assert!(three >= two);
    }
}
