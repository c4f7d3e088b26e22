use crate::models::{AttributeValue, Category, Community};
use std::collections::BTreeSet;

const MEN_ONLY_MARKERS: &[&str] = &["men's only", "men only"];
const WOMEN_ONLY_MARKERS: &[&str] = &["women's only", "women only"];
const MEN_NAME_TOKENS: &[&str] = &["men's", "mens ", " men "];
const WOMEN_NAME_TOKENS: &[&str] = &["women's", "womens ", " women ", "moms", "ladies"];

/// Case-insensitive substring match in either direction
///
/// Empty strings never match.
#[inline]
pub fn loosely_matches(accepted: &str, actual: &str) -> bool {
    let accepted = accepted.trim().to_lowercase();
    let actual = actual.trim().to_lowercase();

    if accepted.is_empty() || actual.is_empty() {
        return false;
    }

    actual.contains(&accepted) || accepted.contains(&actual)
}

/// Check if any accepted value loosely matches any of the attribute's strings
#[inline]
pub fn attribute_matches(attribute: &AttributeValue, accepted: &[&str]) -> bool {
    attribute
        .values()
        .any(|actual| accepted.iter().any(|value| loosely_matches(value, actual)))
}

/// Lowercased text with "women" removed, so men markers can't match inside it
fn without_women(text: &str) -> String {
    text.replace("women", "")
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

/// Lowercased name padded with spaces so edge tokens like " men " are found
fn padded_name(community: &Community) -> String {
    format!(" {} ", community.name.to_lowercase())
}

fn gender_text(community: &Community) -> String {
    community
        .gender
        .as_ref()
        .map(|g| g.values().collect::<Vec<_>>().join(" ").to_lowercase())
        .unwrap_or_default()
}

/// Community is aimed at men only, judged by its gender field or name
pub fn is_men_oriented(community: &Community) -> bool {
    if contains_any(&without_women(&gender_text(community)), MEN_ONLY_MARKERS) {
        return true;
    }

    let name = padded_name(community);
    contains_any(&without_women(&name), MEN_NAME_TOKENS) && !name.contains("women")
}

/// Community is aimed at women only, judged by its gender field or name
pub fn is_women_oriented(community: &Community) -> bool {
    if contains_any(&gender_text(community), WOMEN_ONLY_MARKERS) {
        return true;
    }

    let name = padded_name(community);
    contains_any(&name, WOMEN_NAME_TOKENS) && !contains_any(&without_women(&name), &["men"])
}

/// Check if a community conflicts with the gender categories in the selection
///
/// Selecting "Women" drops men-only communities and vice versa. Without either
/// category nothing is excluded.
#[inline]
pub fn excluded_by_gender(community: &Community, categories: &BTreeSet<Category>) -> bool {
    if categories.contains(&Category::Women) && is_men_oriented(community) {
        return true;
    }

    if categories.contains(&Category::Men) && is_women_oriented(community) {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn community(name: &str, gender: Option<&str>) -> Community {
        let mut c = Community::new(1, name, 10);
        c.gender = gender.map(AttributeValue::from);
        c
    }

    fn selection(categories: &[Category]) -> BTreeSet<Category> {
        categories.iter().copied().collect()
    }

    #[test]
    fn test_loosely_matches_both_directions() {
        assert!(loosely_matches("Bible Study", "bible study & prayer"));
        assert!(loosely_matches("Young Adult Ministry", "young adult"));
        assert!(!loosely_matches("Prayer", "Worship"));
        assert!(!loosely_matches("", "anything"));
        assert!(!loosely_matches("Prayer", "  "));
    }

    #[test]
    fn test_attribute_matches_list_and_scalar() {
        let list = AttributeValue::from(vec!["Hiking", "Kayaking"]);
        let scalar = AttributeValue::from("Online");

        assert!(attribute_matches(&list, &["Outdoors", "Hiking"]));
        assert!(attribute_matches(&scalar, &["online", "virtual"]));
        assert!(!attribute_matches(&scalar, &["In Person"]));
    }

    #[test]
    fn test_women_excludes_mens_only_field() {
        let c = community("Saturday Fellowship", Some("Men's Only"));
        assert!(excluded_by_gender(&c, &selection(&[Category::Women])));
    }

    #[test]
    fn test_women_keeps_womens_only_field() {
        let c = community("Saturday Fellowship", Some("Women's Only"));
        assert!(!excluded_by_gender(&c, &selection(&[Category::Women])));
    }

    #[test]
    fn test_women_excludes_mens_name() {
        assert!(excluded_by_gender(
            &community("Men's Breakfast", None),
            &selection(&[Category::Women])
        ));
        assert!(excluded_by_gender(
            &community("Men of Faith", None),
            &selection(&[Category::Women])
        ));
        assert!(!excluded_by_gender(
            &community("Men and Women in Ministry", None),
            &selection(&[Category::Women])
        ));
    }

    #[test]
    fn test_men_excludes_womens_communities() {
        let men = selection(&[Category::Men]);

        assert!(excluded_by_gender(&community("Women's Bible Study", None), &men));
        assert!(excluded_by_gender(&community("Moms in Prayer", None), &men));
        assert!(excluded_by_gender(&community("Fellowship", Some("Women Only")), &men));
        assert!(!excluded_by_gender(&community("Men & Women's Choir", None), &men));
        assert!(!excluded_by_gender(&community("Men's Breakfast", Some("Men's Only")), &men));
    }

    #[test]
    fn test_no_gender_category_never_excludes() {
        let c = community("Men's Breakfast", Some("Men's Only"));
        assert!(!excluded_by_gender(&c, &selection(&[Category::BibleStudy])));
        assert!(!excluded_by_gender(&c, &BTreeSet::new()));
    }
}
