use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interest or demographic label a user picks during onboarding
///
/// Deserialization goes through `FromStr`, so labels are matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Category {
    #[serde(rename = "Bible Study")]
    BibleStudy,
    #[serde(rename = "Prayer")]
    Prayer,
    #[serde(rename = "Worship & Music")]
    WorshipMusic,
    #[serde(rename = "Missions & Outreach")]
    MissionsOutreach,
    #[serde(rename = "Apologetics")]
    Apologetics,
    #[serde(rename = "Men")]
    Men,
    #[serde(rename = "Women")]
    Women,
    #[serde(rename = "Young Adults")]
    YoungAdults,
    #[serde(rename = "College Students")]
    CollegeStudents,
    #[serde(rename = "Singles")]
    Singles,
    #[serde(rename = "Married Couples")]
    MarriedCouples,
    #[serde(rename = "Parents")]
    Parents,
    #[serde(rename = "Seniors")]
    Seniors,
    #[serde(rename = "Fitness & Sports")]
    FitnessSports,
    #[serde(rename = "Outdoors")]
    Outdoors,
    #[serde(rename = "Arts & Creativity")]
    ArtsCreativity,
    #[serde(rename = "Book Club")]
    BookClub,
    #[serde(rename = "Business & Professionals")]
    BusinessProfessionals,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Recovery & Support")]
    RecoverySupport,
    #[serde(rename = "Grief Support")]
    GriefSupport,
    #[serde(rename = "Online")]
    Online,
    #[serde(rename = "In Person")]
    InPerson,
}

impl Category {
    /// Every category, in the order the onboarding screen lists them
    pub const ALL: [Category; 23] = [
        Category::BibleStudy,
        Category::Prayer,
        Category::WorshipMusic,
        Category::MissionsOutreach,
        Category::Apologetics,
        Category::Men,
        Category::Women,
        Category::YoungAdults,
        Category::CollegeStudents,
        Category::Singles,
        Category::MarriedCouples,
        Category::Parents,
        Category::Seniors,
        Category::FitnessSports,
        Category::Outdoors,
        Category::ArtsCreativity,
        Category::BookClub,
        Category::BusinessProfessionals,
        Category::Healthcare,
        Category::RecoverySupport,
        Category::GriefSupport,
        Category::Online,
        Category::InPerson,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::BibleStudy => "Bible Study",
            Category::Prayer => "Prayer",
            Category::WorshipMusic => "Worship & Music",
            Category::MissionsOutreach => "Missions & Outreach",
            Category::Apologetics => "Apologetics",
            Category::Men => "Men",
            Category::Women => "Women",
            Category::YoungAdults => "Young Adults",
            Category::CollegeStudents => "College Students",
            Category::Singles => "Singles",
            Category::MarriedCouples => "Married Couples",
            Category::Parents => "Parents",
            Category::Seniors => "Seniors",
            Category::FitnessSports => "Fitness & Sports",
            Category::Outdoors => "Outdoors",
            Category::ArtsCreativity => "Arts & Creativity",
            Category::BookClub => "Book Club",
            Category::BusinessProfessionals => "Business & Professionals",
            Category::Healthcare => "Healthcare",
            Category::RecoverySupport => "Recovery & Support",
            Category::GriefSupport => "Grief Support",
            Category::Online => "Online",
            Category::InPerson => "In Person",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Community attribute as served by the backend: either one string or a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    One(String),
    Many(Vec<String>),
}

impl AttributeValue {
    /// Iterate the attribute's strings regardless of shape
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            AttributeValue::One(value) => std::slice::from_ref(value),
            AttributeValue::Many(values) => values.as_slice(),
        };
        slice.iter().map(String::as_str)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::One(value.to_string())
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(values: Vec<&str>) -> Self {
        AttributeValue::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// Logical community field a category filter targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    LifeStage,
    Gender,
    Ministry,
    Activity,
    Profession,
    Recovery,
    MeetingType,
}

/// Community record from the backend listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Community {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "memberCount", default, deserialize_with = "null_as_zero")]
    pub member_count: u32,
    #[serde(default)]
    pub gender: Option<AttributeValue>,
    #[serde(rename = "lifeStages", default)]
    pub life_stages: Option<AttributeValue>,
    #[serde(rename = "ministryTypes", default)]
    pub ministry_types: Option<AttributeValue>,
    #[serde(default)]
    pub activities: Option<AttributeValue>,
    #[serde(default)]
    pub professions: Option<AttributeValue>,
    #[serde(rename = "recoverySupport", default)]
    pub recovery_support: Option<AttributeValue>,
    #[serde(rename = "meetingType", default)]
    pub meeting_type: Option<AttributeValue>,
}

/// Backends send `null` for communities without a counted membership
fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

impl Community {
    /// Bare community with no structured attributes
    pub fn new(id: i64, name: impl Into<String>, member_count: u32) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            member_count,
            gender: None,
            life_stages: None,
            ministry_types: None,
            activities: None,
            professions: None,
            recovery_support: None,
            meeting_type: None,
        }
    }

    /// Resolve a logical filter field to the attribute that stores it
    pub fn attribute(&self, field: FilterField) -> Option<&AttributeValue> {
        match field {
            FilterField::LifeStage => self.life_stages.as_ref(),
            FilterField::Gender => self.gender.as_ref(),
            FilterField::Ministry => self.ministry_types.as_ref(),
            FilterField::Activity => self.activities.as_ref(),
            FilterField::Profession => self.professions.as_ref(),
            FilterField::Recovery => self.recovery_support.as_ref(),
            FilterField::MeetingType => self.meeting_type.as_ref(),
        }
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Where a suggestion came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSource {
    /// Scored above zero for the selection
    Matched,
    /// Added by member count
    Popular,
}

/// Ranked community suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCommunity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "memberCount")]
    pub member_count: u32,
    pub score: u32,
    pub source: SuggestionSource,
}

impl ScoredCommunity {
    pub fn from_community(community: &Community, score: u32, source: SuggestionSource) -> Self {
        Self {
            id: community.id,
            name: community.name.clone(),
            description: community.description.clone(),
            member_count: community.member_count,
            score,
            source,
        }
    }
}

/// Bounds applied when building a suggestion list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingLimits {
    /// Hard cap on returned suggestions
    pub max_results: usize,
    /// Cap on scored matches, also the backfill target
    pub max_matched: usize,
    /// Backfill kicks in below this many matches
    pub min_matched: usize,
}

impl Default for RankingLimits {
    fn default() -> Self {
        Self {
            max_results: 8,
            max_matched: 6,
            min_matched: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>(), Ok(category));
        }
        assert_eq!("fitness & sports".parse::<Category>(), Ok(Category::FitnessSports));
        assert!("Knitting".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_deserializes_case_insensitively() {
        let category: Category = serde_json::from_str("\"bible study\"").unwrap();
        assert_eq!(category, Category::BibleStudy);

        let err = serde_json::from_str::<Category>("\"Knitting\"").unwrap_err();
        assert!(err.to_string().contains("unknown category"));
    }

    #[test]
    fn test_null_member_count_is_zero() {
        let community: Community =
            serde_json::from_str(r#"{"id": 1, "name": "Bible Study", "memberCount": null}"#).unwrap();
        assert_eq!(community.member_count, 0);

        let community: Community = serde_json::from_str(r#"{"id": 2, "name": "Choir"}"#).unwrap();
        assert_eq!(community.member_count, 0);
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::WorshipMusic).unwrap();
        assert_eq!(json, "\"Worship & Music\"");
    }

    #[test]
    fn test_community_deserializes_mixed_attribute_shapes() {
        let json = r#"{
            "id": 7,
            "name": "Tuesday Men's Breakfast",
            "memberCount": 42,
            "gender": "Men's Only",
            "ministryTypes": ["Bible Study", "Prayer"]
        }"#;

        let community: Community = serde_json::from_str(json).unwrap();

        assert_eq!(community.gender, Some(AttributeValue::One("Men's Only".to_string())));
        assert_eq!(
            community.attribute(FilterField::Ministry).map(|v| v.values().count()),
            Some(2)
        );
        assert!(community.attribute(FilterField::Recovery).is_none());
        assert_eq!(community.description(), "");
    }

    #[test]
    fn test_default_limits() {
        let limits = RankingLimits::default();
        assert_eq!(limits.max_results, 8);
        assert_eq!(limits.max_matched, 6);
        assert_eq!(limits.min_matched, 4);
    }
}
