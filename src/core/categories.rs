use crate::models::{Category, FilterField};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Structured filter: a community field and the values that satisfy it
#[derive(Debug, Clone, Copy)]
pub struct FieldFilter {
    pub field: FilterField,
    pub values: &'static [&'static str],
}

const fn filter(field: FilterField, values: &'static [&'static str]) -> FieldFilter {
    FieldFilter { field, values }
}

static CATEGORY_FILTERS: Lazy<HashMap<Category, Vec<FieldFilter>>> = Lazy::new(|| {
    use FilterField::*;

    HashMap::from([
        (Category::BibleStudy, vec![filter(Ministry, &["Bible Study", "Scripture"])]),
        (Category::Prayer, vec![filter(Ministry, &["Prayer", "Intercession"])]),
        (Category::WorshipMusic, vec![filter(Ministry, &["Worship", "Music"])]),
        (
            Category::MissionsOutreach,
            vec![filter(Ministry, &["Missions", "Outreach", "Evangelism"])],
        ),
        (Category::Apologetics, vec![filter(Ministry, &["Apologetics", "Theology"])]),
        (Category::Men, vec![filter(Gender, &["Men's Only", "Men Only"])]),
        (Category::Women, vec![filter(Gender, &["Women's Only", "Women Only"])]),
        (Category::YoungAdults, vec![filter(LifeStage, &["Young Adult"])]),
        (Category::CollegeStudents, vec![filter(LifeStage, &["College", "Student"])]),
        (Category::Singles, vec![filter(LifeStage, &["Single"])]),
        (Category::MarriedCouples, vec![filter(LifeStage, &["Married", "Couples"])]),
        (
            Category::Parents,
            vec![
                filter(LifeStage, &["Parent"]),
                filter(Ministry, &["Family", "Children"]),
            ],
        ),
        (Category::Seniors, vec![filter(LifeStage, &["Senior", "Retired"])]),
        (Category::FitnessSports, vec![filter(Activity, &["Fitness", "Sports"])]),
        (Category::Outdoors, vec![filter(Activity, &["Outdoors", "Hiking", "Camping"])]),
        (Category::ArtsCreativity, vec![filter(Activity, &["Arts", "Crafts", "Creative"])]),
        (Category::BookClub, vec![filter(Activity, &["Book Club", "Reading"])]),
        (
            Category::BusinessProfessionals,
            vec![filter(Profession, &["Business", "Professional", "Entrepreneur"])],
        ),
        (Category::Healthcare, vec![filter(Profession, &["Healthcare", "Medical", "Nursing"])]),
        (Category::RecoverySupport, vec![filter(Recovery, &["Addiction", "Recovery"])]),
        (Category::GriefSupport, vec![filter(Recovery, &["Grief", "Loss"])]),
        (Category::Online, vec![filter(MeetingType, &["Online", "Virtual"])]),
        (Category::InPerson, vec![filter(MeetingType, &["In-Person", "In Person"])]),
    ])
});

// Lowercase fragments matched against "name description"
static CATEGORY_KEYWORDS: Lazy<HashMap<Category, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        (Category::BibleStudy, vec!["bible", "scripture", "devotional"]),
        (Category::Prayer, vec!["prayer", "intercession"]),
        (Category::WorshipMusic, vec!["worship", "music", "choir"]),
        (Category::MissionsOutreach, vec!["mission", "outreach", "evangel"]),
        (Category::Apologetics, vec!["apologetic", "theology", "defend the faith"]),
        (Category::Men, vec!["men's", "brotherhood", "fathers"]),
        (Category::Women, vec!["women", "sisterhood", "ladies", "moms"]),
        (Category::YoungAdults, vec!["young adult", "20s"]),
        (Category::CollegeStudents, vec!["college", "campus", "university", "student"]),
        (Category::Singles, vec!["single"]),
        (Category::MarriedCouples, vec!["married", "couples", "marriage"]),
        (Category::Parents, vec!["parent", "moms", "dads", "family"]),
        (Category::Seniors, vec!["senior", "retire"]),
        (Category::FitnessSports, vec!["fitness", "sport", "running", "workout"]),
        (Category::Outdoors, vec!["hiking", "outdoor", "camping"]),
        (Category::ArtsCreativity, vec!["artist", "creative", "craft", "painting"]),
        (Category::BookClub, vec!["book", "reading"]),
        (Category::BusinessProfessionals, vec!["business", "professional", "entrepreneur", "career"]),
        (Category::Healthcare, vec!["healthcare", "nurse", "medical", "doctor"]),
        (Category::RecoverySupport, vec!["recovery", "addiction", "sober", "12 step"]),
        (Category::GriefSupport, vec!["grief", "loss", "bereavement"]),
        (Category::Online, vec!["online", "virtual", "zoom"]),
        (Category::InPerson, vec!["in-person", "in person", "local"]),
    ])
});

/// Structured filters for a category (may be empty)
pub fn filters_for(category: Category) -> &'static [FieldFilter] {
    CATEGORY_FILTERS
        .get(&category)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Keyword fallbacks for a category (may be empty)
pub fn keywords_for(category: Category) -> &'static [&'static str] {
    CATEGORY_KEYWORDS
        .get(&category)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
