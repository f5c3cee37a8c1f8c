use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A career definition from the static catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerProfile {
    /// Display name, unique within the catalog
    pub name: String,
    /// Skills the career requires, in presentation order
    pub required_skills: Vec<String>,
    /// Salary range display string (e.g., "₹8-15 LPA")
    pub salary_range: String,
    /// Growth label display string (e.g., "High")
    pub growth: String,
}

impl CareerProfile {
    /// Creates a career profile from static seed data
    pub fn new(name: &str, required_skills: &[&str], salary_range: &str, growth: &str) -> Self {
        Self {
            name: name.to_string(),
            required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
            salary_range: salary_range.to_string(),
            growth: growth.to_string(),
        }
    }
}

/// The deduplicated set of skills a user claims to have
///
/// Membership tests are case-sensitive exact matches against catalog terms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillSet(HashSet<String>);

impl SkillSet {
    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for SkillSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A curated course/timeline pair for one skill
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearningResource {
    pub course: String,
    pub timeline: String,
}

impl LearningResource {
    pub fn new(course: &str, timeline: &str) -> Self {
        Self {
            course: course.to_string(),
            timeline: timeline.to_string(),
        }
    }
}

/// One step of a learning roadmap, addressing a single gap skill
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapEntry {
    pub skill: String,
    pub course: String,
    pub timeline: String,
}

/// Static job-market data for a career
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketInsight {
    pub demand: String,
    pub top_cities: Vec<String>,
    pub top_companies: Vec<String>,
}

impl MarketInsight {
    pub fn new(demand: &str, top_cities: &[&str], top_companies: &[&str]) -> Self {
        Self {
            demand: demand.to_string(),
            top_cities: top_cities.iter().map(|s| s.to_string()).collect(),
            top_companies: top_companies.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Fallback record for careers absent from the insight table
    pub fn unavailable() -> Self {
        Self {
            demand: "N/A".to_string(),
            top_cities: Vec::new(),
            top_companies: Vec::new(),
        }
    }
}

/// A ranked recommendation for one career, derived per request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationResult {
    pub name: String,
    pub required_skills: Vec<String>,
    pub salary_range: String,
    pub growth: String,
    /// Required skills present in the user's skill set, in required order
    pub matched_skills: Vec<String>,
    /// Required skills absent from the user's skill set, in required order
    pub skill_gap: Vec<String>,
    /// round(100 × |matched| / |required|); 0 when the career requires nothing
    pub match_percentage: u8,
    /// One roadmap entry per gap skill, in gap order
    pub learning_roadmap: Vec<RoadmapEntry>,
    pub market_insights: MarketInsight,
}
