use std::collections::HashMap;

use crate::models::{CareerProfile, LearningResource, MarketInsight};

/// Course suggested for gap skills without a curated resource
pub const FALLBACK_COURSE: &str = "Find a relevant course on Coursera or Udemy.";

/// Timeline reported for gap skills without a curated resource
pub const FALLBACK_TIMELINE: &str = "Varies";

/// The static data backing the recommendation engine: career profiles,
/// curated learning resources, and job-market insights.
///
/// Seeded once at startup and shared read-only for the process lifetime.
#[derive(Debug)]
pub struct Catalog {
    careers: Vec<CareerProfile>,
    resources: HashMap<String, LearningResource>,
    insights: HashMap<String, MarketInsight>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            careers: seed_careers(),
            resources: seed_resources(),
            insights: seed_insights(),
        }
    }

    /// All career profiles in fixed catalog order
    pub fn careers(&self) -> &[CareerProfile] {
        &self.careers
    }

    /// Looks up a career profile by exact name
    pub fn career(&self, name: &str) -> Option<&CareerProfile> {
        self.careers.iter().find(|c| c.name == name)
    }

    /// Looks up the curated learning resource for a skill, if any
    pub fn resource(&self, skill: &str) -> Option<&LearningResource> {
        self.resources.get(skill)
    }

    /// Looks up the market insight record for a career, if any
    pub fn insight(&self, career_name: &str) -> Option<&MarketInsight> {
        self.insights.get(career_name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_careers() -> Vec<CareerProfile> {
    vec![
        CareerProfile::new(
            "Software Developer",
            &["JavaScript", "Python", "Databases", "APIs"],
            "₹8-15 LPA",
            "High",
        ),
        CareerProfile::new(
            "Data Analyst",
            &["SQL", "Python", "Statistics", "Tableau"],
            "₹6-12 LPA",
            "Very High",
        ),
        CareerProfile::new(
            "UX/UI Designer",
            &["Figma", "User Research", "Prototyping", "HTML/CSS"],
            "₹5-11 LPA",
            "High",
        ),
    ]
}

fn seed_resources() -> HashMap<String, LearningResource> {
    [
        (
            "JavaScript",
            LearningResource::new("The Complete JavaScript Course on Udemy", "4-6 Weeks"),
        ),
        (
            "Python",
            LearningResource::new("Python for Everybody on Coursera", "5-7 Weeks"),
        ),
        (
            "Databases",
            LearningResource::new("SQL - MySQL for Data Analytics on Coursera", "3-4 Weeks"),
        ),
        (
            "APIs",
            LearningResource::new("Postman: The Complete Guide - REST API Testing", "2-3 Weeks"),
        ),
        (
            "SQL",
            LearningResource::new("Introduction to SQL by W3Schools", "2-3 Weeks"),
        ),
        (
            "Statistics",
            LearningResource::new("Statistics for Data Science by IBM", "4-5 Weeks"),
        ),
        (
            "Tableau",
            LearningResource::new("Tableau 2022 A-Z: Hands-On Tableau Training", "3-4 Weeks"),
        ),
        (
            "Figma",
            LearningResource::new("Figma UI UX Design Essentials on Udemy", "2-4 Weeks"),
        ),
        (
            "User Research",
            LearningResource::new("Google UX Design Professional Certificate", "5-6 Weeks"),
        ),
        (
            "Prototyping",
            LearningResource::new("Learn Prototyping in Figma by Scrimba", "1-2 Weeks"),
        ),
        (
            "HTML/CSS",
            LearningResource::new("Build Responsive Real-World Websites by Jonas S.", "4-6 Weeks"),
        ),
    ]
    .into_iter()
    .map(|(skill, resource)| (skill.to_string(), resource))
    .collect()
}

fn seed_insights() -> HashMap<String, MarketInsight> {
    [
        (
            "Software Developer",
            MarketInsight::new(
                "Very High",
                &["Bengaluru", "Hyderabad", "Pune", "Gurugram"],
                &["TCS", "Infosys", "Microsoft", "Amazon"],
            ),
        ),
        (
            "Data Analyst",
            MarketInsight::new(
                "High",
                &["Bengaluru", "Mumbai", "Chennai", "Noida"],
                &["Accenture", "Deloitte", "Mu Sigma", "Fractal Analytics"],
            ),
        ),
        (
            "UX/UI Designer",
            MarketInsight::new(
                "High",
                &["Bengaluru", "Pune", "Mumbai", "Remote"],
                &["Swiggy", "Zomato", "Flipkart", "MakeMyTrip"],
            ),
        ),
    ]
    .into_iter()
    .map(|(career, insight)| (career.to_string(), insight))
    .collect()
}
