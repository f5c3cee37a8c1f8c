use crate::catalog::{Catalog, FALLBACK_COURSE, FALLBACK_TIMELINE};
use crate::models::RoadmapEntry;

/// Builds a learning roadmap for a skill gap.
///
/// Emits exactly one entry per gap skill, in the same order: the curated
/// course/timeline pair when the skill is in the resource table, otherwise
/// the generic fallback pair. Pure function; a lookup miss is a designed
/// default path, not an error.
pub fn generate(catalog: &Catalog, skill_gap: &[String]) -> Vec<RoadmapEntry> {
    skill_gap
        .iter()
        .map(|skill| match catalog.resource(skill) {
            Some(resource) => RoadmapEntry {
                skill: skill.clone(),
                course: resource.course.clone(),
                timeline: resource.timeline.clone(),
            },
            None => RoadmapEntry {
                skill: skill.clone(),
                course: FALLBACK_COURSE.to_string(),
                timeline: FALLBACK_TIMELINE.to_string(),
            },
        })
        .collect()
}
