use crate::catalog::Catalog;
use crate::models::{RecommendationResult, SkillSet};
use crate::services::{insights, roadmap};

/// Maximum number of recommendations returned per request
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Generates ranked career recommendations for a user's skill set.
///
/// For each career in catalog order, partitions the required skills into
/// matched and gap (both keep required-list order), computes the rounded
/// match percentage, and attaches the gap roadmap and market insight.
/// Results are stable-sorted descending by percentage, so ties keep catalog
/// order, then clamped to the top [`MAX_RECOMMENDATIONS`].
///
/// Pure function: an empty skill set is valid input and yields all-gap,
/// 0% results for every career.
pub fn recommend(catalog: &Catalog, skills: &SkillSet) -> Vec<RecommendationResult> {
    let mut results: Vec<RecommendationResult> = catalog
        .careers()
        .iter()
        .map(|career| {
            let (matched_skills, skill_gap): (Vec<String>, Vec<String>) = career
                .required_skills
                .iter()
                .cloned()
                .partition(|skill| skills.contains(skill));

            let match_percentage =
                match_percentage(matched_skills.len(), career.required_skills.len());
            let learning_roadmap = roadmap::generate(catalog, &skill_gap);
            let market_insights = insights::lookup(catalog, &career.name);

            RecommendationResult {
                name: career.name.clone(),
                required_skills: career.required_skills.clone(),
                salary_range: career.salary_range.clone(),
                growth: career.growth.clone(),
                matched_skills,
                skill_gap,
                match_percentage,
                learning_roadmap,
                market_insights,
            }
        })
        .collect();

    // sort_by is stable, so equal percentages retain catalog order
    results.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    results.truncate(MAX_RECOMMENDATIONS);
    results
}

/// round(100 × matched / required), with 0 defined for an empty requirement
/// list to guard the division. The shipped catalog never has one, so the
/// guard is purely defensive.
fn match_percentage(matched: usize, required: usize) -> u8 {
    if required == 0 {
        return 0;
    }
    ((matched as f64 / required as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill_set(skills: &[&str]) -> SkillSet {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_match_percentage_rounds() {
        assert_eq!(match_percentage(0, 4), 0);
        assert_eq!(match_percentage(1, 4), 25);
        assert_eq!(match_percentage(1, 3), 33);
        assert_eq!(match_percentage(2, 3), 67);
        assert_eq!(match_percentage(4, 4), 100);
    }

    #[test]
    fn test_match_percentage_guards_empty_requirements() {
        assert_eq!(match_percentage(0, 0), 0);
    }

    #[test]
    fn test_empty_skill_set_yields_all_gap_results() {
        let catalog = Catalog::new();
        let results = recommend(&catalog, &SkillSet::default());

        assert_eq!(results.len(), 3);
        for result in &results {
            assert_eq!(result.match_percentage, 0);
            assert!(result.matched_skills.is_empty());
            assert_eq!(result.skill_gap, result.required_skills);
            assert_eq!(result.learning_roadmap.len(), result.required_skills.len());
        }
        // All tied at 0%, so catalog order is preserved
        assert_eq!(results[0].name, "Software Developer");
        assert_eq!(results[1].name, "Data Analyst");
        assert_eq!(results[2].name, "UX/UI Designer");
    }

    #[test]
    fn test_full_match_for_software_developer() {
        let catalog = Catalog::new();
        let skills = skill_set(&["JavaScript", "Python", "Databases", "APIs"]);
        let results = recommend(&catalog, &skills);

        let top = &results[0];
        assert_eq!(top.name, "Software Developer");
        assert_eq!(top.match_percentage, 100);
        assert_eq!(
            top.matched_skills,
            vec!["JavaScript", "Python", "Databases", "APIs"]
        );
        assert!(top.skill_gap.is_empty());
        assert!(top.learning_roadmap.is_empty());
    }

    #[test]
    fn test_single_skill_match() {
        let catalog = Catalog::new();
        let results = recommend(&catalog, &skill_set(&["Figma"]));

        let top = &results[0];
        assert_eq!(top.name, "UX/UI Designer");
        assert_eq!(top.matched_skills, vec!["Figma"]);
        assert_eq!(top.match_percentage, 25);
        assert_eq!(
            top.skill_gap,
            vec!["User Research", "Prototyping", "HTML/CSS"]
        );
    }

    #[test]
    fn test_matched_and_gap_partition_required_skills() {
        let catalog = Catalog::new();
        let skills = skill_set(&["Python", "Tableau", "Figma"]);

        for result in recommend(&catalog, &skills) {
            assert_eq!(
                result.matched_skills.len() + result.skill_gap.len(),
                result.required_skills.len()
            );
            for skill in &result.matched_skills {
                assert!(!result.skill_gap.contains(skill));
                assert!(result.required_skills.contains(skill));
            }
            for skill in &result.skill_gap {
                assert!(result.required_skills.contains(skill));
            }
        }
    }

    #[test]
    fn test_results_sorted_descending() {
        let catalog = Catalog::new();
        // Python hits two careers, SQL and Statistics push Data Analyst ahead
        let skills = skill_set(&["SQL", "Python", "Statistics"]);
        let results = recommend(&catalog, &skills);

        assert_eq!(results[0].name, "Data Analyst");
        assert_eq!(results[0].match_percentage, 75);
        for pair in results.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
        }
    }

    #[test]
    fn test_result_count_clamped() {
        let catalog = Catalog::new();
        let results = recommend(&catalog, &skill_set(&["Python"]));
        assert!(results.len() <= MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_unrecognized_skills_match_nothing() {
        let catalog = Catalog::new();
        let results = recommend(&catalog, &skill_set(&["Cooking", "Juggling"]));
        for result in results {
            assert_eq!(result.match_percentage, 0);
        }
    }

    #[test]
    fn test_insights_attached_per_career() {
        let catalog = Catalog::new();
        let results = recommend(&catalog, &SkillSet::default());
        let analyst = results.iter().find(|r| r.name == "Data Analyst").unwrap();
        assert_eq!(analyst.market_insights.demand, "High");
        assert!(analyst
            .market_insights
            .top_companies
            .contains(&"Deloitte".to_string()));
    }
}
