use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{CareerProfile, RecommendationResult, SkillSet};
use crate::services::recommendations;

use super::AppState;

// Request/Response types

/// Skill selection as submitted by the client: a single skill or a list.
///
/// A lone string is normalized to a one-element list before the engine runs.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SkillInput {
    One(String),
    Many(Vec<String>),
}

impl SkillInput {
    fn into_vec(self) -> Vec<String> {
        match self {
            SkillInput::One(skill) => vec![skill],
            SkillInput::Many(skills) => skills,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// User display name, echoed back in the response
    pub name: String,
    /// Missing skills are treated as an empty selection
    #[serde(default)]
    pub skills: Option<SkillInput>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub user_name: String,
    pub recommendations: Vec<RecommendationResult>,
}

#[derive(Debug, Serialize)]
pub struct CareerResponse {
    pub name: String,
    pub required_skills: Vec<String>,
    pub salary_range: String,
    pub growth: String,
}

impl From<&CareerProfile> for CareerResponse {
    fn from(career: &CareerProfile) -> Self {
        Self {
            name: career.name.clone(),
            required_skills: career.required_skills.clone(),
            salary_range: career.salary_range.clone(),
            growth: career.growth.clone(),
        }
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get the full career catalog
pub async fn get_careers(State(state): State<AppState>) -> Json<Vec<CareerResponse>> {
    let careers: Vec<CareerResponse> = state
        .catalog
        .careers()
        .iter()
        .map(CareerResponse::from)
        .collect();
    Json(careers)
}

/// Get one career profile by exact name
pub async fn get_career(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<CareerResponse>> {
    state
        .catalog
        .career(&name)
        .map(|career| Json(CareerResponse::from(career)))
        .ok_or_else(|| AppError::NotFound(format!("Unknown career: {}", name)))
}

/// Generate ranked career recommendations for the submitted skills
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Json<RecommendResponse> {
    let skills: SkillSet = request
        .skills
        .map(SkillInput::into_vec)
        .unwrap_or_default()
        .into_iter()
        .collect();

    let recommendations = recommendations::recommend(&state.catalog, &skills);
    tracing::debug!(
        user = %request.name,
        skills = skills.len(),
        results = recommendations.len(),
        "generated recommendations"
    );

    Json(RecommendResponse {
        user_name: request.name,
        recommendations,
    })
}
