//! Axum route handlers for the career endpoints.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::careers::path::{career_paths, CareerPath};
use crate::careers::prediction::{predict, CareerPrediction};
use crate::careers::recommend::{recommend, CareerRecommendation, CareerSkillGaps};
use crate::errors::{require, require_text, AppError};
use crate::models::profile::{AcademicBackground, UserProfile};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictCareerRequest {
    pub interests: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub education: Option<String>,
    pub personality_traits: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictCareerResponse {
    pub recommendations: Vec<CareerRecommendation>,
    pub skill_gaps: Vec<CareerSkillGaps>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathRequest {
    pub academic_background: Option<AcademicBackground>,
    pub interests: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub personality_traits: Option<Vec<String>>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathResponse {
    pub career_paths: Vec<CareerPath>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPredictionRequest {
    /// Free-form grades payload; only its presence is checked.
    pub academic_performance: Option<serde_json::Value>,
    pub interests: Option<Vec<String>>,
    pub location: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /predict-career
///
/// Ranks the recommendation catalog against the profile and lists the
/// missing skills of each recommended career with resources.
pub async fn handle_predict_career(
    State(state): State<AppState>,
    payload: Result<Json<PredictCareerRequest>, JsonRejection>,
) -> Result<Json<PredictCareerResponse>, AppError> {
    let Json(request) = payload?;
    let interests = require(request.interests, "interests")?;
    let skills = require(request.skills, "skills")?;
    let education = require_text(request.education, "education")?;

    let profile = UserProfile::new(interests, skills)
        .with_academic_background(AcademicBackground::with_field(education))
        .with_personality_traits(request.personality_traits.unwrap_or_default());

    let result = recommend(&profile, &state.catalogs);
    info!(
        "Predicted {} careers ({} with gaps)",
        result.recommendations.len(),
        result.skill_gaps.len()
    );

    Ok(Json(PredictCareerResponse {
        recommendations: result.recommendations,
        skill_gaps: result.skill_gaps,
        timestamp: Utc::now(),
    }))
}

/// POST /career-path
///
/// Career paths from the interest-selected clusters, each with a learning
/// path, next steps and location-adjusted salary.
pub async fn handle_career_path(
    State(state): State<AppState>,
    payload: Result<Json<CareerPathRequest>, JsonRejection>,
) -> Result<Json<CareerPathResponse>, AppError> {
    let Json(request) = payload?;
    let background = require(request.academic_background, "academicBackground")?;
    let interests = require(request.interests, "interests")?;
    let skills = require(request.skills, "skills")?;

    let profile = UserProfile::new(interests, skills)
        .with_academic_background(background)
        .with_personality_traits(request.personality_traits.unwrap_or_default())
        .with_location(request.location);

    let career_paths = career_paths(&profile, &state.catalogs, state.config.usd_to_inr_rate);
    info!(
        "Built {} career paths for location '{}'",
        career_paths.len(),
        profile.location
    );

    Ok(Json(CareerPathResponse {
        career_paths,
        timestamp: Utc::now(),
    }))
}

/// POST /career-prediction
///
/// Ranks market fields by interest overlap and growth, with upskilling routes.
pub async fn handle_career_prediction(
    State(state): State<AppState>,
    payload: Result<Json<CareerPredictionRequest>, JsonRejection>,
) -> Result<Json<CareerPrediction>, AppError> {
    let Json(request) = payload?;
    require(
        request.academic_performance.filter(|v| !v.is_null()),
        "academicPerformance",
    )?;
    let interests = require(request.interests, "interests")?;
    let location = require_text(request.location, "location")?;

    let prediction = predict(
        &interests,
        &location,
        &state.catalogs,
        state.config.usd_to_inr_rate,
    );

    Ok(Json(prediction))
}
