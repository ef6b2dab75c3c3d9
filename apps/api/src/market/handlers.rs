//! Axum route handlers for market data, learning resources and insights.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::Deserialize;

use crate::errors::{require_text, AppError};
use crate::market::insights::{insights, MarketInsights};
use crate::market::job_market::{job_market, JobMarketReport, ALL_INDUSTRIES};
use crate::market::learning::{learning_resources, LearningResources, DEFAULT_LEVEL};
use crate::market::skills_analysis::{analyze, SkillsAnalysisReport};
use crate::market::trends::{job_trends, TrendsReport};
use crate::models::profile::DEFAULT_LOCATION;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JobMarketQuery {
    pub location: Option<String>,
    pub industry: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JobTrendsQuery {
    pub career: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LearningResourcesQuery {
    pub skill: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InsightsQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsAnalysisRequest {
    pub resume: Option<String>,
    pub job_title: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /job-market?location=&industry=
pub async fn handle_job_market(
    State(state): State<AppState>,
    query: Result<Query<JobMarketQuery>, QueryRejection>,
) -> Result<Json<JobMarketReport>, AppError> {
    let Query(query) = query?;
    let location = non_blank(query.location).unwrap_or_else(|| DEFAULT_LOCATION.to_string());
    let industry = non_blank(query.industry).unwrap_or_else(|| ALL_INDUSTRIES.to_string());
    Ok(Json(job_market(&location, &industry, &state.catalogs.market)))
}

/// GET /job-trends?career=
pub async fn handle_job_trends(
    State(state): State<AppState>,
    query: Result<Query<JobTrendsQuery>, QueryRejection>,
) -> Result<Json<TrendsReport>, AppError> {
    let Query(query) = query?;
    let career = query.career.unwrap_or_default();
    Ok(Json(job_trends(&career, &state.catalogs.market)))
}

/// GET /learning-resources?skill=&level=
pub async fn handle_learning_resources(
    State(state): State<AppState>,
    query: Result<Query<LearningResourcesQuery>, QueryRejection>,
) -> Result<Json<LearningResources>, AppError> {
    let Query(query) = query?;
    let skill = require_text(query.skill, "skill")?;
    let level = non_blank(query.level).unwrap_or_else(|| DEFAULT_LEVEL.to_string());

    let mut rng = state.rng();
    Ok(Json(learning_resources(
        skill.trim(),
        level.trim(),
        &state.catalogs.resources,
        &mut rng,
    )))
}

/// GET /ai/insights?q=
pub async fn handle_insights(
    State(state): State<AppState>,
    query: Result<Query<InsightsQuery>, QueryRejection>,
) -> Result<Json<MarketInsights>, AppError> {
    let Query(query) = query?;
    let q = require_text(query.q, "q")?;
    let mut rng = state.rng();
    Ok(Json(insights(&q, &mut rng)))
}

/// POST /skills-analysis
///
/// Extracts resume keywords and compares them with the job title's requirements.
pub async fn handle_skills_analysis(
    State(state): State<AppState>,
    payload: Result<Json<SkillsAnalysisRequest>, JsonRejection>,
) -> Result<Json<SkillsAnalysisReport>, AppError> {
    let Json(request) = payload?;
    let resume = require_text(request.resume, "resume")?;
    let job_title = require_text(request.job_title, "jobTitle")?;

    Ok(Json(analyze(&resume, &job_title, &state.catalogs.resources)))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
