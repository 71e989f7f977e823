//! Axum route handlers for the analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::{Analysis, KeywordExtraction, TargetSource};
use crate::config::MAX_TOP_K;
use crate::errors::AppError;
use crate::language::Language;
use crate::scoring::coverage::{build_coverage, KeywordCoverage};
use crate::scoring::ScoreReport;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub language: Language,
    /// Set when the default language was used instead of a detected one.
    pub fallback_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
    pub lang: Option<String>,
    pub top_k: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub resume_text: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub report: ScoreReport,
    pub coverage: KeywordCoverage,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub lang: Option<String>,
    pub top_k: Option<usize>,
    /// Overrides `ENABLE_FEEDBACK` for this request.
    pub include_feedback: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub analysis: Analysis,
    pub feedback: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
    pub model: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Validation helpers
// ────────────────────────────────────────────────────────────────────────────

fn parse_lang(lang: Option<&str>) -> Result<Option<Language>, AppError> {
    lang.map(|code| {
        code.parse::<Language>()
            .map_err(|e| AppError::Validation(e.to_string()))
    })
    .transpose()
}

fn resolve_top_k(top_k: Option<usize>, default: usize) -> Result<usize, AppError> {
    match top_k {
        Some(0) => Err(AppError::Validation(
            "top_k must be at least 1".to_string(),
        )),
        Some(k) if k > MAX_TOP_K => Err(AppError::Validation(format!(
            "top_k must be at most {MAX_TOP_K}"
        ))),
        Some(k) => Ok(k),
        None => Ok(default),
    }
}

fn resolve_target(
    job_description: Option<String>,
    keywords: Option<Vec<String>>,
) -> Result<TargetSource, AppError> {
    match (job_description, keywords) {
        (Some(_), Some(_)) => Err(AppError::Validation(
            "Provide either job_description or keywords, not both".to_string(),
        )),
        (Some(jd), None) => Ok(TargetSource::JobDescription(jd)),
        (None, Some(keywords)) => Ok(TargetSource::Keywords(keywords)),
        (None, None) => Err(AppError::Validation(
            "One of job_description or keywords is required".to_string(),
        )),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/language/detect
pub async fn handle_detect_language(
    State(state): State<AppState>,
    payload: Result<Json<DetectRequest>, JsonRejection>,
) -> Result<Json<DetectResponse>, AppError> {
    let Json(request) = payload?;

    let response = match state.analyzer.try_detect_language(&request.text) {
        Ok(language) => DetectResponse {
            language,
            fallback_reason: None,
        },
        Err(e) => DetectResponse {
            language: Language::default(),
            fallback_reason: Some(e.to_string()),
        },
    };

    Ok(Json(response))
}

/// POST /api/v1/keywords/extract
///
/// Lexical and skill keywords for a text, plus the aggregated set.
pub async fn handle_extract_keywords(
    State(state): State<AppState>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<KeywordExtraction>, AppError> {
    let Json(request) = payload?;
    let lang = parse_lang(request.lang.as_deref())?;
    let top_k = resolve_top_k(request.top_k, state.config.top_k)?;

    Ok(Json(state.analyzer.extract_keywords(&request.text, lang, top_k)))
}

/// POST /api/v1/ats/score
///
/// Scores a resume against a caller-supplied keyword list.
pub async fn handle_score(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let Json(request) = payload?;

    let report = state
        .analyzer
        .score(&request.resume_text, &request.keywords)
        .await;
    let coverage = build_coverage(&request.keywords, &report);

    Ok(Json(ScoreResponse { report, coverage }))
}

/// POST /api/v1/analyze
///
/// Full pipeline: detect → extract target keywords → score → coverage,
/// with optional recruiter feedback.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;
    let lang = parse_lang(request.lang.as_deref())?;
    let top_k = resolve_top_k(request.top_k, state.config.top_k)?;
    let target = resolve_target(request.job_description, request.keywords)?;

    let analysis = state
        .analyzer
        .analyze(&request.resume_text, target, lang, top_k)
        .await;

    let feedback = if request
        .include_feedback
        .unwrap_or(state.config.enable_feedback)
    {
        Some(state.feedback.generate_feedback(&request.resume_text).await)
    } else {
        None
    };

    let analysis_id = Uuid::new_v4();
    info!(
        "Analysis {analysis_id}: final_score={} over {} target keywords",
        analysis.report.final_score,
        analysis.target_keywords.len()
    );

    Ok(Json(AnalyzeResponse {
        analysis_id,
        analyzed_at: Utc::now(),
        analysis,
        feedback,
    }))
}

/// POST /api/v1/feedback
pub async fn handle_feedback(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let Json(request) = payload?;
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let feedback = state.feedback.generate_feedback(&request.resume_text).await;

    Ok(Json(FeedbackResponse {
        feedback,
        model: state.feedback.model().to_string(),
    }))
}
