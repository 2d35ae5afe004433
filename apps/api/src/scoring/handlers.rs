use axum::extract::{Multipart, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::analysis::analyze_resume;
use crate::document::loader::load_document;
use crate::errors::AppError;
use crate::models::scoring::ScanMode;
use crate::parsing::extractor::parse_resume;
use crate::parsing::handlers::read_scan_upload;
use crate::scoring::engine::score_resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScanQuery {
    #[serde(default)]
    pub mode: ScanMode,
}

/// POST /api/score-resume
pub async fn handle_score_resume(
    State(state): State<AppState>,
    Query(query): Query<ScanQuery>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let upload = read_scan_upload(&mut multipart).await?;
    info!("Scoring resume: {} (mode: {})", upload.filename, query.mode.as_str());

    let document = load_document(&upload.filename, &upload.data, state.config.max_upload_bytes())?;
    let resume = parse_resume(&document);

    let analysis = analyze_resume(state.tokenizer.as_ref(), &resume);
    let outcome = score_resume(
        &resume,
        &analysis,
        query.mode,
        upload.job_description.as_deref(),
        upload.industry.as_deref(),
        state.tokenizer.as_ref(),
    );

    info!(
        "Successfully scored resume: {} (score: {}, mode: {})",
        upload.filename,
        outcome.score.overall,
        query.mode.as_str()
    );

    Ok(Json(json!({
        "score": outcome.score,
        "resume_summary": {
            "name": resume.name,
            "contact": resume.contact,
            "total_experience": resume.experience.len(),
            "total_education": resume.education.len(),
            "total_skills": resume.skills.len(),
        },
    })))
}

/// POST /api/parse-and-score
pub async fn handle_parse_and_score(
    State(state): State<AppState>,
    Query(query): Query<ScanQuery>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let upload = read_scan_upload(&mut multipart).await?;
    info!(
        "Parsing and scoring resume: {} (mode: {})",
        upload.filename,
        query.mode.as_str()
    );

    let document = load_document(&upload.filename, &upload.data, state.config.max_upload_bytes())?;
    let resume = parse_resume(&document);

    let analysis = analyze_resume(state.tokenizer.as_ref(), &resume);
    let outcome = score_resume(
        &resume,
        &analysis,
        query.mode,
        upload.job_description.as_deref(),
        upload.industry.as_deref(),
        state.tokenizer.as_ref(),
    );

    info!(
        "Successfully processed resume: {} (score: {}, mode: {})",
        upload.filename,
        outcome.score.overall,
        query.mode.as_str()
    );

    Ok(Json(json!({
        "resume": resume,
        "score": outcome.score,
    })))
}

/// GET /api/scan-modes
pub async fn handle_scan_modes() -> Json<Value> {
    Json(json!({
        "modes": [
            {
                "id": "basic",
                "name": "Basic Scan",
                "description": "Format check + key sections",
                "weights": {
                    "ats_compliance": "50%",
                    "layout": "30%",
                    "readability": "20%",
                },
                "features": [
                    "ATS compliance check",
                    "Layout validation",
                    "Readability analysis",
                ],
                "skipped": ["experience analysis", "skills analysis"],
            },
            {
                "id": "ats",
                "name": "ATS Pro Scan",
                "description": "Keywords + readability + ATS simulation",
                "weights": {
                    "ats_compliance": "25%",
                    "experience": "25%",
                    "skills": "20%",
                    "readability": "15%",
                    "layout": "15%",
                },
                "features": [
                    "ATS compliance check",
                    "Experience quality scoring",
                    "Skills analysis",
                    "Readability analysis",
                    "Layout validation",
                    "Quantification detection",
                ],
                "skipped": [],
            },
            {
                "id": "expert",
                "name": "Expert Recruiter Scan",
                "description": "Full analysis + achievement scoring + recruiter insights",
                "weights": {
                    "ats_compliance": "25%",
                    "experience": "25%",
                    "skills": "20%",
                    "readability": "15%",
                    "layout": "15%",
                },
                "features": [
                    "All ATS Pro features",
                    "Quantified impact detection",
                    "Certification bonuses",
                    "Bias risk analysis",
                    "Industry keyword optimization",
                ],
                "skipped": [],
            },
        ],
    }))
}
