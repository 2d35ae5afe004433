use axum::extract::{Multipart, Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::analysis::analyze_resume;
use crate::autofix::{apply_fix, generate_fixes, AutoFix};
use crate::builder::service;
use crate::document::loader::load_document;
use crate::errors::AppError;
use crate::models::builder::{BuilderResponse, BuilderSection, ResumeBuilder, ResumeUpdate};
use crate::models::scoring::ScanMode;
use crate::parsing::extractor::parse_resume;
use crate::parsing::handlers::read_scan_upload;
use crate::scoring::engine::score_resume;
use crate::state::AppState;

fn ok_response(message: &str, resume: ResumeBuilder) -> Json<BuilderResponse> {
    Json(BuilderResponse {
        success: true,
        message: message.to_string(),
        resume: Some(resume),
    })
}

fn load_builder(state: &AppState, id: &str) -> Result<ResumeBuilder, AppError> {
    state
        .store
        .get(id)
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateRequest {
    pub title: Option<String>,
}

/// POST /api/builder/create
pub async fn handle_create(
    State(state): State<AppState>,
    body: Option<Json<CreateRequest>>,
) -> Json<BuilderResponse> {
    let title = body
        .and_then(|Json(req)| req.title)
        .unwrap_or_else(|| "My Resume".to_string());
    let resume = service::create_resume(&title);
    state.store.insert(resume.clone());
    info!("Created resume builder {}", resume.id);
    ok_response("Resume created successfully", resume)
}

/// POST /api/builder/import — parse an uploaded document into builder form.
pub async fn handle_import(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<BuilderResponse>, AppError> {
    let upload = read_scan_upload(&mut multipart).await?;
    let document = load_document(&upload.filename, &upload.data, state.config.max_upload_bytes())?;
    let parsed = parse_resume(&document);

    let builder = service::create_from_parsed(&parsed);
    state.store.insert(builder.clone());
    info!("Imported resume {} as builder {}", upload.filename, builder.id);
    Ok(ok_response("Resume imported successfully", builder))
}

/// GET /api/builder/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BuilderResponse>, AppError> {
    let resume = load_builder(&state, &id)?;
    Ok(ok_response("Resume retrieved successfully", resume))
}

/// PATCH /api/builder/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ResumeUpdate>,
) -> Result<Json<BuilderResponse>, AppError> {
    let mut resume = load_builder(&state, &id)?;
    service::apply_update(&mut resume, update);
    state.store.insert(resume.clone());
    Ok(ok_response("Resume updated successfully", resume))
}

/// DELETE /api/builder/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    if !state.store.delete(&id) {
        return Err(AppError::NotFound("Resume not found".to_string()));
    }
    info!("Deleted resume builder {id}");
    Ok(Json(json!({
        "success": true,
        "message": "Resume deleted successfully",
    })))
}

/// POST /api/builder/:id/save — persist to disk.
pub async fn handle_save(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let resume = load_builder(&state, &id)?;
    state.store.save(&resume)?;
    info!("Saved resume builder {id}");
    Ok(Json(json!({
        "success": true,
        "message": "Resume saved successfully",
        "resume_id": id,
    })))
}

/// GET /api/builder/list/all
pub async fn handle_list(State(state): State<AppState>) -> Json<Value> {
    let resumes = state.store.list();
    Json(json!({
        "success": true,
        "count": resumes.len(),
        "resumes": resumes,
    }))
}

/// POST /api/builder/:id/section/:section
pub async fn handle_add_section(
    State(state): State<AppState>,
    Path((id, section)): Path<(String, String)>,
    Json(entry): Json<Value>,
) -> Result<Json<BuilderResponse>, AppError> {
    let section = parse_section(&section)?;
    let mut resume = load_builder(&state, &id)?;
    service::add_section_entry(&mut resume, section, entry)?;
    state.store.insert(resume.clone());
    Ok(ok_response("Section entry added successfully", resume))
}

/// DELETE /api/builder/:id/section/:section/:index
pub async fn handle_remove_section(
    State(state): State<AppState>,
    Path((id, section, index)): Path<(String, String, usize)>,
) -> Result<Json<BuilderResponse>, AppError> {
    let section = parse_section(&section)?;
    let mut resume = load_builder(&state, &id)?;
    service::remove_section_entry(&mut resume, section, index)?;
    state.store.insert(resume.clone());
    Ok(ok_response("Section entry removed successfully", resume))
}

fn parse_section(section: &str) -> Result<BuilderSection, AppError> {
    BuilderSection::parse(section)
        .ok_or_else(|| AppError::Validation(format!("Unknown section: {section}")))
}

/// GET /api/builder/:id/export/text
pub async fn handle_export_text(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let resume = load_builder(&state, &id)?;
    let text = service::export_to_text(&resume);
    Ok(Json(json!({
        "success": true,
        "text": text,
    })))
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    #[serde(default = "default_analyze_mode")]
    pub mode: ScanMode,
    pub industry: Option<String>,
}

fn default_analyze_mode() -> ScanMode {
    ScanMode::Expert
}

/// POST /api/builder/:id/analyze — score the builder document and generate
/// fix recommendations.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<AnalyzeQuery>,
) -> Result<Json<Value>, AppError> {
    let builder = load_builder(&state, &id)?;
    let (score, fixes) = analyze_builder(&state, &builder, query.mode, query.industry.as_deref());

    Ok(Json(json!({
        "success": true,
        "resume_id": id,
        "overall_score": score,
        "fixes_count": fixes.len(),
        "fixes": fixes,
    })))
}

fn analyze_builder(
    state: &AppState,
    builder: &ResumeBuilder,
    mode: ScanMode,
    industry: Option<&str>,
) -> (f64, Vec<AutoFix>) {
    let resume = service::to_resume(builder);
    let analysis = analyze_resume(state.tokenizer.as_ref(), &resume);
    let outcome = score_resume(
        &resume,
        &analysis,
        mode,
        None,
        industry,
        state.tokenizer.as_ref(),
    );

    let fixes = generate_fixes(&resume, &analysis, &outcome.findings, state.tokenizer.as_ref());
    (outcome.score.overall, fixes)
}

/// POST /api/builder/:id/apply-fix
pub async fn handle_apply_fix(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fix): Json<AutoFix>,
) -> Result<Json<BuilderResponse>, AppError> {
    let mut resume = load_builder(&state, &id)?;
    let (applied, message) = apply_fix(&mut resume, &fix);

    if !applied {
        return Ok(Json(BuilderResponse {
            success: false,
            message,
            resume: Some(resume),
        }));
    }

    state.store.insert(resume.clone());
    Ok(ok_response(&message, resume))
}

/// POST /api/builder/:id/apply-all-fixes — analyze, then apply every
/// auto-applicable recommendation.
pub async fn handle_apply_all_fixes(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<AnalyzeQuery>,
) -> Result<Json<Value>, AppError> {
    let mut resume = load_builder(&state, &id)?;
    let (_, fixes) = analyze_builder(&state, &resume, query.mode, query.industry.as_deref());

    let mut applied_count = 0;
    let mut failed_count = 0;
    let mut details = Vec::new();

    for fix in fixes.iter().filter(|f| f.auto_applicable) {
        let (applied, _) = apply_fix(&mut resume, fix);
        if applied {
            applied_count += 1;
            details.push(format!("applied: {}", fix.description));
        } else {
            failed_count += 1;
            details.push(format!("skipped: {}", fix.description));
        }
    }

    state.store.insert(resume.clone());
    info!("Applied {applied_count} fixes to resume builder {id}");

    Ok(Json(json!({
        "success": true,
        "message": format!("Applied {applied_count} fixes, {failed_count} failed"),
        "applied": applied_count,
        "failed": failed_count,
        "details": details,
        "resume": resume,
    })))
}
