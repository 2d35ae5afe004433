pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::builder::handlers as builder_handlers;
use crate::parsing::handlers as parsing_handlers;
use crate::scoring::handlers as scoring_handlers;
use crate::state::AppState;

/// GET / — service banner with the endpoint and mode catalog.
async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Resume Parser API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "parse": "/api/parse-resume",
            "score": "/api/score-resume",
            "parse_and_score": "/api/parse-and-score",
            "scan_modes": "/api/scan-modes",
            "builder": "/api/builder",
        },
        "scan_modes": {
            "basic": "Format check + key sections (fastest)",
            "ats": "Keywords + readability + ATS simulation",
            "expert": "Full analysis + achievement scoring + recruiter insights",
        },
        "industries": {
            "default": "All industries (no specific optimization)",
            "engineering": "Engineering (CAD, design, testing, certifications)",
            "it-software": "IT/Software (Python, Java, cloud, DevOps)",
            "finance": "Finance (financial modeling, CPA, CFA, compliance)",
            "healthcare": "Healthcare (patient care, EMR, clinical certifications)",
        },
    }))
}

pub fn build_router(state: AppState) -> Router {
    // uploads must clear the multipart framing overhead too
    let body_limit = state.config.max_upload_bytes() + 1024 * 1024;

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health::health_handler))
        // Parse & score API
        .route("/api/parse-resume", post(parsing_handlers::handle_parse_resume))
        .route("/api/score-resume", post(scoring_handlers::handle_score_resume))
        .route(
            "/api/parse-and-score",
            post(scoring_handlers::handle_parse_and_score),
        )
        .route("/api/scan-modes", get(scoring_handlers::handle_scan_modes))
        // Builder API
        .route("/api/builder/create", post(builder_handlers::handle_create))
        .route("/api/builder/import", post(builder_handlers::handle_import))
        .route("/api/builder/list/all", get(builder_handlers::handle_list))
        .route(
            "/api/builder/:id",
            get(builder_handlers::handle_get)
                .patch(builder_handlers::handle_update)
                .delete(builder_handlers::handle_delete),
        )
        .route("/api/builder/:id/save", post(builder_handlers::handle_save))
        .route(
            "/api/builder/:id/section/:section",
            post(builder_handlers::handle_add_section),
        )
        .route(
            "/api/builder/:id/section/:section/:index",
            delete(builder_handlers::handle_remove_section),
        )
        .route(
            "/api/builder/:id/export/text",
            get(builder_handlers::handle_export_text),
        )
        .route(
            "/api/builder/:id/analyze",
            post(builder_handlers::handle_analyze),
        )
        .route(
            "/api/builder/:id/apply-fix",
            post(builder_handlers::handle_apply_fix),
        )
        .route(
            "/api/builder/:id/apply-all-fixes",
            post(builder_handlers::handle_apply_all_fixes),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
