use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use tracing::info;

use crate::document::loader::load_document;
use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::parsing::extractor::parse_resume;
use crate::state::AppState;

/// Fields accepted by the upload endpoints: the document itself plus the
/// optional scoring inputs sent alongside it.
pub struct ScanUpload {
    pub filename: String,
    pub data: Bytes,
    pub job_description: Option<String>,
    pub industry: Option<String>,
}

/// Drains a multipart payload into a [`ScanUpload`]. The `file` field is
/// required; `job_description` and `industry` are optional text fields.
pub async fn read_scan_upload(multipart: &mut Multipart) -> Result<ScanUpload, AppError> {
    let mut filename = None;
    let mut data = None;
    let mut job_description = None;
    let mut industry = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        let name = field.name().map(ToOwned::to_owned);
        match name.as_deref() {
            Some("file") => {
                filename = field.file_name().map(ToOwned::to_owned);
                data = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Error reading uploaded file: {e}"))
                })?);
            }
            Some("job_description") => {
                job_description = Some(read_text_field(field).await?).filter(|s| !s.is_empty());
            }
            Some("industry") => {
                industry = Some(read_text_field(field).await?).filter(|s| !s.is_empty());
            }
            _ => {}
        }
    }

    let data = data.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    Ok(ScanUpload {
        filename: filename.unwrap_or_default(),
        data,
        job_description,
        industry,
    })
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map(|s| s.trim().to_string())
        .map_err(|e| AppError::Validation(format!("Invalid form field: {e}")))
}

/// POST /api/parse-resume
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Resume>, AppError> {
    let upload = read_scan_upload(&mut multipart).await?;
    info!("Parsing resume: {}", upload.filename);

    let document = load_document(&upload.filename, &upload.data, state.config.max_upload_bytes())?;
    let resume = parse_resume(&document);

    info!("Successfully parsed resume: {}", upload.filename);
    Ok(Json(resume))
}
