//! Dataset upload, listing and deletion handlers.

use axum::{
    extract::{FromRequest, Multipart, Path, Request, State},
    http::header::CONTENT_TYPE,
    Json,
};
use serde::{Deserialize, Serialize};

use dpql::DatasetSummary;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Upload body. Either `name` or `source` should identify the dataset.
///
/// Multipart uploads fill the same fields: the `file` part supplies `csv`
/// and, through its filename, `source`; an optional `name` field overrides.
#[derive(Debug, Default, Deserialize)]
pub struct UploadRequest {
    /// Registry name; defaults to `source` without its extension.
    pub name: Option<String>,
    /// Delimited text with a header row.
    pub csv: Option<String>,
    /// Original file name, if the client has one.
    pub source: Option<String>,
}

/// Summary returned after an upload.
#[derive(Debug, Serialize)]
pub struct UploadedDataset {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: usize,
    pub source: Option<String>,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub ok: bool,
    pub dataset: UploadedDataset,
}

#[derive(Serialize)]
pub struct DatasetListResponse {
    pub ok: bool,
    pub datasets: Vec<DatasetSummary>,
}

#[derive(Serialize)]
pub struct DeleteResponse<T> {
    pub ok: bool,
    pub deleted: T,
}

/// Pick the registry name for an upload: explicit name, else the source's
/// file stem, else "dataset".
fn dataset_name(request: &UploadRequest) -> String {
    if let Some(name) = request.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        return name.to_string();
    }

    request
        .source
        .as_deref()
        .map(|s| match s.rfind('.') {
            Some(dot) if dot > 0 => &s[..dot],
            _ => s,
        })
        .filter(|s| !s.is_empty())
        .unwrap_or("dataset")
        .to_string()
}

fn is_multipart(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}

async fn read_multipart(mut multipart: Multipart) -> Result<UploadRequest, ApiError> {
    let mut upload = UploadRequest::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("file") => {
                upload.source = field.file_name().map(str::to_string);
                upload.csv = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadRequest(e.to_string()))?,
                );
            }
            Some("name") => {
                upload.name = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadRequest(e.to_string()))?,
                );
            }
            _ => {}
        }
    }

    Ok(upload)
}

/// Parse and register an uploaded CSV, sent either as `multipart/form-data`
/// with a `file` part or as a JSON [`UploadRequest`].
pub async fn upload_dataset(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<UploadResponse>, ApiError> {
    let upload = if is_multipart(&request) {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        read_multipart(multipart).await?
    } else {
        let Json(body) = Json::<UploadRequest>::from_request(request, &state)
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        body
    };

    let csv = match upload.csv.as_deref() {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err(ApiError::BadRequest("No CSV content provided".to_string())),
    };

    let name = dataset_name(&upload);
    let source = upload.source.clone().unwrap_or_else(|| name.clone());

    let dataset = state
        .profiler
        .parser()
        .parse_str(&name, csv)?
        .with_source(source);
    let summary = state.profiler.registry().add(dataset);

    Ok(Json(UploadResponse {
        ok: true,
        dataset: UploadedDataset {
            name: summary.name,
            columns: summary.columns,
            rows: summary.row_count,
            source: summary.source,
        },
    }))
}

/// List metadata for every registered dataset.
pub async fn list_datasets(State(state): State<AppState>) -> Json<DatasetListResponse> {
    Json(DatasetListResponse {
        ok: true,
        datasets: state.profiler.registry().list_metadata(),
    })
}

/// Delete one dataset by name.
pub async fn delete_dataset(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DeleteResponse<String>>, ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::BadRequest("Dataset name is required".to_string()));
    }

    state.profiler.registry().remove(&name)?;
    Ok(Json(DeleteResponse {
        ok: true,
        deleted: name,
    }))
}

/// Delete every dataset.
pub async fn delete_all_datasets(
    State(state): State<AppState>,
) -> Json<DeleteResponse<Vec<String>>> {
    Json(DeleteResponse {
        ok: true,
        deleted: state.clear(),
    })
}
