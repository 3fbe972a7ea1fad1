//! Export download routes.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use clientbook_core::{Export, ExportFormat};

use crate::error::{AppError, Result};
use crate::handlers::handle_export;
use crate::AppState;

/// Create export routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/export/{format}", get(export_handler))
}

/// A rendered export sent as a file attachment.
struct Download(Export);

impl IntoResponse for Download {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", self.0.filename());
        (
            [
                (header::CONTENT_TYPE, self.0.mime().to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.0.bytes,
        )
            .into_response()
    }
}

/// GET /export/{format} - Download all clients as csv, html or pdf.
async fn export_handler(
    State(state): State<AppState>,
    Path(format): Path<String>,
) -> Result<Download> {
    let format: ExportFormat = format
        .parse()
        .map_err(|_| AppError::NotFound(format!("Unknown export format: {}", format)))?;

    let document = handle_export(state.store.as_ref(), format, &state.export_options).await?;
    Ok(Download(document))
}
