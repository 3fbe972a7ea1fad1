//! Export handler - renders the current record set as a document.

use crate::error::Result;
use clientbook_core::{export, ClientStore, Export, ExportFormat, ExportOptions};

/// Snapshot the store and render it in `format`.
pub async fn handle_export(
    store: &dyn ClientStore,
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<Export> {
    let snapshot = store.list_all().await?;
    let document = export(format, &snapshot, options, clientbook_core::now())?;

    tracing::debug!(
        "Exported {} clients as {} ({} bytes)",
        snapshot.len(),
        format,
        document.bytes.len()
    );

    Ok(document)
}
