//! CSV renderer.

use super::Labels;
use crate::{error::Result, Client, Error};

/// UTF-8 byte order mark. Spreadsheet tools use it to detect the encoding.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Prefix the output with [`UTF8_BOM`]
    pub byte_order_mark: bool,
    /// Written for a missing phone or empty company
    pub placeholder: String,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            byte_order_mark: true,
            placeholder: String::new(),
        }
    }
}

/// Header row followed by one row per record, CRLF-terminated.
pub fn render_csv(records: &[Client], options: &CsvOptions, labels: &Labels) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    if options.byte_order_mark {
        buf.extend_from_slice(UTF8_BOM);
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(buf);

    writer.write_record(labels.columns).map_err(csv_error)?;

    for client in records {
        let id = client.id.to_string();
        let created_at = client.created_at_display();
        writer
            .write_record([
                id.as_str(),
                client.name.as_str(),
                client.email.as_str(),
                client.phone_or(&options.placeholder),
                client.company_or(&options.placeholder),
                created_at.as_str(),
            ])
            .map_err(csv_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::Export(format!("csv flush: {}", e)))
}

fn csv_error(e: csv::Error) -> Error {
    Error::Export(format!("csv: {}", e))
}
