//! Export pipeline: turn a record snapshot into a downloadable document.
//!
//! Each format has its own stateless renderer. All of them:
//! - keep records in the order given,
//! - render missing phone/company with a per-format placeholder,
//! - succeed on an empty snapshot.

mod csv_export;
mod html_export;
mod labels;
mod pdf_export;

pub use csv_export::{render_csv, CsvOptions, UTF8_BOM};
pub use html_export::{escape_html, fill_slots, render_html, render_table, HtmlOptions};
pub use labels::{Labels, Locale, UnknownLocale};
pub use pdf_export::{plan_pages, render_pdf, PageLayout, PdfOptions, PlacedLine, PlannedPage};

use crate::{error::Result, Client, Error};
use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Html,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Html, ExportFormat::Pdf];

    /// Content type sent with the download.
    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Suggested download filename.
    pub fn filename(self) -> &'static str {
        match self {
            ExportFormat::Csv => "clients_export.csv",
            ExportFormat::Html => "clients_export.html",
            ExportFormat::Pdf => "clients_export.pdf",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Html => "html",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "html" => Ok(ExportFormat::Html),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(Error::Export(format!("unsupported format: {}", other))),
        }
    }
}

/// Per-format rendering settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportOptions {
    /// Language of titles, headers and messages
    pub locale: Locale,
    pub csv: CsvOptions,
    pub html: HtmlOptions,
    pub pdf: PdfOptions,
}

impl ExportOptions {
    pub fn labels(&self) -> &'static Labels {
        self.locale.labels()
    }
}

/// A rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

impl Export {
    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }

    pub fn filename(&self) -> &'static str {
        self.format.filename()
    }
}

/// Render `records` in the requested format.
///
/// `generated_at` is only embedded by the HTML renderer.
pub fn export(
    format: ExportFormat,
    records: &[Client],
    options: &ExportOptions,
    generated_at: NaiveDateTime,
) -> Result<Export> {
    let labels = options.labels();
    let bytes = match format {
        ExportFormat::Csv => render_csv(records, &options.csv, labels)?,
        ExportFormat::Html => render_html(records, &options.html, labels, generated_at).into_bytes(),
        ExportFormat::Pdf => render_pdf(records, &options.pdf, labels)?,
    };

    Ok(Export { format, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientDraft;
    use chrono::NaiveDate;

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn format_metadata() {
        assert_eq!(ExportFormat::Csv.mime(), "text/csv; charset=utf-8");
        assert_eq!(ExportFormat::Html.filename(), "clients_export.html");
        assert_eq!(ExportFormat::Pdf.mime(), "application/pdf");
        assert_eq!(ExportFormat::Pdf.filename(), "clients_export.pdf");
    }

    #[test]
    fn parse_format() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("HTML".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert!("xlsx".parse::<ExportFormat>().is_err());

        for format in ExportFormat::ALL {
            assert_eq!(format.to_string().parse::<ExportFormat>().unwrap(), format);
        }
    }

    #[test]
    fn every_format_handles_empty_snapshot() {
        let options = ExportOptions::default();
        for format in ExportFormat::ALL {
            let doc = export(format, &[], &options, generated_at()).unwrap();
            assert_eq!(doc.format, format);
            assert!(!doc.bytes.is_empty());
        }
    }

    #[test]
    fn export_is_deterministic() {
        let records = vec![ClientDraft::new("Acme", "a@acme.test").into_client(1, generated_at())];
        let options = ExportOptions::default();

        for format in ExportFormat::ALL {
            let first = export(format, &records, &options, generated_at()).unwrap();
            let second = export(format, &records, &options, generated_at()).unwrap();
            assert_eq!(first, second);
        }
    }
}
