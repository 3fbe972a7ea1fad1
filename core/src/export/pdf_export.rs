//! PDF renderer.
//!
//! Page one carries the title, then every record gets one body line. Lines
//! walk down from `body_top` in `line_height` steps; once the cursor drops
//! below `bottom_margin` and records remain, a new page starts at the top
//! with the body font set again. The title is never repeated.

use super::{Labels, Locale};
use crate::{error::Result, Client, Error};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

const TITLE_FONT: &str = "F1";
const BODY_FONT: &str = "F2";

/// Page geometry in PDF points. Defaults describe an A4 page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub page_width: i64,
    pub page_height: i64,
    pub title_x: i64,
    pub title_y: i64,
    pub title_font_size: i64,
    pub body_x: i64,
    /// Baseline of the first body line on every page
    pub body_top: i64,
    pub line_height: i64,
    /// Lowest baseline a body line may use
    pub bottom_margin: i64,
    pub body_font_size: i64,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_width: 595,
            page_height: 842,
            title_x: 100,
            title_y: 800,
            title_font_size: 16,
            body_x: 50,
            body_top: 750,
            line_height: 20,
            bottom_margin: 50,
            body_font_size: 12,
        }
    }
}

impl PageLayout {
    /// Body lines that fit on one page; at least one.
    pub fn lines_per_page(&self) -> usize {
        if self.line_height <= 0 || self.body_top < self.bottom_margin {
            return 1;
        }
        ((self.body_top - self.bottom_margin) / self.line_height + 1) as usize
    }
}

/// PDF settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfOptions {
    /// Written for a missing phone
    pub placeholder: String,
    pub layout: PageLayout,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            placeholder: "-".into(),
            layout: PageLayout::default(),
        }
    }
}

/// One body line positioned on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedLine {
    /// Position in the input sequence
    pub index: usize,
    /// Baseline
    pub y: i64,
}

/// What goes on a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPage {
    pub with_title: bool,
    pub lines: Vec<PlacedLine>,
}

/// Distribute `line_count` body lines over pages.
///
/// Always returns at least one page; the first page holds the title.
pub fn plan_pages(line_count: usize, layout: &PageLayout) -> Vec<PlannedPage> {
    let per_page = layout.lines_per_page();
    let mut pages = vec![PlannedPage {
        with_title: true,
        lines: Vec::new(),
    }];

    for index in 0..line_count {
        let slot = index % per_page;
        if slot == 0 && index > 0 {
            pages.push(PlannedPage {
                with_title: false,
                lines: Vec::new(),
            });
        }

        let y = layout.body_top - slot as i64 * layout.line_height;
        if let Some(page) = pages.last_mut() {
            page.lines.push(PlacedLine { index, y });
        }
    }

    pages
}

/// Text of the body line for the `position`-th record (1-based).
fn body_line(position: usize, client: &Client, placeholder: &str) -> String {
    format!(
        "{}. {} - {} - {}",
        position,
        client.name,
        client.email,
        client.phone_or(placeholder)
    )
}

/// Encode text for the standard fonts, which use WinAnsiEncoding.
///
/// Latin-1 maps directly; anything else becomes `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch as u32 {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
            _ => b'?',
        })
        .collect()
}

fn is_win_ansi(text: &str) -> bool {
    text.chars()
        .all(|ch| matches!(ch as u32, 0x20..=0x7E | 0xA0..=0xFF))
}

/// Title drawn on page one. Falls back to English when the localized
/// title has no WinAnsi rendering.
fn pdf_title(labels: &Labels) -> &'static str {
    if is_win_ansi(labels.title) {
        labels.title
    } else {
        Locale::En.labels().title
    }
}

fn text_ops(font: &str, size: i64, x: i64, y: i64, text: &str) -> [Operation; 5] {
    [
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![font.into(), size.into()]),
        Operation::new("Td", vec![x.into(), y.into()]),
        Operation::new("Tj", vec![Object::string_literal(win_ansi(text))]),
        Operation::new("ET", vec![]),
    ]
}

fn font(base: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn pdf_error(e: lopdf::Error) -> Error {
    Error::Export(format!("pdf: {}", e))
}

/// Render the records as a paginated PDF document.
pub fn render_pdf(records: &[Client], options: &PdfOptions, labels: &Labels) -> Result<Vec<u8>> {
    let layout = &options.layout;
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let title_font_id = doc.add_object(font("Helvetica-Bold"));
    let body_font_id = doc.add_object(font("Helvetica"));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            TITLE_FONT => title_font_id,
            BODY_FONT => body_font_id,
        },
    });

    let lines: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(i, client)| body_line(i + 1, client, &options.placeholder))
        .collect();

    let mut kids: Vec<Object> = Vec::new();
    for page in plan_pages(lines.len(), layout) {
        let mut operations = Vec::new();
        if page.with_title {
            operations.extend(text_ops(
                TITLE_FONT,
                layout.title_font_size,
                layout.title_x,
                layout.title_y,
                pdf_title(labels),
            ));
        }
        for line in &page.lines {
            operations.extend(text_ops(
                BODY_FONT,
                layout.body_font_size,
                layout.body_x,
                line.y,
                &lines[line.index],
            ));
        }

        let content = Content { operations }.encode().map_err(pdf_error)?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(layout.page_width),
                Object::Integer(layout.page_height),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| Error::Export(format!("pdf: {}", e)))?;
    Ok(out)
}
