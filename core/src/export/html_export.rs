//! HTML renderer.
//!
//! The document is a fixed template with `{{slot}}` placeholders. Slots are
//! filled in one pass, so text inserted into a slot is never scanned again.

use super::Labels;
use crate::{Client, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;

/// HTML settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Shown for a missing phone or empty company
    pub placeholder: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            placeholder: "-".into(),
        }
    }
}

const DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{title}}</title>
<style>
body { font-family: Arial, sans-serif; margin: 40px; color: #222; }
h1 { color: #2c3e50; border-bottom: 2px solid #3498db; padding-bottom: 8px; }
.generated { color: #7f8c8d; font-size: 0.9em; }
table { border-collapse: collapse; width: 100%; margin-top: 20px; }
th { background: #3498db; color: #fff; text-align: left; }
th, td { border: 1px solid #ddd; padding: 8px; }
tr:nth-child(even) { background: #f5f7fa; }
.empty { color: #7f8c8d; font-style: italic; margin-top: 20px; }
.footer { margin-top: 30px; color: #95a5a6; font-size: 0.8em; text-align: center; }
</style>
</head>
<body>
<h1>{{title}}</h1>
<p class="generated">{{generated_at}}</p>
{{content}}
<div class="footer">{{footer}}</div>
</body>
</html>
"#;

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// The records as a `<table>`, or the empty-state paragraph when there are none.
pub fn render_table(records: &[Client], options: &HtmlOptions, labels: &Labels) -> String {
    if records.is_empty() {
        return format!("<p class=\"empty\">{}</p>", escape_html(labels.empty));
    }

    let mut out = String::from("<table>\n<thead>\n<tr>");
    for column in labels.columns {
        out.push_str("<th>");
        out.push_str(&escape_html(column));
        out.push_str("</th>");
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for client in records {
        let cells = [
            client.id.to_string(),
            escape_html(&client.name),
            escape_html(&client.email),
            escape_html(client.phone_or(&options.placeholder)),
            escape_html(client.company_or(&options.placeholder)),
            client.created_at_display(),
        ];
        out.push_str("<tr>");
        for cell in &cells {
            out.push_str("<td>");
            out.push_str(cell);
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>");
    out
}

/// A standalone document with inline styles and no external resources.
pub fn render_html(
    records: &[Client],
    options: &HtmlOptions,
    labels: &Labels,
    generated_at: NaiveDateTime,
) -> String {
    let generated = format!(
        "{}: {}",
        escape_html(labels.generated_at),
        generated_at.format(TIMESTAMP_FORMAT)
    );
    let title = escape_html(labels.title);
    let content = render_table(records, options, labels);
    let footer = escape_html(labels.footer);

    fill_slots(
        DOCUMENT,
        &[
            ("title", title.as_str()),
            ("generated_at", generated.as_str()),
            ("content", content.as_str()),
            ("footer", footer.as_str()),
        ],
    )
}

/// Replace `{{name}}` with its value. Unknown slots are left as-is.
pub fn fill_slots(template: &str, slots: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            result.push_str("{{");
            rest = after_open;
            continue;
        };

        let name = after_open[..end].trim();
        match slots.iter().find(|(slot, _)| *slot == name) {
            Some((_, value)) => result.push_str(value),
            None => {
                result.push_str("{{");
                result.push_str(&after_open[..end]);
                result.push_str("}}");
            }
        }
        rest = &after_open[end + 2..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientDraft, Locale};
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn empty_snapshot_has_message_and_no_table() {
        let html = render_html(&[], &HtmlOptions::default(), Locale::En.labels(), ts());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Client list</h1>"));
        assert!(html.contains("No clients to display."));
        assert!(!html.contains("<table"));
        assert!(html.contains("class=\"footer\""));
    }

    #[test]
    fn table_rows_follow_snapshot_order() {
        let records = vec![
            ClientDraft::new("Second", "2@example.test").into_client(2, ts()),
            ClientDraft::new("First", "1@example.test").into_client(1, ts()),
        ];
        let html = render_html(&records, &HtmlOptions::default(), Locale::En.labels(), ts());

        let second = html.find("Second").unwrap();
        let first = html.find("First").unwrap();
        assert!(second < first);
        assert_eq!(html.matches("<tr>").count(), 3);
    }

    #[test]
    fn embeds_generation_timestamp() {
        let html = render_html(&[], &HtmlOptions::default(), Locale::En.labels(), ts());
        assert!(html.contains("Generated at: 2025-12-15 08:00:00"));
    }

    #[test]
    fn escapes_record_fields() {
        let records = vec![ClientDraft::new("<script>alert(1)</script>", "x@y.test")
            .with_company("A & B")
            .into_client(1, ts())];
        let html = render_table(&records, &HtmlOptions::default(), Locale::En.labels());

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("A &amp; B"));
    }

    #[test]
    fn placeholder_for_missing_fields() {
        let records = vec![ClientDraft::new("Bare", "b@example.test").into_client(1, ts())];
        let html = render_table(&records, &HtmlOptions::default(), Locale::En.labels());
        assert!(html.contains("<td>-</td><td>-</td>"));
    }

    #[test]
    fn slot_values_are_not_rescanned() {
        let records = vec![ClientDraft::new("{{footer}}", "x@y.test").into_client(1, ts())];
        let html = render_html(&records, &HtmlOptions::default(), Locale::En.labels(), ts());
        assert!(html.contains("<td>{{footer}}</td>"));
    }

    #[test]
    fn fill_slots_keeps_unknown() {
        assert_eq!(fill_slots("a {{x}} {{y}} {{", &[("x", "1")]), "a 1 {{y}} {{");
    }
}
