//! Server-rendered pages: the landing page and the clients table.

use clientbook_core::export::{escape_html, fill_slots, render_table};
use clientbook_core::{Client, ExportFormat, ExportOptions};

const LAYOUT: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{title}}</title>
<style>
body { font-family: Arial, sans-serif; margin: 40px; color: #222; }
nav a { margin-right: 16px; }
form { margin: 20px 0; display: flex; gap: 8px; flex-wrap: wrap; }
input { padding: 6px; }
table { border-collapse: collapse; width: 100%; margin-top: 20px; }
th { background: #3498db; color: #fff; text-align: left; }
th, td { border: 1px solid #ddd; padding: 8px; }
.empty { color: #7f8c8d; font-style: italic; }
</style>
</head>
<body>
<nav>{{nav}}</nav>
<h1>{{title}}</h1>
{{body}}
</body>
</html>
"#;

const ADD_FORM: &str = r#"<form id="add-client">
<input name="name" placeholder="Name" required>
<input name="email" type="email" placeholder="Email" required>
<input name="phone" placeholder="Phone">
<input name="company" placeholder="Company">
<button type="submit">Add</button>
</form>
<p id="status"></p>
<script>
document.getElementById('add-client').addEventListener('submit', async (event) => {
  event.preventDefault();
  const data = Object.fromEntries(new FormData(event.target));
  for (const key of ['phone', 'company']) { if (!data[key]) delete data[key]; }
  const response = await fetch('/api/clients', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(data),
  });
  const body = await response.json();
  document.getElementById('status').textContent = body.message || body.error;
  if (response.ok) event.target.reset();
});
</script>"#;

fn nav() -> String {
    let mut links = String::from(r#"<a href="/">Home</a><a href="/clients">Clients</a>"#);
    for format in ExportFormat::ALL {
        links.push_str(&format!(
            r#"<a href="/export/{0}">Export {1}</a>"#,
            format.as_str(),
            format.as_str().to_uppercase()
        ));
    }
    links
}

fn layout(title: &str, body: &str) -> String {
    let title = escape_html(title);
    let nav = nav();
    fill_slots(
        LAYOUT,
        &[
            ("title", title.as_str()),
            ("nav", nav.as_str()),
            ("body", body),
        ],
    )
}

/// Landing page with navigation and a form for adding clients.
pub fn home_page() -> String {
    layout("Clientbook", ADD_FORM)
}

/// All clients as a table.
pub fn clients_page(clients: &[Client], options: &ExportOptions) -> String {
    let labels = options.labels();
    layout(labels.title, &render_table(clients, &options.html, labels))
}
