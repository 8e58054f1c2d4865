use chrono::Utc;
use log::{error, info};

use super::{
    dom::{escape_text, Element},
    errors::ReportError,
    fetcher::DataFetcher,
    renderer::render_table,
};

pub const LOADING_ID: &str = "loading";
pub const CONTAINER_ID: &str = "table-container";
pub const FAILURE_PREFIX: &str = "Failed to load data. ";
pub const ERROR_COLOR: &str = "#ef4444";

/// The two page elements the report writes into: the loading/status
/// indicator and the table container.
#[derive(Debug, Clone)]
pub struct ReportSurface {
    pub loading: Element,
    pub container: Element,
}

impl Default for ReportSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSurface {
    pub fn new() -> Self {
        ReportSurface {
            loading: Element::new("div")
                .with_attribute("id", LOADING_ID)
                .with_class("loading")
                .with_text("Loading data..."),
            container: Element::new("div")
                .with_attribute("id", CONTAINER_ID)
                .with_class("table-container"),
        }
    }

    /// Writes the failure message into the status element and styles it
    /// as an error.
    pub fn show_error(&mut self, err: &ReportError) {
        self.loading.set_text(failure_message(err));
        self.loading.set_style("color", ERROR_COLOR);
    }
}

pub fn failure_message(err: &ReportError) -> String {
    format!("{FAILURE_PREFIX}Error: {err}")
}

/// Page-load flow: fetch the payload once, then render it or report the
/// failure in the status element.
///
/// The surface is updated in both cases. The error is handed back so
/// callers can choose an exit status.
pub async fn load_report(
    fetcher: &DataFetcher,
    surface: &mut ReportSurface,
) -> Result<(), ReportError> {
    match fetcher.fetch().await {
        Ok(payload) => {
            info!(
                "Rendering {} records across {} months",
                payload.records.len(),
                payload.months.len()
            );
            render_table(&payload, surface);
            Ok(())
        }
        Err(err) => {
            error!("Error: {} ({:?})", err, err.kind());
            surface.show_error(&err);
            Err(err)
        }
    }
}

/// Wraps the surface in the page shell and returns the complete document.
pub fn render_document(title: &str, surface: &ReportSurface) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <header>
        <h1>{title}</h1>
    </header>
    <main>
        {loading}
        {container}
    </main>
    <footer>Generated {generated_at}</footer>
</body>
</html>
"#,
        title = escape_text(title),
        css = inline_css(),
        loading = surface.loading.to_html(),
        container = surface.container.to_html(),
        generated_at = Utc::now().format("%Y-%m-%d %H:%M UTC"),
    )
}

fn inline_css() -> &'static str {
    r#"
body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    color: #111827;
    background: #f9fafb;
    margin: 0;
    padding: 2rem;
}

h1 {
    font-size: 1.5rem;
    margin-bottom: 1rem;
}

.loading {
    padding: 1rem;
    text-align: center;
    color: #6b7280;
}

.table-container {
    overflow-x: auto;
    background: #ffffff;
    border: 1px solid #e5e7eb;
    border-radius: 0.5rem;
}

table {
    border-collapse: collapse;
    width: 100%;
    font-size: 0.85rem;
}

th, td {
    border: 1px solid #e5e7eb;
    padding: 0.4rem 0.6rem;
    white-space: nowrap;
}

th {
    background: #f3f4f6;
    font-weight: 600;
}

.month-header {
    text-align: center;
    border-left: 2px solid #9ca3af;
}

.d-num {
    text-align: right;
    font-variant-numeric: tabular-nums;
}

.d-pct {
    color: #2563eb;
}

.total-row td {
    font-weight: 700;
    background: #fef3c7;
}

footer {
    margin-top: 1rem;
    font-size: 0.75rem;
    color: #6b7280;
}
"#
}
