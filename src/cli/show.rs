use log::debug;
use owo_colors::{OwoColorize, Style};
use spinners_rs::{Spinner, Spinners};
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Style as TableStyle},
};

use crate::{
    models::report::ReportPayload,
    services::{
        fetcher::DataFetcher,
        renderer::{
            column_count, month_cells, MONTH_SUB_HEADERS, NO_RECORDS_NOTICE, STATIC_HEADERS,
        },
        shared::env::backend_url,
    },
};

use super::shared::{format_lakhs, print_failure};

pub async fn show(backend: Option<String>) -> anyhow::Result<()> {
    let fetcher = DataFetcher::new(&backend_url(backend));

    let mut sp = Spinner::new(Spinners::Point, "Fetching holdings report...");
    sp.start();
    let result = fetcher.fetch().await;
    sp.stop();
    println!("\n");

    let payload = match result {
        Ok(payload) => payload,
        Err(err) => {
            print_failure(&err);
            std::process::exit(1);
        }
    };

    if payload.records.is_empty() {
        println!("{}", NO_RECORDS_NOTICE);
        return Ok(());
    }

    debug!(
        "Printing {} rows with {} columns",
        payload.records.len(),
        column_count(&payload.months)
    );
    println!("{}", build_terminal_table(&payload));

    if let Some(summary) = latest_total(&payload) {
        let total_style = Style::new().black().on_white().bold();
        println!("====");
        println!("{}", summary.style(total_style));
    }
    Ok(())
}

/// Same cells as the HTML table, with the two header rows flattened into
/// one (`"<month> Qty"`).
fn build_terminal_table(payload: &ReportPayload) -> String {
    let mut builder = Builder::default();

    let mut header: Vec<String> = STATIC_HEADERS.iter().map(|h| h.to_string()).collect();
    for month in &payload.months {
        for sub_header in MONTH_SUB_HEADERS {
            header.push(format!("{month} {sub_header}"));
        }
    }
    builder.push_record(header);

    for record in &payload.records {
        let mut row = vec![record.name.clone(), record.isin.clone(), record.rating.clone()];
        for cells in month_cells(record, &payload.months) {
            row.extend(cells);
        }
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(TableStyle::rounded())
        .modify(Columns::new(STATIC_HEADERS.len()..), Alignment::right());
    table.to_string()
}

fn latest_total(payload: &ReportPayload) -> Option<String> {
    let month = payload.months.last()?;
    let total = payload.records.iter().find(|record| record.is_total())?;
    let [_, value, pct] = month_cells(total, std::slice::from_ref(month)).pop()?;
    Some(format!(
        "Total for {}: {} ({} of net assets)",
        month,
        format_lakhs(&value),
        pct
    ))
}
