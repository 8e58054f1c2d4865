use crate::models::report::{RecordRow, ReportPayload};

use super::{
    dom::Element,
    formatting::{format_indian_number, format_percentage},
    page::ReportSurface,
};

pub const NO_RECORDS_NOTICE: &str = "No records found or Excel is empty.";
pub const STATIC_HEADERS: [&str; 3] = ["Name", "ISIN", "Industry/Rating"];
pub const MONTH_SUB_HEADERS: [&str; 3] = ["Qty", "Val (L)", "% Net"];
pub const TOTAL_ROW_CLASS: &str = "total-row";

/// Renders the payload into the surface's table container.
///
/// The loading indicator is hidden in every case. Without records the
/// container only receives the no-records notice.
pub fn render_table(payload: &ReportPayload, surface: &mut ReportSurface) {
    surface.loading.set_style("display", "none");

    if payload.records.is_empty() {
        let notice = Element::new("div")
            .with_style("padding", "1rem")
            .with_style("text-align", "center")
            .with_text(NO_RECORDS_NOTICE);
        surface.container.replace_children(notice);
        return;
    }

    surface.container.replace_children(build_table(payload));
}

pub fn build_table(payload: &ReportPayload) -> Element {
    let mut first_header_row = Element::new("tr");
    for header in STATIC_HEADERS {
        first_header_row.append(
            Element::new("th")
                .with_text(header)
                .with_attribute("rowspan", "2")
                .with_style("vertical-align", "middle"),
        );
    }
    for month in &payload.months {
        first_header_row.append(
            Element::new("th")
                .with_text(month.as_str())
                .with_attribute("colspan", "3")
                .with_class("month-header"),
        );
    }

    let mut second_header_row = Element::new("tr");
    for _ in &payload.months {
        for sub_header in MONTH_SUB_HEADERS {
            second_header_row.append(
                Element::new("th")
                    .with_text(sub_header)
                    .with_class("sub-header")
                    .with_class("d-num"),
            );
        }
    }

    let thead = Element::new("thead")
        .with_child(first_header_row)
        .with_child(second_header_row);

    let mut tbody = Element::new("tbody");
    for record in &payload.records {
        tbody.append(build_row(record, &payload.months));
    }

    Element::new("table").with_child(thead).with_child(tbody)
}

fn build_row(record: &RecordRow, months: &[String]) -> Element {
    let mut row = Element::new("tr");
    if record.is_total() {
        row.add_class(TOTAL_ROW_CLASS);
    }

    for field in [&record.name, &record.isin, &record.rating] {
        row.append(Element::new("td").with_text(field.as_str()));
    }

    for [quantity, value, pct] in month_cells(record, months) {
        row.append(Element::new("td").with_text(quantity).with_class("d-num"));
        row.append(Element::new("td").with_text(value).with_class("d-num"));
        row.append(
            Element::new("td")
                .with_text(pct)
                .with_class("d-num")
                .with_class("d-pct"),
        );
    }
    row
}

/// Display text of a record's quantity, value and percentage per month.
pub fn month_cells(record: &RecordRow, months: &[String]) -> Vec<[String; 3]> {
    months
        .iter()
        .map(|month| {
            let cell = record.month(month);
            [
                format_indian_number(cell.quantity, 0),
                format_indian_number(cell.value, 2),
                format_percentage(cell.pct),
            ]
        })
        .collect()
}

/// Total number of leaf columns the table spans.
pub fn column_count(months: &[String]) -> usize {
    STATIC_HEADERS.len() + MONTH_SUB_HEADERS.len() * months.len()
}
