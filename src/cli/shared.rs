use owo_colors::{OwoColorize, Style};

use crate::services::{errors::ReportError, page::failure_message};

pub fn print_failure(err: &ReportError) {
    let error_style = Style::new().red().bold();
    eprintln!("{}", failure_message(err).style(error_style));
}

pub fn format_lakhs(amount: &str) -> String {
    format!("₹ {} L", amount)
}
