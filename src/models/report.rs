use std::{collections::HashMap, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Name of the aggregate row the backend appends after the holdings.
pub const TOTAL_ROW_NAME: &str = "Total";

/// Body of `GET /api/data`.
///
/// A failed backend answers with an `error` field instead, see
/// [`error_message`]. That field is checked on the raw JSON before the body
/// is decoded into this type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub months: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub records: Vec<RecordRow>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordRow {
    #[serde(rename = "Name", default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(rename = "ISIN", default, deserialize_with = "deserialize_text")]
    pub isin: String,
    // carries the industry for equity schemes
    #[serde(rename = "Rating", default, deserialize_with = "deserialize_text")]
    pub rating: String,
    #[serde(rename = "Months", default, deserialize_with = "null_as_default")]
    pub months: HashMap<String, Option<MonthCell>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MonthCell {
    #[serde(rename = "Quantity", default, deserialize_with = "deserialize_amount")]
    pub quantity: Option<Decimal>,
    #[serde(rename = "Value", default, deserialize_with = "deserialize_amount")]
    pub value: Option<Decimal>,
    /// Share of net assets as a fraction, `0.1034` means 10.34 %.
    #[serde(rename = "Pct", default, deserialize_with = "deserialize_amount")]
    pub pct: Option<Decimal>,
}

impl MonthCell {
    pub fn zero() -> Self {
        MonthCell {
            quantity: Some(Decimal::ZERO),
            value: Some(Decimal::ZERO),
            pct: Some(Decimal::ZERO),
        }
    }
}

impl RecordRow {
    pub fn is_total(&self) -> bool {
        self.name == TOTAL_ROW_NAME
    }

    /// Metrics for `month`, or all zeros when the record has no entry for it.
    pub fn month(&self, month: &str) -> MonthCell {
        self.months
            .get(month)
            .and_then(Option::as_ref)
            .cloned()
            .unwrap_or_else(MonthCell::zero)
    }
}

/// Returns the failure message carried by a response body, if any.
///
/// Any truthy `error` value counts: a non-empty string is used as is, other
/// truthy values are reported in their JSON form.
pub fn error_message(body: &Value) -> Option<String> {
    body.get("error").and_then(truthy_message)
}

fn truthy_message(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Reads a numeric JSON value. Numeric strings are accepted, anything else
/// yields `None`.
pub fn parse_amount(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text.trim()),
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_amount))
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_parse_payload() {
        let body = json!({
            "months": ["January 2025", "February 2025"],
            "records": [
                {
                    "Name": "Aegis Logistics Ltd.",
                    "ISIN": "INE208C01025",
                    "Rating": "Gas",
                    "Months": {
                        "January 2025": { "Quantity": 4200000, "Value": 31548.3, "Pct": 0.1034 }
                    }
                },
                { "Name": "Total", "ISIN": "", "Rating": "", "Months": {} }
            ]
        });
        let payload: ReportPayload = serde_json::from_value(body).unwrap();

        assert_eq!(payload.months.len(), 2);
        assert_eq!(payload.records.len(), 2);

        let january = payload.records[0].month("January 2025");
        assert_eq!(january.quantity, Some(dec!(4200000)));
        assert_eq!(january.value, Some(dec!(31548.3)));
        assert_eq!(january.pct, Some(dec!(0.1034)));
        assert!(!payload.records[0].is_total());
        assert!(payload.records[1].is_total());
    }

    #[test]
    fn test_missing_month_defaults_to_zero() {
        let record = RecordRow {
            name: "Kirloskar Brothers".to_string(),
            ..Default::default()
        };
        assert_eq!(record.month("March 2025"), MonthCell::zero());

        let body = json!({ "Name": "x", "Months": { "March 2025": null } });
        let record: RecordRow = serde_json::from_value(body).unwrap();
        assert_eq!(record.month("March 2025"), MonthCell::zero());
    }

    #[test]
    fn test_lenient_cell_values() {
        let body = json!({ "Quantity": null, "Value": "1250.5", "Pct": "n/a" });
        let cell: MonthCell = serde_json::from_value(body).unwrap();
        assert_eq!(cell.quantity, None);
        assert_eq!(cell.value, Some(dec!(1250.5)));
        assert_eq!(cell.pct, None);

        let cell: MonthCell = serde_json::from_value(json!({})).unwrap();
        assert_eq!(cell, MonthCell::default());
    }

    #[test]
    fn test_null_collections_and_text() {
        let body = json!({
            "months": null,
            "records": [{ "Name": null, "ISIN": 12, "Months": null }]
        });
        let payload: ReportPayload = serde_json::from_value(body).unwrap();
        assert!(payload.months.is_empty());
        assert_eq!(payload.records[0].name, "");
        assert_eq!(payload.records[0].isin, "12");
        assert_eq!(payload.records[0].rating, "");
        assert!(payload.records[0].months.is_empty());

        let payload: ReportPayload = serde_json::from_value(json!({ "records": null })).unwrap();
        assert!(payload.records.is_empty());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(&json!({ "error": "Excel file not found." })),
            Some("Excel file not found.".to_string())
        );
        assert_eq!(error_message(&json!({ "error": "" })), None);
        assert_eq!(error_message(&json!({ "error": null })), None);
        assert_eq!(error_message(&json!({ "error": false })), None);
        assert_eq!(error_message(&json!({ "months": [] })), None);
        assert_eq!(error_message(&json!({ "error": 503 })), Some("503".to_string()));
    }

    #[test]
    fn test_parse_amount_scientific() {
        assert_eq!(parse_amount(&json!(1.5e-7)), Some(dec!(0.00000015)));
        assert_eq!(parse_amount(&json!(true)), None);
    }
}
