//! CSV rendering with proper field quoting.
//!
//! Fields containing commas, double quotes, CR or LF are wrapped in double
//! quotes with inner quotes doubled (RFC 4180). The flattened coordinate
//! field always contains a comma, so unquoted output would shift every
//! subsequent column.

use crate::rows::{ClaimRow, RecommendationRow};

/// A record that knows its fixed column order.
pub trait CsvRecord {
    fn header() -> &'static [&'static str];
    fn fields(&self) -> Vec<String>;
}

impl CsvRecord for ClaimRow {
    fn header() -> &'static [&'static str] {
        &[
            "id",
            "village",
            "district",
            "state",
            "holder",
            "claimType",
            "status",
            "area",
            "coordinates",
        ]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.village.clone(),
            self.district.clone(),
            self.state.clone(),
            self.holder.clone(),
            self.claim_type.clone(),
            self.status.clone(),
            self.area.to_string(),
            self.coordinates.clone(),
        ]
    }
}

impl CsvRecord for RecommendationRow {
    fn header() -> &'static [&'static str] {
        &[
            "village",
            "scheme",
            "priority",
            "reasoning",
            "estimatedBenefit",
            "implementationSteps",
            "generatedDate",
        ]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.village.clone(),
            self.scheme.clone(),
            self.priority.clone(),
            self.reasoning.clone(),
            self.estimated_benefit.clone(),
            self.implementation_steps.clone(),
            self.generated_date.clone(),
        ]
    }
}

/// Render records as CSV: header row, then one line per record, `\n`
/// separated with a trailing newline.
pub fn to_csv<R: CsvRecord>(records: &[R]) -> String {
    let mut out = String::new();
    out.push_str(&join_row(
        R::header().iter().map(|h| h.to_string()).collect(),
    ));
    out.push('\n');
    for record in records {
        out.push_str(&join_row(record.fields()));
        out.push('\n');
    }
    out
}

fn join_row(fields: Vec<String>) -> String {
    fields
        .iter()
        .map(|f| quote_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

fn quote_field(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
