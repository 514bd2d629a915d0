//! Tabular export of website listings (CSV or JSON).

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use super::columns::WebsiteColumn;
use crate::domains::websites::models::Website;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// `json` selects JSON; anything else (including nothing) is CSV
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("json") => ExportFormat::Json,
            _ => ExportFormat::Csv,
        }
    }
}

pub const EXPORT_FILENAME: &str = "websites_export.csv";

/// Websites projected onto the selected columns, keyed by export key
#[derive(Debug, Clone)]
pub struct ExportTable {
    columns: Vec<WebsiteColumn>,
    rows: Vec<Vec<Value>>,
}

impl ExportTable {
    pub fn new(columns: Vec<WebsiteColumn>, websites: &[Website]) -> Self {
        let rows = websites
            .iter()
            .map(|website| columns.iter().map(|c| c.value(website)).collect())
            .collect();
        Self { columns, rows }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.export_key()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// CSV with a header row. No rows means an empty document.
    pub fn to_csv(&self) -> Result<String> {
        if self.rows.is_empty() {
            return Ok(String::new());
        }

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(self.headers())
            .context("Failed to write CSV header")?;
        for row in &self.rows {
            writer
                .write_record(row.iter().map(csv_field))
                .context("Failed to write CSV row")?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
        String::from_utf8(bytes).context("CSV output was not valid UTF-8")
    }

    /// One JSON object per website, keyed by export key
    pub fn to_json(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row)
                    .map(|(column, value)| (column.export_key().to_string(), value.clone()))
                    .collect()
            })
            .collect()
    }
}

fn csv_field(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
