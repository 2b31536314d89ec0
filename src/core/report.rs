use crate::core::classify::{
    all_same_shallow_kind, all_unique_real_types, classify_all, count_by_real_type, shallow_kinds,
};
use crate::domain::model::Value;
use crate::domain::tags::{RealType, ShallowKind};
use crate::utils::error::{Result, ValueKindsError};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ValueKindsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ValueKindsError::InvalidConfigValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: "Allowed values: text, json, csv".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub real_type: RealType,
    pub count: usize,
}

/// Everything the classifier can say about one sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeReport {
    pub total: usize,
    pub shallow_kinds: Vec<ShallowKind>,
    pub real_types: Vec<RealType>,
    pub all_same_shallow_kind: bool,
    pub all_unique_real_types: bool,
    pub counts: Vec<TypeCount>,
}

impl TypeReport {
    pub fn from_values(values: &[Value]) -> Self {
        let counts = count_by_real_type(values)
            .into_iter()
            .map(|(real_type, count)| TypeCount { real_type, count })
            .collect();

        Self {
            total: values.len(),
            shallow_kinds: shallow_kinds(values),
            real_types: classify_all(values),
            all_same_shallow_kind: all_same_shallow_kind(values),
            all_unique_real_types: all_unique_real_types(values),
            counts,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => self.to_json().map(|json| json + "\n"),
            OutputFormat::Csv => self.to_csv(),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "values: {}", self.total);
        let _ = writeln!(out, "shallow kinds: {}", join(&self.shallow_kinds));
        let _ = writeln!(out, "real types: {}", join(&self.real_types));
        let _ = writeln!(out, "all same shallow kind: {}", self.all_same_shallow_kind);
        let _ = writeln!(out, "all unique real types: {}", self.all_unique_real_types);
        let _ = writeln!(out, "counts:");
        for TypeCount { real_type, count } in &self.counts {
            let _ = writeln!(out, "  {:<10} {}", real_type, count);
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `type,count` rows in tag order.
    pub fn to_csv(&self) -> Result<String> {
        let bytes = self.write_csv(vec![])?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Writes the CSV rows into `sink` and hands it back once flushed.
    pub fn write_csv<W: std::io::Write>(&self, sink: W) -> Result<W> {
        let mut writer = csv::Writer::from_writer(sink);
        writer.write_record(["type", "count"])?;
        for TypeCount { real_type, count } in &self.counts {
            let count = count.to_string();
            writer.write_record([real_type.as_str(), count.as_str()])?;
        }
        writer
            .into_inner()
            .map_err(|e| ValueKindsError::CsvError(e.into_error().into()))
    }
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
