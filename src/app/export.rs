use crate::core::estimator::Estimator;
use crate::domain::model::{Quote, Tier, Unit};
use crate::utils::error::{EstimatorError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = EstimatorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(EstimatorError::unknown_token("export format", s)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EstimateExport {
    pub unit: Unit,
    pub tier: Tier,
    pub generated_at: DateTime<Utc>,
    pub items: Vec<Quote>,
    pub total: u64,
}

impl EstimateExport {
    pub fn capture(estimator: &Estimator) -> Self {
        let settings = estimator.settings();
        Self {
            unit: settings.unit,
            tier: settings.tier,
            generated_at: Utc::now(),
            items: estimator.quotes(),
            total: estimator.final_total(),
        }
    }
}

pub fn render(estimator: &Estimator, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => to_json(estimator),
        ExportFormat::Csv => to_csv(estimator),
    }
}

pub fn to_json(estimator: &Estimator) -> Result<String> {
    let export = EstimateExport::capture(estimator);
    Ok(serde_json::to_string_pretty(&export)?)
}

pub fn to_csv(estimator: &Estimator) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["id", "width", "height", "count", "area", "price"])?;

    for quote in estimator.quotes() {
        writer.write_record([
            quote.id.to_string(),
            quote.width.to_string(),
            quote.height.to_string(),
            quote.count.to_string(),
            quote.area.to_string(),
            quote.price.to_string(),
        ])?;
    }

    let data = writer.into_inner().map_err(|e| {
        EstimatorError::IoError(std::io::Error::new(e.error().kind(), e.to_string()))
    })?;
    String::from_utf8(data).map_err(|e| EstimatorError::ConfigError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}
