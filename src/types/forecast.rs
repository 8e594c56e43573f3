//! Forecasting and inventory responses.

use serde::{Deserialize, Serialize};

use super::JsonObject;

/// A single forecast point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForecastValue {
    /// `YYYY-MM`.
    pub year_month: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForecastEvaluationMetrics {
    pub rmse: Option<f64>,
    pub mae: Option<f64>,
    pub r2: Option<f64>,
    pub average_daily_sales: Option<f64>,
    pub interpretation: String,
}

/// Calendar-month and business-month series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastData {
    pub calendar: Vec<ForecastValue>,
    pub business: Vec<ForecastValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForecastAlgorithmResult {
    pub product_code: String,
    pub best_algorithm: String,
    pub evaluation_metrics: ForecastEvaluationMetrics,
    pub forecast: ForecastData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForecastUnitsResponse {
    pub forecast_period: f64,
    pub forecasts: Vec<ForecastAlgorithmResult>,
    pub execution_time_seconds: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyInventoryRecord {
    pub date: String,
    pub quantity: f64,
    pub value: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDetails {
    pub product_code: String,
    pub product_name: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Server-side timing of a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessingInfo {
    pub start_time: String,
    pub end_time: String,
    pub duration_seconds: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryHistoryResponse {
    pub daily_inventory: Vec<DailyInventoryRecord>,
    pub inventory_analysis: JsonObject,
    pub inventory_aging: JsonObject,
    pub product_details: ProductDetails,
    pub processing_info: ProcessingInfo,
}
