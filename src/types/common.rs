use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An arbitrary JSON object.
pub type JsonObject = Map<String, Value>;

/// Health check response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Revenue and cost forecasts; the shape depends on the algorithm chosen.
pub type ForecastResponse = JsonObject;

pub type InventoryOptimizationResponse = JsonObject;

pub type CustomerFeaturesResponse = JsonObject;

pub type SegmentationReportResponse = JsonObject;

pub type PurchasingSegmentationResponse = JsonObject;
