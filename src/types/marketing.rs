//! Recommendation, cross-sell, pricing, attribution and journey responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::JsonObject;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationOut {
    pub user_id: String,
    pub item_id: String,
    pub score: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelInfo {
    pub algorithm: String,
    pub trained_at: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecResponse {
    pub recommendations: Vec<RecommendationOut>,
    pub model_info: ModelInfo,
}

/// Item co-occurrence matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrossSellResponse {
    /// Row and column labels of `matrix`.
    pub items_or_categories: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
    pub metric: String,
    pub generated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsellPair {
    pub from_item: String,
    pub to_item: String,
    pub confidence: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsellResponse {
    pub suggestions: Vec<UpsellPair>,
    pub metric: String,
    pub generated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceOutcome {
    pub price: f64,
    pub expected_revenue: f64,
    pub expected_demand: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingResponse {
    pub best_price: f64,
    pub outcomes: Vec<PriceOutcome>,
    pub model_info: JsonObject,
    pub interpretation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelContribution {
    pub channel: String,
    pub contribution: f64,
    pub percentage: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributionResponse {
    pub contributions: Vec<ChannelContribution>,
    pub global_auc: Option<f64>,
    pub interpretation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecileSummary {
    pub decile: f64,
    pub avg_uplift: f64,
    pub count: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpliftDetail {
    pub customer_id: String,
    pub uplift: f64,
    pub decile: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpliftResponse {
    pub details: Vec<UpliftDetail>,
    pub decile_summary: Vec<DecileSummary>,
    pub interpretation: String,
}

/// One edge of the journey Markov chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transition {
    pub from_state: String,
    pub to_state: String,
    pub probability: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkovResponse {
    pub transitions: Vec<Transition>,
    pub drop_off_probs: BTreeMap<String, f64>,
    pub interpretation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JourneyPath {
    pub path: Vec<String>,
    pub count: f64,
    pub percentage: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceResponse {
    pub paths: Vec<JourneyPath>,
    pub interpretation: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}
