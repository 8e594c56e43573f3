//! Customer analytics: segmentation, loyalty, RFM, CLV, churn, NPS and
//! propensity responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::JsonObject;

/// Clustering quality scores for one algorithm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlgorithmMetrics {
    pub algorithm: String,
    pub params: JsonObject,
    pub silhouette: Option<f64>,
    pub davies_bouldin: Option<f64>,
    pub calinski_harabasz: Option<f64>,
    pub n_clusters: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterDetail {
    pub cluster_id: f64,
    pub size: f64,
    pub centroid: Vec<f64>,
    pub persona_label: String,
}

/// Customer to cluster assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerLabel {
    pub customer_id: String,
    pub cluster_id: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmentationResponse {
    pub best_algorithm: String,
    pub evaluation_metrics: Vec<AlgorithmMetrics>,
    pub clusters: Vec<ClusterDetail>,
    pub customer_labels: Vec<CustomerLabel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerScore {
    pub customer_id: String,
    pub score: f64,
    pub tier: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoyaltySummary {
    pub total_customers: f64,
    pub average_score: f64,
    pub tier_distribution: BTreeMap<String, f64>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoyaltyResponse {
    pub customers: Vec<CustomerScore>,
    pub summary: LoyaltySummary,
}

/// Recency, frequency and monetary scores for one customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RfmCustomerOut {
    pub customer_id: String,
    pub recency: f64,
    pub frequency: f64,
    pub monetary: f64,
    pub recency_score: f64,
    pub frequency_score: f64,
    pub monetary_score: f64,
    /// Concatenated scores, e.g. `"545"`.
    pub rfm_score: String,
    pub segment: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RfmResponse {
    pub customers: Vec<RfmCustomerOut>,
    pub thresholds: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClvFeatureOut {
    pub customer_id: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClvFeaturesResponse {
    pub customers: Vec<ClvFeatureOut>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClvForecastCustomer {
    pub customer_id: String,
    pub predicted_clv: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClvForecastResponse {
    pub best_algorithm: String,
    pub horizon_months: f64,
    /// Mean absolute error per evaluated algorithm.
    pub evaluation_mae: BTreeMap<String, f64>,
    pub customers: Vec<ClvForecastCustomer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChurnLabelResponse {
    pub customer_id: String,
    pub snapshot_date: String,
    /// 1 when the customer churned, 0 otherwise.
    pub churned: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChurnPrediction {
    pub customer_id: String,
    pub churn_probability: f64,
    pub risk_level: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChurnRiskResponse {
    pub predictions: Vec<ChurnPrediction>,
    pub model_info: JsonObject,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Net Promoter Score summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NpsResponse {
    pub nps_score: f64,
    pub promoters: f64,
    pub passives: f64,
    pub detractors: f64,
    pub total_responses: f64,
    pub interpretation: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropensityPrediction {
    pub customer_id: String,
    pub probability: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropensityResponse {
    pub predictions: Vec<PropensityPrediction>,
    pub model_info: JsonObject,
}
