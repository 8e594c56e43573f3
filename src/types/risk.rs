//! Anomaly detection and credit risk responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::JsonObject;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnomalyDetail {
    pub record_id: String,
    pub is_anomaly: bool,
    pub anomaly_score: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnomalyKpiBlock {
    pub total_records: f64,
    pub anomaly_count: f64,
    pub anomaly_rate: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Result of transaction and account anomaly detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyTabularResponse {
    pub kpi: AnomalyKpiBlock,
    pub details: Vec<AnomalyDetail>,
    pub interpretation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphDetail {
    pub node_id: String,
    pub is_anomaly: bool,
    pub anomaly_score: f64,
    pub connections: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyGraphResponse {
    pub details: Vec<GraphDetail>,
    pub interpretation: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditRiskPrediction {
    pub customer_id: String,
    pub probability: f64,
    pub risk_class: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditRiskScoreResponse {
    pub auc: f64,
    pub best_model: String,
    pub predictions: Vec<CreditRiskPrediction>,
    pub interpretation: String,
}

/// Per-feature contributions to one customer's credit score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditRiskExplainResponse {
    pub customer_id: String,
    pub features: BTreeMap<String, f64>,
    pub interpretation: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}
