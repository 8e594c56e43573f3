//! Sentiment and NLP responses.

use serde::{Deserialize, Serialize};

use super::JsonObject;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SentimentDetail {
    pub text_id: String,
    pub text: String,
    pub sentiment: String,
    pub score: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SentimentKpiBlock {
    pub total_texts: f64,
    pub positive_count: f64,
    pub negative_count: f64,
    pub neutral_count: f64,
    pub average_score: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SentimentReportResponse {
    pub period_start: String,
    pub period_end: String,
    pub kpis: SentimentKpiBlock,
    pub details: Vec<SentimentDetail>,
    pub interpretation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentRealtimeResponse {
    pub text: String,
    pub sentiment: String,
    pub score: f64,
    pub confidence: f64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A named entity span in the analysed text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NlpEntity {
    pub text: String,
    pub label: String,
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NlpAnalysisResponse {
    pub text: String,
    pub entities: Vec<NlpEntity>,
    pub keywords: Vec<String>,
    pub summary: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SanitizeTextResponse {
    pub original_text: String,
    pub sanitized_text: String,
    pub removed_patterns: Vec<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}
