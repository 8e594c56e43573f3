//! Request payloads.
//!
//! Most endpoints accept a free-form JSON object ([`Payload`]). The structs
//! below name the fields a few endpoints require and pass everything else
//! through `extra`.

use serde::{Deserialize, Serialize};

use super::JsonObject;

/// Free-form request body.
pub type Payload = JsonObject;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastByProductRequest {
    pub product_code: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendUserRequest {
    pub user_id: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendSimilarRequest {
    pub item_id: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Text payload shared by realtime sentiment, NLP analysis and sanitization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRequest {
    pub text: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl TextRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            extra: JsonObject::new(),
        }
    }
}

pub type SentimentRealtimeRequest = TextRequest;
pub type NlpRequest = TextRequest;
pub type SanitizeRequest = TextRequest;
