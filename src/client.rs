//! The EchoIntel API client.

use reqwest::{Client, Url};
use serde::Serialize;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{ClientConfig, ResolvedConfig};
use crate::endpoints::{self, AuthTier, Operation};
use crate::error::{ConfigError, EchoIntelError};
use crate::http::request::{
    ACCEPT, ADMIN_SECRET, APPLICATION_JSON, CONTENT_TYPE, CUSTOMER_API_ID, SECRET,
};
use crate::http::{Execute, HttpExecutor, HttpMethod, HttpRequest};
use crate::types::*;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("echointel-rust/", env!("ECHOINTEL_VERSION"));

pub type Result<T> = std::result::Result<T, EchoIntelError>;

/// Client for the EchoIntel analytics API.
///
/// Holds only immutable configuration and the executor, so a single instance
/// can be shared across any number of concurrent calls.
///
/// ```no_run
/// use echointel::{ClientConfig, EchoIntelClient};
/// use serde_json::json;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EchoIntelClient::new(ClientConfig::new("customer-id", "secret"))?;
/// let nps = client.nps(&json!({"responses": [10, 9, 6, 3]})).await?;
/// println!("NPS: {}", nps.nps_score);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EchoIntelClient<E: Execute = HttpExecutor> {
    config: ResolvedConfig,
    executor: E,
}

impl EchoIntelClient<HttpExecutor> {
    pub fn new(config: ClientConfig) -> std::result::Result<Self, ConfigError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Self::with_executor(config, HttpExecutor::new(client))
    }
}

impl<E: Execute> EchoIntelClient<E> {
    /// Creates a client that sends its requests through `executor`.
    pub fn with_executor(config: ClientConfig, executor: E) -> std::result::Result<Self, ConfigError> {
        Ok(Self {
            config: config.resolve()?,
            executor,
        })
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Headers for the given trust tier.
    pub fn headers(&self, tier: AuthTier) -> Vec<(String, String)> {
        let mut headers = vec![
            (CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()),
            (ACCEPT.to_string(), APPLICATION_JSON.to_string()),
        ];

        match tier {
            AuthTier::Public => {}
            AuthTier::Customer => {
                headers.push((
                    CUSTOMER_API_ID.to_string(),
                    self.config.customer_api_id().to_string(),
                ));
                headers.push((SECRET.to_string(), self.config.secret().to_string()));
                if let Some(admin_secret) = self.config.admin_secret() {
                    headers.push((ADMIN_SECRET.to_string(), admin_secret.to_string()));
                }
            }
            AuthTier::Admin => {
                headers.push((
                    ADMIN_SECRET.to_string(),
                    self.config.admin_secret().unwrap_or_default().to_string(),
                ));
            }
        }

        headers
    }

    /// Builds the request for `path` (which may carry a query string).
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        tier: AuthTier,
        body: Option<Value>,
    ) -> HttpRequest {
        let url = format!("{}{}", self.config.api_url(), path);
        HttpRequest::new(method, url, self.headers(tier), body)
    }

    async fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T> {
        let value = self
            .executor
            .execute(&request, self.config.timeout(), self.config.retry())
            .await?;
        decode(value)
    }

    /// Calls a catalog operation with a JSON body and decodes the response.
    pub async fn invoke<T, B>(&self, operation: Operation, data: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.invoke_with_query(operation, None, data).await
    }

    /// Like [`invoke`](Self::invoke), appending `?{query}` to the path.
    pub async fn invoke_with_query<T, B>(
        &self,
        operation: Operation,
        query: Option<&str>,
        data: &B,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode(data)?;
        let path = match query {
            Some(query) => format!("{}?{}", operation.path(), query),
            None => operation.path().to_string(),
        };
        let request = self.build_request(operation.method(), &path, operation.tier(), body);
        self.send(request).await
    }

    async fn admin<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let request = self.build_request(method, path, AuthTier::Admin, body);
        self.send(request).await
    }

    /// Admin request for `/admin/customers/{id}`, with the id encoded as a
    /// single path segment.
    fn customer_request(
        &self,
        method: HttpMethod,
        customer_id: &str,
        body: Option<Value>,
    ) -> Result<HttpRequest> {
        let base = format!("{}{}", self.config.api_url(), endpoints::ADMIN_CUSTOMERS);
        let mut url = Url::parse(&base)
            .map_err(|e| EchoIntelError::generic(format!("Invalid API URL '{}': {}", base, e)))?;
        url.path_segments_mut()
            .map_err(|_| EchoIntelError::generic(format!("Invalid API URL '{}'", base)))?
            .push(customer_id);
        Ok(HttpRequest::new(
            method,
            url.to_string(),
            self.headers(AuthTier::Admin),
            body,
        ))
    }

    // System

    /// Checks API health.
    pub async fn health(&self) -> Result<HealthResponse> {
        let request = self.build_request(
            Operation::Health.method(),
            Operation::Health.path(),
            Operation::Health.tier(),
            None,
        );
        self.send(request).await
    }

    // Forecasting

    pub async fn forecast_revenue<B: Serialize + ?Sized>(&self, data: &B) -> Result<ForecastResponse> {
        self.invoke(Operation::ForecastRevenue, data).await
    }

    pub async fn forecast_cost<B: Serialize + ?Sized>(&self, data: &B) -> Result<ForecastResponse> {
        self.invoke(Operation::ForecastCost, data).await
    }

    pub async fn forecast_cost_improved<B: Serialize + ?Sized>(&self, data: &B) -> Result<ForecastResponse> {
        self.invoke(Operation::ForecastCostImproved, data).await
    }

    pub async fn forecast_units<B: Serialize + ?Sized>(&self, data: &B) -> Result<ForecastUnitsResponse> {
        self.invoke(Operation::ForecastUnits, data).await
    }

    pub async fn forecast_cost_totus<B: Serialize + ?Sized>(&self, data: &B) -> Result<ForecastResponse> {
        self.invoke(Operation::ForecastCostTotus, data).await
    }

    // Inventory

    pub async fn inventory_optimization<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<InventoryOptimizationResponse> {
        self.invoke(Operation::InventoryOptimization, data).await
    }

    pub async fn inventory_history_improved<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<InventoryHistoryResponse> {
        self.invoke(Operation::InventoryHistoryImproved, data).await
    }

    // Customer analytics

    pub async fn customer_segmentation<B: Serialize + ?Sized>(&self, data: &B) -> Result<SegmentationResponse> {
        self.invoke(Operation::CustomerSegmentation, data).await
    }

    pub async fn customer_features<B: Serialize + ?Sized>(&self, data: &B) -> Result<CustomerFeaturesResponse> {
        self.invoke(Operation::CustomerFeatures, data).await
    }

    pub async fn customer_loyalty<B: Serialize + ?Sized>(&self, data: &B) -> Result<LoyaltyResponse> {
        self.invoke(Operation::CustomerLoyalty, data).await
    }

    pub async fn customer_rfm<B: Serialize + ?Sized>(&self, data: &B) -> Result<RfmResponse> {
        self.invoke(Operation::CustomerRfm, data).await
    }

    pub async fn customer_clv_features<B: Serialize + ?Sized>(&self, data: &B) -> Result<ClvFeaturesResponse> {
        self.invoke(Operation::CustomerClvFeatures, data).await
    }

    pub async fn customer_clv_forecast<B: Serialize + ?Sized>(&self, data: &B) -> Result<ClvForecastResponse> {
        self.invoke(Operation::CustomerClvForecast, data).await
    }

    // Churn

    pub async fn churn_risk<B: Serialize + ?Sized>(&self, data: &B) -> Result<ChurnRiskResponse> {
        self.invoke(Operation::ChurnRisk, data).await
    }

    pub async fn churn_label<B: Serialize + ?Sized>(&self, data: &B) -> Result<ChurnLabelResponse> {
        self.invoke(Operation::ChurnLabel, data).await
    }

    // NPS

    pub async fn nps<B: Serialize + ?Sized>(&self, data: &B) -> Result<NpsResponse> {
        self.invoke(Operation::Nps, data).await
    }

    // Propensity

    pub async fn propensity_buy_product<B: Serialize + ?Sized>(&self, data: &B) -> Result<PropensityResponse> {
        self.invoke(Operation::PropensityBuyProduct, data).await
    }

    pub async fn propensity_respond_campaign<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<PropensityResponse> {
        self.invoke(Operation::PropensityRespondCampaign, data).await
    }

    pub async fn propensity_upgrade_plan<B: Serialize + ?Sized>(&self, data: &B) -> Result<PropensityResponse> {
        self.invoke(Operation::PropensityUpgradePlan, data).await
    }

    // Recommendations

    pub async fn recommend_user_items<B: Serialize + ?Sized>(&self, data: &B) -> Result<RecResponse> {
        self.invoke(Operation::RecommendUserItems, data).await
    }

    pub async fn recommend_similar_items<B: Serialize + ?Sized>(&self, data: &B) -> Result<RecResponse> {
        self.invoke(Operation::RecommendSimilarItems, data).await
    }

    // Cross-sell and upsell

    pub async fn cross_sell_matrix<B: Serialize + ?Sized>(&self, data: &B) -> Result<CrossSellResponse> {
        self.invoke(Operation::CrossSellMatrix, data).await
    }

    pub async fn upsell_suggestions<B: Serialize + ?Sized>(&self, data: &B) -> Result<UpsellResponse> {
        self.invoke(Operation::UpsellSuggestions, data).await
    }

    // Dynamic pricing

    pub async fn dynamic_pricing_recommend<B: Serialize + ?Sized>(&self, data: &B) -> Result<PricingResponse> {
        self.invoke(Operation::DynamicPricingRecommend, data).await
    }

    // Sentiment

    pub async fn sentiment_report<B: Serialize + ?Sized>(&self, data: &B) -> Result<SentimentReportResponse> {
        self.invoke(Operation::SentimentReport, data).await
    }

    pub async fn sentiment_realtime<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<SentimentRealtimeResponse> {
        self.invoke(Operation::SentimentRealtime, data).await
    }

    // Anomaly detection

    pub async fn anomaly_transactions<B: Serialize + ?Sized>(&self, data: &B) -> Result<AnomalyTabularResponse> {
        self.invoke(Operation::AnomalyTransactions, data).await
    }

    pub async fn anomaly_accounts<B: Serialize + ?Sized>(&self, data: &B) -> Result<AnomalyTabularResponse> {
        self.invoke(Operation::AnomalyAccounts, data).await
    }

    /// Graph-based anomaly detection over account relationships.
    pub async fn anomaly_graph<B: Serialize + ?Sized>(&self, data: &B) -> Result<AnomalyGraphResponse> {
        self.invoke(Operation::AnomalyGraph, data).await
    }

    // Credit risk

    pub async fn credit_risk_score<B: Serialize + ?Sized>(&self, data: &B) -> Result<CreditRiskScoreResponse> {
        self.invoke(Operation::CreditRiskScore, data).await
    }

    pub async fn credit_risk_explain<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<CreditRiskExplainResponse> {
        self.invoke(Operation::CreditRiskExplain, data).await
    }

    // Marketing attribution

    pub async fn channel_attribution<B: Serialize + ?Sized>(&self, data: &B) -> Result<AttributionResponse> {
        self.invoke(Operation::ChannelAttribution, data).await
    }

    pub async fn uplift_model<B: Serialize + ?Sized>(&self, data: &B) -> Result<UpliftResponse> {
        self.invoke(Operation::UpliftModel, data).await
    }

    // Customer journey

    pub async fn journey_markov<B: Serialize + ?Sized>(&self, data: &B) -> Result<MarkovResponse> {
        self.invoke(Operation::JourneyMarkov, data).await
    }

    pub async fn journey_sequences<B: Serialize + ?Sized>(&self, data: &B) -> Result<SequenceResponse> {
        self.invoke(Operation::JourneySequences, data).await
    }

    // NLP

    /// NLP analysis of Portuguese text.
    pub async fn nlp_analysis<B: Serialize + ?Sized>(&self, data: &B) -> Result<NlpAnalysisResponse> {
        self.invoke(Operation::NlpAnalysis, data).await
    }

    /// NLP analysis of English text.
    pub async fn nlp_analysis_en<B: Serialize + ?Sized>(&self, data: &B) -> Result<NlpAnalysisResponse> {
        self.invoke(Operation::NlpAnalysisEn, data).await
    }

    pub async fn nlp_excess_inventory_report<B: Serialize + ?Sized>(&self, data: &B) -> Result<JsonObject> {
        self.invoke(Operation::NlpExcessInventoryReport, data).await
    }

    pub async fn sanitize_text<B: Serialize + ?Sized>(&self, data: &B) -> Result<SanitizeTextResponse> {
        self.invoke(Operation::SanitizeText, data).await
    }

    // Advanced segmentation (authenticated)

    pub async fn purchasing_segmentation<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<PurchasingSegmentationResponse> {
        self.invoke(Operation::PurchasingSegmentation, data).await
    }

    pub async fn purchasing_segmentation_dendrogram<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<JsonObject> {
        self.invoke(Operation::PurchasingSegmentationDendrogram, data).await
    }

    pub async fn segment_hierarchy_chart<B: Serialize + ?Sized>(&self, data: &B) -> Result<JsonObject> {
        self.invoke(Operation::SegmentHierarchyChart, data).await
    }

    pub async fn segment_subsegment_explore<B: Serialize + ?Sized>(&self, data: &B) -> Result<JsonObject> {
        self.invoke(Operation::SegmentSubsegmentExplore, data).await
    }

    pub async fn segment_cluster_profiles<B: Serialize + ?Sized>(&self, data: &B) -> Result<JsonObject> {
        self.invoke(Operation::SegmentClusterProfiles, data).await
    }

    // Reporting (authenticated)

    pub async fn segmentation_report<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<SegmentationReportResponse> {
        self.invoke(Operation::SegmentationReport, data).await
    }

    /// Localized segmentation report. `lang` defaults to `"pt"` when `None`.
    pub async fn segmentation_report_i18n<B: Serialize + ?Sized>(
        &self,
        data: &B,
        lang: Option<&str>,
    ) -> Result<SegmentationReportResponse> {
        let query = lang_query(lang, "pt");
        self.invoke_with_query(Operation::SegmentationReportI18n, Some(&query), data)
            .await
    }

    /// Segmentation report as structured JSON. `lang` defaults to `"en"`.
    pub async fn segmentation_report_json<B: Serialize + ?Sized>(
        &self,
        data: &B,
        lang: Option<&str>,
    ) -> Result<JsonObject> {
        let query = lang_query(lang, "en");
        self.invoke_with_query(Operation::SegmentationReportJson, Some(&query), data)
            .await
    }

    // Customer management (admin secret only)

    pub async fn create_customer(&self, data: &CreateCustomerRequest) -> Result<CustomerOut> {
        self.admin(HttpMethod::Post, endpoints::ADMIN_CUSTOMERS, encode(data)?)
            .await
    }

    pub async fn list_customers(&self, include_disabled: bool) -> Result<CustomerListResponse> {
        let path = if include_disabled {
            format!("{}?include_disabled=true", endpoints::ADMIN_CUSTOMERS)
        } else {
            endpoints::ADMIN_CUSTOMERS.to_string()
        };
        self.admin(HttpMethod::Get, &path, None).await
    }

    pub async fn get_customer(&self, customer_id: &str) -> Result<CustomerOut> {
        let request = self.customer_request(HttpMethod::Get, customer_id, None)?;
        self.send(request).await
    }

    pub async fn update_customer(
        &self,
        customer_id: &str,
        data: &UpdateCustomerRequest,
    ) -> Result<CustomerOut> {
        let request = self.customer_request(HttpMethod::Put, customer_id, encode(data)?)?;
        self.send(request).await
    }

    /// Deletes a customer. Whatever the server returns is discarded.
    pub async fn delete_customer(&self, customer_id: &str) -> Result<()> {
        let request = self.customer_request(HttpMethod::Delete, customer_id, None)?;
        self.send::<Value>(request).await?;
        Ok(())
    }
}

fn lang_query(lang: Option<&str>, default: &str) -> String {
    format!("lang={}", lang.unwrap_or(default))
}

fn encode<B: Serialize + ?Sized>(data: &B) -> Result<Option<Value>> {
    serde_json::to_value(data)
        .map(Some)
        .map_err(|e| EchoIntelError::generic(format!("Failed to serialize request body: {}", e)))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    T::deserialize(&value).map_err(|e| EchoIntelError::Generic {
        message: format!("Failed to decode response: {}", e),
        status_code: None,
        context: Some(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::http::{MockExecute, RetryPolicy};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn config() -> ClientConfig {
        ClientConfig::new("cust-1", "s3cret").with_api_url("https://x/")
    }

    /// Mock executor that records every request and replies with `response`.
    fn recording_executor(response: Value) -> (MockExecute, Arc<Mutex<Vec<HttpRequest>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let mut executor = MockExecute::new();
        executor
            .expect_execute()
            .returning(move |request, _, _| {
                seen_clone.lock().unwrap().push(request.clone());
                Ok(response.clone())
            });
        (executor, seen)
    }

    #[test]
    fn test_public_headers() {
        let (executor, _) = recording_executor(json!({}));
        let client = EchoIntelClient::with_executor(config(), executor).unwrap();

        assert_eq!(
            client.headers(AuthTier::Public),
            vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ]
        );
    }

    #[test]
    fn test_customer_headers_include_admin_secret_when_configured() {
        let (executor, _) = recording_executor(json!({}));
        let client = EchoIntelClient::with_executor(config(), executor).unwrap();
        let headers = client.headers(AuthTier::Customer);
        let request = HttpRequest::new(HttpMethod::Get, "u", headers, None);
        assert_eq!(request.header("X-Customer-Api-Id"), Some("cust-1"));
        assert_eq!(request.header("X-Secret"), Some("s3cret"));
        assert_eq!(request.header("X-Admin-Secret"), None);

        let (executor, _) = recording_executor(json!({}));
        let client =
            EchoIntelClient::with_executor(config().with_admin_secret("adm"), executor).unwrap();
        let headers = client.headers(AuthTier::Customer);
        let request = HttpRequest::new(HttpMethod::Get, "u", headers, None);
        assert_eq!(request.header("X-Admin-Secret"), Some("adm"));
    }

    #[test]
    fn test_admin_headers_carry_only_admin_secret() {
        let (executor, _) = recording_executor(json!({}));
        let client =
            EchoIntelClient::with_executor(config().with_admin_secret("adm"), executor).unwrap();
        let request = HttpRequest::new(HttpMethod::Get, "u", client.headers(AuthTier::Admin), None);

        assert_eq!(request.header("X-Admin-Secret"), Some("adm"));
        assert_eq!(request.header("X-Customer-Api-Id"), None);
        assert_eq!(request.header("X-Secret"), None);
        assert_eq!(request.headers.len(), 3);
    }

    #[test]
    fn test_admin_headers_without_admin_secret_send_empty_value() {
        let (executor, _) = recording_executor(json!({}));
        let client = EchoIntelClient::with_executor(config(), executor).unwrap();
        let request = HttpRequest::new(HttpMethod::Get, "u", client.headers(AuthTier::Admin), None);
        assert_eq!(request.header("X-Admin-Secret"), Some(""));
    }

    #[tokio::test]
    async fn test_base_url_normalization() {
        let (executor, seen) = recording_executor(json!({"npsScore": 10.0}));
        let client = EchoIntelClient::with_executor(config(), executor).unwrap();

        client.nps(&json!({"responses": [10]})).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].url, "https://x/api/nps");
        assert_eq!(seen[0].method, HttpMethod::Post);
        assert_eq!(seen[0].body, Some(json!({"responses": [10]})));
        assert_eq!(seen[0].header("X-Secret"), None);
    }

    #[tokio::test]
    async fn test_same_configuration_builds_same_request() {
        let (first_executor, first) = recording_executor(json!({}));
        let (second_executor, second) = recording_executor(json!({}));
        let first_client =
            EchoIntelClient::with_executor(config().with_admin_secret("adm"), first_executor).unwrap();
        let second_client =
            EchoIntelClient::with_executor(config().with_admin_secret("adm"), second_executor).unwrap();

        let payload = json!({"transactions": [{"id": 1, "amount": 12.5}]});
        first_client.purchasing_segmentation(&payload).await.unwrap();
        second_client.purchasing_segmentation(&payload).await.unwrap();

        assert_eq!(first.lock().unwrap()[0], second.lock().unwrap()[0]);
    }

    #[tokio::test]
    async fn test_executor_receives_configured_policy() {
        let mut executor = MockExecute::new();
        executor
            .expect_execute()
            .withf(|request, timeout, policy| {
                request.url == "https://x/health"
                    && request.method == HttpMethod::Get
                    && request.body.is_none()
                    && *timeout == Duration::from_millis(1234)
                    && *policy == RetryPolicy::new(5, Duration::from_millis(7))
            })
            .times(1)
            .returning(|_, _, _| Ok(json!({"status": "ok"})));

        let client = EchoIntelClient::with_executor(
            config().with_timeout_ms(1234).with_retry(5, 7),
            executor,
        )
        .unwrap();

        let health = client.health().await.unwrap();
        assert_eq!(health.status, "ok");
    }

    #[tokio::test]
    async fn test_authenticated_operation_headers() {
        let (executor, seen) = recording_executor(json!({}));
        let client = EchoIntelClient::with_executor(config(), executor).unwrap();

        client.segment_cluster_profiles(&json!({})).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].url, "https://x/api/segment_cluster_profiles");
        assert_eq!(seen[0].header("X-Customer-Api-Id"), Some("cust-1"));
        assert_eq!(seen[0].header("X-Secret"), Some("s3cret"));
    }

    #[tokio::test]
    async fn test_segmentation_report_language_query() {
        let (executor, seen) = recording_executor(json!({}));
        let client = EchoIntelClient::with_executor(config(), executor).unwrap();

        client
            .segmentation_report_i18n(&json!({}), None)
            .await
            .unwrap();
        client
            .segmentation_report_i18n(&json!({}), Some("es"))
            .await
            .unwrap();
        client
            .segmentation_report_json(&json!({}), None)
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].url, "https://x/api/segmentation_report_i18n?lang=pt");
        assert_eq!(seen[1].url, "https://x/api/segmentation_report_i18n?lang=es");
        assert_eq!(seen[2].url, "https://x/api/segmentation_report_json?lang=en");
    }

    #[tokio::test]
    async fn test_customer_management_requests() {
        let customer = json!({
            "customerApiId": "acme",
            "secret": "generated",
            "enabled": true,
            "tsCreate": "2025-01-01",
            "tsUpdate": "2025-01-01",
            "allowedRoutes": []
        });
        let (executor, seen) = recording_executor(customer);
        let client =
            EchoIntelClient::with_executor(config().with_admin_secret("adm"), executor).unwrap();

        let created = client
            .create_customer(&CreateCustomerRequest::new("acme"))
            .await
            .unwrap();
        assert_eq!(created.secret, "generated");

        client.get_customer("acme").await.unwrap();
        client
            .update_customer(
                "acme",
                &UpdateCustomerRequest {
                    enabled: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        client.delete_customer("acme").await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].method, HttpMethod::Post);
        assert_eq!(seen[0].url, "https://x/admin/customers");
        assert_eq!(seen[0].body, Some(json!({"customerApiId": "acme"})));
        assert_eq!(seen[1].method, HttpMethod::Get);
        assert_eq!(seen[1].url, "https://x/admin/customers/acme");
        assert!(seen[1].body.is_none());
        assert_eq!(seen[2].method, HttpMethod::Put);
        assert_eq!(seen[2].body, Some(json!({"enabled": false})));
        assert_eq!(seen[3].method, HttpMethod::Delete);
        assert!(seen.iter().all(|r| r.header("X-Secret").is_none()));
        assert!(seen.iter().all(|r| r.header("X-Admin-Secret") == Some("adm")));
    }

    #[tokio::test]
    async fn test_customer_id_is_encoded_as_one_segment() {
        let (executor, seen) = recording_executor(json!({"customerApiId": "x"}));
        let client = EchoIntelClient::with_executor(config(), executor).unwrap();

        client
            .get_customer("acme?include_disabled=true")
            .await
            .unwrap();
        client.delete_customer("team/a b").await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(
            seen[0].url,
            "https://x/admin/customers/acme%3Finclude_disabled=true"
        );
        assert_eq!(seen[1].url, "https://x/admin/customers/team%2Fa%20b");
        assert_eq!(seen[1].header("X-Admin-Secret"), Some(""));
    }

    #[tokio::test]
    async fn test_float_encoded_counts_decode() {
        let (executor, _) = recording_executor(json!({
            "npsScore": 25.0,
            "promoters": 2.0,
            "passives": 1.0,
            "detractors": 1.0,
            "totalResponses": 4.0,
            "interpretation": "Good"
        }));
        let client = EchoIntelClient::with_executor(config(), executor).unwrap();

        let nps = client.nps(&json!({"responses": [10, 9, 7, 3]})).await.unwrap();
        assert_eq!(nps.promoters, 2.0);
        assert_eq!(nps.total_responses, 4.0);
    }

    #[tokio::test]
    async fn test_list_customers_query() {
        let (executor, seen) = recording_executor(json!({"customers": []}));
        let client = EchoIntelClient::with_executor(config(), executor).unwrap();

        client.list_customers(false).await.unwrap();
        client.list_customers(true).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].url, "https://x/admin/customers");
        assert_eq!(seen[1].url, "https://x/admin/customers?include_disabled=true");
    }

    #[tokio::test]
    async fn test_errors_propagate_unchanged() {
        let mut executor = MockExecute::new();
        executor
            .expect_execute()
            .times(1)
            .returning(|_, _, _| Err(EchoIntelError::authentication("Invalid secret", 401)));
        let client = EchoIntelClient::with_executor(config(), executor).unwrap();

        let err = client.churn_risk(&json!({})).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Authentication);
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(err.message(), "Invalid secret");
    }

    #[tokio::test]
    async fn test_undecodable_response_is_generic_error() {
        let (executor, _) = recording_executor(json!({"status": 42}));
        let client = EchoIntelClient::with_executor(config(), executor).unwrap();

        let err = client.health().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert!(err.message().contains("Failed to decode response"));
        assert_eq!(err.context(), Some(&json!({"status": 42})));
    }

    #[tokio::test]
    async fn test_invoke_by_operation() {
        let (executor, seen) = recording_executor(json!({"anything": true}));
        let client = EchoIntelClient::with_executor(config(), executor).unwrap();

        let result: Value = client
            .invoke(Operation::ForecastCostTotus, &json!({"months": 6}))
            .await
            .unwrap();

        assert_eq!(result, json!({"anything": true}));
        assert_eq!(seen.lock().unwrap()[0].url, "https://x/api/forecast_cost_totus");
    }

    #[tokio::test]
    async fn test_end_to_end_against_server_with_trailing_slash() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/purchasing_segmentation")
            .match_header("x-customer-api-id", "cust-1")
            .match_header("x-secret", "s3cret")
            .with_status(200)
            .with_body(r#"{"clusters": 4}"#)
            .expect(1)
            .create_async()
            .await;

        let client = EchoIntelClient::new(
            ClientConfig::new("cust-1", "s3cret").with_api_url(format!("{}/", server.url())),
        )
        .unwrap();
        let result = client
            .purchasing_segmentation(&json!({"transactions": []}))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result["clusters"], 4);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let (executor, _) = recording_executor(json!({}));
        let result = EchoIntelClient::with_executor(ClientConfig::new("", "s"), executor);
        assert!(matches!(result, Err(ConfigError::Missing("customer_api_id"))));
    }
}
