//! EchoIntel API paths and the operation catalog.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::http::HttpMethod;

/// Production API base URL.
pub const BASE_URL: &str = "https://ai.echosistema.live";

// System
pub const HEALTH: &str = "/health";

// Forecasting
pub const FORECAST_REVENUE: &str = "/api/forecast_revenue";
pub const FORECAST_COST: &str = "/api/forecast_cost";
pub const FORECAST_COST_IMPROVED: &str = "/api/forecast_cost_improved";
pub const FORECAST_UNITS: &str = "/api/forecast_units";
pub const FORECAST_COST_TOTUS: &str = "/api/forecast_cost_totus";

// Inventory
pub const INVENTORY_OPTIMIZATION: &str = "/api/inventory_optimization";
pub const INVENTORY_HISTORY_IMPROVED: &str = "/api/inventory_history_improved";

// Customer analytics
pub const CUSTOMER_SEGMENTATION: &str = "/api/customer_segmentation";
pub const CUSTOMER_FEATURES: &str = "/api/customer_features";
pub const CUSTOMER_LOYALTY: &str = "/api/customer_loyalty";
pub const CUSTOMER_RFM: &str = "/api/customer_rfm";
pub const CUSTOMER_CLV_FEATURES: &str = "/api/customer_clv_features";
pub const CUSTOMER_CLV_FORECAST: &str = "/api/customer_clv_forecast";

// Churn
pub const CHURN_RISK: &str = "/api/churn_risk";
pub const CHURN_LABEL: &str = "/api/churn_label";

// NPS
pub const NPS: &str = "/api/nps";

// Propensity
pub const PROPENSITY_BUY_PRODUCT: &str = "/api/propensity_buy_product";
pub const PROPENSITY_RESPOND_CAMPAIGN: &str = "/api/propensity_respond_campaign";
pub const PROPENSITY_UPGRADE_PLAN: &str = "/api/propensity_upgrade_plan";

// Recommendations
pub const RECOMMEND_USER_ITEMS: &str = "/api/recommend_user_items";
pub const RECOMMEND_SIMILAR_ITEMS: &str = "/api/recommend_similar_items";

// Cross-sell and upsell
pub const CROSS_SELL_MATRIX: &str = "/api/cross_sell_matrix";
pub const UPSELL_SUGGESTIONS: &str = "/api/upsell_suggestions";

// Dynamic pricing
pub const DYNAMIC_PRICING_RECOMMEND: &str = "/api/dynamic_pricing_recommend";

// Sentiment
pub const SENTIMENT_REPORT: &str = "/api/sentiment_report";
pub const SENTIMENT_REALTIME: &str = "/api/sentiment_realtime";

// Anomaly detection
pub const ANOMALY_TRANSACTIONS: &str = "/api/anomaly_transactions";
pub const ANOMALY_ACCOUNTS: &str = "/api/anomaly_accounts";
pub const ANOMALY_GRAPH: &str = "/api/anomaly_graph";

// Credit risk
pub const CREDIT_RISK_SCORE: &str = "/api/credit_risk_score";
pub const CREDIT_RISK_EXPLAIN: &str = "/api/credit_risk_explain";

// Marketing attribution
pub const CHANNEL_ATTRIBUTION: &str = "/api/channel_attribution";
pub const UPLIFT_MODEL: &str = "/api/uplift_model";

// Customer journey
pub const JOURNEY_MARKOV: &str = "/api/journey_markov";
pub const JOURNEY_SEQUENCES: &str = "/api/journey_sequences";

// NLP (the server spells these paths "analisys")
pub const NLP_ANALYSIS: &str = "/api/nlp_analisys";
pub const NLP_ANALYSIS_EN: &str = "/api/nlp_analisys_en";
pub const NLP_EXCESS_INVENTORY_REPORT: &str = "/api/nlp_openai_excess_inventory_report";
pub const SANITIZE_TEXT: &str = "/api/sanitize_text";

// Advanced segmentation
pub const PURCHASING_SEGMENTATION: &str = "/api/purchasing_segmentation";
pub const PURCHASING_SEGMENTATION_DENDROGRAM: &str = "/api/purchasing_segmentation_dendrogram";
pub const SEGMENT_HIERARCHY_CHART: &str = "/api/segment_hierarchy_chart";
pub const SEGMENT_SUBSEGMENT_EXPLORE: &str = "/api/segment_subsegment_explore";
pub const SEGMENT_CLUSTER_PROFILES: &str = "/api/segment_cluster_profiles";

// Reporting
pub const SEGMENTATION_REPORT: &str = "/api/segmentation_report";
pub const SEGMENTATION_REPORT_I18N: &str = "/api/segmentation_report_i18n";
pub const SEGMENTATION_REPORT_JSON: &str = "/api/segmentation_report_json";

// Admin
pub const ADMIN_CUSTOMERS: &str = "/admin/customers";

/// Which credentials a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTier {
    /// Content headers only.
    Public,
    /// Content headers plus customer id, secret and (if configured) admin secret.
    Customer,
    /// Content headers plus the admin secret only.
    Admin,
}

macro_rules! operations {
    ($($variant:ident => $name:literal, $method:ident, $path:ident, $tier:ident;)*) => {
        /// A remote operation with a fixed path.
        ///
        /// Customer management calls take a path parameter and are exposed
        /// only as methods on the client.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operation {
            $($variant,)*
        }

        impl Operation {
            /// Every catalog operation, in declaration order.
            pub const ALL: &'static [Operation] = &[$(Operation::$variant,)*];

            /// Kebab-case name used on the command line.
            pub fn name(self) -> &'static str {
                match self {
                    $(Operation::$variant => $name,)*
                }
            }

            pub fn path(self) -> &'static str {
                match self {
                    $(Operation::$variant => $path,)*
                }
            }

            pub fn method(self) -> HttpMethod {
                match self {
                    $(Operation::$variant => HttpMethod::$method,)*
                }
            }

            pub fn tier(self) -> AuthTier {
                match self {
                    $(Operation::$variant => AuthTier::$tier,)*
                }
            }
        }
    };
}

operations! {
    Health => "health", Get, HEALTH, Public;

    ForecastRevenue => "forecast-revenue", Post, FORECAST_REVENUE, Public;
    ForecastCost => "forecast-cost", Post, FORECAST_COST, Public;
    ForecastCostImproved => "forecast-cost-improved", Post, FORECAST_COST_IMPROVED, Public;
    ForecastUnits => "forecast-units", Post, FORECAST_UNITS, Public;
    ForecastCostTotus => "forecast-cost-totus", Post, FORECAST_COST_TOTUS, Public;

    InventoryOptimization => "inventory-optimization", Post, INVENTORY_OPTIMIZATION, Public;
    InventoryHistoryImproved => "inventory-history-improved", Post, INVENTORY_HISTORY_IMPROVED, Public;

    CustomerSegmentation => "customer-segmentation", Post, CUSTOMER_SEGMENTATION, Public;
    CustomerFeatures => "customer-features", Post, CUSTOMER_FEATURES, Public;
    CustomerLoyalty => "customer-loyalty", Post, CUSTOMER_LOYALTY, Public;
    CustomerRfm => "customer-rfm", Post, CUSTOMER_RFM, Public;
    CustomerClvFeatures => "customer-clv-features", Post, CUSTOMER_CLV_FEATURES, Public;
    CustomerClvForecast => "customer-clv-forecast", Post, CUSTOMER_CLV_FORECAST, Public;

    ChurnRisk => "churn-risk", Post, CHURN_RISK, Public;
    ChurnLabel => "churn-label", Post, CHURN_LABEL, Public;

    Nps => "nps", Post, NPS, Public;

    PropensityBuyProduct => "propensity-buy-product", Post, PROPENSITY_BUY_PRODUCT, Public;
    PropensityRespondCampaign => "propensity-respond-campaign", Post, PROPENSITY_RESPOND_CAMPAIGN, Public;
    PropensityUpgradePlan => "propensity-upgrade-plan", Post, PROPENSITY_UPGRADE_PLAN, Public;

    RecommendUserItems => "recommend-user-items", Post, RECOMMEND_USER_ITEMS, Public;
    RecommendSimilarItems => "recommend-similar-items", Post, RECOMMEND_SIMILAR_ITEMS, Public;

    CrossSellMatrix => "cross-sell-matrix", Post, CROSS_SELL_MATRIX, Public;
    UpsellSuggestions => "upsell-suggestions", Post, UPSELL_SUGGESTIONS, Public;

    DynamicPricingRecommend => "dynamic-pricing-recommend", Post, DYNAMIC_PRICING_RECOMMEND, Public;

    SentimentReport => "sentiment-report", Post, SENTIMENT_REPORT, Public;
    SentimentRealtime => "sentiment-realtime", Post, SENTIMENT_REALTIME, Public;

    AnomalyTransactions => "anomaly-transactions", Post, ANOMALY_TRANSACTIONS, Public;
    AnomalyAccounts => "anomaly-accounts", Post, ANOMALY_ACCOUNTS, Public;
    AnomalyGraph => "anomaly-graph", Post, ANOMALY_GRAPH, Public;

    CreditRiskScore => "credit-risk-score", Post, CREDIT_RISK_SCORE, Public;
    CreditRiskExplain => "credit-risk-explain", Post, CREDIT_RISK_EXPLAIN, Public;

    ChannelAttribution => "channel-attribution", Post, CHANNEL_ATTRIBUTION, Public;
    UpliftModel => "uplift-model", Post, UPLIFT_MODEL, Public;

    JourneyMarkov => "journey-markov", Post, JOURNEY_MARKOV, Public;
    JourneySequences => "journey-sequences", Post, JOURNEY_SEQUENCES, Public;

    NlpAnalysis => "nlp-analysis", Post, NLP_ANALYSIS, Public;
    NlpAnalysisEn => "nlp-analysis-en", Post, NLP_ANALYSIS_EN, Public;
    NlpExcessInventoryReport => "nlp-excess-inventory-report", Post, NLP_EXCESS_INVENTORY_REPORT, Public;
    SanitizeText => "sanitize-text", Post, SANITIZE_TEXT, Public;

    PurchasingSegmentation => "purchasing-segmentation", Post, PURCHASING_SEGMENTATION, Customer;
    PurchasingSegmentationDendrogram => "purchasing-segmentation-dendrogram", Post, PURCHASING_SEGMENTATION_DENDROGRAM, Customer;
    SegmentHierarchyChart => "segment-hierarchy-chart", Post, SEGMENT_HIERARCHY_CHART, Customer;
    SegmentSubsegmentExplore => "segment-subsegment-explore", Post, SEGMENT_SUBSEGMENT_EXPLORE, Customer;
    SegmentClusterProfiles => "segment-cluster-profiles", Post, SEGMENT_CLUSTER_PROFILES, Customer;

    SegmentationReport => "segmentation-report", Post, SEGMENTATION_REPORT, Customer;
    SegmentationReportI18n => "segmentation-report-i18n", Post, SEGMENTATION_REPORT_I18N, Customer;
    SegmentationReportJson => "segmentation-report-json", Post, SEGMENTATION_REPORT_JSON, Customer;
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("Unknown operation '{0}'. Run `echointel operations` to list them.")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-").to_ascii_lowercase();
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == wanted)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}
