use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::types::{
    BatchScore, ExpenseRecord, ItemsEnvelope, MetricsEnvelope, MetricsSnapshot, ScoreRequest,
    ScoreResponse,
};

pub const DATA_PATH: &str = "/dashboard/data";
pub const METRICS_PATH: &str = "/dashboard/metrics";
pub const PREDICT_PATH: &str = "/predict";
pub const BATCH_PATH: &str = "/batch";
pub const API_KEY_HEADER: &str = "X-API-Key";

/// The three calls the dashboard makes against the scoring service.
///
/// Futures are not required to be `Send`: the dashboard runs on a single
/// thread (the browser event loop, or a current-thread runtime in tests).
#[allow(async_fn_in_trait)]
pub trait ScoringApi {
    /// `GET /dashboard/data`, optionally filtered by category.
    async fn fetch_items(&self, category: Option<&str>)
        -> Result<Vec<ExpenseRecord>, DashboardError>;

    /// `POST /predict`.
    async fn predict(&self, request: &ScoreRequest) -> Result<ScoreResponse, DashboardError>;

    /// `GET /dashboard/metrics`.
    async fn fetch_metrics(&self) -> Result<MetricsSnapshot, DashboardError>;
}

/// `None` for a missing or blank filter, the trimmed category otherwise.
pub fn normalize_filter(category: Option<&str>) -> Option<&str> {
    category.map(str::trim).filter(|c| !c.is_empty())
}

/// reqwest-backed client. Uses the fetch API when compiled to wasm.
#[derive(Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    origin: String,
    api_key: Option<String>,
}

impl HttpApi {
    pub fn new(config: &DashboardConfig) -> Result<Self, DashboardError> {
        config.validate()?;

        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout_secs {
            Some(secs) => builder.timeout(std::time::Duration::from_secs(secs)),
            None => builder,
        };
        let client = builder
            .build()
            .map_err(|e| DashboardError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            origin: config.origin().to_string(),
            api_key: config.api_key().map(str::to_string),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    /// `/dashboard/data` with the category URL-encoded when present.
    pub fn data_url(&self, category: Option<&str>) -> String {
        match normalize_filter(category) {
            Some(c) => format!(
                "{}?category={}",
                self.url(DATA_PATH),
                urlencoding::encode(c)
            ),
            None => self.url(DATA_PATH),
        }
    }

    /// Score several requests in one call. Results come back in request order
    /// and carry no model name.
    pub async fn score_batch(
        &self,
        requests: &[ScoreRequest],
    ) -> Result<Vec<BatchScore>, DashboardError> {
        info!("Scoring batch of {} requests", requests.len());
        let response = self
            .with_api_key(self.client.post(self.url(BATCH_PATH)))
            .json(requests)
            .send()
            .await?;
        read_json(response).await
    }

    fn with_api_key(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        }
    }
}

impl ScoringApi for HttpApi {
    async fn fetch_items(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<ExpenseRecord>, DashboardError> {
        let url = self.data_url(category);
        debug!("Fetching dashboard data: {}", url);
        let response = self.client.get(&url).send().await?;
        let envelope: ItemsEnvelope = read_json(response).await?;
        Ok(envelope.items)
    }

    async fn predict(&self, request: &ScoreRequest) -> Result<ScoreResponse, DashboardError> {
        info!("Requesting score for {}", request.expense_id);
        let response = self
            .with_api_key(self.client.post(self.url(PREDICT_PATH)))
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }

    async fn fetch_metrics(&self) -> Result<MetricsSnapshot, DashboardError> {
        let response = self.client.get(self.url(METRICS_PATH)).send().await?;
        let envelope: MetricsEnvelope = read_json(response).await?;
        Ok(envelope.metrics)
    }
}

/// Turn a non-2xx response into `Status` with its body, otherwise decode JSON.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, DashboardError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(DashboardError::Status {
            status: status.as_u16(),
            body,
        });
    }
    decode(&body)
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, DashboardError> {
    serde_json::from_str(body).map_err(|e| DashboardError::Decode(e.to_string()))
}
