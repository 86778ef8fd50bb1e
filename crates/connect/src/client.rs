//! HTTP client for the training center management API.
//!
//! This module implements the core's [`MarketingRepositoryTrait`] on top of
//! the REST endpoints exposed by the training center backend. Transport and
//! status failures are translated into the core error taxonomy here so that
//! callers never see `reqwest` types.

use async_trait::async_trait;
use log::{debug, error, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use traincenter_core::errors::{EntityKind, Error, Result, ValidationError};
use traincenter_core::marketing::{
    EmployeeStatsRecord, MarketingEmployee, MarketingRepositoryTrait, MarketingTarget,
    NewMarketingTarget, Period, TargetChanges,
};

use crate::config::ApiConfig;

const TARGETS_PATH: &str = "/api/marketing/targets";
const EMPLOYEES_PATH: &str = "/api/marketing/employees";
const EMPLOYEE_STATS_PATH: &str = "/api/marketing/employees/stats";

// ─────────────────────────────────────────────────────────────────────────────
// API Response Types
// ─────────────────────────────────────────────────────────────────────────────

/// Success payloads come either bare or wrapped in `{"data": ...}`.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum ApiPayload<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> ApiPayload<T> {
    fn into_inner(self) -> T {
        match self {
            ApiPayload::Wrapped { data } => data,
            ApiPayload::Bare(value) => value,
        }
    }
}

#[derive(Debug, Default, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    field: Option<String>,
}

/// What a request was about, used to give status codes their domain meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RequestContext {
    Read,
    CreateTarget {
        employee_id: i64,
        month: u32,
        year: i32,
    },
    Target(i64),
}

/// Translates a non-success HTTP status into the core error taxonomy.
pub(crate) fn map_status_error(status: StatusCode, body: &str, context: RequestContext) -> Error {
    let parsed = serde_json::from_str::<ApiErrorResponse>(body).unwrap_or_default();
    let message = parsed
        .message
        .or(parsed.error)
        .unwrap_or_else(|| match status.canonical_reason() {
            Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
            None => format!("HTTP {}", status.as_u16()),
        });

    match (status, context) {
        (StatusCode::NOT_FOUND, RequestContext::Target(id)) => Error::target_not_found(id),
        (StatusCode::NOT_FOUND, RequestContext::CreateTarget { employee_id, .. }) => {
            Error::NotFound {
                entity: EntityKind::MarketingEmployee,
                id: employee_id.to_string(),
            }
        }
        (
            StatusCode::CONFLICT,
            RequestContext::CreateTarget {
                employee_id,
                month,
                year,
            },
        ) => Error::DuplicateTarget {
            employee_id,
            month,
            year,
        },
        (StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY, _) => {
            Error::Validation(ValidationError::InvalidInput {
                field: parsed.field.unwrap_or_else(|| "request".to_string()),
                message,
            })
        }
        (StatusCode::REQUEST_TIMEOUT | StatusCode::TOO_MANY_REQUESTS, _) => {
            Error::CollaboratorUnavailable(message)
        }
        (s, _) if s.is_server_error() => Error::CollaboratorUnavailable(message),
        _ => Error::Unexpected(format!("API error {}: {}", status.as_u16(), message)),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Training Center API Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the training center marketing endpoints.
///
/// # Example
///
/// ```ignore
/// let client = TrainingCenterApiClient::new(&ApiConfig::from_env())?;
/// let service = MarketingTargetService::new(Arc::new(client), PeriodFilter::default());
/// ```
#[derive(Debug, Clone)]
pub struct TrainingCenterApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: Option<HeaderValue>,
}

impl TrainingCenterApiClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the access token is not a valid header value or the
    /// HTTP client cannot be initialized.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let auth_header = config
            .access_token
            .as_deref()
            .map(|token| {
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| Error::Unexpected(format!("Invalid access token format: {}", e)))
            })
            .transpose()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(auth) = &self.auth_header {
            headers.insert(AUTHORIZATION, auth.clone());
        }
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and returns the raw body of a successful response.
    async fn execute(&self, request: RequestBuilder, context: RequestContext) -> Result<String> {
        let response = request.headers(self.headers()).send().await.map_err(|e| {
            error!("[TrainingCenterApi] Request failed: {}", e);
            Error::CollaboratorUnavailable(format!("Request failed: {}", e))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            Error::CollaboratorUnavailable(format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            let err = map_status_error(status, &body, context);
            warn!("[TrainingCenterApi] {} -> {}", status, err);
            return Err(err);
        }
        Ok(body)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: RequestContext,
    ) -> Result<T> {
        let body = self.execute(request, context).await?;
        serde_json::from_str::<ApiPayload<T>>(&body)
            .map(ApiPayload::into_inner)
            .map_err(|e| {
                Error::Unexpected(format!(
                    "Failed to parse response: {} - {}",
                    e,
                    body.chars().take(200).collect::<String>()
                ))
            })
    }

    async fn get_for_period<T: DeserializeOwned>(&self, path: &str, period: Period) -> Result<T> {
        let url = self.url(path);
        debug!("[TrainingCenterApi] GET {} ({})", url, period);
        let request = self
            .client
            .get(&url)
            .query(&[("month", period.month.to_string()), ("year", period.year.to_string())]);
        self.send_json(request, RequestContext::Read).await
    }
}

#[async_trait]
impl MarketingRepositoryTrait for TrainingCenterApiClient {
    async fn list_targets(&self, period: Period) -> Result<Vec<MarketingTarget>> {
        self.get_for_period(TARGETS_PATH, period).await
    }

    async fn create_target(&self, new_target: NewMarketingTarget) -> Result<MarketingTarget> {
        let employee_id = new_target.employee_id.ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("employeeId".to_string()))
        })?;
        let context = RequestContext::CreateTarget {
            employee_id,
            month: new_target.month,
            year: new_target.year,
        };
        let url = self.url(TARGETS_PATH);
        debug!("[TrainingCenterApi] POST {}", url);
        self.send_json(self.client.post(&url).json(&new_target), context)
            .await
    }

    async fn update_target(
        &self,
        target_id: i64,
        changes: TargetChanges,
    ) -> Result<MarketingTarget> {
        let url = self.url(&format!("{}/{}", TARGETS_PATH, target_id));
        debug!("[TrainingCenterApi] PUT {}", url);
        self.send_json(
            self.client.put(&url).json(&changes),
            RequestContext::Target(target_id),
        )
        .await
    }

    async fn delete_target(&self, target_id: i64) -> Result<()> {
        let url = self.url(&format!("{}/{}", TARGETS_PATH, target_id));
        debug!("[TrainingCenterApi] DELETE {}", url);
        self.execute(self.client.delete(&url), RequestContext::Target(target_id))
            .await?;
        Ok(())
    }

    async fn list_employees(&self) -> Result<Vec<MarketingEmployee>> {
        let url = self.url(EMPLOYEES_PATH);
        debug!("[TrainingCenterApi] GET {}", url);
        self.send_json(self.client.get(&url), RequestContext::Read)
            .await
    }

    async fn list_employee_stats(&self, period: Period) -> Result<Vec<EmployeeStatsRecord>> {
        self.get_for_period(EMPLOYEE_STATS_PATH, period).await
    }
}
