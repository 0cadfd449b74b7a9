use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{ApiErrorResponse, DayRecord, MonthRef, UpdateDaysRequest};
use thiserror::Error;

use super::config::AppConfig;

/// Failures talking to the calendar backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network/transport failure or a non-2xx status
    #[error("{message}")]
    Fetch { message: String },
    /// The response body was not what we expected
    #[error("Failed to parse response: {message}")]
    Decode { message: String },
}

/// The calendar endpoints the editor depends on
#[async_trait(?Send)]
pub trait CalendarApi {
    /// Day types for a month. Days missing from the list are work days.
    async fn month_days(&self, month: MonthRef) -> Result<Vec<DayRecord>, ApiError>;

    /// The absence-code catalog for the chooser
    async fn absence_codes(&self) -> Result<Vec<String>, ApiError>;

    /// Apply one day type to every date in the request
    async fn update_days(&self, request: &UpdateDaysRequest) -> Result<(), ApiError>;
}

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    /// Create a new API client using the build-time configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::from_build_env())
    }

    /// Create a new API client with explicit endpoints
    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Fetch {
                message: format!("Network error: {}", e),
            })?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        response.json::<T>().await.map_err(|e| ApiError::Decode {
            message: e.to_string(),
        })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl CalendarApi for ApiClient {
    async fn month_days(&self, month: MonthRef) -> Result<Vec<DayRecord>, ApiError> {
        self.get_json(&self.config.month_url(month)).await
    }

    async fn absence_codes(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(&self.config.absence_codes_url()).await
    }

    async fn update_days(&self, request: &UpdateDaysRequest) -> Result<(), ApiError> {
        let response = Request::post(&self.config.update_days_url())
            .json(request)
            .map_err(|e| ApiError::Decode {
                message: format!("Failed to serialize request: {}", e),
            })?
            .send()
            .await
            .map_err(|e| ApiError::Fetch {
                message: format!("Network error: {}", e),
            })?;

        if response.ok() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Fetch {
        message: server_error_message(status, &body),
    }
}

/// The text to show for a failed response: the server's `error` field
/// verbatim, else the raw body, else the status code.
pub fn server_error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorResponse>(body) {
        return parsed.error;
    }
    let body = body.trim();
    if body.is_empty() {
        format!("Server error {}", status)
    } else {
        body.to_string()
    }
}
