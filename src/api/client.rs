use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use log::{debug, info};
use reqwest::{Client, Method};
use serde_json::{json, Value};

use crate::models::{OvertimeRequest, OvertimeStatus, Project, TimeEntry};

use super::operations::Operation;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Explicit backend context, supplied at construction. No ambient token
/// reads at call time: swapping the token after a login is an explicit
/// `set_auth_token`.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }
}

/// Thin client for the backend's fixed REST surface: one request, one
/// response, no retry, no backoff.
pub struct ApiClient {
    config: ApiConfig,
    client: Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(anyhow!("backend base URL must not be empty"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn set_auth_token(&mut self, token: impl Into<String>) {
        self.config.auth_token = Some(token.into());
    }

    /// One round trip to the endpoint mapped to `operation`. GET-style
    /// operations carry the payload's top-level scalars as query pairs;
    /// POST-style ones send it as the JSON body. Non-success statuses come
    /// back as errors carrying the status and response body.
    pub async fn request(&self, operation: Operation, payload: Value) -> Result<Value> {
        let url = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            operation.path()
        );
        debug!("{} {}", operation.as_str(), url);

        let mut request = if operation.method() == Method::GET {
            self.client.get(&url).query(&flatten_query(&payload))
        } else {
            self.client.request(operation.method(), &url).json(&payload)
        };

        if let Some(token) = &self.config.auth_token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("request for {} failed", operation.as_str()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "{} returned {}: {}",
                operation.as_str(),
                status,
                body
            ));
        }

        response
            .json()
            .await
            .with_context(|| format!("invalid JSON from {}", operation.as_str()))
    }

    /// Authenticate and keep the returned token for subsequent calls.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<String> {
        let result = self
            .request(
                Operation::Login,
                json!({ "username": username, "password": password }),
            )
            .await?;

        let token = result["token"]
            .as_str()
            .ok_or_else(|| anyhow!("login response carried no token"))?
            .to_string();
        self.set_auth_token(token.clone());
        info!("logged in as {username}");
        Ok(token)
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let result = self.request(Operation::ListProjects, Value::Null).await?;
        serde_json::from_value(result).context("invalid project list payload")
    }

    pub async fn save_project(&self, project: &Project) -> Result<Project> {
        let result = self
            .request(Operation::SaveProject, serde_json::to_value(project)?)
            .await?;
        serde_json::from_value(result).context("invalid project payload")
    }

    /// User records stay opaque; the admin UI renders them as-is.
    pub async fn list_users(&self) -> Result<Value> {
        self.request(Operation::ListUsers, Value::Null).await
    }

    pub async fn save_user(&self, user: Value) -> Result<Value> {
        self.request(Operation::SaveUser, user).await
    }

    pub async fn list_entries(&self, user_id: &str, date: NaiveDate) -> Result<Vec<TimeEntry>> {
        let result = self
            .request(
                Operation::ListEntries,
                json!({ "userId": user_id, "date": date }),
            )
            .await?;
        serde_json::from_value(result).context("invalid entry list payload")
    }

    pub async fn submit_entry(&self, entry: &TimeEntry) -> Result<TimeEntry> {
        debug!("submitting entry {} ({})", entry.id, entry.status.as_str());
        let result = self
            .request(Operation::SubmitEntry, serde_json::to_value(entry)?)
            .await?;
        serde_json::from_value(result).context("invalid entry payload")
    }

    pub async fn list_overtime_requests(
        &self,
        user_id: Option<&str>,
    ) -> Result<Vec<OvertimeRequest>> {
        let payload = match user_id {
            Some(user_id) => json!({ "userId": user_id }),
            None => Value::Null,
        };
        let result = self
            .request(Operation::ListOvertimeRequests, payload)
            .await?;
        serde_json::from_value(result).context("invalid overtime request list payload")
    }

    pub async fn submit_overtime_request(
        &self,
        request: &OvertimeRequest,
    ) -> Result<OvertimeRequest> {
        let result = self
            .request(
                Operation::SubmitOvertimeRequest,
                serde_json::to_value(request)?,
            )
            .await?;
        serde_json::from_value(result).context("invalid overtime request payload")
    }

    /// Admin approval or rejection of a pending request.
    pub async fn resolve_overtime_request(
        &self,
        request_id: &str,
        status: OvertimeStatus,
    ) -> Result<OvertimeRequest> {
        info!(
            "resolving overtime request {request_id} as {}",
            status.as_str()
        );
        let result = self
            .request(
                Operation::ResolveOvertimeRequest,
                json!({ "requestId": request_id, "status": status }),
            )
            .await?;
        serde_json::from_value(result).context("invalid overtime request payload")
    }

    /// Monthly payroll report for one user. Report rendering is a server
    /// concern, so the payload stays opaque.
    pub async fn payroll_report(&self, user_id: &str, year: i32, month: u32) -> Result<Value> {
        self.request(
            Operation::PayrollReport,
            json!({ "userId": user_id, "year": year, "month": month }),
        )
        .await
    }

    pub async fn list_notifications(&self) -> Result<Value> {
        self.request(Operation::ListNotifications, Value::Null).await
    }
}

/// Flatten a JSON object's top-level scalars into query pairs for GET-style
/// operations. Nested values are dropped: the fixed-endpoint pattern has no
/// nested filter support.
fn flatten_query(payload: &Value) -> Vec<(String, String)> {
    let Some(object) = payload.as_object() else {
        return Vec::new();
    };

    object
        .iter()
        .filter_map(|(key, value)| {
            let rendered = match value {
                Value::String(text) => text.clone(),
                Value::Number(number) => number.to_string(),
                Value::Bool(flag) => flag.to_string(),
                _ => return None,
            };
            Some((key.clone(), rendered))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = ApiConfig::new("http://localhost:8000");
        let client = ApiClient::new(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_empty_base_url() {
        let client = ApiClient::new(ApiConfig::new(""));
        assert!(client.is_err());
    }

    #[test]
    fn test_token_swap_after_login() {
        let config = ApiConfig::new("http://localhost:8000").with_auth_token("stale");
        let mut client = ApiClient::new(config).unwrap();
        client.set_auth_token("fresh");
        assert_eq!(client.config().auth_token.as_deref(), Some("fresh"));
    }

    #[test]
    fn test_flatten_query_keeps_top_level_scalars() {
        let payload = json!({
            "userId": "u-1",
            "year": 2024,
            "includeDrafts": true,
            "filter": { "nested": "dropped" },
            "tags": ["dropped", "too"],
        });

        let mut pairs = flatten_query(&payload);
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("includeDrafts".to_string(), "true".to_string()),
                ("userId".to_string(), "u-1".to_string()),
                ("year".to_string(), "2024".to_string()),
            ]
        );
    }

    #[test]
    fn test_flatten_query_of_null_is_empty() {
        assert!(flatten_query(&Value::Null).is_empty());
    }
}
