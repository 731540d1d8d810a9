//! Toggl API client.
//!
//! Talks to two Toggl endpoints with HTTP basic auth (`{token}:api_token`):
//!
//! - **Account**: `GET {api_url}/me?with_related_data=true`, used for the
//!   workspace listing
//! - **Detailed report**: `GET {reports_url}/details`, one page per request
//!
//! Both base URLs come from [`TogglConfig`] so self-hosted proxies and test
//! servers can stand in for the real service.

use super::{DetailedReportPage, TimeEntrySource, Workspace};
use crate::libs::config::ConfigModule;
use crate::libs::date::DATE_FORMAT;
use crate::libs::entry::TimeEntry;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use chrono::{DateTime, FixedOffset, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{header::USER_AGENT, Client, Response};
use serde::{Deserialize, Serialize};

// Include generated metadata with the reports user agent
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

pub const DEFAULT_API_URL: &str = "https://api.track.toggl.com/api/v8";
pub const DEFAULT_REPORTS_URL: &str = "https://api.track.toggl.com/reports/api/v2";
const ACCOUNT_URL: &str = "me";
const DETAILS_URL: &str = "details";
const API_TOKEN_PASSWORD: &str = "api_token";

#[derive(Deserialize, Debug)]
struct AccountResponse {
    data: AccountData,
}

#[derive(Deserialize, Debug)]
struct AccountData {
    #[serde(default)]
    workspaces: Vec<Workspace>,
}

/// Body of a detailed report page.
#[derive(Deserialize, Debug)]
pub struct DetailedReportResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub per_page: u64,
    #[serde(default)]
    pub data: Vec<DetailedTimeEntry>,
}

/// A time entry as the reports API returns it. Nullable fields read as empty.
#[derive(Deserialize, Debug)]
pub struct DetailedTimeEntry {
    pub description: Option<String>,
    pub project: Option<String>,
    pub tags: Option<Vec<String>>,
    /// Duration in milliseconds.
    #[serde(default)]
    pub dur: i64,
    pub start: DateTime<FixedOffset>,
}

impl From<DetailedTimeEntry> for TimeEntry {
    fn from(entry: DetailedTimeEntry) -> Self {
        Self {
            project: entry.project.unwrap_or_default(),
            tags: entry.tags.unwrap_or_default(),
            description: entry.description.unwrap_or_default(),
            duration: entry.dur,
            start: entry.start,
        }
    }
}

impl From<DetailedReportResponse> for DetailedReportPage {
    fn from(response: DetailedReportResponse) -> Self {
        Self {
            entries: response.data.into_iter().map(TimeEntry::from).collect(),
            total_count: response.total_count,
            per_page: response.per_page,
        }
    }
}

#[derive(Debug)]
pub struct Toggl {
    client: Client,
    config: TogglConfig,
    token: String,
}

impl Toggl {
    pub fn new(config: &TogglConfig, token: &str) -> Self {
        Self::with_client(Client::new(), config, token)
    }

    /// Client built on a preconfigured `reqwest::Client` (proxies, timeouts).
    pub fn with_client(client: Client, config: &TogglConfig, token: &str) -> Self {
        Self {
            client,
            config: config.clone(),
            token: token.to_owned(),
        }
    }

    fn url(base: &str, path: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), path)
    }

    fn user_agent() -> String {
        format!("{}/{}", APP_METADATA_NAME, APP_METADATA_VERSION)
    }

    fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(msg_error_anyhow!(Message::TogglRequestFailed(status.as_u16())));
        }
        Ok(response)
    }
}

impl TimeEntrySource for Toggl {
    async fn fetch_workspaces(&self) -> Result<Vec<Workspace>> {
        let url = Self::url(&self.config.api_url, ACCOUNT_URL);
        let res = self
            .client
            .get(&url)
            .basic_auth(&self.token, Some(API_TOKEN_PASSWORD))
            .header(USER_AGENT, Self::user_agent())
            .query(&[("with_related_data", "true")])
            .send()
            .await?;

        let account = Self::check_status(res)?.json::<AccountResponse>().await?;
        Ok(account.data.workspaces)
    }

    async fn fetch_detailed_report(&self, workspace_id: u64, since: NaiveDate, until: NaiveDate, page: u32) -> Result<DetailedReportPage> {
        let url = Self::url(&self.config.reports_url, DETAILS_URL);
        let query = [
            ("workspace_id", workspace_id.to_string()),
            ("since", since.format(DATE_FORMAT).to_string()),
            ("until", until.format(DATE_FORMAT).to_string()),
            ("page", page.to_string()),
            ("user_agent", APP_METADATA_USER_AGENT.to_string()),
        ];
        tracing::debug!(%url, workspace_id, page, "requesting detailed report");

        let res = self
            .client
            .get(&url)
            .basic_auth(&self.token, Some(API_TOKEN_PASSWORD))
            .header(USER_AGENT, Self::user_agent())
            .query(&query)
            .send()
            .await?;

        let report = Self::check_status(res)?.json::<DetailedReportResponse>().await?;
        Ok(report.into())
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_reports_url() -> String {
    DEFAULT_REPORTS_URL.to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TogglConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<u64>,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_reports_url")]
    pub reports_url: String,
}

impl Default for TogglConfig {
    fn default() -> Self {
        Self {
            token: None,
            workspace_id: None,
            api_url: default_api_url(),
            reports_url: default_reports_url(),
        }
    }
}

impl TogglConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "toggl".to_string(),
            name: "Toggl".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleToggl);

        let token: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTogglToken.to_string())
            .default(config.token.unwrap_or_default())
            .interact_text()?;

        let workspace_id: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWorkspaceId.to_string())
            .default(config.workspace_id.map(|id| id.to_string()).unwrap_or_default())
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                match input.is_empty() || input.parse::<u64>().is_ok() {
                    true => Ok(()),
                    false => Err(Message::WorkspaceIdInvalid.to_string()),
                }
            })
            .interact_text()?;

        Ok(Self {
            token: Some(token).filter(|token| !token.is_empty()),
            workspace_id: workspace_id.parse().ok(),
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTogglApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            reports_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTogglReportsUrl.to_string())
                .default(config.reports_url)
                .interact_text()?,
        })
    }
}
