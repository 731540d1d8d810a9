//! The daily report command.
//!
//! Validates the inputs in a fixed order (date, token, workspace), fetches
//! every page of the detailed report, composes it and prints the rendered
//! text. Any failure ends the run before anything of the report is printed.

use super::{workspaces, Cli};
use crate::{
    api::{TimeEntrySource, Toggl},
    libs::{
        config::{Config, ReportConfig},
        date::{resolve_date, ReportDate},
        error::ReportError,
        report::compose,
        view::View,
    },
};

/// Presentation switches after merging flags with the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub merge_equal_descriptions: bool,
    pub show_duration_for_each: bool,
}

impl ReportOptions {
    /// A switch is on when either the flag or the configuration turns it on.
    pub fn resolve(do_not_merge_equal: bool, show_duration_for_each: bool, config: &ReportConfig) -> Self {
        Self {
            merge_equal_descriptions: !(do_not_merge_equal || config.do_not_merge_equal),
            show_duration_for_each: show_duration_for_each || config.show_duration_for_each,
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            merge_equal_descriptions: true,
            show_duration_for_each: false,
        }
    }
}

/// Picks the token from the flag or, when it is absent or empty, from the config.
pub fn resolve_token(flag: Option<&str>, config: &Config) -> Result<String, ReportError> {
    flag.filter(|token| !token.is_empty())
        .or_else(|| config.token())
        .map(str::to_string)
        .ok_or(ReportError::MissingToken)
}

/// Picks the raw workspace id from the flag or the config.
pub fn resolve_workspace_id(flag: Option<&str>, config: &Config) -> Option<String> {
    flag.filter(|id| !id.is_empty())
        .map(str::to_string)
        .or_else(|| config.workspace_id().map(|id| id.to_string()))
}

pub fn parse_workspace_id(raw: &str) -> Result<u64, ReportError> {
    raw.parse::<u64>().map_err(|_| ReportError::InvalidWorkspaceId(raw.to_string()))
}

/// Fetches, composes and renders the report of one workspace and day.
pub async fn build<S: TimeEntrySource>(source: &S, workspace_id: u64, date: ReportDate, options: ReportOptions) -> Result<String, ReportError> {
    let entries = source
        .fetch_time_entries(workspace_id, date.date())
        .await
        .map_err(ReportError::ReportFetchFailure)?;

    let report = compose(&entries, options.merge_equal_descriptions);
    Ok(View::report(&date.to_string(), &report, options.show_duration_for_each))
}

pub async fn cmd(cli: Cli) -> Result<(), ReportError> {
    let date = resolve_date(&cli.date)?;
    let config = Config::read().map_err(ReportError::Config)?;
    let token = resolve_token(cli.token.as_deref(), &config)?;
    let client = Toggl::new(&config.toggl_or_default(), &token);

    let workspace_id = match resolve_workspace_id(cli.workspace_id.as_deref(), &config) {
        Some(id) if !cli.print_workspaces => id,
        other => return workspaces::cmd(&client, other.is_none() && !cli.print_workspaces).await,
    };
    let workspace_id = parse_workspace_id(&workspace_id)?;

    let options = ReportOptions::resolve(cli.do_not_merge_equal, cli.show_duration_for_each, &config.report_or_default());
    tracing::debug!(%date, workspace_id, ?options, "building report");

    let text = build(&client, workspace_id, date, options).await?;
    print!("{}", text);
    Ok(())
}
