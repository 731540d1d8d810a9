//! Display implementation for reporter messages.
//!
//! Keeps all message text in one match so wording stays consistent between
//! diagnostics, prompts and the report frame.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

const HELP_HINT: &str = "Re-run app with \"-h\" or \"--help\" flag.";

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === REPORT MESSAGES ===
            Message::ReportHeader(date) => format!("Report for {}", date),
            Message::NoDataToPrint => "There is no data to print.".to_string(),
            Message::ReportTotal(duration) => format!("Total: {}", duration),

            // === WORKSPACE MESSAGES ===
            Message::WorkspacesHeader => "Your workspaces:".to_string(),
            Message::WorkspaceIdNotEntered => "You did not entered workspace ID.".to_string(),

            // === VALIDATION MESSAGES ===
            Message::TokenMissing => format!("Token is missing. {}", HELP_HINT),
            Message::DateInvalid => format!("Date is invalid. {}", HELP_HINT),
            Message::WorkspaceIdInvalid => "Workspace ID is invalid.".to_string(),

            // === API MESSAGES ===
            Message::AccountFetchFailed => "Unable to get account.".to_string(),
            Message::ReportFetchFailed(error) => format!("Unable to get report: {}", error),
            Message::TogglRequestFailed(status) => format!("Toggl API responded with status {}", status),
            Message::FetchingReportPage { page, page_count } => format!("Fetching report page {} of {}", page, page_count),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigReadFailed(error) => format!("Failed to read config: {}", error),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleToggl => "Toggl settings".to_string(),
            Message::ConfigModuleReport => "Report settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptTogglToken => "Enter your Toggl API token (you can get it from your profile page)".to_string(),
            Message::PromptWorkspaceId => "Enter the default workspace ID (leave empty to skip)".to_string(),
            Message::PromptTogglApiUrl => "Enter the Toggl API URL".to_string(),
            Message::PromptTogglReportsUrl => "Enter the Toggl Reports API URL".to_string(),
            Message::PromptDoNotMergeEqual => "Do not merge tasks with equal descriptions?".to_string(),
            Message::PromptShowDurationForEach => "Show duration for each task?".to_string(),
        };

        write!(f, "{}", text)
    }
}
