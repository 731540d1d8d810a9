//! Terminal errors of a reporter run.
//!
//! Every variant stops the run without printing a partial report. The
//! `Display` text is the diagnostic shown to the user.

use super::date::DateError;
use super::messages::Message;
use super::view::View;
use crate::api::Workspace;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{}", Message::TokenMissing)]
    MissingToken,

    #[error("{}", Message::DateInvalid)]
    InvalidDate(#[from] DateError),

    #[error("{}", Message::WorkspaceIdInvalid)]
    InvalidWorkspaceId(String),

    /// No workspace id was given; the diagnostic lists the available ones.
    #[error("{}", View::workspaces(.workspaces, true).trim_end())]
    MissingWorkspaceId { workspaces: Vec<Workspace> },

    #[error("{}", Message::AccountFetchFailed)]
    AccountFetchFailure(#[source] anyhow::Error),

    #[error("{}", Message::ReportFetchFailed(chain(.0)))]
    ReportFetchFailure(#[source] anyhow::Error),

    #[error("{}", Message::ConfigReadFailed(chain(.0)))]
    Config(#[source] anyhow::Error),
}

/// The error and its causes on one line.
fn chain(error: &anyhow::Error) -> String {
    format!("{:#}", error)
}

impl ReportError {
    /// Process exit code for this error. All failures are fatal.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
