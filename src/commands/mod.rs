//! Command-line interface of the reporter.
//!
//! The tool has a single flat set of flags modelled on the original
//! `toggl-reporter` invocation:
//!
//! ```text
//! toggl-reporter --token <TOKEN> --workspaceId <ID> [--date today|yesterday|YYYY-MM-DD]
//!                [--doNotMergeEqual] [--showDurationForEach]
//! toggl-reporter --token <TOKEN> --printWorkspaces
//! toggl-reporter --init
//! ```
//!
//! Flags fall back to `TOGGL_TOKEN` / `TOGGL_WORKSPACE_ID` and then to the
//! configuration file.

pub mod init;
pub mod report;
pub mod workspaces;

use crate::libs::error::ReportError;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "TOGGL_TOKEN", hide_env_values = true, help = "Toggl API token (you can get it from your profile page)")]
    pub token: Option<String>,

    #[arg(
        long = "workspaceId",
        env = "TOGGL_WORKSPACE_ID",
        help = "Workspace ID (you can get it by running this app with \"--printWorkspaces\" flag or just with \"--token\")"
    )]
    pub workspace_id: Option<String>,

    #[arg(long, default_value = "today", help = "Report date (can be: \"today\", \"yesterday\", \"YYYY-MM-DD\")")]
    pub date: String,

    #[arg(long = "doNotMergeEqual", help = "Do not merge tasks with equal descriptions")]
    pub do_not_merge_equal: bool,

    #[arg(long = "printWorkspaces", help = "Print workspaces instead of report")]
    pub print_workspaces: bool,

    #[arg(long = "showDurationForEach", help = "Show duration for each task")]
    pub show_duration_for_each: bool,

    #[arg(long, help = "Configure defaults interactively and save them")]
    pub init: bool,
}

impl Cli {
    pub async fn menu(self) -> Result<(), ReportError> {
        match self.init {
            true => init::cmd(),
            false => report::cmd(self).await,
        }
    }
}
