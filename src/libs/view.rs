//! Plain-text rendering of reports and workspace listings.
//!
//! Rendering only builds strings; the caller decides where they go. Every
//! rendered block ends with a newline.

use super::formatter::format_duration;
use super::messages::Message;
use super::report::ReportAggregate;
use crate::api::Workspace;

const BORDER: &str = "=========================================================";
const PROJECT_FENCE: &str = "++++++++";
const TAG_GROUP_FENCE: &str = "---";

pub struct View {}

impl View {
    /// Renders the full daily report.
    ///
    /// ```text
    /// =========================================================
    ///
    /// Report for 2024-03-01
    ///
    /// =========================================================
    ///
    /// ++++++++ Alpha ++++++++
    ///
    /// --- x — 00:01:30 ---
    ///
    /// * build
    ///
    /// =========================================================
    ///
    /// Total: 00:01:30
    ///
    /// =========================================================
    /// ```
    pub fn report(date: &str, report: &ReportAggregate, show_per_task_duration: bool) -> String {
        let mut lines: Vec<String> = vec![
            BORDER.to_string(),
            String::new(),
            Message::ReportHeader(date.to_string()).to_string(),
            String::new(),
            BORDER.to_string(),
            String::new(),
        ];

        if report.is_empty() {
            lines.push(Message::NoDataToPrint.to_string());
            lines.push(String::new());
        }

        for project in report.projects() {
            lines.push(format!("{} {} {}", PROJECT_FENCE, project.project, PROJECT_FENCE));
            lines.push(String::new());

            for group in &project.tag_groups {
                lines.push(format!(
                    "{} {} — {} {}",
                    TAG_GROUP_FENCE,
                    group.tags,
                    format_duration(group.total_duration),
                    TAG_GROUP_FENCE
                ));
                lines.push(String::new());

                for task in &group.tasks {
                    lines.push(match show_per_task_duration {
                        true => format!("* {} — {}", task.description, format_duration(task.total_duration)),
                        false => format!("* {}", task.description),
                    });
                }
                lines.push(String::new());
            }
        }

        lines.push(BORDER.to_string());
        lines.push(String::new());
        lines.push(Message::ReportTotal(format_duration(report.total_duration())).to_string());
        lines.push(String::new());
        lines.push(BORDER.to_string());

        lines.join("\n") + "\n"
    }

    /// Renders the workspace listing shown by `--printWorkspaces`.
    ///
    /// When `workspace_id_missing` is set the listing is prefixed with a note
    /// that no workspace was given.
    pub fn workspaces(workspaces: &[Workspace], workspace_id_missing: bool) -> String {
        let mut lines: Vec<String> = Vec::new();

        if workspace_id_missing {
            lines.push(Message::WorkspaceIdNotEntered.to_string());
            lines.push(String::new());
        }

        lines.push(Message::WorkspacesHeader.to_string());
        lines.push(String::new());
        for workspace in workspaces {
            lines.push(format!("* {} - {}", workspace.id, workspace.name));
        }
        lines.push(String::new());

        lines.join("\n") + "\n"
    }
}
