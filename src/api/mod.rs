//! Remote time-entry sources.
//!
//! The report only needs two things from the outside world: the list of
//! workspaces the token can see, and the detailed time entries of one
//! workspace for one day. [`TimeEntrySource`] describes exactly that, and
//! [`toggl::Toggl`] implements it against the Toggl HTTP API.
//!
//! ## Pagination
//!
//! The detailed report is paginated. [`TimeEntrySource::fetch_time_entries`]
//! requests the first page, derives the page count from `total_count` and
//! `per_page`, then requests the remaining pages one after another. The first
//! failing page aborts the whole fetch.
//!
//! ```rust,no_run
//! use toggl_reporter::api::{toggl::{Toggl, TogglConfig}, TimeEntrySource};
//! use toggl_reporter::libs::date::resolve_date;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = Toggl::new(&TogglConfig::default(), "my-api-token");
//! let entries = client.fetch_time_entries(123456, resolve_date("today")?.date()).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::entry::TimeEntry;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod toggl;

pub use toggl::{Toggl, TogglConfig};

/// A workspace visible to the API token.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Workspace {
    pub id: u64,
    pub name: String,
}

/// One page of the detailed report.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailedReportPage {
    pub entries: Vec<TimeEntry>,
    pub total_count: u64,
    pub per_page: u64,
}

/// Number of pages needed to read `total_count` entries, `per_page` at a time.
///
/// Always at least one, so the first page is requested even for an empty day.
pub fn page_count(total_count: u64, per_page: u64) -> u32 {
    if per_page == 0 || total_count <= per_page {
        return 1;
    }
    let pages = total_count.div_ceil(per_page);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Source of workspaces and detailed time entries.
#[allow(async_fn_in_trait)]
pub trait TimeEntrySource {
    /// Lists the workspaces of the authenticated account.
    async fn fetch_workspaces(&self) -> Result<Vec<Workspace>>;

    /// Fetches one page (1-based) of the detailed report for a date range.
    async fn fetch_detailed_report(&self, workspace_id: u64, since: NaiveDate, until: NaiveDate, page: u32) -> Result<DetailedReportPage>;

    /// Fetches every time entry of a single day, across all pages.
    ///
    /// # Errors
    ///
    /// Returns the error of the first page that fails; entries from pages
    /// already fetched are discarded.
    async fn fetch_time_entries(&self, workspace_id: u64, date: NaiveDate) -> Result<Vec<TimeEntry>> {
        let first = self.fetch_detailed_report(workspace_id, date, date, 1).await?;
        let pages = page_count(first.total_count, first.per_page);
        msg_debug!(Message::FetchingReportPage { page: 1, page_count: pages });

        let mut entries = first.entries;
        for page in 2..=pages {
            msg_debug!(Message::FetchingReportPage { page, page_count: pages });
            let next = self.fetch_detailed_report(workspace_id, date, date, page).await?;
            entries.extend(next.entries);
        }

        tracing::debug!(workspace_id, %date, entries = entries.len(), "fetched time entries");
        Ok(entries)
    }
}
