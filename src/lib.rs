//! # Toggl Reporter
//!
//! A command-line utility that fetches one day of time entries from Toggl's
//! detailed report API and prints them grouped by project and tag set.
//!
//! ## Features
//!
//! - **Grouping**: entries grouped by project, then by their sorted tag list
//! - **Merging**: equal task descriptions merged into one row (optional)
//! - **Durations**: "HH:MM:SS" totals per tag group, per task and overall
//! - **Pagination**: every page of the detailed report is fetched in turn
//! - **Workspaces**: lists the workspaces reachable with a token
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clap::Parser;
//! use toggl_reporter::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() {
//!     if let Err(error) = Cli::parse().menu().await {
//!         println!("{}", error);
//!     }
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
