//! Core library modules of the reporter.
//!
//! ## Features
//!
//! - **Report Composition**: grouping of time entries by project and tag set
//! - **Rendering**: plain-text report and workspace listing
//! - **Formatting**: "HH:MM:SS" durations and `YYYY-MM-DD` dates
//! - **Infrastructure**: configuration, data storage, errors, messaging
//!
//! ## Usage
//!
//! ```rust
//! use toggl_reporter::libs::{report::compose, view::View};
//!
//! let report = compose(&[], true);
//! print!("{}", View::report("2024-03-01", &report, false));
//! ```

pub mod config;
pub mod data_storage;
pub mod date;
pub mod entry;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod report;
pub mod view;
