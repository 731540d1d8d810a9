//! Workspace listing (`--printWorkspaces`, or no workspace id given).

use crate::{
    api::{TimeEntrySource, Workspace},
    libs::{error::ReportError, view::View},
};

/// Fetches the workspaces visible to the token.
pub async fn fetch<S: TimeEntrySource>(source: &S) -> Result<Vec<Workspace>, ReportError> {
    source.fetch_workspaces().await.map_err(ReportError::AccountFetchFailure)
}

/// Prints the workspace listing.
///
/// With `workspace_id_missing` set the run still fails after fetching, and the
/// listing becomes part of the [`ReportError::MissingWorkspaceId`] diagnostic.
pub async fn cmd<S: TimeEntrySource>(source: &S, workspace_id_missing: bool) -> Result<(), ReportError> {
    let workspaces = fetch(source).await?;

    if workspace_id_missing {
        return Err(ReportError::MissingWorkspaceId { workspaces });
    }

    print!("{}", View::workspaces(&workspaces, false));
    Ok(())
}
