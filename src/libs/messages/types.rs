#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === REPORT MESSAGES ===
    ReportHeader(String), // date
    NoDataToPrint,
    ReportTotal(String), // formatted duration

    // === WORKSPACE MESSAGES ===
    WorkspacesHeader,
    WorkspaceIdNotEntered,

    // === VALIDATION MESSAGES ===
    TokenMissing,
    DateInvalid,
    WorkspaceIdInvalid,

    // === API MESSAGES ===
    AccountFetchFailed,
    ReportFetchFailed(String), // error message
    TogglRequestFailed(u16),   // status code
    FetchingReportPage { page: u32, page_count: u32 },

    // === CONFIGURATION MESSAGES ===
    ConfigReadFailed(String), // error message
    ConfigSaved,
    ConfigModuleToggl,
    ConfigModuleReport,

    // === PROMPTS ===
    PromptSelectModules,
    PromptTogglToken,
    PromptWorkspaceId,
    PromptTogglApiUrl,
    PromptTogglReportsUrl,
    PromptDoNotMergeEqual,
    PromptShowDurationForEach,
}
