#[cfg(test)]
mod tests {
    use std::process::{Command, Output};
    use tempfile::TempDir;

    /// Runs the binary in an empty environment with its own home directory.
    fn run(home: &TempDir, envs: &[(&str, &str)], args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_toggl-reporter"))
            .env_clear()
            .env("HOME", home.path())
            .envs(envs.iter().copied())
            .current_dir(home.path())
            .args(args)
            .output()
            .unwrap()
    }

    #[test]
    fn test_missing_token_diagnostic_on_stdout() {
        let home = tempfile::tempdir().unwrap();
        let output = run(&home, &[], &[]);

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "Token is missing. Re-run app with \"-h\" or \"--help\" flag.\n"
        );
    }

    #[test]
    fn test_diagnostic_stays_on_stdout_with_logging_enabled() {
        let home = tempfile::tempdir().unwrap();

        for envs in [&[("RUST_LOG", "warn")][..], &[("TOGGL_REPORTER_DEBUG", "1"), ("RUST_LOG", "error")][..]] {
            let output = run(&home, envs, &[]);
            assert_eq!(output.status.code(), Some(1));
            assert!(String::from_utf8_lossy(&output.stdout).contains("Token is missing."));
        }
    }

    #[test]
    fn test_invalid_date_diagnostic_with_logging_enabled() {
        let home = tempfile::tempdir().unwrap();
        let output = run(&home, &[("RUST_LOG", "warn")], &["--token", "abc", "--date", "2024-1-5"]);

        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stdout).starts_with("Date is invalid."));
    }
}
