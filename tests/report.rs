#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset, TimeZone};
    use toggl_reporter::libs::entry::TimeEntry;
    use toggl_reporter::libs::report::{compose, tag_key, NO_PROJECT, NO_TAGS};

    fn at(minute: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 3, 1, 9, minute, 0).unwrap()
    }

    fn entry(project: &str, tags: &[&str], description: &str, duration: i64, minute: u32) -> TimeEntry {
        TimeEntry::new(project, tags, description, duration, at(minute))
    }

    fn descriptions(report: &toggl_reporter::libs::report::ReportAggregate, project: &str, tags: &str) -> Vec<String> {
        report
            .tag_group(project, tags)
            .unwrap()
            .tasks
            .iter()
            .map(|task| task.description.clone())
            .collect()
    }

    #[test]
    fn test_empty_input_gives_empty_report() {
        let report = compose(&[], true);
        assert!(report.is_empty());
        assert_eq!(report.total_duration(), 0);
    }

    #[test]
    fn test_grand_total_equals_sum_of_entries() {
        let entries = vec![
            entry("Alpha", &["x"], "build", 60_000, 0),
            entry("Alpha", &["y"], "test", 1_234, 1),
            entry("Beta", &[], "review", 45_500, 2),
            entry("", &["x", "y"], "", 0, 3),
            entry("Beta", &[], "review", 10_000, 4),
        ];
        let expected: i64 = entries.iter().map(|entry| entry.duration).sum();

        for merge in [true, false] {
            let report = compose(&entries, merge);
            assert_eq!(report.total_duration(), expected);
            let group_sum: i64 = report
                .projects()
                .iter()
                .flat_map(|project| project.tag_groups.iter())
                .map(|group| group.total_duration)
                .sum();
            assert_eq!(group_sum, expected);
        }
    }

    #[test]
    fn test_merge_equal_descriptions() {
        let entries = vec![
            entry("Alpha", &["x"], "build", 60_000, 0),
            entry("Alpha", &["x"], "deploy", 5_000, 1),
            entry("Alpha", &["x"], "build", 30_000, 2),
        ];

        let report = compose(&entries, true);
        let group = report.tag_group("Alpha", "x").unwrap();

        assert_eq!(group.tasks.len(), 2);
        assert_eq!(group.tasks[0].description, "build");
        assert_eq!(group.tasks[0].total_duration, 90_000);
        assert_eq!(group.tasks[1].description, "deploy");
        assert_eq!(group.tasks[1].total_duration, 5_000);
        assert_eq!(group.total_duration, 95_000);
    }

    #[test]
    fn test_do_not_merge_keeps_every_entry_in_start_order() {
        let entries = vec![
            entry("Alpha", &["x"], "build", 30_000, 5),
            entry("Alpha", &["x"], "build", 60_000, 0),
            entry("Alpha", &["x"], "deploy", 5_000, 2),
        ];

        let report = compose(&entries, false);
        let group = report.tag_group("Alpha", "x").unwrap();

        let rows: Vec<(&str, i64)> = group.tasks.iter().map(|task| (task.description.as_str(), task.total_duration)).collect();
        assert_eq!(rows, vec![("build", 60_000), ("deploy", 5_000), ("build", 30_000)]);
        assert_eq!(group.total_duration, 95_000);
    }

    #[test]
    fn test_merge_is_case_sensitive() {
        let entries = vec![entry("Alpha", &["x"], "Build", 1_000, 0), entry("Alpha", &["x"], "build", 1_000, 1)];

        let report = compose(&entries, true);
        assert_eq!(descriptions(&report, "Alpha", "x"), vec!["Build", "build"]);
    }

    #[test]
    fn test_merge_only_within_same_group() {
        let entries = vec![
            entry("Alpha", &["x"], "build", 1_000, 0),
            entry("Alpha", &["y"], "build", 2_000, 1),
            entry("Beta", &["x"], "build", 4_000, 2),
        ];

        let report = compose(&entries, true);
        assert_eq!(report.tag_group("Alpha", "x").unwrap().tasks[0].total_duration, 1_000);
        assert_eq!(report.tag_group("Alpha", "y").unwrap().tasks[0].total_duration, 2_000);
        assert_eq!(report.tag_group("Beta", "x").unwrap().tasks[0].total_duration, 4_000);
    }

    #[test]
    fn test_sentinel_groups() {
        let entries = vec![entry("", &[], "lunch", 1_000, 0)];

        let report = compose(&entries, true);
        let group = report.tag_group(NO_PROJECT, NO_TAGS).unwrap();
        assert_eq!(group.tasks[0].description, "lunch");
        assert_eq!(NO_PROJECT, "No project");
        assert_eq!(NO_TAGS, "No tags");
    }

    #[test]
    fn test_tag_order_does_not_matter() {
        let entries = vec![entry("Alpha", &["b", "a"], "one", 1_000, 0), entry("Alpha", &["a", "b"], "two", 2_000, 1)];

        let report = compose(&entries, true);
        let project = report.project("Alpha").unwrap();
        assert_eq!(project.tag_groups.len(), 1);
        assert_eq!(project.tag_groups[0].tags, "a, b");
        assert_eq!(project.tag_groups[0].total_duration, 3_000);
    }

    #[test]
    fn test_tag_key() {
        assert_eq!(tag_key(&[]), "No tags");
        assert_eq!(tag_key(&["z".to_string(), "B".to_string(), "a".to_string()]), "B, a, z");
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let entries = vec![
            entry("Zeta", &["late"], "c", 1_000, 30),
            entry("Alpha", &["b"], "a", 1_000, 10),
            entry("Zeta", &["early"], "b", 1_000, 20),
            entry("Alpha", &["a"], "d", 1_000, 40),
        ];

        let report = compose(&entries, true);
        let projects: Vec<&str> = report.projects().iter().map(|project| project.project.as_str()).collect();
        assert_eq!(projects, vec!["Alpha", "Zeta"]);

        let zeta_groups: Vec<&str> = report.project("Zeta").unwrap().tag_groups.iter().map(|group| group.tags.as_str()).collect();
        assert_eq!(zeta_groups, vec!["early", "late"]);

        let alpha_groups: Vec<&str> = report.project("Alpha").unwrap().tag_groups.iter().map(|group| group.tags.as_str()).collect();
        assert_eq!(alpha_groups, vec!["b", "a"]);
    }

    #[test]
    fn test_equal_start_times_keep_input_order() {
        let entries = vec![entry("Alpha", &["x"], "first", 1_000, 0), entry("Alpha", &["x"], "second", 1_000, 0)];

        let report = compose(&entries, false);
        assert_eq!(descriptions(&report, "Alpha", "x"), vec!["first", "second"]);
    }

    #[test]
    fn test_zero_and_negative_durations_pass_through() {
        let entries = vec![entry("Alpha", &["x"], "zero", 0, 0), entry("Alpha", &["x"], "odd", -5_000, 1)];

        let report = compose(&entries, true);
        let group = report.tag_group("Alpha", "x").unwrap();
        assert_eq!(group.tasks.len(), 2);
        assert_eq!(group.total_duration, -5_000);
    }

    #[test]
    fn test_compose_does_not_reorder_input() {
        let entries = vec![entry("Alpha", &["x"], "late", 1_000, 50), entry("Alpha", &["x"], "early", 1_000, 0)];
        let _ = compose(&entries, true);
        assert_eq!(entries[0].description, "late");
    }

    #[test]
    fn test_extreme_durations_saturate() {
        let entries = vec![
            entry("Alpha", &["x"], "huge", i64::MAX, 0),
            entry("Alpha", &["x"], "huge", i64::MAX, 1),
            entry("Beta", &[], "more", i64::MAX, 2),
        ];

        let report = compose(&entries, true);
        let group = report.tag_group("Alpha", "x").unwrap();
        assert_eq!(group.tasks[0].total_duration, i64::MAX);
        assert_eq!(group.total_duration, i64::MAX);
        assert_eq!(report.total_duration(), i64::MAX);
    }
}
