//! Report composition: grouping time entries by project and tag set.
//!
//! Entries are processed in start order and grouped twice, first by project
//! and then by their normalized tag set. Within a tag group every distinct
//! description becomes one task row, unless merging is switched off, in which
//! case every entry gets its own row.
//!
//! Projects, tag groups and tasks all keep first-seen order, so the output of
//! [`compose`] is fully deterministic for a given input.

use crate::libs::entry::TimeEntry;

/// Group name used for entries without a project.
pub const NO_PROJECT: &str = "No project";
/// Group name used for entries without tags.
pub const NO_TAGS: &str = "No tags";
const TAG_SEPARATOR: &str = ", ";

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskAggregate {
    pub description: String,
    /// Milliseconds accumulated across every merged entry.
    pub total_duration: i64,
}

/// Tasks that share a project and a tag set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagGroupAggregate {
    pub tags: String,
    /// Saturates instead of overflowing.
    pub total_duration: i64,
    pub tasks: Vec<TaskAggregate>,
}

impl TagGroupAggregate {
    fn new(tags: String) -> Self {
        Self {
            tags,
            total_duration: 0,
            tasks: Vec::new(),
        }
    }

    fn add(&mut self, description: &str, duration: i64, merge_equal_descriptions: bool) {
        let existing = match merge_equal_descriptions {
            true => self.tasks.iter_mut().find(|task| task.description == description),
            false => None,
        };

        match existing {
            Some(task) => task.total_duration = task.total_duration.saturating_add(duration),
            None => self.tasks.push(TaskAggregate {
                description: description.to_string(),
                total_duration: duration,
            }),
        }

        self.total_duration = self.total_duration.saturating_add(duration);
    }
}

/// Tag groups of a single project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGroup {
    pub project: String,
    pub tag_groups: Vec<TagGroupAggregate>,
}

impl ProjectGroup {
    fn new(project: String) -> Self {
        Self {
            project,
            tag_groups: Vec::new(),
        }
    }

    fn tag_group_mut(&mut self, tags: String) -> &mut TagGroupAggregate {
        let index = match self.tag_groups.iter().position(|group| group.tags == tags) {
            Some(index) => index,
            None => {
                self.tag_groups.push(TagGroupAggregate::new(tags));
                self.tag_groups.len() - 1
            }
        };
        &mut self.tag_groups[index]
    }

    pub fn total_duration(&self) -> i64 {
        self.tag_groups.iter().fold(0i64, |total, group| total.saturating_add(group.total_duration))
    }
}

/// The composed report, projects in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportAggregate {
    projects: Vec<ProjectGroup>,
}

impl ReportAggregate {
    pub fn projects(&self) -> &[ProjectGroup] {
        &self.projects
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Sum of every tag group total across all projects.
    pub fn total_duration(&self) -> i64 {
        self.projects.iter().fold(0i64, |total, project| total.saturating_add(project.total_duration()))
    }

    pub fn project(&self, project: &str) -> Option<&ProjectGroup> {
        self.projects.iter().find(|group| group.project == project)
    }

    pub fn tag_group(&self, project: &str, tags: &str) -> Option<&TagGroupAggregate> {
        self.project(project)?.tag_groups.iter().find(|group| group.tags == tags)
    }

    fn tag_group_mut(&mut self, project: String, tags: String) -> &mut TagGroupAggregate {
        let index = match self.projects.iter().position(|group| group.project == project) {
            Some(index) => index,
            None => {
                self.projects.push(ProjectGroup::new(project));
                self.projects.len() - 1
            }
        };
        self.projects[index].tag_group_mut(tags)
    }
}

/// Group key for an entry's project.
pub fn project_key(project: &str) -> String {
    match project.is_empty() {
        true => NO_PROJECT.to_string(),
        false => project.to_string(),
    }
}

/// Group key for an entry's tags: sorted and comma-joined.
pub fn tag_key(tags: &[String]) -> String {
    let mut sorted = tags.to_vec();
    sorted.sort();
    let joined = sorted.join(TAG_SEPARATOR);
    match joined.is_empty() {
        true => NO_TAGS.to_string(),
        false => joined,
    }
}

/// Builds the grouped report from a flat list of entries.
///
/// Entries are visited in ascending `start` order (ties keep their input
/// order). With `merge_equal_descriptions` set, entries whose description
/// exactly matches an existing task in the same group add to that task;
/// otherwise each entry is appended as its own task.
pub fn compose(entries: &[TimeEntry], merge_equal_descriptions: bool) -> ReportAggregate {
    let mut ordered: Vec<&TimeEntry> = entries.iter().collect();
    ordered.sort_by_key(|entry| entry.start);

    let mut report = ReportAggregate::default();
    for entry in ordered {
        report
            .tag_group_mut(project_key(&entry.project), tag_key(&entry.tags))
            .add(&entry.description, entry.duration, merge_equal_descriptions);
    }

    tracing::debug!(
        entries = entries.len(),
        projects = report.projects.len(),
        merge_equal_descriptions,
        "composed report"
    );

    report
}
