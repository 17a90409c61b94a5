use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Workflow state of a project.
///
/// Variants are listed in menu order; the first one is the default for a
/// fresh draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    Backlog,
    Planned,
    InProgress,
    Completed,
    Canceled,
}

impl ProjectStatus {
    /// All statuses in menu order.
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Backlog,
        ProjectStatus::Planned,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::Canceled,
    ];

    /// Display label shown on the chip and in the menu.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Backlog => "Backlog",
            ProjectStatus::Planned => "Planned",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Canceled => "Canceled",
        }
    }

    /// Look up a status by its display label.
    pub fn from_label(label: &str) -> Option<ProjectStatus> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }
}

/// Priority of a project.
///
/// Same shape as [`ProjectStatus`]: fixed menu order, first variant is
/// the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectPriority {
    #[default]
    NoPriority,
    Urgent,
    High,
    Medium,
    Low,
}

impl ProjectPriority {
    /// All priorities in menu order.
    pub const ALL: [ProjectPriority; 5] = [
        ProjectPriority::NoPriority,
        ProjectPriority::Urgent,
        ProjectPriority::High,
        ProjectPriority::Medium,
        ProjectPriority::Low,
    ];

    /// Display label shown on the chip and in the menu.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectPriority::NoPriority => "No priority",
            ProjectPriority::Urgent => "Urgent",
            ProjectPriority::High => "High",
            ProjectPriority::Medium => "Medium",
            ProjectPriority::Low => "Low",
        }
    }

    /// Look up a priority by its display label.
    pub fn from_label(label: &str) -> Option<ProjectPriority> {
        Self::ALL.into_iter().find(|priority| priority.label() == label)
    }
}

/// One milestone inside a draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    /// Stable identifier, independent of list position
    pub id: Uuid,
    /// Milestone name
    pub title: String,
    /// Free-form notes
    pub detail: String,
    /// Optional target date
    pub target_date: Option<NaiveDate>,
}

impl Milestone {
    /// Create a blank milestone with a fresh id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            detail: String::new(),
            target_date: None,
        }
    }
}

impl Default for Milestone {
    fn default() -> Self {
        Self::new()
    }
}

/// The in-progress project assembled by the creation dialog.
///
/// The dialog owns exactly one of these for as long as it is open. Top
/// level fields are written directly through the shared signal; the
/// milestone list is addressed by id so that edits arriving after a
/// removal land nowhere instead of on the wrong entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    /// Project name (empty until the user types one)
    pub title: String,
    /// Free-form description or brief
    pub description: String,
    /// Current workflow status
    pub status: ProjectStatus,
    /// Current priority
    pub priority: ProjectPriority,
    /// Optional schedule start
    pub start_date: Option<NaiveDate>,
    /// Optional schedule target
    pub target_date: Option<NaiveDate>,
    /// Milestones in display order
    pub milestones: Vec<Milestone>,
}

impl ProjectDraft {
    /// Reinitialize every field to its default. The dialog realizes this
    /// by mounting with a fresh default draft on every open.
    #[allow(dead_code)]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Append a blank milestone and return its id.
    pub fn add_milestone(&mut self) -> Uuid {
        let milestone = Milestone::new();
        let id = milestone.id;
        self.milestones.push(milestone);
        id
    }

    /// Find a milestone by id.
    #[allow(dead_code)]
    pub fn milestone(&self, id: Uuid) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    /// Rename a milestone. Returns false if the id is gone (already
    /// removed); the edit is dropped in that case.
    pub fn set_milestone_title(&mut self, id: Uuid, title: impl Into<String>) -> bool {
        if let Some(milestone) = self.milestones.iter_mut().find(|m| m.id == id) {
            milestone.title = title.into();
            return true;
        }
        false
    }

    /// Update a milestone's notes. Returns false if the id is gone.
    pub fn set_milestone_detail(&mut self, id: Uuid, detail: impl Into<String>) -> bool {
        if let Some(milestone) = self.milestones.iter_mut().find(|m| m.id == id) {
            milestone.detail = detail.into();
            return true;
        }
        false
    }

    /// Update a milestone's target date. Returns false if the id is gone.
    pub fn set_milestone_target_date(&mut self, id: Uuid, date: Option<NaiveDate>) -> bool {
        if let Some(milestone) = self.milestones.iter_mut().find(|m| m.id == id) {
            milestone.target_date = date;
            return true;
        }
        false
    }

    /// Remove a milestone by id. Surviving entries keep their ids and
    /// relative order.
    pub fn remove_milestone(&mut self, id: Uuid) -> bool {
        let len = self.milestones.len();
        self.milestones.retain(|m| m.id != id);
        self.milestones.len() < len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_fresh_draft_defaults() {
        let draft = ProjectDraft::default();
        assert_eq!(draft.status, ProjectStatus::ALL[0]);
        assert_eq!(draft.priority, ProjectPriority::ALL[0]);
        assert_eq!(draft.status.label(), "Backlog");
        assert_eq!(draft.priority.label(), "No priority");
        assert!(draft.title.is_empty());
        assert!(draft.description.is_empty());
        assert!(draft.start_date.is_none());
        assert!(draft.target_date.is_none());
        assert!(draft.milestones.is_empty());
    }

    #[test]
    fn test_reset_overwrites_prior_mutations() {
        let mut draft = ProjectDraft::default();
        draft.title = "Website refresh".to_string();
        draft.status = ProjectStatus::Completed;
        draft.priority = ProjectPriority::Urgent;
        draft.start_date = date(2025, 3, 1);
        draft.add_milestone();
        draft.add_milestone();

        draft.reset();
        assert_eq!(draft, ProjectDraft::default());

        // A second reset is a no-op on an already-fresh draft.
        draft.reset();
        assert_eq!(draft, ProjectDraft::default());
    }

    #[test]
    fn test_status_selection_last_write_wins() {
        let mut draft = ProjectDraft::default();
        let sequence = [
            ProjectStatus::Planned,
            ProjectStatus::Canceled,
            ProjectStatus::Backlog,
            ProjectStatus::InProgress,
        ];
        for status in sequence {
            draft.status = status;
        }
        assert_eq!(draft.status, ProjectStatus::InProgress);
        let current = ProjectStatus::ALL
            .iter()
            .filter(|status| **status == draft.status)
            .count();
        assert_eq!(current, 1);
    }

    #[test]
    fn test_milestone_keys_survive_removal() {
        let mut draft = ProjectDraft::default();
        let k1 = draft.add_milestone();
        let k2 = draft.add_milestone();
        let k3 = draft.add_milestone();

        assert!(draft.remove_milestone(k2));
        let remaining: Vec<Uuid> = draft.milestones.iter().map(|m| m.id).collect();
        assert_eq!(remaining, vec![k1, k3]);

        // Edits addressed to the removed key land nowhere.
        let before = draft.clone();
        assert!(!draft.set_milestone_title(k2, "x"));
        assert!(!draft.set_milestone_detail(k2, "x"));
        assert!(!draft.set_milestone_target_date(k2, date(2025, 9, 1)));
        assert!(!draft.remove_milestone(k2));
        assert_eq!(draft, before);
        assert!(draft.milestone(k2).is_none());
    }

    #[test]
    fn test_commit_snapshot_carries_every_field() {
        let mut draft = ProjectDraft::default();
        draft.title = "Q3 Launch".to_string();
        draft.status = ProjectStatus::InProgress;
        let id = draft.add_milestone();
        assert!(draft.set_milestone_title(id, "Beta"));
        assert!(draft.set_milestone_target_date(id, date(2025, 9, 1)));

        // The Create button forwards a plain clone of the draft.
        let committed = draft.clone();
        let expected = ProjectDraft {
            title: "Q3 Launch".to_string(),
            description: String::new(),
            status: ProjectStatus::InProgress,
            priority: ProjectPriority::NoPriority,
            start_date: None,
            target_date: None,
            milestones: vec![Milestone {
                id,
                title: "Beta".to_string(),
                detail: String::new(),
                target_date: date(2025, 9, 1),
            }],
        };
        assert_eq!(committed, expected);
    }

    #[test]
    fn test_cancel_then_reopen_starts_blank() {
        let mut draft = ProjectDraft::default();
        draft.title = "Scrapped idea".to_string();
        draft.description = "Never mind".to_string();
        draft.priority = ProjectPriority::High;
        draft.target_date = date(2026, 1, 15);
        let id = draft.add_milestone();
        draft.set_milestone_detail(id, "half-typed note");

        // Cancel drops the draft; reopening builds a fresh one.
        drop(draft);
        let reopened = ProjectDraft::default();
        assert_eq!(reopened, ProjectDraft::default());
        assert!(reopened.milestones.is_empty());
    }

    #[test]
    fn test_labels_round_trip() {
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::from_label(status.label()), Some(status));
        }
        for priority in ProjectPriority::ALL {
            assert_eq!(ProjectPriority::from_label(priority.label()), Some(priority));
        }
        assert_eq!(ProjectStatus::from_label("Someday"), None);
        assert_eq!(ProjectPriority::from_label("ASAP"), None);
    }

    #[test]
    fn test_draft_serialization() {
        let mut draft = ProjectDraft::default();
        draft.title = "Q4 Planning".to_string();
        draft.status = ProjectStatus::Planned;
        draft.start_date = date(2025, 10, 1);
        let id = draft.add_milestone();
        draft.set_milestone_title(id, "Kickoff");

        let json = serde_json::to_string_pretty(&draft).unwrap();
        let parsed: ProjectDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(draft, parsed);
    }
}
