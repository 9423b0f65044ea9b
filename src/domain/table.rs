// Data table rows
use super::sprint::SprintRecord;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionClass {
    High,
    Medium,
    Low,
}

impl CompletionClass {
    pub const HIGH_THRESHOLD: f64 = 85.0;
    pub const MEDIUM_THRESHOLD: f64 = 70.0;

    pub fn classify(percentage: f64) -> Self {
        if percentage >= Self::HIGH_THRESHOLD {
            CompletionClass::High
        } else if percentage >= Self::MEDIUM_THRESHOLD {
            CompletionClass::Medium
        } else {
            CompletionClass::Low
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CompletionClass::High => "completion-high",
            CompletionClass::Medium => "completion-medium",
            CompletionClass::Low => "completion-low",
        }
    }
}

impl Serialize for CompletionClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.css_class())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub team: String,
    pub sprint: String,
    pub date: String,
    pub completion: String,
    pub completion_class: CompletionClass,
    pub story_points_committed: f64,
    pub story_points_done: f64,
    pub defects_committed: f64,
    pub defects_done: f64,
    pub user_stories_committed: f64,
    pub user_stories_done: f64,
}

impl TableRow {
    pub fn from_record(record: &SprintRecord) -> Self {
        Self {
            team: record.team.clone(),
            sprint: record.sprint.clone(),
            date: record.date.clone(),
            completion: format!("{}%", record.total_completion_percentage),
            completion_class: CompletionClass::classify(record.total_completion_percentage),
            story_points_committed: record.story_points.committed,
            story_points_done: record.story_points.done,
            defects_committed: record.defects.committed,
            defects_done: record.defects.done,
            user_stories_committed: record.user_stories.committed,
            user_stories_done: record.user_stories.done,
        }
    }
}

/// Rebuilds every row; there is no incremental update.
pub fn render_rows(records: &[SprintRecord]) -> Vec<TableRow> {
    records.iter().map(TableRow::from_record).collect()
}
