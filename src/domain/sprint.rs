// Sprint metrics domain model
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Committed vs. done counts for one kind of work item.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkCount {
    pub committed: f64,
    pub done: f64,
}

#[cfg(test)]
impl WorkCount {
    pub fn new(committed: f64, done: f64) -> Self {
        Self { committed, done }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintRecord {
    pub team: String,
    pub sprint: String,
    pub date: String,
    pub total_completion_percentage: f64,
    pub total_initial_commitments: f64,
    pub story_points: WorkCount,
    pub defects: WorkCount,
    pub user_stories: WorkCount,
}

impl SprintRecord {
    /// Axis label used by the per-record charts
    pub fn label(&self) -> String {
        format!("{} - {}", self.team, self.sprint)
    }
}

/// Shape of the dataset document: `{ "sprints": [...] }`
#[derive(Debug, Deserialize)]
pub struct SprintDocument {
    pub sprints: Vec<SprintRecord>,
}

/// Full record set, fixed once loading completes.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<SprintRecord>,
}

impl Dataset {
    pub fn new(records: Vec<SprintRecord>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[SprintRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct team names in first-occurrence order
    pub fn teams(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.team.as_str()))
    }

    /// Distinct sprint names in first-occurrence order
    pub fn sprints(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.sprint.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) fn record(team: &str, sprint: &str, completion: f64) -> SprintRecord {
    SprintRecord {
        team: team.to_string(),
        sprint: sprint.to_string(),
        date: "2024-01-15".to_string(),
        total_completion_percentage: completion,
        total_initial_commitments: 40.0,
        story_points: WorkCount::new(30.0, 25.0),
        defects: WorkCount::new(5.0, 4.0),
        user_stories: WorkCount::new(8.0, 7.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document() {
        let json = r#"{
            "sprints": [{
                "team": "Phoenix",
                "sprint": "Sprint 1",
                "date": "2024-01-15",
                "totalCompletionPercentage": 87.5,
                "totalInitialCommitments": 42,
                "storyPoints": { "committed": 34, "done": 30 },
                "defects": { "committed": 6, "done": 5 },
                "userStories": { "committed": 9, "done": 8 }
            }]
        }"#;

        let doc: SprintDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.sprints.len(), 1);

        let r = &doc.sprints[0];
        assert_eq!(r.team, "Phoenix");
        assert_eq!(r.total_completion_percentage, 87.5);
        assert_eq!(r.story_points, WorkCount::new(34.0, 30.0));
        assert_eq!(r.user_stories.done, 8.0);
        assert_eq!(r.label(), "Phoenix - Sprint 1");
    }

    #[test]
    fn test_missing_sprints_key_is_rejected() {
        assert!(serde_json::from_str::<SprintDocument>(r#"{"teams": []}"#).is_err());
    }

    #[test]
    fn test_distinct_values_keep_first_occurrence_order() {
        let dataset = Dataset::new(vec![
            record("B", "S1", 80.0),
            record("A", "S1", 70.0),
            record("B", "S2", 90.0),
        ]);

        assert_eq!(dataset.teams(), vec!["B", "A"]);
        assert_eq!(dataset.sprints(), vec!["S1", "S2"]);
        assert_eq!(dataset.len(), 3);
    }
}
