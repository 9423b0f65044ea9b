// Summary card rollups over the filtered view
use super::sprint::SprintRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub average_completion: f64,
    pub story_points_committed: f64,
    pub story_points_done: f64,
    pub defects_done: f64,
}

/// Display text for the four summary cards
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCards {
    pub avg_completion: String,
    pub total_commitments: String,
    pub total_completed: String,
    pub defects_fixed: String,
}

impl Summary {
    /// Average over an empty slice is 0.
    pub fn from_records(records: &[SprintRecord]) -> Self {
        let average_completion = if records.is_empty() {
            0.0
        } else {
            records
                .iter()
                .map(|r| r.total_completion_percentage)
                .sum::<f64>()
                / records.len() as f64
        };

        Self {
            average_completion,
            story_points_committed: records.iter().map(|r| r.story_points.committed).sum(),
            story_points_done: records.iter().map(|r| r.story_points.done).sum(),
            defects_done: records.iter().map(|r| r.defects.done).sum(),
        }
    }

    pub fn cards(&self) -> SummaryCards {
        SummaryCards {
            avg_completion: format!("{:.1}%", self.average_completion),
            total_commitments: self.story_points_committed.to_string(),
            total_completed: self.story_points_done.to_string(),
            defects_fixed: self.defects_done.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sprint::{record, WorkCount};

    #[test]
    fn test_average_of_two_records() {
        let records = vec![record("A", "S1", 90.0), record("B", "S1", 60.0)];
        let summary = Summary::from_records(&records);
        assert_eq!(summary.average_completion, 75.0);
        assert_eq!(summary.cards().avg_completion, "75.0%");
    }

    #[test]
    fn test_empty_view_is_zero_not_nan() {
        let summary = Summary::from_records(&[]);
        assert_eq!(summary, Summary::default());
        assert!(!summary.average_completion.is_nan());
        assert_eq!(summary.cards().avg_completion, "0.0%");
        assert_eq!(summary.cards().total_commitments, "0");
    }

    #[test]
    fn test_sums_ignore_record_order() {
        let mut a = record("A", "S1", 88.0);
        a.story_points = WorkCount::new(21.0, 13.0);
        a.defects = WorkCount::new(3.0, 1.0);
        let mut b = record("B", "S2", 71.0);
        b.story_points = WorkCount::new(34.0, 34.0);
        b.defects = WorkCount::new(9.0, 8.0);
        let c = record("C", "S3", 52.0);

        let forward = Summary::from_records(&[a.clone(), b.clone(), c.clone()]);
        let reversed = Summary::from_records(&[c.clone(), a.clone(), b.clone()]);

        assert_eq!(forward, reversed);
        assert_eq!(forward.story_points_committed, 85.0);
        assert_eq!(forward.story_points_done, 72.0);
        assert_eq!(forward.defects_done, 13.0);
    }

    #[test]
    fn test_cards_format_integral_sums_without_fraction() {
        let summary = Summary {
            average_completion: 82.26,
            story_points_committed: 120.0,
            story_points_done: 97.5,
            defects_done: 14.0,
        };
        let cards = summary.cards();
        assert_eq!(cards.avg_completion, "82.3%");
        assert_eq!(cards.total_commitments, "120");
        assert_eq!(cards.total_completed, "97.5");
        assert_eq!(cards.defects_fixed, "14");
    }
}
