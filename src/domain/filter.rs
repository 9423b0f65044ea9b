// Filter selection and the filtered view it produces
use super::sprint::{Dataset, SprintRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "String")]
pub enum Metric {
    #[default]
    All,
    StoryPoints,
    Defects,
    UserStories,
}

impl Metric {
    pub const CHOICES: [Metric; 4] = [
        Metric::All,
        Metric::StoryPoints,
        Metric::Defects,
        Metric::UserStories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::All => "all",
            Metric::StoryPoints => "storyPoints",
            Metric::Defects => "defects",
            Metric::UserStories => "userStories",
        }
    }

    /// Whether a chart dedicated to `metric` is shown under this selection
    pub fn shows(&self, metric: Metric) -> bool {
        *self == Metric::All || *self == metric
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric '{0}', expected one of: all, storyPoints, defects, userStories")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::CHOICES
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}

impl TryFrom<String> for Metric {
    type Error = UnknownMetric;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// User-selected criteria. Empty team or sprint sets match everything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    #[serde(default)]
    pub teams: BTreeSet<String>,
    #[serde(default)]
    pub sprints: BTreeSet<String>,
    #[serde(default)]
    pub metric: Metric,
}

impl FilterSelection {
    pub fn new(
        teams: impl IntoIterator<Item = String>,
        sprints: impl IntoIterator<Item = String>,
        metric: Metric,
    ) -> Self {
        Self {
            teams: teams.into_iter().collect(),
            sprints: sprints.into_iter().collect(),
            metric,
        }
    }

    /// Every team and sprint of the dataset explicitly selected, metric `all`
    pub fn select_all(dataset: &Dataset) -> Self {
        Self::new(dataset.teams(), dataset.sprints(), Metric::All)
    }

    pub fn matches(&self, record: &SprintRecord) -> bool {
        let team_match = self.teams.is_empty() || self.teams.contains(&record.team);
        let sprint_match = self.sprints.is_empty() || self.sprints.contains(&record.sprint);
        team_match && sprint_match
    }

    /// Metric does not take part in membership, only in chart visibility.
    pub fn apply(&self, dataset: &Dataset) -> FilteredView {
        FilteredView {
            records: dataset
                .records()
                .iter()
                .filter(|r| self.matches(r))
                .cloned()
                .collect(),
        }
    }
}

/// Records of the dataset that pass the current selection, in dataset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView {
    records: Vec<SprintRecord>,
}

impl FilteredView {
    pub fn full(dataset: &Dataset) -> Self {
        Self {
            records: dataset.records().to_vec(),
        }
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
}
