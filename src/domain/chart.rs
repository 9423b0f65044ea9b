// Chart domain models, independent of the widget that draws them
use super::filter::Metric;
use serde::{Serialize, Serializer};

/// Fixed mount points on the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartMount {
    CompletionTrend,
    TeamComparison,
    Commitments,
    StoryPoints,
    Defects,
    UserStories,
}

impl ChartMount {
    pub const ALL: [ChartMount; 6] = [
        ChartMount::CompletionTrend,
        ChartMount::TeamComparison,
        ChartMount::Commitments,
        ChartMount::StoryPoints,
        ChartMount::Defects,
        ChartMount::UserStories,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            ChartMount::CompletionTrend => "completionTrendChart",
            ChartMount::TeamComparison => "teamComparisonChart",
            ChartMount::Commitments => "commitmentsChart",
            ChartMount::StoryPoints => "storyPointsChart",
            ChartMount::Defects => "defectsChart",
            ChartMount::UserStories => "userStoriesChart",
        }
    }

    /// The metric a mount is dedicated to; `None` for the always-on charts
    pub fn metric(&self) -> Option<Metric> {
        match self {
            ChartMount::StoryPoints => Some(Metric::StoryPoints),
            ChartMount::Defects => Some(Metric::Defects),
            ChartMount::UserStories => Some(Metric::UserStories),
            _ => None,
        }
    }
}

/// Serialized as the page element id
impl Serialize for ChartMount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.element_id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// Border and fill colour pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paint {
    pub border: String,
    pub background: String,
}

impl Paint {
    pub fn new(border: &str, background: &str) -> Self {
        Self {
            border: border.to_string(),
            background: background.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesData {
    pub name: String,
    /// One entry paints the whole series; several entries cycle per data point.
    pub paint: Vec<Paint>,
    pub fill: bool,
    pub values: Vec<f64>,
}

impl SeriesData {
    pub fn new(name: &str, paint: Vec<Paint>, fill: bool, values: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            paint,
            fill,
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    pub begin_at_zero: bool,
    pub max: Option<f64>,
    pub tick_suffix: Option<String>,
}

impl YAxis {
    pub fn count() -> Self {
        Self {
            begin_at_zero: true,
            max: None,
            tick_suffix: None,
        }
    }

    /// Clamped to [0, 100] with a `%` on every tick
    pub fn percentage() -> Self {
        Self {
            begin_at_zero: true,
            max: Some(100.0),
            tick_suffix: Some("%".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub mount: ChartMount,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<SeriesData>,
    pub y_axis: YAxis,
    pub show_legend: bool,
}

impl ChartData {
    pub fn new(
        mount: ChartMount,
        kind: ChartKind,
        labels: Vec<String>,
        series: Vec<SeriesData>,
        y_axis: YAxis,
        show_legend: bool,
    ) -> Self {
        Self {
            mount,
            kind,
            labels,
            series,
            y_axis,
            show_legend,
        }
    }
}

/// One mount point's state: hidden panels keep their container but hold no chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub mount: ChartMount,
    pub visible: bool,
    pub chart: Option<ChartData>,
}

/// The complete chart set produced by one render pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartBoard {
    pub revision: u64,
    pub panels: Vec<ChartPanel>,
}

impl ChartBoard {
    #[cfg(test)]
    pub fn panel(&self, mount: ChartMount) -> Option<&ChartPanel> {
        self.panels.iter().find(|p| p.mount == mount)
    }

    #[cfg(test)]
    pub fn chart(&self, mount: ChartMount) -> Option<&ChartData> {
        self.panel(mount).and_then(|p| p.chart.as_ref())
    }

    /// Number of live chart instances on the board
    pub fn instance_count(&self) -> usize {
        self.panels.iter().filter(|p| p.chart.is_some()).count()
    }
}
