// Chart renderer - Builds the full chart board from the filtered view
use crate::domain::chart::{
    ChartBoard, ChartData, ChartKind, ChartMount, ChartPanel, Paint, SeriesData, YAxis,
};
use crate::domain::filter::Metric;
use crate::domain::sprint::{SprintRecord, WorkCount};
use std::collections::HashMap;

const INDIGO: (&str, &str) = ("#4f46e5", "rgba(79, 70, 229, 0.7)");
const CYAN: (&str, &str) = ("#06b6d4", "rgba(6, 182, 212, 0.7)");
const AMBER: (&str, &str) = ("#f59e0b", "rgba(245, 158, 11, 0.7)");
const RED: (&str, &str) = ("#ef4444", "rgba(239, 68, 68, 0.7)");
const EMERALD: (&str, &str) = ("#10b981", "rgba(16, 185, 129, 0.7)");

/// Bar colours for the team comparison chart, cycled per team
const TEAM_PALETTE: [(&str, &str); 5] = [INDIGO, CYAN, AMBER, RED, EMERALD];

fn paint((border, background): (&str, &str)) -> Paint {
    Paint::new(border, background)
}

/// Build every panel from scratch. Nothing from a previous board is reused.
pub fn render_board(records: &[SprintRecord], metric: Metric, revision: u64) -> ChartBoard {
    let panels = ChartMount::ALL
        .into_iter()
        .map(|mount| {
            let visible = mount.metric().is_none_or(|m| metric.shows(m));
            let chart = visible.then(|| build_chart(mount, records));
            ChartPanel {
                mount,
                visible,
                chart,
            }
        })
        .collect();

    ChartBoard { revision, panels }
}

fn build_chart(mount: ChartMount, records: &[SprintRecord]) -> ChartData {
    match mount {
        ChartMount::CompletionTrend => completion_trend(records),
        ChartMount::TeamComparison => team_comparison(records),
        ChartMount::Commitments => commitments(records),
        ChartMount::StoryPoints => committed_vs_done(mount, records, INDIGO, |r| r.story_points),
        ChartMount::Defects => committed_vs_done(mount, records, RED, |r| r.defects),
        ChartMount::UserStories => committed_vs_done(mount, records, CYAN, |r| r.user_stories),
    }
}

fn record_labels(records: &[SprintRecord]) -> Vec<String> {
    records.iter().map(SprintRecord::label).collect()
}

fn completion_trend(records: &[SprintRecord]) -> ChartData {
    let series = SeriesData::new(
        "Completion %",
        vec![Paint::new(INDIGO.0, "rgba(79, 70, 229, 0.1)")],
        true,
        records.iter().map(|r| r.total_completion_percentage).collect(),
    );

    ChartData::new(
        ChartMount::CompletionTrend,
        ChartKind::Line,
        record_labels(records),
        vec![series],
        YAxis::percentage(),
        true,
    )
}

fn commitments(records: &[SprintRecord]) -> ChartData {
    let series = SeriesData::new(
        "Total Initial Commitments",
        vec![Paint::new(AMBER.0, "rgba(245, 158, 11, 0.1)")],
        true,
        records.iter().map(|r| r.total_initial_commitments).collect(),
    );

    ChartData::new(
        ChartMount::Commitments,
        ChartKind::Line,
        record_labels(records),
        vec![series],
        YAxis::count(),
        true,
    )
}

/// Mean completion per team, teams in first-occurrence order
pub fn team_averages(records: &[SprintRecord]) -> Vec<(String, f64)> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();

    for record in records {
        let entry = totals.entry(record.team.as_str()).or_insert_with(|| {
            order.push(record.team.as_str());
            (0.0, 0)
        });
        entry.0 += record.total_completion_percentage;
        entry.1 += 1;
    }

    order
        .into_iter()
        .map(|team| {
            let (sum, count) = totals[team];
            (team.to_string(), sum / count as f64)
        })
        .collect()
}

fn team_comparison(records: &[SprintRecord]) -> ChartData {
    let (teams, averages): (Vec<String>, Vec<f64>) = team_averages(records).into_iter().unzip();

    let series = SeriesData::new(
        "Average Completion %",
        TEAM_PALETTE.into_iter().map(paint).collect(),
        false,
        averages,
    );

    ChartData::new(
        ChartMount::TeamComparison,
        ChartKind::Bar,
        teams,
        vec![series],
        YAxis::percentage(),
        false,
    )
}

fn committed_vs_done(
    mount: ChartMount,
    records: &[SprintRecord],
    committed_colour: (&str, &str),
    counts: impl Fn(&SprintRecord) -> WorkCount,
) -> ChartData {
    let committed = SeriesData::new(
        "Committed",
        vec![paint(committed_colour)],
        false,
        records.iter().map(|r| counts(r).committed).collect(),
    );
    let done = SeriesData::new(
        "Done",
        vec![paint(EMERALD)],
        false,
        records.iter().map(|r| counts(r).done).collect(),
    );

    ChartData::new(
        mount,
        ChartKind::Bar,
        record_labels(records),
        vec![committed, done],
        YAxis::count(),
        true,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sprint::record;

    fn records() -> Vec<SprintRecord> {
        vec![
            record("A", "S1", 90.0),
            record("B", "S1", 60.0),
            record("A", "S2", 80.0),
        ]
    }

    #[test]
    fn test_all_metric_renders_six_charts() {
        let board = render_board(&records(), Metric::All, 1);
        assert_eq!(board.panels.len(), 6);
        assert_eq!(board.instance_count(), 6);
        assert!(board.panels.iter().all(|p| p.visible));
        assert_eq!(board.revision, 1);
    }

    #[test]
    fn test_single_metric_hides_other_metric_panels() {
        let board = render_board(&records(), Metric::Defects, 2);
        assert_eq!(board.instance_count(), 4);

        let story_points = board.panel(ChartMount::StoryPoints).unwrap();
        assert!(!story_points.visible);
        assert!(story_points.chart.is_none());
        assert!(board.panel(ChartMount::Defects).unwrap().visible);
        assert!(board.chart(ChartMount::CompletionTrend).is_some());
        assert!(board.chart(ChartMount::TeamComparison).is_some());
        assert!(board.chart(ChartMount::Commitments).is_some());
    }

    #[test]
    fn test_completion_trend_has_one_point_per_record() {
        let board = render_board(&records(), Metric::All, 1);
        let chart = board.chart(ChartMount::CompletionTrend).unwrap();

        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.labels, vec!["A - S1", "B - S1", "A - S2"]);
        assert_eq!(chart.series[0].values, vec![90.0, 60.0, 80.0]);
        assert_eq!(chart.y_axis.max, Some(100.0));
        assert_eq!(chart.y_axis.tick_suffix.as_deref(), Some("%"));
    }

    #[test]
    fn test_team_comparison_averages_per_team() {
        assert_eq!(
            team_averages(&records()),
            vec![("A".to_string(), 85.0), ("B".to_string(), 60.0)]
        );

        let board = render_board(&records(), Metric::All, 1);
        let chart = board.chart(ChartMount::TeamComparison).unwrap();
        assert_eq!(chart.labels, vec!["A", "B"]);
        assert_eq!(chart.series[0].paint.len(), TEAM_PALETTE.len());
        assert!(!chart.show_legend);
    }

    #[test]
    fn test_metric_charts_group_committed_and_done() {
        let board = render_board(&records(), Metric::UserStories, 1);
        let chart = board.chart(ChartMount::UserStories).unwrap();

        assert_eq!(chart.kind, ChartKind::Bar);
        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Committed", "Done"]);
        assert_eq!(chart.series[0].values, vec![8.0; 3]);
        assert_eq!(chart.series[1].values, vec![7.0; 3]);
        assert_eq!(chart.y_axis.max, None);
    }

    #[test]
    fn test_empty_view_renders_empty_charts() {
        let board = render_board(&[], Metric::All, 1);
        assert_eq!(board.instance_count(), 6);
        let chart = board.chart(ChartMount::TeamComparison).unwrap();
        assert!(chart.labels.is_empty());
        assert!(chart.series[0].values.is_empty());
    }
}
