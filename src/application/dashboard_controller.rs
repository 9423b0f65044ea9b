// Dashboard controller - Owns all dashboard state and runs the render pipeline
use crate::application::chart_renderer::render_board;
use crate::application::csv_export::{self, CsvExport};
use crate::application::loader::LoadOutcome;
use crate::domain::chart::ChartBoard;
use crate::domain::filter::{FilterSelection, FilteredView, Metric};
use crate::domain::sprint::Dataset;
use crate::domain::summary::{Summary, SummaryCards};
use crate::domain::table::{render_rows, TableRow};
use chrono::NaiveDate;
use serde::Serialize;

/// Option lists for the filter widgets, taken from the full dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub teams: Vec<String>,
    pub sprints: Vec<String>,
    pub metrics: Vec<Metric>,
    pub selection: FilterSelection,
    pub load_failure: Option<String>,
}

/// Everything the page needs to draw one render pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub selection: FilterSelection,
    pub total_records: usize,
    pub filtered_records: usize,
    pub summary: Summary,
    pub cards: SummaryCards,
    pub charts: ChartBoard,
    pub rows: Vec<TableRow>,
    pub load_failure: Option<String>,
}

pub struct DashboardController {
    dataset: Dataset,
    load_failure: Option<String>,
    selection: FilterSelection,
    view: FilteredView,
    summary: Summary,
    charts: ChartBoard,
    rows: Vec<TableRow>,
}

impl DashboardController {
    /// Widgets start with every team and sprint selected.
    pub fn new(outcome: LoadOutcome) -> Self {
        if outcome.dataset.is_empty() {
            tracing::warn!("Dashboard starts with an empty dataset");
        }
        let selection = FilterSelection::select_all(&outcome.dataset);
        let view = FilteredView::full(&outcome.dataset);

        let mut controller = Self {
            dataset: outcome.dataset,
            load_failure: outcome.failure,
            selection,
            view,
            summary: Summary::default(),
            charts: ChartBoard::default(),
            rows: Vec::new(),
        };
        controller.refresh();
        controller
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn filtered(&self) -> &FilteredView {
        &self.view
    }

    pub fn charts(&self) -> &ChartBoard {
        &self.charts
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            teams: self.dataset.teams(),
            sprints: self.dataset.sprints(),
            metrics: Metric::CHOICES.to_vec(),
            selection: self.selection.clone(),
            load_failure: self.load_failure.clone(),
        }
    }

    /// Any control change: recompute the view, then re-render everything.
    pub fn apply(&mut self, selection: FilterSelection) {
        self.view = selection.apply(&self.dataset);
        self.selection = selection;
        if self.view.is_empty() {
            tracing::debug!("No records match the selected filters");
        }
        tracing::debug!(
            "Applied filters (metric={}): {} of {} records",
            self.selection.metric,
            self.view.len(),
            self.dataset.len()
        );
        self.refresh();
    }

    pub fn reset(&mut self) {
        self.selection = FilterSelection::select_all(&self.dataset);
        self.view = FilteredView::full(&self.dataset);
        tracing::debug!("Filters reset to all {} records", self.dataset.len());
        self.refresh();
    }

    pub fn export(&self, filename_template: &str, date: NaiveDate) -> CsvExport {
        csv_export::export(self.view.records(), filename_template, date)
    }

    pub fn snapshot(&self) -> DashboardView {
        DashboardView {
            selection: self.selection.clone(),
            total_records: self.dataset.len(),
            filtered_records: self.view.len(),
            summary: self.summary,
            cards: self.summary.cards(),
            charts: self.charts.clone(),
            rows: self.rows.clone(),
            load_failure: self.load_failure.clone(),
        }
    }

    fn refresh(&mut self) {
        let records = self.view.records();
        self.summary = Summary::from_records(records);

        let revision = self.charts.revision + 1;
        // Drop the previous board before the new one is built
        self.charts = ChartBoard::default();
        self.charts = render_board(records, self.selection.metric, revision);
        tracing::debug!(
            "Rebuilt {} charts (revision {})",
            self.charts.instance_count(),
            revision
        );

        self.rows = render_rows(records);
    }
}
