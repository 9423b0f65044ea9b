// Streaming dashboard service - Progressive delivery of one render pass
use crate::application::dashboard_controller::DashboardView;
use crate::domain::chart::{ChartData, ChartMount};
use crate::domain::summary::{Summary, SummaryCards};
use crate::domain::table::TableRow;
use serde::Serialize;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSkeleton {
    pub mount: ChartMount,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StreamMessage {
    #[serde(rename_all = "camelCase")]
    Skeleton {
        revision: u64,
        filtered_records: usize,
        total_records: usize,
        panels: Vec<PanelSkeleton>,
        load_failure: Option<String>,
    },
    Summary {
        summary: Summary,
        cards: SummaryCards,
    },
    Chart {
        chart: ChartData,
    },
    Table {
        rows: Vec<TableRow>,
    },
    #[serde(rename_all = "camelCase")]
    Complete {
        widget_count: usize,
        duration_ms: u64,
    },
}

/// Emits skeleton, summary, each chart, table and completion, in that order.
pub fn stream_dashboard(view: DashboardView) -> mpsc::Receiver<StreamMessage> {
    let (tx, rx) = mpsc::channel(16);

    tokio::spawn(async move {
        let start_time = Instant::now();
        let panels: Vec<PanelSkeleton> = view
            .charts
            .panels
            .iter()
            .map(|p| PanelSkeleton {
                mount: p.mount,
                visible: p.visible,
            })
            .collect();

        let skeleton = StreamMessage::Skeleton {
            revision: view.charts.revision,
            filtered_records: view.filtered_records,
            total_records: view.total_records,
            panels,
            load_failure: view.load_failure,
        };
        if tx.send(skeleton).await.is_err() {
            tracing::debug!("Dashboard stream closed before skeleton was sent");
            return;
        }

        let mut widget_count = 1;
        let _ = tx
            .send(StreamMessage::Summary {
                summary: view.summary,
                cards: view.cards,
            })
            .await;

        for chart in view.charts.panels.into_iter().filter_map(|p| p.chart) {
            widget_count += 1;
            if tx.send(StreamMessage::Chart { chart }).await.is_err() {
                return;
            }
        }

        widget_count += 1;
        let _ = tx.send(StreamMessage::Table { rows: view.rows }).await;

        let duration_ms = start_time.elapsed().as_millis() as u64;
        let _ = tx
            .send(StreamMessage::Complete {
                widget_count,
                duration_ms,
            })
            .await;
    });

    rx
}
