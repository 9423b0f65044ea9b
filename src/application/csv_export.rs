// CSV export of the filtered view
use crate::domain::sprint::SprintRecord;
use crate::infrastructure::config::render_template;
use chrono::NaiveDate;
use std::collections::HashMap;

pub const CSV_HEADER: [&str; 10] = [
    "Team",
    "Sprint",
    "Date",
    "Completion %",
    "SP Committed",
    "SP Done",
    "Defects Committed",
    "Defects Done",
    "US Committed",
    "US Done",
];

pub const DEFAULT_FILENAME_TEMPLATE: &str = "sprint-data-${date}.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub body: String,
}

/// Values are joined as-is; embedded commas are not escaped.
pub fn to_csv(records: &[SprintRecord]) -> String {
    let mut csv = CSV_HEADER.join(",");
    csv.push('\n');

    for r in records {
        let row = [
            r.team.clone(),
            r.sprint.clone(),
            r.date.clone(),
            r.total_completion_percentage.to_string(),
            r.story_points.committed.to_string(),
            r.story_points.done.to_string(),
            r.defects.committed.to_string(),
            r.defects.done.to_string(),
            r.user_stories.committed.to_string(),
            r.user_stories.done.to_string(),
        ];
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    csv
}

pub fn export_filename(template: &str, date: NaiveDate) -> String {
    let mut vars = HashMap::new();
    vars.insert("date".to_string(), date.format("%Y-%m-%d").to_string());
    render_template(template, &vars)
}

pub fn export(records: &[SprintRecord], template: &str, date: NaiveDate) -> CsvExport {
    CsvExport {
        filename: export_filename(template, date),
        body: to_csv(records),
    }
}
