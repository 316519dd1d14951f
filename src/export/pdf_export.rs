use crate::core::board::BoardRow;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::{PdfManager, ReportSection};
use crate::models::status_kind::StatusKind;
use crate::ui::messages::info;
use std::io;
use std::path::Path;

const HEADERS: [&str; 3] = ["Client", "Restrictions & Comments", "Last Updated"];

/// Export the grouped board as a paginated PDF report: one table per
/// status, empty groups skipped, statuses already in display order.
pub(crate) fn export_pdf(
    grouped: &[(StatusKind, Vec<BoardRow>)],
    path: &Path,
    heading: &str,
    subheading: &str,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let sections: Vec<ReportSection> = grouped
        .iter()
        .filter(|(_, rows)| !rows.is_empty())
        .map(|(status, rows)| ReportSection {
            title: status.as_str().to_string(),
            colour: status.rgb(),
            rows: rows
                .iter()
                .map(|r| {
                    vec![
                        r.name.clone(),
                        r.comments.clone(),
                        r.last_updated.format("%Y-%m-%d").to_string(),
                    ]
                })
                .collect(),
        })
        .collect();

    let mut pdf = PdfManager::new();
    pdf.write_report(heading, subheading, &HEADERS, &sections);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
