//! Proportional status timeline.
//!
//! Each history entry becomes one segment whose span runs from its own
//! date to the next entry's date, or to today for the last entry. Spans
//! are floored at one day so same-day changes still render a visible
//! sliver. The segments carry no semantics beyond proportional width.

use crate::models::status_entry::StatusEntry;
use crate::models::status_kind::StatusKind;
use crate::utils::date::days_between;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub status: StatusKind,
    pub days: i64,
}

/// Build one segment per history entry. Output length always equals the
/// history length.
pub fn build_segments(history: &[StatusEntry], today: NaiveDate) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(history.len());

    for (i, entry) in history.iter().enumerate() {
        let end = match history.get(i + 1) {
            Some(next) => next.date,
            None => today,
        };
        let days = days_between(entry.date, end).max(1);
        segments.push(Segment {
            status: entry.status,
            days,
        });
    }

    segments
}

pub fn total_days(segments: &[Segment]) -> i64 {
    segments.iter().map(|s| s.days).sum()
}

/// Render the segments as a coloured bar of `width` terminal cells, each
/// segment scaled proportionally and at least one cell wide.
pub fn render_bar(segments: &[Segment], width: usize) -> String {
    if segments.is_empty() {
        return String::new();
    }

    let total = total_days(segments).max(1);
    let mut bar = String::new();

    for seg in segments {
        let cells = ((seg.days * width as i64) / total).max(1) as usize;
        bar.push_str(
            &seg.status
                .colour()
                .paint("█".repeat(cells))
                .to_string(),
        );
    }

    bar
}

/// First/last date labels shown above the bar. Interior dates are not
/// labelled; the bar itself carries the proportions.
pub fn bar_labels(history: &[StatusEntry], today: NaiveDate, width: usize) -> String {
    let start = match history.first() {
        Some(first) => first.date.format("%Y-%m-%d").to_string(),
        None => return String::new(),
    };
    let end = today.format("%Y-%m-%d").to_string();

    let gap = width.saturating_sub(start.len() + end.len());
    format!("{}{}{}", start, " ".repeat(gap), end)
}
