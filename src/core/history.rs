//! Edit operations on a client's status history.
//!
//! The history is append-biased: `append` adds a new dated status at the
//! end, `edit_entry` corrects the date/comment of an existing entry in
//! place, `remove_entry` drops one. After every successful mutation the
//! record's `current_status`, `last_updated` and `restrictions` equal the
//! status/date/comment of the last history entry; callers never have to
//! re-sync by hand.
//!
//! Entry indices are 1-based throughout, matching the numbering shown in
//! the `show` table. A stale index is a validation error, not a panic.

use crate::errors::{AppError, AppResult};
use crate::models::record::ClientStatusRecord;
use crate::models::status_entry::StatusEntry;
use crate::models::status_kind::StatusKind;
use chrono::NaiveDate;

/// Append a new status entry.
///
/// Returns `Ok(false)` without touching the record when the last entry
/// already has `new_status`: repeating the current status never creates a
/// duplicate timeline segment. The date is not validated against the rest
/// of the history; a backdated append renders as a one-day sliver.
pub fn append(
    record: &mut ClientStatusRecord,
    new_status: StatusKind,
    new_date: NaiveDate,
    new_comment: &str,
) -> AppResult<bool> {
    if let Some(last) = record.history.last()
        && last.status == new_status
    {
        return Ok(false);
    }

    record
        .history
        .push(StatusEntry::new(new_status, new_date, new_comment));
    record.sync_derived();

    Ok(true)
}

/// Correct the date and/or comment of entry `entry` (1-based) in place.
/// The status of an entry is fixed at append time and cannot be edited.
/// An edited date must stay between its neighbours' dates.
pub fn edit_entry(
    record: &mut ClientStatusRecord,
    entry: usize,
    new_date: Option<NaiveDate>,
    new_comment: Option<&str>,
) -> AppResult<()> {
    let idx = check_index(record, entry)?;

    if let Some(d) = new_date {
        if idx > 0 && d < record.history[idx - 1].date {
            return Err(AppError::DateOrder(format!(
                "{} precedes the previous entry dated {}",
                d.format("%Y-%m-%d"),
                record.history[idx - 1].date.format("%Y-%m-%d"),
            )));
        }
        if idx + 1 < record.history.len() && d > record.history[idx + 1].date {
            return Err(AppError::DateOrder(format!(
                "{} follows the next entry dated {}",
                d.format("%Y-%m-%d"),
                record.history[idx + 1].date.format("%Y-%m-%d"),
            )));
        }
        record.history[idx].date = d;
    }

    if let Some(c) = new_comment {
        record.history[idx].comment = c.to_string();
    }

    record.sync_derived();
    Ok(())
}

/// Remove entry `entry` (1-based). Removing the only entry resets the
/// record to the fresh-client default: Full Training as of `today`.
pub fn remove_entry(
    record: &mut ClientStatusRecord,
    entry: usize,
    today: NaiveDate,
) -> AppResult<()> {
    let idx = check_index(record, entry)?;

    record.history.remove(idx);

    if record.history.is_empty() {
        record
            .history
            .push(StatusEntry::new(StatusKind::FullTraining, today, ""));
    }

    record.sync_derived();
    Ok(())
}

/// Validate a 1-based entry index against the current history length.
fn check_index(record: &ClientStatusRecord, entry: usize) -> AppResult<usize> {
    if entry == 0 || entry > record.history.len() {
        return Err(AppError::EntryOutOfRange(entry));
    }
    Ok(entry - 1)
}
