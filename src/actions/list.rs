use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, TimeDelta};

use crate::db::{Entry, Store};
use crate::error::StoreError;

static TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The exclusive lower bound on `created_at` for a listing made at `now`.
/// Without `all` only the last week is shown.
pub fn cutoff(all: bool, now: i64) -> i64 {
    if all {
        0
    } else {
        now - TimeDelta::weeks(1).num_seconds()
    }
}

pub fn list(store: &Store, out: &mut impl Write, all: bool, now: i64) -> Result<()> {
    let entries = store.list(Some(cutoff(all, now)))?;
    render(out, &entries)
}

fn local_time(timestamp: i64) -> Result<DateTime<Local>, StoreError> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|utc| utc.with_timezone(&Local))
        .ok_or(StoreError::InvalidTimestamp(timestamp))
}

/// Writes one `[timestamp] description` line per entry, with an empty line
/// whenever the local calendar day changes.
pub fn render(out: &mut impl Write, entries: &[Entry]) -> Result<()> {
    let mut previous_day: Option<NaiveDate> = None;

    for entry in entries {
        let created = local_time(entry.created_at)?;
        let day = created.date_naive();

        if previous_day.is_some_and(|previous| previous != day) {
            writeln!(out)?;
        }

        writeln!(
            out,
            "[{}] {}",
            created.format(TIMESTAMP_FORMAT),
            entry.description
        )?;
        previous_day = Some(day);
    }

    Ok(())
}
