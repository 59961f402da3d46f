//! Schedule layout: lays tasks end to end from an anchor time.

use crate::plan::{Plan, Schedule};
use crate::task::{ScheduledTask, TaskDraft};
use chrono::{Duration, NaiveDateTime};
use tracing::{debug, warn};

/// Idle time inserted between consecutive blocks.
pub const DEFAULT_BUFFER_MINUTES: i64 = 5;

/// Assign start and end times to every task, in the order extraction returned them.
///
/// The first task starts exactly at `anchor`; each following task starts
/// `buffer_minutes` after the previous one ends. Missing or non-positive durations
/// are replaced by the default instead of being rejected.
pub fn layout(plan: Plan, anchor: NaiveDateTime, buffer_minutes: i64) -> Schedule {
    let buffer_minutes = buffer_minutes.max(0);
    let buffer = Duration::try_minutes(buffer_minutes).unwrap_or(Duration::MAX);
    let mut cursor = anchor;

    let tasks = plan
        .tasks
        .into_iter()
        .map(|task| {
            let scheduled = place(task, cursor);
            cursor = advance(scheduled.end, buffer);
            scheduled
        })
        .collect::<Vec<_>>();

    debug!(tasks = tasks.len(), %anchor, buffer_minutes, "Laid out schedule");

    Schedule {
        summary: plan.summary,
        anchor,
        buffer_minutes,
        tasks,
    }
}

fn place(task: TaskDraft, start: NaiveDateTime) -> ScheduledTask {
    if !matches!(task.duration_minutes, Some(m) if m > 0) {
        warn!(
            title = task.display_title(),
            duration = ?task.duration_minutes,
            "Missing or non-positive duration, using default"
        );
    }
    let end = match Duration::try_minutes(task.effective_duration_minutes()) {
        Some(duration) => advance(start, duration),
        None => NaiveDateTime::MAX,
    };
    ScheduledTask { task, start, end }
}

/// Saturates at the last representable instant instead of overflowing.
fn advance(at: NaiveDateTime, by: Duration) -> NaiveDateTime {
    at.checked_add_signed(by).unwrap_or(NaiveDateTime::MAX)
}
