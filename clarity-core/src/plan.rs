//! Extraction result and the laid-out schedule built from it.

use crate::error::ClarityWarning;
use crate::task::{Priority, ScheduledTask, TaskDraft};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// What the extraction model returns: a one-line summary and the tasks in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub summary: String,
    pub tasks: Vec<TaskDraft>,
}

/// A plan whose tasks have been given start and end times.
///
/// Built once per submission by [`crate::layout::layout`] and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub summary: String,
    pub anchor: NaiveDateTime,
    pub buffer_minutes: i64,
    pub tasks: Vec<ScheduledTask>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Minutes of actual work, buffers excluded.
    pub fn total_minutes(&self) -> i64 {
        self.tasks.iter().map(ScheduledTask::duration_minutes).sum()
    }

    /// When the last task ends.
    pub fn finishes_at(&self) -> Option<NaiveDateTime> {
        self.tasks.last().map(|t| t.end)
    }

    pub fn priority_counts(&self) -> PriorityCounts {
        let mut counts = PriorityCounts::default();
        for task in &self.tasks {
            match task.task.priority() {
                Priority::High => counts.high += 1,
                Priority::Medium => counts.medium += 1,
                Priority::Low => counts.low += 1,
            }
        }
        counts
    }

    pub fn warnings(&self) -> Vec<ClarityWarning> {
        if self.is_empty() {
            vec![ClarityWarning::EmptyPlan]
        } else {
            Vec::new()
        }
    }
}
