//! Task types.
//!
//! `TaskDraft` is what the extraction model hands back. It is decoded leniently and
//! never validated: missing or odd fields fall back to defaults when the task is laid
//! out or exported. `ScheduledTask` is a draft with start/end times attached.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Duration used when the model gives none, or a non-positive one.
pub const DEFAULT_DURATION_MINUTES: i64 = 30;

pub const DEFAULT_CATEGORY: &str = "Other";

/// Title shown when the model returns an empty one.
pub const FALLBACK_TITLE: &str = "Task";

/// A task as extracted from the brain-dump, before layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient_minutes")]
    pub duration_minutes: Option<i64>,

    /// Raw priority text; see [`Priority::parse`].
    #[serde(default)]
    pub priority: Option<String>,

    #[serde(default)]
    pub category: Option<String>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        TaskDraft {
            title: title.into(),
            description: String::new(),
            duration_minutes: None,
            priority: None,
            category: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_duration(mut self, minutes: i64) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Title for display and export, never empty.
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() { FALLBACK_TITLE } else { title }
    }

    pub fn priority(&self) -> Priority {
        Priority::parse(self.priority.as_deref())
    }

    pub fn category(&self) -> &str {
        match self.category.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_CATEGORY,
        }
    }

    /// The duration the layout engine will use for this task.
    pub fn effective_duration_minutes(&self) -> i64 {
        match self.duration_minutes {
            Some(m) if m > 0 => m,
            _ => DEFAULT_DURATION_MINUTES,
        }
    }
}

/// Task priority. Anything the model sends that is not high/medium/low is medium.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("high") => Priority::High,
            Some("low") => Priority::Low,
            _ => Priority::Medium,
        }
    }

    /// RFC 5545 PRIORITY value (1 = highest, 9 = lowest).
    pub fn ics_value(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 5,
            Priority::Low => 9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task placed on the day's timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledTask {
    #[serde(flatten)]
    pub task: TaskDraft,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ScheduledTask {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

impl fmt::Display for ScheduledTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} – {} {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.task.display_title()
        )
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept integers, floats (truncated) and numeric strings; anything else is "missing".
fn lenient_minutes<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }))
}
