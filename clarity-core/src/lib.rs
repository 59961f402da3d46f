//! Core types for Clarity Planner.
//!
//! This crate turns an extracted task list into a time-blocked schedule and exports it:
//! - `task` and `plan` hold the extracted data and the laid-out schedule
//! - `layout` assigns start/end times
//! - `ics` renders an RFC 5545 calendar document
//! - `deep_link` builds Google Calendar quick-add links
//! - `extract` talks to a completion capability through the `Extractor` trait

pub mod config;
pub mod day_start;
pub mod deep_link;
pub mod error;
pub mod extract;
pub mod ics;
pub mod layout;
pub mod pipeline;
pub mod plan;
pub mod task;

pub use error::{ClarityError, ClarityResult, ClarityWarning};
pub use plan::{Plan, Schedule};
pub use task::{Priority, ScheduledTask, TaskDraft};
