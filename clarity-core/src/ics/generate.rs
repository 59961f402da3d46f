//! ICS document generation.

use crate::ics::text::{CRLF, escape_line_breaks, escape_text, fold};
use crate::plan::Schedule;
use crate::task::ScheduledTask;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

pub const PRODUCT_ID: &str = "-//Clarity Planner//EN";

/// Suffix appended to every generated UID.
pub const UID_DOMAIN: &str = "clarity-planner";

const UTC_STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const FLOATING_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Generate a calendar document for the whole schedule, stamped with the current time.
pub fn generate_ics(schedule: &Schedule) -> String {
    IcsDocument::new(Utc::now(), Local::now().date_naive()).render(schedule)
}

/// File name for an export made at `now`, e.g. `clarity_plan_20260320_0815.ics`.
pub fn export_filename(now: NaiveDateTime) -> String {
    format!("clarity_plan_{}.ics", now.format("%Y%m%d_%H%M"))
}

/// Renders schedules with a fixed generation time and calendar label date.
#[derive(Debug, Clone, Copy)]
pub struct IcsDocument {
    generated: DateTime<Utc>,
    label_date: NaiveDate,
}

impl IcsDocument {
    pub fn new(generated: DateTime<Utc>, label_date: NaiveDate) -> Self {
        IcsDocument {
            generated,
            label_date,
        }
    }

    pub fn render(&self, schedule: &Schedule) -> String {
        let mut doc = ContentLines::default();

        doc.push("BEGIN:VCALENDAR");
        doc.push("VERSION:2.0");
        doc.push(&format!("PRODID:{}", PRODUCT_ID));
        doc.push("CALSCALE:GREGORIAN");
        doc.push("METHOD:PUBLISH");
        doc.push(&format!(
            "X-WR-CALNAME:Clarity Plan {}",
            self.label_date.format("%d %b %Y")
        ));

        let dtstamp = self.generated.format(UTC_STAMP_FORMAT).to_string();
        for task in &schedule.tasks {
            self.push_event(&mut doc, task, &dtstamp);
        }

        doc.push("END:VCALENDAR");

        debug!(events = schedule.tasks.len(), "Generated ICS document");
        doc.finish()
    }

    fn push_event(&self, doc: &mut ContentLines, scheduled: &ScheduledTask, dtstamp: &str) {
        let task = &scheduled.task;

        doc.push("BEGIN:VEVENT");
        doc.push(&format!("UID:{}@{}", uuid::Uuid::new_v4(), UID_DOMAIN));
        doc.push(&format!("DTSTAMP:{}", dtstamp));
        doc.push(&format!("DTSTART:{}", scheduled.start.format(FLOATING_FORMAT)));
        doc.push(&format!("DTEND:{}", scheduled.end.format(FLOATING_FORMAT)));
        doc.push(&format!("SUMMARY:{}", escape_text(task.display_title())));
        doc.push(&format!("DESCRIPTION:{}", escape_text(&task.description)));
        // CATEGORIES is a comma-separated list, so only line breaks are escaped
        doc.push(&format!("CATEGORIES:{}", escape_line_breaks(task.category())));
        doc.push(&format!("PRIORITY:{}", task.priority().ics_value()));
        doc.push("STATUS:CONFIRMED");
        doc.push("END:VEVENT");
    }
}

/// Accumulates folded, CRLF-terminated content lines.
#[derive(Default)]
struct ContentLines(String);

impl ContentLines {
    fn push(&mut self, line: &str) {
        self.0.push_str(&fold(line));
        self.0.push_str(CRLF);
    }

    fn finish(self) -> String {
        self.0
    }
}
