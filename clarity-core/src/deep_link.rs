//! Google Calendar quick-add links, one per scheduled task.

use crate::task::ScheduledTask;
use url::form_urlencoded;

pub const GOOGLE_CALENDAR_RENDER_URL: &str = "https://calendar.google.com/calendar/render";

/// Build a link that opens Google Calendar's event form pre-filled with `task`.
///
/// Times are sent as floating local times (no zone suffix); Google interprets them in
/// the viewer's calendar zone.
pub fn google_calendar_link(task: &ScheduledTask) -> String {
    let dates = format!(
        "{}/{}",
        task.start.format("%Y%m%dT%H%M%S"),
        task.end.format("%Y%m%dT%H%M%S")
    );

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("action", "TEMPLATE")
        .append_pair("text", task.task.display_title())
        .append_pair("dates", &dates)
        .append_pair("details", &task.task.description)
        .finish();

    format!("{}?{}", GOOGLE_CALENDAR_RENDER_URL, query)
}
