//! One planning submission: extract tasks, then lay them out.

use crate::error::ClarityResult;
use crate::extract::{Extractor, extract_plan};
use crate::layout::layout;
use crate::plan::Schedule;
use chrono::NaiveDateTime;
use tracing::info;

pub async fn plan_day<E: Extractor>(
    extractor: &E,
    text: &str,
    anchor: NaiveDateTime,
    buffer_minutes: i64,
) -> ClarityResult<Schedule> {
    let plan = extract_plan(extractor, text).await?;
    let schedule = layout(plan, anchor, buffer_minutes);

    info!(
        tasks = schedule.len(),
        total_minutes = schedule.total_minutes(),
        "Planned day"
    );

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deep_link::google_calendar_link;
    use crate::error::{ClarityError, ClarityWarning};
    use crate::ics::IcsDocument;
    use chrono::{NaiveDate, TimeZone, Utc};

    struct Fixed(&'static str);

    impl Extractor for Fixed {
        async fn complete(&self, _instruction: &str, _text: &str) -> ClarityResult<String> {
            Ok(self.0.to_string())
        }
    }

    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 20)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn brain_dump_to_exports() {
        let extractor = Fixed(
            r#"{"summary": "Report first, then inbox",
                "tasks": [
                  {"title": "Report", "description": "Numbers, charts", "duration_minutes": 45, "priority": "high", "category": "Work"},
                  {"title": "Buy, milk", "description": "", "priority": "low"}
                ]}"#,
        );

        let schedule = plan_day(&extractor, "report for sarah, milk", anchor(), 5)
            .await
            .unwrap();

        assert!(schedule.warnings().is_empty());
        assert_eq!(schedule.tasks[1].start, anchor() + chrono::Duration::minutes(50));
        assert_eq!(schedule.tasks[1].end, anchor() + chrono::Duration::minutes(80));

        let ics = IcsDocument::new(
            Utc.with_ymd_and_hms(2026, 3, 20, 7, 0, 0).unwrap(),
            anchor().date(),
        )
        .render(&schedule);
        assert!(ics.contains("SUMMARY:Buy\\, milk\r\n"));
        assert!(ics.contains("DESCRIPTION:Numbers\\, charts\r\n"));
        assert!(ics.contains("PRIORITY:9\r\n"));

        let link = google_calendar_link(&schedule.tasks[1]);
        assert!(link.contains("Buy%2C+milk"));
        assert!(link.contains("dates=20260320T085000%2F20260320T092000"));
    }

    #[tokio::test]
    async fn empty_extraction_yields_warning_not_error() {
        let schedule = plan_day(&Fixed(r#"{"summary": "", "tasks": []}"#), "hmm", anchor(), 5)
            .await
            .unwrap();
        assert_eq!(schedule.warnings(), vec![ClarityWarning::EmptyPlan]);
    }

    #[tokio::test]
    async fn malformed_reply_halts() {
        let err = plan_day(&Fixed("Sure! Here are your tasks"), "notes", anchor(), 5)
            .await
            .unwrap_err();
        assert_eq!(err.raw_response(), Some("Sure! Here are your tasks"));
        assert!(matches!(err, ClarityError::MalformedResponse { .. }));
    }
}
