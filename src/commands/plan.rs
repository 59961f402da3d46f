use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clarity_core::config::ClarityConfig;
use clarity_core::day_start::DayStart;
use clarity_core::deep_link::google_calendar_link;
use clarity_core::ics::{export_filename, generate_ics};
use clarity_core::pipeline::plan_day;
use clarity_core::{ClarityError, Schedule};
use clarity_provider_anthropic::AnthropicExtractor;
use owo_colors::OwoColorize;
use tracing::info;

use crate::render::{Render, render_links};
use crate::utils::tui::create_spinner;

pub struct PlanArgs {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub start: Option<DayStart>,
    pub date: Option<NaiveDate>,
    pub buffer: Option<i64>,
    pub out: Option<PathBuf>,
    pub no_ics: bool,
    pub open: bool,
    pub json: bool,
}

pub async fn run(mut args: PlanArgs) -> Result<()> {
    let config = ClarityConfig::load()?;

    let text = read_brain_dump(args.text.take(), args.file.as_deref())?;
    if text.trim().is_empty() {
        anyhow::bail!(
            "Nothing to plan.\n\n\
            Pass your notes as an argument, with --file, or on stdin:\n  \
            clarity plan \"finish the report, call mum, gym\""
        );
    }

    // Fails here, before any request, when no API key is configured
    let extractor = AnthropicExtractor::from_config(&config)?;

    let day_start = args.start.unwrap_or(config.day_start);
    let anchor = match args.date {
        Some(date) => day_start.on(date),
        None => day_start.today(),
    };
    let buffer = args.buffer.unwrap_or(config.buffer_minutes);

    let spinner = create_spinner("Thinking through your tasks…".to_string());
    let result = plan_day(&extractor, &text, anchor, buffer).await;
    spinner.finish_and_clear();

    let schedule = match result {
        Ok(schedule) => schedule,
        Err(err) => {
            report_malformed(&err);
            return Err(err.into());
        }
    };

    let dir = args.out.clone().unwrap_or_else(|| config.output_dir());
    present(&schedule, &args, &dir, Local::now().naive_local())?;
    Ok(())
}

/// Print the schedule, then export it unless a warning stops the export.
///
/// Returns the path of the written `.ics` file, if any.
fn present(
    schedule: &Schedule,
    args: &PlanArgs,
    dir: &Path,
    now: NaiveDateTime,
) -> Result<Option<PathBuf>> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(schedule)?);
    } else {
        println!(
            "{}",
            format!("Plan begins at {}", schedule.anchor.format("%H:%M")).dimmed()
        );
    }

    let warnings = schedule.warnings();
    if !warnings.is_empty() {
        for warning in warnings {
            eprintln!("{}", warning.to_string().yellow());
        }
        return Ok(None);
    }

    if !args.json {
        println!();
        println!("{}", schedule.render());
    }

    let mut exported = None;
    if !args.no_ics {
        let path = write_ics(schedule, dir, now)?;
        eprintln!();
        eprintln!("{}", format!("📅 Saved {}", path.display()).green());
        eprintln!(
            "{}",
            "   Open it to import every event into Google Calendar, Apple Calendar or Outlook."
                .dimmed()
        );
        exported = Some(path);
    }

    if !args.json {
        println!();
        println!("{}", "Add individual events to Google Calendar:".bold());
        println!("{}", render_links(schedule));
    }

    if args.open {
        for task in &schedule.tasks {
            let link = google_calendar_link(task);
            open::that(&link).with_context(|| format!("Failed to open {}", link))?;
        }
    }

    Ok(exported)
}

/// Read the brain-dump from the argument, a file, or piped stdin.
fn read_brain_dump(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }

    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("Failed to read brain-dump from stdin")?;
    Ok(text)
}

fn report_malformed(err: &ClarityError) {
    if let Some(raw) = err.raw_response() {
        eprintln!(
            "{}",
            "The model returned unexpected output. Try rephrasing your input.".red()
        );
        eprintln!("{}", "Raw response:".dimmed());
        eprintln!("{}", raw);
    }
}

/// Write the schedule's calendar document into `dir`, named after `now`.
fn write_ics(schedule: &Schedule, dir: &Path, now: NaiveDateTime) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(export_filename(now));
    std::fs::write(&path, generate_ics(schedule))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), events = schedule.len(), "Exported calendar");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clarity_core::layout::layout;
    use clarity_core::{Plan, TaskDraft};

    fn schedule() -> Schedule {
        let anchor = NaiveDate::from_ymd_opt(2026, 3, 20)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        layout(
            Plan {
                summary: "Deep work first".to_string(),
                tasks: vec![
                    TaskDraft::new("Report").with_duration(45).with_priority("high"),
                    TaskDraft::new("Email").with_duration(15),
                ],
            },
            anchor,
            5,
        )
    }

    #[test]
    fn write_ics_creates_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("exports");
        let now = NaiveDate::from_ymd_opt(2026, 3, 20)
            .unwrap()
            .and_hms_opt(7, 55, 0)
            .unwrap();

        let path = write_ics(&schedule(), &out, now).unwrap();

        assert_eq!(path, out.join("clarity_plan_20260320_0755.ics"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("BEGIN:VCALENDAR\r\n"));
        assert_eq!(content.matches("BEGIN:VEVENT").count(), 2);
    }

    fn quiet_args() -> PlanArgs {
        PlanArgs {
            text: None,
            file: None,
            start: None,
            date: None,
            buffer: None,
            out: None,
            no_ics: false,
            open: false,
            json: false,
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 20)
            .unwrap()
            .and_hms_opt(7, 55, 0)
            .unwrap()
    }

    #[test]
    fn present_exports_a_full_schedule() {
        let dir = tempfile::tempdir().unwrap();

        let path = present(&schedule(), &quiet_args(), dir.path(), now()).unwrap();

        assert_eq!(path, Some(dir.path().join("clarity_plan_20260320_0755.ics")));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn empty_schedule_is_not_exported() {
        let dir = tempfile::tempdir().unwrap();
        let empty = layout(
            Plan {
                summary: "Nothing to do".to_string(),
                tasks: vec![],
            },
            now(),
            5,
        );

        let path = present(&empty, &quiet_args(), dir.path(), now()).unwrap();

        assert_eq!(path, None);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn no_ics_skips_the_export() {
        let dir = tempfile::tempdir().unwrap();
        let args = PlanArgs {
            no_ics: true,
            ..quiet_args()
        };

        let path = present(&schedule(), &args, dir.path(), now()).unwrap();

        assert_eq!(path, None);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn brain_dump_prefers_argument() {
        let text = read_brain_dump(Some("call mum".to_string()), None).unwrap();
        assert_eq!(text, "call mum");
    }

    #[test]
    fn brain_dump_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "gym\nread chapter 3\n").unwrap();

        let text = read_brain_dump(None, Some(&path)).unwrap();
        assert_eq!(text, "gym\nread chapter 3\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_brain_dump(None, Some(&dir.path().join("nope.txt"))).is_err());
    }
}
